use bistro_renderer::{RenderNode, RenderedPage};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Wrap output in a full document shell (doctype, html, body)
    pub document: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document title when `document` is set
    pub title: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            document: true,
            pretty: true,
            indent: "  ".to_string(),
            title: "Bistro".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered page to an HTML string.
pub fn compile_to_html(page: &RenderedPage, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    if ctx.options.document {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();
        ctx.add_line("<head>");
        ctx.indent();
        ctx.add_line("<meta charset=\"utf-8\" />");
        let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
        ctx.add_line(&title);
        ctx.dedent();
        ctx.add_line("</head>");
        ctx.add_line("<body>");
        ctx.indent();
    }

    for node in &page.nodes {
        compile_node(node, &mut ctx);
    }

    if ctx.options.document {
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");
    }

    ctx.get_output()
}

fn compile_node(node: &RenderNode, ctx: &mut Context) {
    match node {
        RenderNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }

        RenderNode::Element {
            tag,
            attributes,
            children,
            anchor,
        } => {
            let mut open = format!("<{tag}");
            if let Some(anchor) = anchor {
                open.push_str(&format!(" id=\"{}\"", escape_html(anchor)));
            }
            for (name, value) in attributes {
                open.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
            }

            if is_self_closing(tag) {
                open.push_str(" />");
                ctx.add_line(&open);
                return;
            }
            open.push('>');

            // Text-only elements stay on one line.
            if !has_element_children(children) {
                let text: String = children
                    .iter()
                    .map(|child| match child {
                        RenderNode::Text { content } => escape_html(content),
                        RenderNode::Element { .. } => String::new(),
                    })
                    .collect();
                ctx.add_line(&format!("{open}{text}</{tag}>"));
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                compile_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[RenderNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, RenderNode::Text { .. }))
}
