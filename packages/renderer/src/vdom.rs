use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Render tree node.
///
/// Attributes are kept sorted so equal pages render byte-identical trees:
/// the differ and the HTML compiler both rely on deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        children: Vec<RenderNode>,
        /// Stable DOM anchor (`id` attribute) for scroll targets
        #[serde(skip_serializing_if = "Option::is_none")]
        anchor: Option<String>,
    },

    /// Text node
    Text { content: String },
}

impl RenderNode {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            anchor: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_anchor(mut self, new_anchor: impl Into<String>) -> Self {
        if let RenderNode::Element { ref mut anchor, .. } = self {
            *anchor = Some(new_anchor.into());
        }
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<RenderNode>) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Element { tag, .. } => Some(tag),
            RenderNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            RenderNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            RenderNode::Text { .. } => None,
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            RenderNode::Element { anchor, .. } => anchor.as_deref(),
            RenderNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } => children,
            RenderNode::Text { .. } => &[],
        }
    }

    /// Depth-first elements whose `class` attribute contains `class_name`.
    pub fn find_by_class<'a>(&'a self, class_name: &str, out: &mut Vec<&'a RenderNode>) {
        if let RenderNode::Element { children, .. } = self {
            if self
                .attr("class")
                .is_some_and(|c| c.split_whitespace().any(|part| part == class_name))
            {
                out.push(self);
            }
            for child in children {
                child.find_by_class(class_name, out);
            }
        }
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text { content } => content.clone(),
            RenderNode::Element { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
        }
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderedPage {
    pub nodes: Vec<RenderNode>,
}

impl RenderedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: RenderNode) {
        self.nodes.push(node);
    }

    /// All elements matching a class, across every top-level node.
    pub fn find_by_class(&self, class_name: &str) -> Vec<&RenderNode> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.find_by_class(class_name, &mut out);
        }
        out
    }

    /// The element carrying the given anchor, if any.
    pub fn find_by_anchor(&self, anchor: &str) -> Option<&RenderNode> {
        fn walk<'a>(node: &'a RenderNode, anchor: &str) -> Option<&'a RenderNode> {
            if node.anchor() == Some(anchor) {
                return Some(node);
            }
            node.children().iter().find_map(|c| walk(c, anchor))
        }
        self.nodes.iter().find_map(|n| walk(n, anchor))
    }
}
