use crate::anchors::{anchor_for, anchor_map};
use crate::layout::PageLayout;
use crate::vdom::{RenderNode, RenderedPage};
use bistro_model::{ImagePosition, MobileDisplayMode, Page, Section, SidebarCategory, TestimonialItem};
use bistro_store::{Catalog, Product};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, warn};

/// Per-render product resolution state.
///
/// Explicit and attached to the render pass, never ambient: a grid is
/// loading, resolved, or failed for this render only. `Loading` renders
/// placeholders; `Failed` renders the empty state; a re-render with fresher
/// state is always safe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductResolution {
    Loading,
    Resolved(HashMap<String, Product>),
    Failed,
}

impl ProductResolution {
    /// Index a resolution response by product id.
    pub fn resolved(products: Vec<Product>) -> Self {
        ProductResolution::Resolved(
            products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        )
    }

    pub fn lookup(&self, id: &str) -> Option<&Product> {
        match self {
            ProductResolution::Resolved(products) => products.get(id),
            ProductResolution::Loading | ProductResolution::Failed => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProductResolution::Loading)
    }
}

/// Renders persisted pages to render trees. Stateless; all per-render state
/// (anchor map, resolution) is built inside the pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Union of every product-grid's ids, first-seen order, deduplicated.
    /// This is the id set of the single batched resolve call.
    pub fn collect_product_ids(page: &Page) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for section in &page.sections {
            if let Section::ProductGrid { product_ids, .. } = section {
                for id in product_ids {
                    if seen.insert(id.as_str()) {
                        ids.push(id.clone());
                    }
                }
            }
        }

        ids
    }

    /// Render against a catalog: one batched resolve call (skipped when no
    /// grid references anything), then a synchronous pass. A catalog failure
    /// degrades to empty grids; it never propagates.
    #[instrument(skip_all, fields(page_id = %page.id, sections = page.sections.len()))]
    pub async fn render(&self, page: &Page, catalog: &dyn Catalog) -> RenderedPage {
        let ids = Self::collect_product_ids(page);

        let resolution = if ids.is_empty() {
            ProductResolution::resolved(Vec::new())
        } else {
            match catalog.resolve_products(&ids).await {
                Ok(products) => {
                    debug!(
                        requested = ids.len(),
                        resolved = products.len(),
                        "catalog resolution complete"
                    );
                    ProductResolution::resolved(products)
                }
                Err(error) => {
                    warn!(%error, "catalog resolution failed, grids render empty");
                    ProductResolution::Failed
                }
            }
        };

        self.render_with_resolution(page, &resolution)
    }

    /// Synchronous render pass against an explicit resolution state. Cannot
    /// fail: every degraded input renders as degraded output.
    #[instrument(skip_all, fields(page_id = %page.id))]
    pub fn render_with_resolution(
        &self,
        page: &Page,
        resolution: &ProductResolution,
    ) -> RenderedPage {
        // One anchor map per render, shared by sidebar links and wrappers.
        let anchors = anchor_map(page);
        let layout = PageLayout::of(page);
        let mut rendered = RenderedPage::new();

        for section in &layout.leading {
            rendered.add_node(self.render_section(section, &anchors, resolution));
        }

        for block in &layout.blocks {
            let sidebar_column = RenderNode::element("aside")
                .with_class("sidebar-column")
                .with_child(self.render_section(block.sidebar, &anchors, resolution));

            let content_column = RenderNode::element("div").with_class("content-column").with_children(
                block
                    .content
                    .iter()
                    .map(|section| self.render_section(section, &anchors, resolution))
                    .collect(),
            );

            rendered.add_node(
                RenderNode::element("div")
                    .with_class("sidebar-block")
                    .with_child(sidebar_column)
                    .with_child(content_column),
            );
        }

        rendered
    }

    fn render_section(
        &self,
        section: &Section,
        anchors: &HashMap<String, String>,
        resolution: &ProductResolution,
    ) -> RenderNode {
        debug!(section_id = section.id(), kind = %section.kind(), "rendering section");

        let anchor = anchors
            .get(section.id())
            .cloned()
            .unwrap_or_else(|| anchor_for(section));

        match section {
            Section::Hero {
                heading,
                subheading,
                image_url,
                ..
            } => {
                let mut node = RenderNode::element("section")
                    .with_class("hero")
                    .with_anchor(anchor)
                    .with_child(RenderNode::element("h1").with_child(txt(heading)));
                if let Some(subheading) = subheading {
                    node = node.with_child(
                        RenderNode::element("p")
                            .with_class("subheading")
                            .with_child(txt(subheading)),
                    );
                }
                if let Some(url) = image_url {
                    node = node.with_child(image(url, heading));
                }
                node
            }

            Section::TextImage {
                title,
                text,
                image_url,
                image_position,
                ..
            } => {
                let position_class = match image_position {
                    ImagePosition::Left => "image-left",
                    ImagePosition::Right => "image-right",
                };
                let mut node = RenderNode::element("section")
                    .with_class(format!("text-image {position_class}"))
                    .with_anchor(anchor)
                    .with_child(heading2(title))
                    .with_child(RenderNode::element("p").with_child(txt(text)));
                if let Some(url) = image_url {
                    node = node.with_child(image(url, title));
                }
                node
            }

            Section::Testimonials {
                title, testimonials, ..
            } => RenderNode::element("section")
                .with_class("testimonials")
                .with_anchor(anchor)
                .with_child(heading2(title))
                .with_child(
                    RenderNode::element("div")
                        .with_class("testimonial-list")
                        .with_children(testimonials.iter().map(render_testimonial).collect()),
                ),

            Section::ProductGrid {
                title,
                subtitle,
                product_ids,
                show_prices,
                ..
            } => {
                let mut node = RenderNode::element("section")
                    .with_class("product-grid")
                    .with_anchor(anchor)
                    .with_child(heading2(title));
                if let Some(subtitle) = subtitle {
                    node = node.with_child(
                        RenderNode::element("p")
                            .with_class("subtitle")
                            .with_child(txt(subtitle)),
                    );
                }
                node.with_child(render_products(product_ids, *show_prices, resolution))
            }

            Section::ContactCta {
                heading,
                subheading,
                button_text,
                button_link,
                ..
            } => {
                let mut button = RenderNode::element("a")
                    .with_class("button")
                    .with_child(txt(button_text));
                if let Some(link) = button_link {
                    button = button.with_attr("href", link.as_str());
                }

                let mut node = RenderNode::element("section")
                    .with_class("contact-cta")
                    .with_anchor(anchor)
                    .with_child(heading2(heading));
                if let Some(subheading) = subheading {
                    node = node.with_child(
                        RenderNode::element("p")
                            .with_class("subheading")
                            .with_child(txt(subheading)),
                    );
                }
                node.with_child(button)
            }

            Section::AccordionSidebar {
                title,
                categories,
                sticky_on_desktop,
                mobile_display_mode,
                ..
            } => {
                let class = if *sticky_on_desktop {
                    "accordion-sidebar sticky"
                } else {
                    "accordion-sidebar"
                };
                let mode = match mobile_display_mode {
                    MobileDisplayMode::Dropdown => "dropdown",
                    MobileDisplayMode::Collapsible => "collapsible",
                };

                RenderNode::element("nav")
                    .with_class(class)
                    .with_attr("data-mobile-mode", mode)
                    .with_anchor(anchor)
                    .with_child(RenderNode::element("h3").with_child(txt(title)))
                    .with_children(
                        categories
                            .iter()
                            .map(|category| render_category(category, anchors))
                            .collect(),
                    )
            }
        }
    }
}

fn render_testimonial(item: &TestimonialItem) -> RenderNode {
    let mut card = RenderNode::element("article")
        .with_class("testimonial-card")
        .with_child(
            RenderNode::element("p")
                .with_class("name")
                .with_child(txt(&item.name)),
        );
    if let Some(role) = &item.role {
        card = card.with_child(
            RenderNode::element("p")
                .with_class("role")
                .with_child(txt(role)),
        );
    }
    card.with_child(
        RenderNode::element("p")
            .with_class("content")
            .with_child(txt(&item.content)),
    )
    .with_child(
        RenderNode::element("span")
            .with_class("rating")
            .with_attr("data-rating", item.rating.to_string())
            .with_child(txt(&"★".repeat(item.rating.min(5) as usize))),
    )
}

fn render_products(
    product_ids: &[String],
    show_prices: bool,
    resolution: &ProductResolution,
) -> RenderNode {
    if resolution.is_loading() && !product_ids.is_empty() {
        return RenderNode::element("div")
            .with_class("products loading")
            .with_child(txt("Loading products..."));
    }

    // Grid order is the listed order; unresolved ids are simply omitted.
    let cards: Vec<RenderNode> = product_ids
        .iter()
        .filter_map(|id| resolution.lookup(id))
        .map(|product| render_product_card(product, show_prices))
        .collect();

    if cards.is_empty() {
        return RenderNode::element("div")
            .with_class("products empty")
            .with_child(txt("No products selected"));
    }

    RenderNode::element("div")
        .with_class("products")
        .with_children(cards)
}

fn render_product_card(product: &Product, show_prices: bool) -> RenderNode {
    let mut card = RenderNode::element("article")
        .with_class("product-card")
        .with_attr("data-product-id", product.id.as_str());
    if let Some(url) = &product.image_url {
        card = card.with_child(image(url, &product.name));
    }
    card = card.with_child(RenderNode::element("h3").with_child(txt(&product.name)));
    if show_prices {
        card = card.with_child(
            RenderNode::element("span")
                .with_class("price")
                .with_child(txt(&format!("${:.2}", product.price))),
        );
    }
    card
}

fn render_category(category: &SidebarCategory, anchors: &HashMap<String, String>) -> RenderNode {
    RenderNode::element("div")
        .with_class("category")
        .with_child(RenderNode::element("h4").with_child(txt(&category.name)))
        .with_child(
            RenderNode::element("ul")
                .with_class("subcategories")
                .with_children(
                    category
                        .subcategories
                        .iter()
                        .map(|sub| {
                            // Unbound ("") or dangling targets render as
                            // inert links: clickable, no scroll, no error.
                            let mut link = RenderNode::element("a")
                                .with_class("subcategory-link")
                                .with_child(txt(&sub.name));
                            if !sub.target_section_id.is_empty() {
                                if let Some(anchor) = anchors.get(&sub.target_section_id) {
                                    link = link.with_attr("href", format!("#{anchor}"));
                                }
                            }
                            RenderNode::element("li").with_child(link)
                        })
                        .collect(),
                ),
        )
}

fn txt(content: &str) -> RenderNode {
    RenderNode::text(content)
}

fn heading2(content: &str) -> RenderNode {
    RenderNode::element("h2").with_child(txt(content))
}

fn image(src: &str, alt: &str) -> RenderNode {
    RenderNode::element("img")
        .with_attr("src", src)
        .with_attr("alt", alt)
}
