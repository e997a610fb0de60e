//! Nothing may fail during a render pass: bad references and catalog
//! failures all degrade to valid output.

use crate::renderer::{ProductResolution, Renderer};
use async_trait::async_trait;
use bistro_model::{
    MobileDisplayMode, Page, Section, SidebarCategory, SidebarSubcategory, TestimonialItem,
};
use bistro_store::{Catalog, Product, StoreError};

/// Catalog double that always fails.
struct DownCatalog;

#[async_trait]
impl Catalog for DownCatalog {
    async fn resolve_products(&self, _ids: &[String]) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

fn page(sections: Vec<Section>) -> Page {
    let mut page = Page::new_draft("pg1", "Home", "home");
    page.sections = sections;
    page
}

fn grid(id: &str, product_ids: &[&str]) -> Section {
    Section::ProductGrid {
        id: id.to_string(),
        title: "Our Menu".to_string(),
        subtitle: None,
        product_ids: product_ids.iter().map(|s| s.to_string()).collect(),
        show_prices: true,
    }
}

#[tokio::test]
async fn test_catalog_failure_renders_empty_grids() {
    let page = page(vec![
        Section::Hero {
            id: "h1".to_string(),
            heading: "Welcome".to_string(),
            subheading: None,
            image_url: None,
        },
        grid("g1", &["p1", "p2"]),
        grid("g2", &["p3"]),
    ]);

    // The failure is absorbed; the whole page still renders.
    let rendered = Renderer::new().render(&page, &DownCatalog).await;

    assert_eq!(rendered.find_by_class("hero").len(), 1);
    assert_eq!(rendered.find_by_class("product-grid").len(), 2);
    assert_eq!(rendered.find_by_class("empty").len(), 2);
    assert!(rendered.find_by_class("product-card").is_empty());
}

#[test]
fn test_failed_resolution_equals_zero_ids() {
    let with_ids = page(vec![grid("g1", &["p1", "p2"])]);
    let without_ids = page(vec![grid("g1", &[])]);

    let renderer = Renderer::new();
    let failed = renderer.render_with_resolution(&with_ids, &ProductResolution::Failed);
    let empty = renderer.render_with_resolution(
        &without_ids,
        &ProductResolution::resolved(Vec::new()),
    );

    assert_eq!(failed, empty);
}

#[test]
fn test_dangling_and_unbound_links_render_inert() {
    let page = page(vec![Section::AccordionSidebar {
        id: "s1".to_string(),
        title: "Menu Categories".to_string(),
        categories: vec![SidebarCategory {
            id: "c1".to_string(),
            name: "Pizza".to_string(),
            subcategories: vec![
                SidebarSubcategory {
                    id: "sub1".to_string(),
                    name: "Unbound".to_string(),
                    target_section_id: String::new(),
                },
                SidebarSubcategory {
                    id: "sub2".to_string(),
                    name: "Dangling".to_string(),
                    target_section_id: "deleted-section".to_string(),
                },
            ],
        }],
        sticky_on_desktop: false,
        mobile_display_mode: MobileDisplayMode::Dropdown,
    }]);

    let rendered = Renderer::new()
        .render_with_resolution(&page, &ProductResolution::resolved(Vec::new()));

    let links = rendered.find_by_class("subcategory-link");
    assert_eq!(links.len(), 2);
    for link in links {
        assert_eq!(link.attr("href"), None, "inert link must not scroll");
        assert!(!link.text_content().is_empty(), "still clickable text");
    }
}

#[test]
fn test_out_of_range_rating_renders_clamped() {
    let page = page(vec![Section::Testimonials {
        id: "t1".to_string(),
        title: "What Our Customers Say".to_string(),
        testimonials: vec![
            TestimonialItem {
                id: "a".to_string(),
                name: "Zero".to_string(),
                role: None,
                content: "hm".to_string(),
                rating: 0,
            },
            TestimonialItem {
                id: "b".to_string(),
                name: "Nine".to_string(),
                role: None,
                content: "wow".to_string(),
                rating: 9,
            },
        ],
    }]);

    let rendered = Renderer::new()
        .render_with_resolution(&page, &ProductResolution::resolved(Vec::new()));

    let ratings = rendered.find_by_class("rating");
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].text_content(), "");
    assert_eq!(ratings[1].text_content(), "★★★★★");
}

#[test]
fn test_sidebar_only_page_renders() {
    let page = page(vec![Section::AccordionSidebar {
        id: "s1".to_string(),
        title: "Menu Categories".to_string(),
        categories: Vec::new(),
        sticky_on_desktop: true,
        mobile_display_mode: MobileDisplayMode::Collapsible,
    }]);

    let rendered = Renderer::new()
        .render_with_resolution(&page, &ProductResolution::resolved(Vec::new()));

    assert_eq!(rendered.nodes.len(), 1);
    assert_eq!(rendered.nodes[0].attr("class"), Some("sidebar-block"));
    // Empty content column, not a missing one.
    assert_eq!(rendered.nodes[0].children().len(), 2);
    assert!(rendered.nodes[0].children()[1].children().is_empty());
}
