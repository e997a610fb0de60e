//! Render-pass behavior: batched resolution, grid degradation, navigation

use crate::renderer::{ProductResolution, Renderer};
use async_trait::async_trait;
use bistro_model::{
    MobileDisplayMode, Page, Section, SidebarCategory, SidebarSubcategory,
};
use bistro_store::{Catalog, Product, StoreError};
use std::collections::HashSet;
use std::sync::Mutex;

/// Catalog double that records every resolve call.
struct MockCatalog {
    products: Vec<Product>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockCatalog {
    fn with_products(ids: &[&str]) -> Self {
        Self {
            products: ids.iter().map(|id| product(id)).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn requested_ids(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn resolve_products(&self, ids: &[String]) -> Result<Vec<Product>, StoreError> {
        self.calls.lock().unwrap().push(ids.to_vec());
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(self
            .products
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .cloned()
            .collect())
    }
}

fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: None,
        price: 9.99,
        image_url: None,
        available: true,
        category_id: None,
    }
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

fn hero(id: &str) -> Section {
    Section::Hero {
        id: id.to_string(),
        heading: "Welcome".to_string(),
        subheading: None,
        image_url: None,
    }
}

fn sidebar_targeting(id: &str, target: &str) -> Section {
    Section::AccordionSidebar {
        id: id.to_string(),
        title: "Menu Categories".to_string(),
        categories: vec![SidebarCategory {
            id: format!("{id}-c1"),
            name: "Pizza".to_string(),
            subcategories: vec![SidebarSubcategory {
                id: format!("{id}-sub1"),
                name: "Classic Pizzas".to_string(),
                target_section_id: target.to_string(),
            }],
        }],
        sticky_on_desktop: true,
        mobile_display_mode: MobileDisplayMode::Collapsible,
    }
}

fn page(sections: Vec<Section>) -> Page {
    let mut page = Page::new_draft("pg1", "Home", "home");
    page.sections = sections;
    page
}

#[tokio::test]
async fn test_three_grids_one_batched_call() {
    let catalog = MockCatalog::with_products(&["p1", "p2", "p3", "p4", "p5", "p6"]);
    let page = page(vec![
        grid("g1", &["p1", "p2"]),
        hero("h1"),
        grid("g2", &["p3", "p4"]),
        grid("g3", &["p5", "p6"]),
    ]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    assert_eq!(catalog.call_count(), 1);
    assert_eq!(
        catalog.requested_ids()[0],
        vec!["p1", "p2", "p3", "p4", "p5", "p6"]
    );
    assert_eq!(rendered.find_by_class("product-card").len(), 6);
}

#[tokio::test]
async fn test_union_deduplicates_shared_ids() {
    let catalog = MockCatalog::with_products(&["p1", "p2"]);
    let page = page(vec![grid("g1", &["p1", "p2"]), grid("g2", &["p2", "p1"])]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    assert_eq!(catalog.requested_ids()[0], vec!["p1", "p2"]);
    // Each grid still renders its own cards.
    assert_eq!(rendered.find_by_class("product-card").len(), 4);
}

#[tokio::test]
async fn test_no_references_no_call() {
    let catalog = MockCatalog::with_products(&["p1"]);
    let page = page(vec![hero("h1"), grid("g1", &[])]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    assert_eq!(catalog.call_count(), 0);
    assert_eq!(rendered.find_by_class("empty").len(), 1);
}

#[tokio::test]
async fn test_degraded_grid_keeps_listed_order() {
    let catalog = MockCatalog::with_products(&["p1", "p2"]);
    let page = page(vec![grid("g1", &["p1", "missing", "p2"])]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    let cards = rendered.find_by_class("product-card");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].attr("data-product-id"), Some("p1"));
    assert_eq!(cards[1].attr("data-product-id"), Some("p2"));
}

#[tokio::test]
async fn test_show_prices_gates_rendering_not_resolution() {
    let catalog = MockCatalog::with_products(&["p1"]);
    let mut no_prices = grid("g1", &["p1"]);
    if let Section::ProductGrid { show_prices, .. } = &mut no_prices {
        *show_prices = false;
    }
    let page = page(vec![no_prices]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    assert_eq!(catalog.call_count(), 1, "resolution still happens");
    assert_eq!(rendered.find_by_class("product-card").len(), 1);
    assert!(rendered.find_by_class("price").is_empty());
}

#[test]
fn test_loading_state_renders_placeholder() {
    let page = page(vec![grid("g1", &["p1"]), hero("h1")]);

    let rendered = Renderer::new().render_with_resolution(&page, &ProductResolution::Loading);

    assert_eq!(rendered.find_by_class("loading").len(), 1);
    assert!(rendered.find_by_class("product-card").is_empty());
    // The rest of the page is unaffected.
    assert_eq!(rendered.find_by_class("hero").len(), 1);
}

#[tokio::test]
async fn test_sidebar_link_matches_wrapper_anchor() {
    let catalog = MockCatalog::with_products(&["p1"]);
    let page = page(vec![sidebar_targeting("s1", "g1"), grid("g1", &["p1"])]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    let links = rendered.find_by_class("subcategory-link");
    assert_eq!(links.len(), 1);
    let href = links[0].attr("href").expect("bound link has an href");

    // Product grids anchor on their raw id.
    assert_eq!(href, "#g1");
    let target = rendered
        .find_by_anchor(href.trim_start_matches('#'))
        .expect("link target exists in the tree");
    assert_eq!(target.attr("class"), Some("product-grid"));
}

#[tokio::test]
async fn test_two_column_block_structure() {
    let catalog = MockCatalog::with_products(&[]);
    let page = page(vec![
        hero("lead"),
        sidebar_targeting("s1", ""),
        hero("a"),
        hero("b"),
    ]);

    let rendered = Renderer::new().render(&page, &catalog).await;

    // Orphan content first, then one block.
    assert_eq!(rendered.nodes.len(), 2);
    assert_eq!(rendered.nodes[0].attr("class"), Some("hero"));

    let block = &rendered.nodes[1];
    assert_eq!(block.attr("class"), Some("sidebar-block"));
    assert_eq!(block.children().len(), 2);
    assert_eq!(block.children()[0].attr("class"), Some("sidebar-column"));
    assert_eq!(block.children()[1].attr("class"), Some("content-column"));
    assert_eq!(block.children()[1].children().len(), 2);
}

#[tokio::test]
async fn test_empty_page_renders_empty_tree() {
    let catalog = MockCatalog::with_products(&[]);
    let rendered = Renderer::new().render(&page(Vec::new()), &catalog).await;

    assert!(rendered.nodes.is_empty());
    assert_eq!(catalog.call_count(), 0);
}

#[test]
fn test_collect_ids_preserves_first_seen_order() {
    let page = page(vec![
        grid("g1", &["p3", "p1"]),
        grid("g2", &["p1", "p2"]),
    ]);

    assert_eq!(Renderer::collect_product_ids(&page), vec!["p3", "p1", "p2"]);
}
