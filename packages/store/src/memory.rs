//! In-memory store backing tests, previews, and the CLI. Same contracts as a
//! hosted database, minus the network.

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::pages::PageStore;
use crate::stats::{compute_stats, DashboardStats};
use crate::types::{Category, Order, OrderItem, OrderStatus, Product, Review};
use async_trait::async_trait;
use bistro_model::{Page, PageStatus};
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct Inner {
    pages: HashMap<String, Page>,
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
    reviews: Vec<Review>,
}

/// In-memory `PageStore` + `Catalog`.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the stock restaurant data.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("store lock poisoned");
            inner.categories = seed_categories();
            inner.products = seed_products();
            inner.orders = seed_orders();
            inner.reviews = seed_reviews();
        }
        store
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.lock().expect("store lock poisoned").products.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.inner.lock().expect("store lock poisoned").categories.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.inner.lock().expect("store lock poisoned").orders.clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.inner.lock().expect("store lock poisoned").reviews.clone()
    }

    /// Insert or replace a product by id.
    pub fn upsert_product(&self, product: Product) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        match inner.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => inner.products.push(product),
        }
    }

    pub fn remove_product(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(StoreError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    pub fn set_order_status(&self, id: &str, status: OrderStatus) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("order {id}")))?;
        order.status = status;
        Ok(())
    }

    /// Aggregate the dashboard numbers from current orders and reviews.
    pub fn stats(&self) -> DashboardStats {
        let inner = self.inner.lock().expect("store lock poisoned");
        compute_stats(&inner.orders, &inner.reviews)
    }

    fn published_slug_conflict(inner: &Inner, page_id: &str, slug: &str) -> bool {
        inner
            .pages
            .values()
            .any(|p| p.id != page_id && p.status == PageStatus::Published && p.slug == slug)
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn load_page(&self, id: &str) -> Result<Page, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .pages
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("page {id}")))
    }

    async fn save_page(&self, page: Page) -> Result<Page, StoreError> {
        let mut page = page;
        let mut inner = self.inner.lock().expect("store lock poisoned");

        if page.status == PageStatus::Published
            && Self::published_slug_conflict(&inner, &page.id, &page.slug)
        {
            return Err(StoreError::SlugConflict(page.slug));
        }

        let now = Utc::now();
        if page.created_at.is_none() {
            page.created_at = Some(now);
        }
        page.updated_at = Some(now);

        debug!(page_id = %page.id, sections = page.sections.len(), "saving page");
        inner.pages.insert(page.id.clone(), page.clone());
        Ok(page)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Page, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .pages
            .values()
            .find(|p| p.status == PageStatus::Published && p.slug == slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("published page /{slug}")))
    }

    async fn list_published_pages(&self) -> Result<Vec<Page>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut pages: Vec<Page> = inner
            .pages
            .values()
            .filter(|p| p.status == PageStatus::Published)
            .cloned()
            .collect();
        pages.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(pages)
    }

    async fn publish_page(&self, id: &str) -> Result<Page, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");

        let slug = match inner.pages.get(id) {
            Some(page) => page.slug.clone(),
            None => return Err(StoreError::NotFound(format!("page {id}"))),
        };
        if Self::published_slug_conflict(&inner, id, &slug) {
            return Err(StoreError::SlugConflict(slug));
        }

        let page = inner
            .pages
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("page {id}")))?;
        page.status = PageStatus::Published;
        page.updated_at = Some(Utc::now());
        Ok(page.clone())
    }
}

#[async_trait]
impl Catalog for MemoryStore {
    async fn resolve_products(&self, ids: &[String]) -> Result<Vec<Product>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let inner = self.inner.lock().expect("store lock poisoned");

        // Missing ids are simply absent; result ordered by name, not input.
        let mut products: Vec<Product> = inner
            .products
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(requested = ids.len(), resolved = products.len(), "resolved products");
        Ok(products)
    }
}

fn seed_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, description: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    };

    vec![
        category("c1", "Pizza", "Traditional Italian pizzas"),
        category("c2", "Pasta", "Authentic Italian pasta dishes"),
        category("c3", "Salad", "Fresh and healthy salads"),
        category("c4", "Dessert", "Sweet treats to finish your meal"),
        category("c5", "Appetizer", "Starters to begin your meal"),
    ]
}

fn seed_products() -> Vec<Product> {
    let product = |id: &str, name: &str, description: &str, price: f64, category: &str, available: bool| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        image_url: Some("/placeholder.svg?height=100&width=100".to_string()),
        available,
        category_id: Some(category.to_string()),
    };

    vec![
        product(
            "p1",
            "Margherita Pizza",
            "Classic pizza with tomato sauce, mozzarella, and basil",
            12.99,
            "c1",
            true,
        ),
        product(
            "p2",
            "Pepperoni Pizza",
            "Pizza with tomato sauce, mozzarella, and pepperoni",
            14.99,
            "c1",
            true,
        ),
        product(
            "p3",
            "Caesar Salad",
            "Fresh romaine lettuce with Caesar dressing, croutons, and parmesan",
            8.99,
            "c3",
            true,
        ),
        product(
            "p4",
            "Spaghetti Carbonara",
            "Spaghetti with egg, cheese, pancetta, and black pepper",
            15.99,
            "c2",
            true,
        ),
        product(
            "p5",
            "Tiramisu",
            "Classic Italian dessert with coffee, mascarpone, and cocoa",
            7.99,
            "c4",
            true,
        ),
        product(
            "p6",
            "Garlic Bread",
            "Toasted bread with garlic butter and herbs",
            4.99,
            "c5",
            true,
        ),
        product(
            "p7",
            "Chocolate Cake",
            "Rich chocolate cake with chocolate ganache",
            6.99,
            "c4",
            false,
        ),
    ]
}

fn seed_orders() -> Vec<Order> {
    let item = |product_id: &str, name: &str, quantity: u32, price: f64| OrderItem {
        product_id: Some(product_id.to_string()),
        name: name.to_string(),
        quantity,
        price,
    };

    vec![
        Order {
            id: "o1".to_string(),
            customer_name: "John Smith".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 15, 14, 30, 0).unwrap(),
            status: OrderStatus::Delivered,
            items: vec![
                item("p1", "Margherita Pizza", 2, 12.99),
                item("p3", "Caesar Salad", 1, 8.99),
            ],
            total: 34.97,
        },
        Order {
            id: "o2".to_string(),
            customer_name: "Emily Johnson".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 15, 18, 45, 0).unwrap(),
            status: OrderStatus::Pending,
            items: vec![
                item("p2", "Pepperoni Pizza", 1, 14.99),
                item("p6", "Garlic Bread", 1, 4.99),
            ],
            total: 19.98,
        },
        Order {
            id: "o3".to_string(),
            customer_name: "Michael Brown".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 15, 19, 15, 0).unwrap(),
            status: OrderStatus::Preparing,
            items: vec![
                item("p4", "Spaghetti Carbonara", 2, 15.99),
                item("p5", "Tiramisu", 2, 7.99),
            ],
            total: 47.96,
        },
        Order {
            id: "o4".to_string(),
            customer_name: "Sarah Wilson".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 15, 20, 0, 0).unwrap(),
            status: OrderStatus::Canceled,
            items: vec![item("p1", "Margherita Pizza", 1, 12.99)],
            total: 12.99,
        },
        Order {
            id: "o5".to_string(),
            customer_name: "David Lee".to_string(),
            date: Utc.with_ymd_and_hms(2023, 5, 16, 12, 30, 0).unwrap(),
            status: OrderStatus::Pending,
            items: vec![
                item("p2", "Pepperoni Pizza", 2, 14.99),
                item("p7", "Chocolate Cake", 1, 6.99),
            ],
            total: 36.97,
        },
    ]
}

fn seed_reviews() -> Vec<Review> {
    let review = |id: &str, name: &str, rating: u8, comment: &str, day: u32| Review {
        id: id.to_string(),
        customer_name: name.to_string(),
        rating,
        comment: Some(comment.to_string()),
        date: Utc.with_ymd_and_hms(2023, 5, day, 12, 0, 0).unwrap(),
    };

    vec![
        review("r1", "John Smith", 5, "Excellent food and fast delivery!", 15),
        review("r2", "Emily Johnson", 4, "Great pizza, but delivery was a bit late.", 15),
        review("r3", "Michael Brown", 5, "Best pasta I've ever had!", 15),
        review("r4", "Sarah Wilson", 3, "Food was good but arrived cold.", 16),
    ]
}
