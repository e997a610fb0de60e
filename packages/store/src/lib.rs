//! # Bistro Store
//!
//! The persistence seam. The editor and renderer consume two narrow
//! interfaces — [`PageStore`] for page documents and [`Catalog`] for product
//! resolution — and treat everything behind them as commodity
//! infrastructure. [`MemoryStore`] implements both in memory, seeded with
//! the stock restaurant data, for tests, previews, and the CLI.
//!
//! Pages are persisted verbatim: the store never interprets sections beyond
//! the model's own schema. Slug uniqueness among published pages is enforced
//! here, on save and publish.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod pages;
pub mod stats;
pub mod types;

pub use catalog::Catalog;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use pages::PageStore;
pub use stats::{compute_stats, DashboardStats, StatusCount};
pub use types::{Category, Order, OrderItem, OrderStatus, Product, Review, SalesPoint};
