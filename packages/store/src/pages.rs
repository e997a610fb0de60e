use crate::error::StoreError;
use async_trait::async_trait;
use bistro_model::Page;

/// Page persistence. The store treats all fields opaquely except the section
/// schema itself; a saved page comes back byte-equivalent modulo timestamps.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn load_page(&self, id: &str) -> Result<Page, StoreError>;

    /// Persist the full page verbatim, stamping `createdAt` on first save and
    /// `updatedAt` always. Fails with [`StoreError::SlugConflict`] if the
    /// page is published and another published page owns the slug.
    async fn save_page(&self, page: Page) -> Result<Page, StoreError>;

    /// Published page by slug (the public-site lookup).
    async fn find_by_slug(&self, slug: &str) -> Result<Page, StoreError>;

    /// All published pages, ordered by title.
    async fn list_published_pages(&self) -> Result<Vec<Page>, StoreError>;

    /// Flip a page to published, enforcing slug uniqueness.
    async fn publish_page(&self, id: &str) -> Result<Page, StoreError>;
}
