use crate::error::StoreError;
use crate::types::Product;
use async_trait::async_trait;

/// Product resolution capability consumed by the renderer.
///
/// One batched call per render pass: the renderer unions every grid's ids
/// and calls this exactly once. Result order is unspecified and ids with no
/// match are simply absent — callers build their own lookup table.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn resolve_products(&self, ids: &[String]) -> Result<Vec<Product>, StoreError>;
}
