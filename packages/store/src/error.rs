use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Slug '{0}' already used by a published page")]
    SlugConflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
