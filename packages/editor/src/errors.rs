//! Error types for the editor

use bistro_model::InvalidSectionType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error(transparent)]
    InvalidSectionType(#[from] InvalidSectionType),
}
