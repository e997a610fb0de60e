use crate::section::Section;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publish lifecycle of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

/// A page: metadata plus an ordered sequence of sections.
///
/// Owned exclusively by the editing session until saved; the persisted copy
/// is what the public renderer reads. Slug uniqueness among published pages
/// is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: PageStatus,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Fresh draft with no sections and no timestamps (the store stamps them
    /// on save).
    pub fn new_draft(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            description: None,
            status: PageStatus::Draft,
            sections: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == section_id)
    }

    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id() == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == section_id)
    }
}
