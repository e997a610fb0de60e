//! # Page Document
//!
//! The editing-session handle around one page.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Save
//!   ↓      ↓      ↓
//! JSON  Mutations  JSON (persisted verbatim)
//! ```
//!
//! One `PageDocument` per editing session; the page inside it is the only
//! mutable copy. Concurrent editors are reconciled last-write-wins at the
//! store, not here.

use crate::{EditorError, Mutation, SectionFactory};
use bistro_common::IdGenerator;
use bistro_model::{Page, Section, SectionKind};

/// Editable page plus its session state
#[derive(Debug)]
pub struct PageDocument {
    page: Page,
    factory: SectionFactory,

    /// Increments on each applied mutation
    pub version: u64,

    /// Unsaved changes since load / last `mark_saved`
    dirty: bool,
}

impl PageDocument {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            factory: SectionFactory::new(),
            version: 0,
            dirty: false,
        }
    }

    /// Session with a caller-supplied id scheme (seeded ids in tests).
    pub fn with_ids(page: Page, ids: IdGenerator) -> Self {
        Self {
            page,
            factory: SectionFactory::with_ids(ids),
            version: 0,
            dirty: false,
        }
    }

    /// Load from persisted JSON
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let page: Page = serde_json::from_str(json)?;
        Ok(Self::new(page))
    }

    /// Serialize the page verbatim for persistence
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.page)?)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Build a default section of `kind` and append it, returning its id.
    pub fn add_section(&mut self, kind: SectionKind) -> Result<String, EditorError> {
        let section = self.factory.create(kind);
        let id = section.id().to_string();
        self.apply(Mutation::InsertSection {
            index: self.page.sections.len(),
            section,
        })?;
        Ok(id)
    }

    /// Build a section from a raw tag and append it.
    pub fn add_section_from_tag(&mut self, tag: &str) -> Result<String, EditorError> {
        let section = self.factory.create_from_tag(tag)?;
        let id = section.id().to_string();
        self.apply(Mutation::InsertSection {
            index: self.page.sections.len(),
            section,
        })?;
        Ok(id)
    }

    /// Apply a mutation. On error the page is untouched and the version and
    /// dirty flag are unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        mutation.apply(&mut self.page, &mut self.factory)?;
        self.version += 1;
        self.dirty = true;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called after the store accepted the page.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Direct section access for editor chrome
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.page.section(section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_marks_dirty_and_bumps_version() {
        let mut doc = PageDocument::new(Page::new_draft("pg1", "Home", "home"));
        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());

        let id = doc.add_section(SectionKind::Hero).unwrap();
        assert_eq!(doc.version, 1);
        assert!(doc.is_dirty());
        assert!(doc.section(&id).is_some());

        doc.mark_saved();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_failed_mutation_leaves_state_unchanged() {
        let mut doc = PageDocument::new(Page::new_draft("pg1", "Home", "home"));

        let result = doc.apply(Mutation::RemoveSection {
            section_id: "ghost".to_string(),
        });

        assert!(result.is_err());
        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut doc = PageDocument::new(Page::new_draft("pg1", "Home", "home"));
        doc.add_section(SectionKind::ProductGrid).unwrap();

        let json = doc.to_json().unwrap();
        let reloaded = PageDocument::from_json(&json).unwrap();

        assert_eq!(reloaded.page(), doc.page());
    }
}
