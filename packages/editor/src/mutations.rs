//! # Page Mutations
//!
//! High-level semantic operations on a page's section sequence.
//!
//! ## Mutation Semantics
//!
//! ### InsertSection
//! - Index clamped to the sequence length
//! - Fails if the section's id already exists on the page
//!
//! ### UpdateSection
//! - Applies a variant-scoped patch; wrong-variant patches are ignored
//! - Fails if the section id is absent
//!
//! ### MoveSection
//! - Move-before-target, single gesture-level operation
//! - Total no-op for equal or missing ids (concurrent delete mid-drag)
//!
//! ### RemoveSection
//! - Filters the id out, preserving the order of the rest
//! - Fails if the section id is absent
//!
//! Every mutation validates before it touches the page: a returned error
//! means the page is exactly as it was.

use crate::factory::SectionFactory;
use crate::patch::{apply_patch, SectionPatch};
use crate::reorder::reorder;
use bistro_model::{Page, Section};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic page operations (intent-preserving, serializable)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a pre-built section at index (factory output, never hand-built)
    InsertSection { index: usize, section: Section },

    /// Merge a variant-scoped patch into one section
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    /// Remove a section from the sequence
    RemoveSection { section_id: String },

    /// Drag reorder: source takes target's position
    MoveSection {
        source_id: String,
        target_id: String,
    },

    /// Update page metadata; empty-string description clears it
    UpdateMeta {
        title: Option<String>,
        slug: Option<String>,
        description: Option<String>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),
}

impl Mutation {
    /// Apply mutation to the page with validation
    pub fn apply(&self, page: &mut Page, factory: &mut SectionFactory) -> Result<(), MutationError> {
        // Validate first
        self.validate(page)?;

        match self {
            Mutation::InsertSection { index, section } => {
                let insert_index = (*index).min(page.sections.len());
                page.sections.insert(insert_index, section.clone());
            }

            Mutation::UpdateSection { section_id, patch } => {
                let index = page
                    .section_index(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                page.sections[index] = apply_patch(&page.sections[index], patch, factory);
            }

            Mutation::RemoveSection { section_id } => {
                page.sections.retain(|s| s.id() != section_id);
            }

            Mutation::MoveSection {
                source_id,
                target_id,
            } => {
                reorder(&mut page.sections, source_id, target_id);
            }

            Mutation::UpdateMeta {
                title,
                slug,
                description,
            } => {
                if let Some(title) = title {
                    page.title = title.clone();
                }
                if let Some(slug) = slug {
                    page.slug = slug.clone();
                }
                if let Some(description) = description {
                    page.description = if description.is_empty() {
                        None
                    } else {
                        Some(description.clone())
                    };
                }
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, page: &Page) -> Result<(), MutationError> {
        match self {
            Mutation::InsertSection { section, .. } => {
                if page.section(section.id()).is_some() {
                    return Err(MutationError::DuplicateSectionId(section.id().to_string()));
                }
                Ok(())
            }

            Mutation::UpdateSection { section_id, .. } => {
                page.section(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                Ok(())
            }

            Mutation::RemoveSection { section_id } => {
                page.section(section_id)
                    .ok_or_else(|| MutationError::SectionNotFound(section_id.clone()))?;
                Ok(())
            }

            // A vanished drag source or target is a legal no-op, not an error.
            Mutation::MoveSection { .. } => Ok(()),

            Mutation::UpdateMeta { .. } => Ok(()),
        }
    }
}
