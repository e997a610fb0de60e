//! # Bistro Editor
//!
//! Editing engine for page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Page + Section union (JSON)          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: PageDocument lifecycle + mutations  │
//! │  - Section factory (variant defaults)       │
//! │  - Variant-scoped patches                   │
//! │  - Drag reorder (move-before-target)        │
//! │  - Apply mutations with validation          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Page → render tree                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The page is source of truth**: the editor holds one mutable `Page`
//!    per session; saving persists it verbatim.
//! 2. **Validate, then apply**: a failed mutation leaves the page untouched.
//! 3. **Patches are variant-scoped**: a patch addressed to the wrong variant
//!    is silently ignored, never a crash. Illegal field combinations are
//!    unrepresentable.
//! 4. **Reorder is gesture-level**: one mutation per completed drag, no-op
//!    for ids that vanished mid-drag.

mod document;
mod errors;
mod factory;
mod mutations;
mod patch;
mod reorder;

pub use document::PageDocument;
pub use errors::EditorError;
pub use factory::SectionFactory;
pub use mutations::{Mutation, MutationError};
pub use patch::{
    apply_patch, AccordionSidebarPatch, CategoryOp, ContactCtaPatch, HeroPatch, ProductGridPatch,
    SectionPatch, TestimonialOp, TestimonialPatch, TestimonialsPatch, TextImagePatch,
};
pub use reorder::reorder;
