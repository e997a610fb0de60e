//! # Bistro Model
//!
//! The page document model: a `Page` owns an ordered sequence of `Section`s,
//! a closed tagged union over six variants. Pages serialize to JSON and are
//! persisted verbatim; the persisted copy is the source of truth for public
//! rendering.
//!
//! ## Core Principles
//!
//! 1. **Closed union**: every consumer matches exhaustively on `Section`.
//!    Adding a variant must break the factory, editor, renderer, and anchor
//!    resolver until they handle it.
//! 2. **Identity is the id**: two sections are the same section iff their
//!    ids are equal, independent of field values. Ids are assigned at
//!    creation and never reassigned.
//! 3. **Soft references**: `targetSectionId` and `productIds` point at data
//!    this model does not own. Integrity is not enforced here; dangling
//!    references degrade at render time.

pub mod page;
pub mod section;
pub mod validator;

pub use page::{Page, PageStatus};
pub use section::{
    ImagePosition, InvalidSectionType, MobileDisplayMode, Section, SectionKind, SidebarCategory,
    SidebarSubcategory, TestimonialItem,
};
pub use validator::{ValidationLevel, ValidationWarning, Validator};
