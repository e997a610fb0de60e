//! # Bistro Renderer
//!
//! Evaluates a persisted page to a render tree.
//!
//! ## Purpose
//!
//! The renderer turns a `Page` into a tree of [`RenderNode`]s the public
//! site can serialize or hydrate. It owns the one genuinely structural
//! algorithm of the system: sidebar grouping. Sections partition into
//! sidebar and content; each sidebar claims the run of content sections
//! between it and the next sidebar, and renders alongside that run as a
//! two-column block.
//!
//! ## Degradation Contract
//!
//! **INVARIANT: a render pass cannot fail.**
//!
//! - A catalog error becomes [`ProductResolution::Failed`]; affected grids
//!   render their empty state.
//! - A product id with no match renders fewer cards, never an error.
//! - A subcategory link whose target is unbound or missing renders inert.
//!
//! Whatever the data looks like, the caller gets a complete tree.
//!
//! ## Resolution Model
//!
//! The only asynchronous boundary is product resolution: exactly one batched
//! call per render pass with the union of every grid's ids (the per-section
//! N+1 pattern is an explicit anti-goal). Resolution state is explicit and
//! per-render — `Loading | Resolved | Failed` — never ambient; a pending
//! render emits placeholders and is simply re-run when data arrives, which
//! is safe because rendering is idempotent.

pub mod anchors;
pub mod layout;
pub mod renderer;
pub mod vdom;

#[cfg(test)]
mod tests_anchors;

#[cfg(test)]
mod tests_error_recovery;

#[cfg(test)]
mod tests_layout;

#[cfg(test)]
mod tests_rendering;

pub use anchors::{anchor_for, anchor_map};
pub use layout::{PageLayout, SidebarBlock};
pub use renderer::{ProductResolution, Renderer};
pub use vdom::{RenderNode, RenderedPage};
