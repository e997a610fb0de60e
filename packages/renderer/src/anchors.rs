//! Stable DOM anchors for scroll navigation.
//!
//! Product grids anchor on their raw section id so external links carrying a
//! catalog id land on them directly; every other variant gets a `section-`
//! prefix to keep the namespaces apart. Sidebar links and content wrappers
//! must share one map per render — if they diverge, "click subcategory,
//! scroll to section" breaks.

use bistro_model::{Page, Section};
use std::collections::HashMap;

/// Deterministic anchor for one section.
pub fn anchor_for(section: &Section) -> String {
    match section {
        Section::ProductGrid { id, .. } => id.clone(),

        Section::Hero { id, .. }
        | Section::TextImage { id, .. }
        | Section::Testimonials { id, .. }
        | Section::ContactCta { id, .. }
        | Section::AccordionSidebar { id, .. } => format!("section-{id}"),
    }
}

/// Section id → anchor for the whole page, computed once per render.
pub fn anchor_map(page: &Page) -> HashMap<String, String> {
    page.sections
        .iter()
        .map(|section| (section.id().to_string(), anchor_for(section)))
        .collect()
}
