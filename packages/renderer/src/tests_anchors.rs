//! Anchor policy: raw id for product grids, `section-` prefix elsewhere

use crate::anchors::{anchor_for, anchor_map};
use bistro_common::IdGenerator;
use bistro_editor::SectionFactory;
use bistro_model::{Page, Section, SectionKind};
use std::collections::HashSet;

#[test]
fn test_product_grid_uses_raw_id() {
    let section = Section::ProductGrid {
        id: "menu-grid".to_string(),
        title: "Our Menu".to_string(),
        subtitle: None,
        product_ids: Vec::new(),
        show_prices: true,
    };

    assert_eq!(anchor_for(&section), "menu-grid");
}

#[test]
fn test_other_variants_are_prefixed() {
    let mut factory = SectionFactory::with_ids(IdGenerator::seeded("anchor"));

    for kind in SectionKind::ALL {
        let section = factory.create(kind);
        let anchor = anchor_for(&section);

        if kind == SectionKind::ProductGrid {
            assert_eq!(anchor, section.id());
        } else {
            assert_eq!(anchor, format!("section-{}", section.id()));
        }
    }
}

#[test]
fn test_anchor_map_agrees_with_anchor_for() {
    let mut factory = SectionFactory::with_ids(IdGenerator::seeded("anchor"));
    let mut page = Page::new_draft("pg1", "Home", "home");
    for kind in SectionKind::ALL {
        page.sections.push(factory.create(kind));
    }

    let map = anchor_map(&page);
    assert_eq!(map.len(), page.sections.len());
    for section in &page.sections {
        assert_eq!(map[section.id()], anchor_for(section));
    }
}

#[test]
fn test_anchors_unique_across_all_variant_combinations() {
    let mut factory = SectionFactory::with_ids(IdGenerator::seeded("anchor"));
    let mut page = Page::new_draft("pg1", "Home", "home");

    // Two of each variant, interleaved.
    for _ in 0..2 {
        for kind in SectionKind::ALL {
            page.sections.push(factory.create(kind));
        }
    }

    let mut seen = HashSet::new();
    for section in &page.sections {
        assert!(
            seen.insert(anchor_for(section)),
            "duplicate anchor for section {}",
            section.id()
        );
    }
}
