//! Sidebar grouping properties

use crate::layout::PageLayout;
use bistro_model::{MobileDisplayMode, Page, Section};

fn content(id: &str) -> Section {
    Section::Hero {
        id: id.to_string(),
        heading: "Welcome".to_string(),
        subheading: None,
        image_url: None,
    }
}

fn sidebar(id: &str) -> Section {
    Section::AccordionSidebar {
        id: id.to_string(),
        title: "Menu Categories".to_string(),
        categories: Vec::new(),
        sticky_on_desktop: true,
        mobile_display_mode: MobileDisplayMode::Collapsible,
    }
}

fn page(sections: Vec<Section>) -> Page {
    let mut page = Page::new_draft("pg1", "Home", "home");
    page.sections = sections;
    page
}

fn ids(sections: &[&Section]) -> Vec<String> {
    sections.iter().map(|s| s.id().to_string()).collect()
}

#[test]
fn test_no_sidebars_everything_leads() {
    let page = page(vec![content("a"), content("b"), content("c")]);
    let layout = PageLayout::of(&page);

    assert!(!layout.has_sidebars());
    assert_eq!(ids(&layout.leading), ["a", "b", "c"]);
    assert_eq!(layout.section_count(), 3);
}

#[test]
fn test_each_sidebar_claims_following_run() {
    let page = page(vec![
        sidebar("x"),
        content("a"),
        content("b"),
        sidebar("y"),
        content("c"),
    ]);
    let layout = PageLayout::of(&page);

    assert!(layout.leading.is_empty());
    assert_eq!(layout.blocks.len(), 2);
    assert_eq!(layout.blocks[0].sidebar.id(), "x");
    assert_eq!(ids(&layout.blocks[0].content), ["a", "b"]);
    assert_eq!(layout.blocks[1].sidebar.id(), "y");
    assert_eq!(ids(&layout.blocks[1].content), ["c"]);
}

#[test]
fn test_content_before_first_sidebar_is_orphaned() {
    let page = page(vec![content("a"), sidebar("x"), content("b")]);
    let layout = PageLayout::of(&page);

    assert_eq!(ids(&layout.leading), ["a"]);
    assert_eq!(layout.blocks.len(), 1);
    assert_eq!(ids(&layout.blocks[0].content), ["b"]);
}

#[test]
fn test_consecutive_sidebars_allow_empty_runs() {
    let page = page(vec![sidebar("x"), sidebar("y"), content("a")]);
    let layout = PageLayout::of(&page);

    assert!(layout.blocks[0].content.is_empty());
    assert_eq!(ids(&layout.blocks[1].content), ["a"]);
}

#[test]
fn test_trailing_sidebar_has_empty_run() {
    let page = page(vec![content("a"), sidebar("x")]);
    let layout = PageLayout::of(&page);

    assert_eq!(ids(&layout.leading), ["a"]);
    assert!(layout.blocks[0].content.is_empty());
}

#[test]
fn test_no_section_lost_or_claimed_twice() {
    let page = page(vec![
        content("a"),
        sidebar("x"),
        content("b"),
        content("c"),
        sidebar("y"),
        sidebar("z"),
        content("d"),
    ]);
    let layout = PageLayout::of(&page);

    assert_eq!(layout.section_count(), page.sections.len());

    let mut seen: Vec<String> = ids(&layout.leading);
    for block in &layout.blocks {
        seen.push(block.sidebar.id().to_string());
        seen.extend(ids(&block.content));
    }
    seen.sort_unstable();

    let mut expected: Vec<String> =
        page.sections.iter().map(|s| s.id().to_string()).collect();
    expected.sort_unstable();

    assert_eq!(seen, expected);
}

#[test]
fn test_empty_page() {
    let layout_page = page(Vec::new());
    let layout = PageLayout::of(&layout_page);

    assert!(layout.leading.is_empty());
    assert!(layout.blocks.is_empty());
    assert_eq!(layout.section_count(), 0);
}
