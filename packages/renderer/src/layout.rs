//! Sidebar grouping: the first pass of the two-pass render.
//!
//! A single sequential scan partitions sections into sidebar and content
//! while grouping each sidebar with the content run that follows it, up to
//! the next sidebar or the end of the page. Content before the first sidebar
//! is the leading run. No section is claimed twice, none is dropped, and
//! relative order within every run is the page order.

use bistro_model::{Page, Section};

/// One sidebar paired with its content run. The run may be empty
/// (consecutive sidebars, or a trailing sidebar).
#[derive(Debug, PartialEq)]
pub struct SidebarBlock<'a> {
    pub sidebar: &'a Section,
    pub content: Vec<&'a Section>,
}

/// Grouping of a page's sections for rendering.
#[derive(Debug, Default, PartialEq)]
pub struct PageLayout<'a> {
    /// Content preceding the first sidebar (the whole page when there are
    /// no sidebars).
    pub leading: Vec<&'a Section>,
    pub blocks: Vec<SidebarBlock<'a>>,
}

impl<'a> PageLayout<'a> {
    pub fn of(page: &'a Page) -> Self {
        let mut layout = PageLayout {
            leading: Vec::new(),
            blocks: Vec::new(),
        };

        for section in &page.sections {
            if section.is_sidebar() {
                layout.blocks.push(SidebarBlock {
                    sidebar: section,
                    content: Vec::new(),
                });
            } else {
                match layout.blocks.last_mut() {
                    Some(block) => block.content.push(section),
                    None => layout.leading.push(section),
                }
            }
        }

        layout
    }

    pub fn has_sidebars(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Every section, leading first then block by block — render order.
    pub fn section_count(&self) -> usize {
        self.leading.len()
            + self
                .blocks
                .iter()
                .map(|b| 1 + b.content.len())
                .sum::<usize>()
    }
}
