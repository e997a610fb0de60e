use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Factory/tag-parse failure: the given tag names no known section variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid section type: {0}")]
pub struct InvalidSectionType(pub String);

/// The six section type tags.
///
/// `SectionKind` is the closed set of tags a page may contain. Parsing an
/// unknown tag fails with [`InvalidSectionType`]; once past `FromStr`, a kind
/// can always be constructed into a full section by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    TextImage,
    Testimonials,
    ProductGrid,
    ContactCta,
    AccordionSidebar,
}

impl SectionKind {
    /// All kinds, in the order the add-section dialog offers them.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::TextImage,
        SectionKind::Testimonials,
        SectionKind::ProductGrid,
        SectionKind::ContactCta,
        SectionKind::AccordionSidebar,
    ];

    /// The wire tag, e.g. `"product-grid"`.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::TextImage => "text-image",
            SectionKind::Testimonials => "testimonials",
            SectionKind::ProductGrid => "product-grid",
            SectionKind::ContactCta => "contact-cta",
            SectionKind::AccordionSidebar => "accordion-sidebar",
        }
    }

    /// Human-readable label for editor chrome.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero Section",
            SectionKind::TextImage => "Text with Image",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::ProductGrid => "Product Grid",
            SectionKind::ContactCta => "Contact CTA",
            SectionKind::AccordionSidebar => "Accordion Sidebar",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SectionKind {
    type Err = InvalidSectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionKind::Hero),
            "text-image" => Ok(SectionKind::TextImage),
            "testimonials" => Ok(SectionKind::Testimonials),
            "product-grid" => Ok(SectionKind::ProductGrid),
            "contact-cta" => Ok(SectionKind::ContactCta),
            "accordion-sidebar" => Ok(SectionKind::AccordionSidebar),
            other => Err(InvalidSectionType(other.to_string())),
        }
    }
}

/// Side of a text-image section the image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
}

/// How an accordion sidebar collapses on small screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileDisplayMode {
    Dropdown,
    Collapsible,
}

/// One customer quote inside a testimonials section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
    /// 1-5; out-of-range values are flagged by the validator, not rejected.
    pub rating: u8,
}

/// Navigation group inside an accordion sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<SidebarSubcategory>,
}

/// A single sidebar link. `target_section_id` is a soft reference to another
/// section's id; the empty string means "unbound".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSubcategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target_section_id: String,
}

/// One visual block of a page.
///
/// Closed tagged union; the `type` tag on the wire matches [`SectionKind`].
/// Every variant carries its stable `id` first. Equality of the *value* is
/// derived `PartialEq`; equality of the *section* is id equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    #[serde(rename_all = "camelCase")]
    Hero {
        id: String,
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subheading: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    TextImage {
        id: String,
        title: String,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        image_position: ImagePosition,
    },

    #[serde(rename_all = "camelCase")]
    Testimonials {
        id: String,
        title: String,
        #[serde(default)]
        testimonials: Vec<TestimonialItem>,
    },

    #[serde(rename_all = "camelCase")]
    ProductGrid {
        id: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        /// References into the external catalog, not embedded product data.
        #[serde(default)]
        product_ids: Vec<String>,
        show_prices: bool,
    },

    #[serde(rename_all = "camelCase")]
    ContactCta {
        id: String,
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subheading: Option<String>,
        button_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button_link: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    AccordionSidebar {
        id: String,
        title: String,
        #[serde(default)]
        categories: Vec<SidebarCategory>,
        sticky_on_desktop: bool,
        mobile_display_mode: MobileDisplayMode,
    },
}

impl Section {
    /// Stable identifier, unique within the owning page.
    pub fn id(&self) -> &str {
        match self {
            Section::Hero { id, .. }
            | Section::TextImage { id, .. }
            | Section::Testimonials { id, .. }
            | Section::ProductGrid { id, .. }
            | Section::ContactCta { id, .. }
            | Section::AccordionSidebar { id, .. } => id,
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero { .. } => SectionKind::Hero,
            Section::TextImage { .. } => SectionKind::TextImage,
            Section::Testimonials { .. } => SectionKind::Testimonials,
            Section::ProductGrid { .. } => SectionKind::ProductGrid,
            Section::ContactCta { .. } => SectionKind::ContactCta,
            Section::AccordionSidebar { .. } => SectionKind::AccordionSidebar,
        }
    }

    /// Sidebar sections pair with the content run that follows them; all
    /// other variants are content.
    pub fn is_sidebar(&self) -> bool {
        matches!(self, Section::AccordionSidebar { .. })
    }
}
