//! Variant-scoped partial updates.
//!
//! One patch struct per section variant keeps illegal field combinations
//! unrepresentable: a hero patch simply has nowhere to put `productIds`.
//! Applying a patch to a section of a different variant is an ignored no-op,
//! matching the loose authoring ergonomics of CMS forms. Optional string
//! fields clear by setting the empty string.

use crate::factory::SectionFactory;
use bistro_model::{ImagePosition, MobileDisplayMode, Section, SectionKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroPatch {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextImagePatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub image_position: Option<ImagePosition>,
}

/// Partial fields of one testimonial, used by add (merged over the stock
/// defaults) and update (merged over the existing item).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
}

/// Id-addressed operation on the testimonial collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum TestimonialOp {
    /// Append with a freshly generated id.
    Add {
        #[serde(default)]
        fields: TestimonialPatch,
    },
    /// Merge fields into the matching id; no match, no effect.
    Update {
        id: String,
        #[serde(default)]
        fields: TestimonialPatch,
    },
    /// Filter the matching id out, preserving the order of the rest.
    Remove { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsPatch {
    pub title: Option<String>,
    pub items: Vec<TestimonialOp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductGridPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Full replacement: the product selector always submits the whole list.
    pub product_ids: Option<Vec<String>>,
    pub show_prices: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCtaPatch {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

/// Id-addressed operation on the sidebar's category tree. Subcategory ops
/// address category and subcategory by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum CategoryOp {
    Add {
        #[serde(default)]
        name: Option<String>,
    },
    Update {
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    Remove {
        id: String,
    },
    #[serde(rename_all = "camelCase")]
    AddSubcategory {
        category_id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        target_section_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    UpdateSubcategory {
        category_id: String,
        subcategory_id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        target_section_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveSubcategory {
        category_id: String,
        subcategory_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionSidebarPatch {
    pub title: Option<String>,
    pub sticky_on_desktop: Option<bool>,
    pub mobile_display_mode: Option<MobileDisplayMode>,
    pub categories: Vec<CategoryOp>,
}

/// A partial update addressed to one section variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionPatch {
    Hero(HeroPatch),
    TextImage(TextImagePatch),
    Testimonials(TestimonialsPatch),
    ProductGrid(ProductGridPatch),
    ContactCta(ContactCtaPatch),
    AccordionSidebar(AccordionSidebarPatch),
}

impl SectionPatch {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionPatch::Hero(_) => SectionKind::Hero,
            SectionPatch::TextImage(_) => SectionKind::TextImage,
            SectionPatch::Testimonials(_) => SectionKind::Testimonials,
            SectionPatch::ProductGrid(_) => SectionKind::ProductGrid,
            SectionPatch::ContactCta(_) => SectionKind::ContactCta,
            SectionPatch::AccordionSidebar(_) => SectionKind::AccordionSidebar,
        }
    }
}

fn merge(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

/// `Some("")` clears an optional field, any other `Some` sets it.
fn merge_opt(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *field = if value.is_empty() {
            None
        } else {
            Some(value.clone())
        };
    }
}

/// Merge a patch into a section, producing the updated section.
///
/// Pure apart from id generation for `Add` ops. A patch whose variant does
/// not match the section's is returned unchanged; the empty patch is a true
/// no-op for every variant.
pub fn apply_patch(section: &Section, patch: &SectionPatch, factory: &mut SectionFactory) -> Section {
    let mut updated = section.clone();

    match (&mut updated, patch) {
        (
            Section::Hero {
                heading,
                subheading,
                image_url,
                ..
            },
            SectionPatch::Hero(p),
        ) => {
            merge(heading, &p.heading);
            merge_opt(subheading, &p.subheading);
            merge_opt(image_url, &p.image_url);
        }

        (
            Section::TextImage {
                title,
                text,
                image_url,
                image_position,
                ..
            },
            SectionPatch::TextImage(p),
        ) => {
            merge(title, &p.title);
            merge(text, &p.text);
            merge_opt(image_url, &p.image_url);
            if let Some(position) = p.image_position {
                *image_position = position;
            }
        }

        (
            Section::Testimonials {
                title, testimonials, ..
            },
            SectionPatch::Testimonials(p),
        ) => {
            merge(title, &p.title);

            for op in &p.items {
                match op {
                    TestimonialOp::Add { fields } => {
                        let mut item = factory.new_testimonial();
                        merge(&mut item.name, &fields.name);
                        merge_opt(&mut item.role, &fields.role);
                        merge(&mut item.content, &fields.content);
                        if let Some(rating) = fields.rating {
                            item.rating = rating;
                        }
                        testimonials.push(item);
                    }
                    TestimonialOp::Update { id, fields } => {
                        if let Some(item) = testimonials.iter_mut().find(|t| &t.id == id) {
                            merge(&mut item.name, &fields.name);
                            merge_opt(&mut item.role, &fields.role);
                            merge(&mut item.content, &fields.content);
                            if let Some(rating) = fields.rating {
                                item.rating = rating;
                            }
                        }
                    }
                    TestimonialOp::Remove { id } => {
                        testimonials.retain(|t| &t.id != id);
                    }
                }
            }
        }

        (
            Section::ProductGrid {
                title,
                subtitle,
                product_ids,
                show_prices,
                ..
            },
            SectionPatch::ProductGrid(p),
        ) => {
            merge(title, &p.title);
            merge_opt(subtitle, &p.subtitle);
            if let Some(ids) = &p.product_ids {
                *product_ids = ids.clone();
            }
            if let Some(show) = p.show_prices {
                *show_prices = show;
            }
        }

        (
            Section::ContactCta {
                heading,
                subheading,
                button_text,
                button_link,
                ..
            },
            SectionPatch::ContactCta(p),
        ) => {
            merge(heading, &p.heading);
            merge_opt(subheading, &p.subheading);
            merge(button_text, &p.button_text);
            merge_opt(button_link, &p.button_link);
        }

        (
            Section::AccordionSidebar {
                title,
                categories,
                sticky_on_desktop,
                mobile_display_mode,
                ..
            },
            SectionPatch::AccordionSidebar(p),
        ) => {
            merge(title, &p.title);
            if let Some(sticky) = p.sticky_on_desktop {
                *sticky_on_desktop = sticky;
            }
            if let Some(mode) = p.mobile_display_mode {
                *mobile_display_mode = mode;
            }

            for op in &p.categories {
                match op {
                    CategoryOp::Add { name } => {
                        let mut category = factory.new_category();
                        merge(&mut category.name, name);
                        categories.push(category);
                    }
                    CategoryOp::Update { id, name } => {
                        if let Some(category) = categories.iter_mut().find(|c| &c.id == id) {
                            merge(&mut category.name, name);
                        }
                    }
                    CategoryOp::Remove { id } => {
                        categories.retain(|c| &c.id != id);
                    }
                    CategoryOp::AddSubcategory {
                        category_id,
                        name,
                        target_section_id,
                    } => {
                        let sub = {
                            let mut sub = factory.new_subcategory();
                            merge(&mut sub.name, name);
                            if let Some(target) = target_section_id {
                                sub.target_section_id = target.clone();
                            }
                            sub
                        };
                        if let Some(category) =
                            categories.iter_mut().find(|c| &c.id == category_id)
                        {
                            category.subcategories.push(sub);
                        }
                    }
                    CategoryOp::UpdateSubcategory {
                        category_id,
                        subcategory_id,
                        name,
                        target_section_id,
                    } => {
                        if let Some(sub) = categories
                            .iter_mut()
                            .find(|c| &c.id == category_id)
                            .and_then(|c| {
                                c.subcategories.iter_mut().find(|s| &s.id == subcategory_id)
                            })
                        {
                            merge(&mut sub.name, name);
                            if let Some(target) = target_section_id {
                                // "" unbinds the link
                                sub.target_section_id = target.clone();
                            }
                        }
                    }
                    CategoryOp::RemoveSubcategory {
                        category_id,
                        subcategory_id,
                    } => {
                        if let Some(category) =
                            categories.iter_mut().find(|c| &c.id == category_id)
                        {
                            category.subcategories.retain(|s| &s.id != subcategory_id);
                        }
                    }
                }
            }
        }

        // Variant mismatch: the patch has no legal fields for this section.
        _ => {}
    }

    updated
}
