//! Section construction. Sections are never hand-built: every section (and
//! every nested collection item) gets its id here or in a patch `Add` op.

use bistro_common::IdGenerator;
use bistro_model::{
    ImagePosition, InvalidSectionType, MobileDisplayMode, Section, SectionKind, SidebarCategory,
    SidebarSubcategory, TestimonialItem,
};

/// Builds default-populated sections with freshly generated ids.
#[derive(Debug, Clone)]
pub struct SectionFactory {
    ids: IdGenerator,
}

impl SectionFactory {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::random(),
        }
    }

    /// Factory with a caller-supplied id scheme (seeded ids in tests).
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self { ids }
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Build a section of the given kind, fully populated with the stock
    /// placeholder content. Never returns a partially initialized value.
    pub fn create(&mut self, kind: SectionKind) -> Section {
        let id = self.ids.new_id();

        match kind {
            SectionKind::Hero => Section::Hero {
                id,
                heading: "Welcome to Our Restaurant".to_string(),
                subheading: Some("Delicious food made with fresh ingredients".to_string()),
                image_url: Some("/placeholder.svg?height=400&width=800".to_string()),
            },

            SectionKind::TextImage => Section::TextImage {
                id,
                title: "Our Story".to_string(),
                text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed euismod, \
                       nunc sit amet ultricies lacinia, nisl nisl aliquam nisl, eget aliquam \
                       nisl nisl sit amet nisl."
                    .to_string(),
                image_url: Some("/placeholder.svg?height=400&width=600".to_string()),
                image_position: ImagePosition::Right,
            },

            SectionKind::Testimonials => Section::Testimonials {
                id,
                title: "What Our Customers Say".to_string(),
                testimonials: vec![
                    TestimonialItem {
                        id: self.ids.new_id(),
                        name: "John Doe".to_string(),
                        role: Some("Regular Customer".to_string()),
                        content: "The food here is amazing! I come here every week.".to_string(),
                        rating: 5,
                    },
                    TestimonialItem {
                        id: self.ids.new_id(),
                        name: "Jane Smith".to_string(),
                        role: Some("Food Critic".to_string()),
                        content: "Exceptional flavors and great atmosphere.".to_string(),
                        rating: 4,
                    },
                ],
            },

            SectionKind::ProductGrid => Section::ProductGrid {
                id,
                title: "Our Menu".to_string(),
                subtitle: Some("Explore our delicious offerings".to_string()),
                product_ids: Vec::new(),
                show_prices: true,
            },

            SectionKind::ContactCta => Section::ContactCta {
                id,
                heading: "Make a Reservation".to_string(),
                subheading: Some("Book your table online or call us".to_string()),
                button_text: "Book Now".to_string(),
                button_link: Some("/reservation".to_string()),
            },

            SectionKind::AccordionSidebar => Section::AccordionSidebar {
                id,
                title: "Menu Categories".to_string(),
                categories: vec![
                    self.example_category("Pizza", &["Classic Pizzas", "Specialty Pizzas"]),
                    self.example_category("Pasta", &["Spaghetti", "Fettuccine"]),
                ],
                sticky_on_desktop: true,
                mobile_display_mode: MobileDisplayMode::Collapsible,
            },
        }
    }

    /// Build from a raw tag. Fails with [`InvalidSectionType`] for tags
    /// outside the closed set.
    pub fn create_from_tag(&mut self, tag: &str) -> Result<Section, InvalidSectionType> {
        let kind: SectionKind = tag.parse()?;
        Ok(self.create(kind))
    }

    pub fn new_testimonial(&mut self) -> TestimonialItem {
        TestimonialItem {
            id: self.ids.new_id(),
            name: "New Customer".to_string(),
            role: Some("Customer".to_string()),
            content: "This is a great place!".to_string(),
            rating: 5,
        }
    }

    pub fn new_category(&mut self) -> SidebarCategory {
        SidebarCategory {
            id: self.ids.new_id(),
            name: "New Category".to_string(),
            subcategories: Vec::new(),
        }
    }

    pub fn new_subcategory(&mut self) -> SidebarSubcategory {
        SidebarSubcategory {
            id: self.ids.new_id(),
            name: "New Subcategory".to_string(),
            // unbound until the author picks a target
            target_section_id: String::new(),
        }
    }

    fn example_category(&mut self, name: &str, subcategories: &[&str]) -> SidebarCategory {
        SidebarCategory {
            id: self.ids.new_id(),
            name: name.to_string(),
            subcategories: subcategories
                .iter()
                .map(|sub| SidebarSubcategory {
                    id: self.ids.new_id(),
                    name: sub.to_string(),
                    target_section_id: String::new(),
                })
                .collect(),
        }
    }
}

impl Default for SectionFactory {
    fn default() -> Self {
        Self::new()
    }
}
