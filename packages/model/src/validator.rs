/// Invariant checks over a page, run before save or from the CLI.
use crate::page::Page;
use crate::section::Section;
use bistro_common::slug::is_url_safe;
use std::collections::HashSet;

/// Validation finding level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    /// Worth surfacing, page still renders
    Warning,
    /// Breaks an invariant the editor relies on
    Error,
}

/// One validation finding
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    pub section_id: Option<String>,
}

impl ValidationWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            section_id: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            section_id: None,
        }
    }

    pub fn with_section_id(mut self, section_id: impl Into<String>) -> Self {
        self.section_id = Some(section_id.into());
        self
    }
}

/// Page validator. Collects findings; never mutates the page.
///
/// Dangling `targetSectionId` references are warnings only: the render-time
/// policy is to degrade them to inert links, so they are legal to save.
#[derive(Default)]
pub struct Validator {
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self, page: &Page) -> Vec<ValidationWarning> {
        self.warnings.clear();

        self.check_slug(page);
        self.check_section_id_uniqueness(page);

        for section in &page.sections {
            self.validate_section(page, section);
        }

        self.warnings.clone()
    }

    fn check_slug(&mut self, page: &Page) {
        if page.slug.is_empty() {
            self.warnings
                .push(ValidationWarning::error("page slug is empty"));
        } else if !is_url_safe(&page.slug) {
            self.warnings.push(ValidationWarning::error(format!(
                "page slug '{}' is not URL-safe",
                page.slug
            )));
        }
    }

    fn check_section_id_uniqueness(&mut self, page: &Page) {
        let mut seen = HashSet::new();
        for section in &page.sections {
            if !seen.insert(section.id()) {
                self.warnings.push(
                    ValidationWarning::error(format!("duplicate section id '{}'", section.id()))
                        .with_section_id(section.id()),
                );
            }
        }
    }

    fn validate_section(&mut self, page: &Page, section: &Section) {
        match section {
            Section::Hero { id, heading, .. } => {
                if heading.is_empty() {
                    self.warnings.push(
                        ValidationWarning::warning("hero heading is empty").with_section_id(id),
                    );
                }
            }

            Section::Testimonials {
                id, testimonials, ..
            } => {
                let mut seen = HashSet::new();
                for item in testimonials {
                    if !seen.insert(item.id.as_str()) {
                        self.warnings.push(
                            ValidationWarning::error(format!(
                                "duplicate testimonial id '{}'",
                                item.id
                            ))
                            .with_section_id(id),
                        );
                    }
                    if !(1..=5).contains(&item.rating) {
                        self.warnings.push(
                            ValidationWarning::error(format!(
                                "testimonial '{}' rating {} outside 1-5",
                                item.id, item.rating
                            ))
                            .with_section_id(id),
                        );
                    }
                }
            }

            Section::AccordionSidebar { id, categories, .. } => {
                let mut category_ids = HashSet::new();
                let mut subcategory_ids = HashSet::new();

                for category in categories {
                    if !category_ids.insert(category.id.as_str()) {
                        self.warnings.push(
                            ValidationWarning::error(format!(
                                "duplicate category id '{}'",
                                category.id
                            ))
                            .with_section_id(id),
                        );
                    }

                    for sub in &category.subcategories {
                        if !subcategory_ids.insert(sub.id.as_str()) {
                            self.warnings.push(
                                ValidationWarning::error(format!(
                                    "duplicate subcategory id '{}'",
                                    sub.id
                                ))
                                .with_section_id(id),
                            );
                        }

                        // "" means unbound, which is a legal default
                        if !sub.target_section_id.is_empty()
                            && page.section(&sub.target_section_id).is_none()
                        {
                            self.warnings.push(
                                ValidationWarning::warning(format!(
                                    "subcategory '{}' targets missing section '{}'",
                                    sub.name, sub.target_section_id
                                ))
                                .with_section_id(id),
                            );
                        }
                    }
                }
            }

            Section::TextImage { .. } | Section::ProductGrid { .. } | Section::ContactCta { .. } => {}
        }
    }
}
