use uuid::Uuid;

/// Id generator for pages, sections, and nested collection items.
///
/// Ids are opaque strings, assigned once at creation and never reassigned.
/// The only contract is collision-freedom within a page's lifetime.
#[derive(Debug, Clone)]
pub enum IdGenerator {
    /// Random v4 uuids. Production default.
    Random,

    /// Seeded sequential ids (`{seed}-{n}`) for deterministic fixtures.
    Seeded { seed: String, count: u32 },
}

impl IdGenerator {
    pub fn random() -> Self {
        IdGenerator::Random
    }

    pub fn seeded(seed: impl Into<String>) -> Self {
        IdGenerator::Seeded {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate the next id
    pub fn new_id(&mut self) -> String {
        match self {
            IdGenerator::Random => Uuid::new_v4().to_string(),
            IdGenerator::Seeded { seed, count } => {
                *count += 1;
                format!("{}-{}", seed, count)
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::Random
    }
}
