//! Test builders: ergonomic constructors for `Species` records, catalogs and
//! on-disk datasets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use bdwild_core::{Catalog, Category, ConservationStatus, Species, SpeciesId};
use std::path::Path;

// ---------------------------------------------------------------------------
// SpeciesBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Species`] test fixtures.
///
/// # Example
///
/// ```rust
/// let cat = SpeciesBuilder::new(7, "Fishing Cat")
///     .local_name("মেছো বিড়াল")
///     .category(Category::Mammal)
///     .status(ConservationStatus::Vulnerable)
///     .description("dives for fish in the mangroves")
///     .build();
/// ```
pub struct SpeciesBuilder {
    species: Species,
}

impl SpeciesBuilder {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            species: Species {
                id: SpeciesId(id),
                local_name: format!("{name} (bn)"),
                scientific_name: format!("Testus {}", name.to_lowercase()),
                name,
                category: Category::Mammal,
                conservation_status: ConservationStatus::LeastConcern,
                description: "A test animal.".to_string(),
                habitat: String::new(),
                diet: String::new(),
                average_lifespan: String::new(),
                distribution: Vec::new(),
                image: String::new(),
                sound: None,
            },
        }
    }

    pub fn local_name(mut self, local_name: impl Into<String>) -> Self {
        self.species.local_name = local_name.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.species.category = category;
        self
    }

    pub fn status(mut self, status: ConservationStatus) -> Self {
        self.species.conservation_status = status;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.species.description = description.into();
        self
    }

    pub fn habitat(mut self, habitat: impl Into<String>) -> Self {
        self.species.habitat = habitat.into();
        self
    }

    pub fn build(self) -> Species {
        self.species
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a validated catalog without blog posts.
pub fn catalog_of(species: Vec<Species>) -> Catalog {
    Catalog::new(species, Vec::new()).expect("test catalog must validate")
}

/// Build `n` records cycling through every category and status, named
/// `Animal 0`, `Animal 1`, …
pub fn build_dataset(n: usize) -> Vec<Species> {
    (0..n)
        .map(|i| {
            SpeciesBuilder::new(i as u32 + 1, format!("Animal {i}"))
                .category(Category::ALL[i % Category::ALL.len()])
                .status(ConservationStatus::ALL[i % ConservationStatus::ALL.len()])
                .description(format!("Record number {i} of the generated dataset."))
                .build()
        })
        .collect()
}

/// Write `species.json` (and `posts.json` when given) into `dir`.
pub fn write_dataset(dir: &Path, species_json: &str, posts_json: Option<&str>) {
    std::fs::write(dir.join("species.json"), species_json).expect("write species.json");
    if let Some(posts) = posts_json {
        std::fs::write(dir.join("posts.json"), posts).expect("write posts.json");
    }
}
