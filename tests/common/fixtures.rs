//! Static datasets used across harnesses.

use super::builders::SpeciesBuilder;
use bdwild_core::{Category, ConservationStatus, Species};

/// The two-record Tiger/Dolphin dataset.
pub fn tiger_and_dolphin() -> Vec<Species> {
    vec![
        SpeciesBuilder::new(1, "Royal Bengal Tiger")
            .local_name("বাঘ")
            .category(Category::Mammal)
            .status(ConservationStatus::Endangered)
            .description("apex predator of the Sundarbans")
            .build(),
        SpeciesBuilder::new(2, "Ganges River Dolphin")
            .local_name("শুশুক")
            .category(Category::Mammal)
            .status(ConservationStatus::Endangered)
            .description("freshwater cetacean")
            .build(),
    ]
}

/// A mixed dataset spanning several categories and statuses, in a fixed
/// order that tests rely on.
pub fn mixed_dataset() -> Vec<Species> {
    vec![
        SpeciesBuilder::new(1, "Royal Bengal Tiger")
            .local_name("বাঘ")
            .category(Category::Mammal)
            .status(ConservationStatus::Endangered)
            .description("apex predator of the Sundarbans")
            .build(),
        SpeciesBuilder::new(2, "Oriental Magpie-Robin")
            .local_name("দোয়েল")
            .category(Category::Bird)
            .status(ConservationStatus::LeastConcern)
            .description("the national bird, a common garden songster")
            .build(),
        SpeciesBuilder::new(3, "Fishing Cat")
            .local_name("মেছো বিড়াল")
            .category(Category::Mammal)
            .status(ConservationStatus::Vulnerable)
            .description("a wetland cat that dives for fish")
            .build(),
        SpeciesBuilder::new(4, "Gharial")
            .local_name("ঘড়িয়াল")
            .category(Category::Reptile)
            .status(ConservationStatus::CriticallyEndangered)
            .description("a slender-snouted crocodilian that eats fish")
            .build(),
        SpeciesBuilder::new(5, "Hilsa")
            .local_name("ইলিশ")
            .category(Category::Fish)
            .status(ConservationStatus::LeastConcern)
            .description("the national fish, migrates up rivers to spawn")
            .build(),
        SpeciesBuilder::new(6, "Asian Elephant")
            .local_name("হাতি")
            .category(Category::Mammal)
            .status(ConservationStatus::Endangered)
            .description("the largest land mammal of the hill forests")
            .build(),
    ]
}

pub const SPECIES_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Royal Bengal Tiger",
    "localName": "বাঘ",
    "scientificName": "Panthera tigris tigris",
    "category": "Mammal",
    "conservationStatus": "Endangered",
    "description": "apex predator of the Sundarbans",
    "distribution": ["Khulna", "Satkhira"]
  },
  {
    "id": 2,
    "name": "Ganges River Dolphin",
    "banglaName": "শুশুক",
    "scientificName": "Platanista gangetica",
    "category": "Mammal",
    "conservationStatus": "Endangered",
    "description": "freshwater cetacean"
  }
]"#;

pub const POSTS_JSON: &str = r#"[
  { "id": 1, "title": "Mangrove Notes", "date": "2025-10-20", "excerpt": "Tides and tigers." }
]"#;
