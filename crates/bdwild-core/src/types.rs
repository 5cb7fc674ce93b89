//! Core types for bdwild-core.
//!
//! This module defines the data model shared by the query engine and every
//! presentation surface: the immutable [`Species`] record, its [`Category`]
//! and [`ConservationStatus`] enumerations, and the [`BlogPost`] listing.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Stable identifier of a species record. Unique across a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u32);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpeciesId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SpeciesId)
    }
}

/// A species record as supplied by the dataset.
///
/// Only `name`, `local_name` and `description` take part in text search. The
/// remaining descriptive fields are carried for display and never filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: SpeciesId,
    /// Common English name. Primary search key.
    pub name: String,
    /// Bangla name. Matched exactly (no case folding).
    #[serde(alias = "banglaName")]
    pub local_name: String,
    pub scientific_name: String,
    pub category: Category,
    pub conservation_status: ConservationStatus,
    pub description: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub average_lifespan: String,
    /// Region names where the species occurs.
    #[serde(default)]
    pub distribution: Vec<String>,
    /// Image asset reference.
    #[serde(default)]
    pub image: String,
    /// Optional audio asset reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

/// Taxonomic group a species belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Mammal,
    Bird,
    Reptile,
    Amphibian,
    Fish,
    Invertebrate,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Mammal,
        Category::Bird,
        Category::Reptile,
        Category::Amphibian,
        Category::Fish,
        Category::Invertebrate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mammal => "Mammal",
            Category::Bird => "Bird",
            Category::Reptile => "Reptile",
            Category::Amphibian => "Amphibian",
            Category::Fish => "Fish",
            Category::Invertebrate => "Invertebrate",
        }
    }

    /// Plural label used for menus and page headings ("Mammals", "Fish").
    pub fn plural(self) -> &'static str {
        match self {
            Category::Mammal => "Mammals",
            Category::Bird => "Birds",
            Category::Reptile => "Reptiles",
            Category::Amphibian => "Amphibians",
            Category::Fish => "Fish",
            Category::Invertebrate => "Invertebrates",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    /// Accepts the singular or plural label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted) || c.plural().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseEnumError::new("category", wanted))
    }
}

/// IUCN-style conservation status, ordered from most to least threatened.
///
/// `DataDeficient` sorts last: it is an absence of assessment, not a level of
/// threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConservationStatus {
    #[serde(rename = "Critically Endangered")]
    CriticallyEndangered,
    #[serde(rename = "Endangered")]
    Endangered,
    #[serde(rename = "Vulnerable")]
    Vulnerable,
    #[serde(rename = "Near Threatened")]
    NearThreatened,
    #[serde(rename = "Least Concern")]
    LeastConcern,
    #[serde(rename = "Data Deficient")]
    DataDeficient,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 6] = [
        ConservationStatus::CriticallyEndangered,
        ConservationStatus::Endangered,
        ConservationStatus::Vulnerable,
        ConservationStatus::NearThreatened,
        ConservationStatus::LeastConcern,
        ConservationStatus::DataDeficient,
    ];

    /// Human-readable label, identical to the dataset spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::NearThreatened => "Near Threatened",
            ConservationStatus::LeastConcern => "Least Concern",
            ConservationStatus::DataDeficient => "Data Deficient",
        }
    }

    /// Two-letter IUCN code.
    pub fn code(self) -> &'static str {
        match self {
            ConservationStatus::CriticallyEndangered => "CR",
            ConservationStatus::Endangered => "EN",
            ConservationStatus::Vulnerable => "VU",
            ConservationStatus::NearThreatened => "NT",
            ConservationStatus::LeastConcern => "LC",
            ConservationStatus::DataDeficient => "DD",
        }
    }
}

impl fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConservationStatus {
    type Err = ParseEnumError;

    /// Accepts the label in any case with spaces, `-` or `_` as separators,
    /// or the two-letter IUCN code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let squashed: String = wanted
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        ConservationStatus::ALL
            .into_iter()
            .find(|st| {
                st.code().eq_ignore_ascii_case(wanted)
                    || st.as_str().replace(' ', "").eq_ignore_ascii_case(&squashed)
            })
            .ok_or_else(|| ParseEnumError::new("conservation status", wanted))
    }
}

/// A blog article teaser shown on the blog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    /// Publication date, `YYYY-MM-DD` in the dataset.
    pub date: chrono::NaiveDate,
    pub excerpt: String,
}

impl BlogPost {
    /// Date formatted for display, e.g. `Oct 20, 2025`.
    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mammal", Category::Mammal)]
    #[case("mammals", Category::Mammal)]
    #[case(" BIRD ", Category::Bird)]
    #[case("Fish", Category::Fish)]
    #[case("invertebrates", Category::Invertebrate)]
    fn category_parses(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[rstest]
    #[case("Critically Endangered", ConservationStatus::CriticallyEndangered)]
    #[case("critically-endangered", ConservationStatus::CriticallyEndangered)]
    #[case("near_threatened", ConservationStatus::NearThreatened)]
    #[case("LC", ConservationStatus::LeastConcern)]
    #[case("dd", ConservationStatus::DataDeficient)]
    fn status_parses(#[case] input: &str, #[case] expected: ConservationStatus) {
        assert_eq!(input.parse::<ConservationStatus>().unwrap(), expected);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = "Dinosaur".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Dinosaur"));
    }

    #[test]
    fn status_order_is_most_threatened_first() {
        assert!(ConservationStatus::CriticallyEndangered < ConservationStatus::Endangered);
        assert!(ConservationStatus::NearThreatened < ConservationStatus::LeastConcern);
    }

    #[test]
    fn species_accepts_legacy_bangla_name_key() {
        let json = r#"{
            "id": 7,
            "name": "Fishing Cat",
            "banglaName": "মেছো বিড়াল",
            "scientificName": "Prionailurus viverrinus",
            "category": "Mammal",
            "conservationStatus": "Vulnerable",
            "description": "Dives for fish."
        }"#;
        let species: Species = serde_json::from_str(json).unwrap();
        assert_eq!(species.id, SpeciesId(7));
        assert_eq!(species.local_name, "মেছো বিড়াল");
        assert!(species.distribution.is_empty());
        assert_eq!(species.sound, None);
    }

    #[test]
    fn blog_date_display() {
        let post = BlogPost {
            id: 1,
            title: "t".into(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            excerpt: "e".into(),
        };
        assert_eq!(post.display_date(), "Oct 05, 2025");
    }
}
