//! Catalog: the immutable, validated species dataset.
//!
//! A [`Catalog`] is built once at startup, either from the dataset embedded in
//! the binary ([`Catalog::embedded`]) or from a directory of JSON files
//! ([`Catalog::from_dir`]). Every constructor validates the records; after
//! that the catalog is only ever borrowed, and the query engine assumes each
//! record is well-formed.
//!
//! # On-disk layout
//!
//! ```text
//! <dir>/species.json   array of species records (required)
//! <dir>/posts.json     array of blog posts (optional)
//! ```

use crate::error::CatalogError;
use crate::types::{BlogPost, Species, SpeciesId};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_SPECIES: &str = include_str!("../data/species.json");
const EMBEDDED_POSTS: &str = include_str!("../data/posts.json");

pub const SPECIES_FILE: &str = "species.json";
pub const POSTS_FILE: &str = "posts.json";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: Vec<Species>,
    posts: Vec<BlogPost>,
}

impl Catalog {
    /// Build a catalog from already-parsed records, validating them.
    pub fn new(species: Vec<Species>, posts: Vec<BlogPost>) -> Result<Self, CatalogError> {
        validate_species(&species)?;
        validate_posts(&posts)?;
        tracing::info!(species = species.len(), posts = posts.len(), "catalog loaded");
        Ok(Self { species, posts })
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SPECIES, Some(EMBEDDED_POSTS))
    }

    /// Parse and validate JSON documents.
    pub fn from_json(species_json: &str, posts_json: Option<&str>) -> Result<Self, CatalogError> {
        let species: Vec<Species> = serde_json::from_str(species_json)
            .map_err(|source| CatalogError::Parse { what: "species dataset", source })?;
        let posts: Vec<BlogPost> = match posts_json {
            Some(src) => serde_json::from_str(src)
                .map_err(|source| CatalogError::Parse { what: "blog posts", source })?,
            None => Vec::new(),
        };
        Self::new(species, posts)
    }

    /// Load `species.json` (and `posts.json` when present) from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let species_path = dir.join(SPECIES_FILE);
        let species_json = std::fs::read_to_string(&species_path)
            .map_err(|source| CatalogError::Io { path: species_path, source })?;

        let posts_path = dir.join(POSTS_FILE);
        let posts_json = if posts_path.exists() {
            Some(
                std::fs::read_to_string(&posts_path)
                    .map_err(|source| CatalogError::Io { path: posts_path, source })?,
            )
        } else {
            tracing::debug!(dir = %dir.display(), "no posts.json, blog will be empty");
            None
        };

        Self::from_json(&species_json, posts_json.as_deref())
    }

    /// All species in dataset order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// All blog posts in dataset order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_species(species: &[Species]) -> Result<(), CatalogError> {
    let mut seen: HashSet<SpeciesId> = HashSet::with_capacity(species.len());
    for s in species {
        if !seen.insert(s.id) {
            return Err(CatalogError::DuplicateSpeciesId(s.id));
        }
        let required = [
            ("name", &s.name),
            ("localName", &s.local_name),
            ("scientificName", &s.scientific_name),
            ("description", &s.description),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CatalogError::EmptyField { id: s.id, field });
        }
    }
    Ok(())
}

fn validate_posts(posts: &[BlogPost]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(posts.len());
    match posts.iter().find(|p| !seen.insert(p.id)) {
        Some(dup) => Err(CatalogError::DuplicatePostId(dup.id)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
