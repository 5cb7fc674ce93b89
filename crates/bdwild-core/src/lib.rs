//! bdwild-core: the species catalog and its query engine.
//!
//! This crate holds everything below the presentation layer: the data model,
//! dataset loading with load-time validation, the pure query functions every
//! page shares, and the user configuration.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Catalog ──► Query engine ──► TUI / CLI
//! ```
//!
//! The catalog is built once and only borrowed afterwards. Query functions
//! take `&[Species]` and return borrowed, order-preserving results.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ParseEnumError};
pub use query::{Facet, Query, SuggestOptions, Suggestion};
pub use types::{BlogPost, Category, ConservationStatus, Species, SpeciesId};
