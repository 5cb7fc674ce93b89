//! Error types for bdwild-core.
//!
//! Query functions never fail; the only fallible step is loading a dataset.

use crate::types::SpeciesId;
use std::path::PathBuf;

/// A dataset failed load-time validation. Fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON shape errors, including missing required fields and values
    /// outside the known category/status enumerations.
    #[error("malformed {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate species id {0}")]
    DuplicateSpeciesId(SpeciesId),

    #[error("duplicate blog post id {0}")]
    DuplicatePostId(u32),

    #[error("species {id}: required field `{field}` is empty")]
    EmptyField { id: SpeciesId, field: &'static str },
}

/// A string did not name a known enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}
