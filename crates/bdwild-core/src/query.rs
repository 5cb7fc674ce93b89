//! Query engine: filtering, suggestions and facet listings over a catalog.
//!
//! Every page of the application goes through these functions; none of them
//! keep state or mutate the records they are given. All results borrow from
//! the input slice and preserve its order.
//!
//! # Text matching
//!
//! A record matches a term when any of the following holds:
//!
//! - the lowercased term is a substring of the lowercased `name`
//! - the raw term is a substring of `local_name` (exact script, no folding)
//! - the lowercased term is a substring of the lowercased `description`
//!
//! The same rule is used by [`filter_catalog`] and [`suggest`].

use crate::types::{Category, ConservationStatus, Species, SpeciesId};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Minimum number of characters typed before [`suggest`] produces anything.
/// Shared by every caller.
pub const MIN_SUGGESTION_CHARS: usize = 1;

/// Number of suggestions shown under a search box.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 4;

/// Number of related species shown on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Facet
// ---------------------------------------------------------------------------

/// A filter value: everything, one known enumeration member, or a string that
/// named no known member.
///
/// An [`Facet::Unrecognised`] value is kept rather than rejected; it simply
/// matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
    Unrecognised(String),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: FromStr> Facet<T> {
    /// Parse user input. Empty input and `all` (any case) mean [`Facet::All`].
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return Facet::All;
        }
        match input.parse() {
            Ok(value) => Facet::Only(value),
            Err(_) => Facet::Unrecognised(input.to_string()),
        }
    }
}

impl<T: PartialEq> Facet<T> {
    /// Whether a record carrying `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
            Facet::Unrecognised(_) => false,
        }
    }
}

impl<T> From<T> for Facet<T> {
    fn from(value: T) -> Self {
        Facet::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str("all"),
            Facet::Only(value) => fmt::Display::fmt(value, f),
            Facet::Unrecognised(raw) => f.write_str(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Parameters for [`filter_catalog`]. The default query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    /// Free text; empty means no text filter.
    pub term: String,
    pub category: Facet<Category>,
    pub status: Facet<ConservationStatus>,
    /// Pre-restriction to one category, used by category pages.
    pub scope: Option<Category>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Facet<Category>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<Facet<ConservationStatus>>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_scope(mut self, scope: Option<Category>) -> Self {
        self.scope = scope;
        self
    }
}

/// Options for [`suggest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    pub limit: usize,
    pub min_chars: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self { limit: DEFAULT_SUGGESTION_LIMIT, min_chars: MIN_SUGGESTION_CHARS }
    }
}

impl SuggestOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit, ..Self::default() }
    }
}

/// A lightweight preview of a matching record, enough to render a
/// suggestion row without a second lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion<'a> {
    pub id: SpeciesId,
    pub name: &'a str,
    pub local_name: &'a str,
    pub image: &'a str,
}

impl<'a> From<&'a Species> for Suggestion<'a> {
    fn from(s: &'a Species) -> Self {
        Self {
            id: s.id,
            name: &s.name,
            local_name: &s.local_name,
            image: &s.image,
        }
    }
}

// ---------------------------------------------------------------------------
// Term matching
// ---------------------------------------------------------------------------

/// A search term prepared once per call so the folded form is not recomputed
/// for every record.
struct TermMatcher<'t> {
    raw: &'t str,
    folded: String,
}

impl<'t> TermMatcher<'t> {
    fn new(raw: &'t str) -> Self {
        Self { raw, folded: raw.to_lowercase() }
    }

    fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn matches(&self, species: &Species) -> bool {
        species.name.to_lowercase().contains(&self.folded)
            || species.local_name.contains(self.raw)
            || species.description.to_lowercase().contains(&self.folded)
    }
}

fn in_scope(scope: Option<Category>, species: &Species) -> bool {
    scope.map_or(true, |c| species.category == c)
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Return the records matching `query`, in dataset order.
///
/// Steps, each a stable filter: scope restriction, text match (skipped for an
/// empty term), category facet, status facet. An empty result is not an
/// error.
pub fn filter_catalog<'a>(species: &'a [Species], query: &Query) -> Vec<&'a Species> {
    let matcher = TermMatcher::new(&query.term);
    species
        .iter()
        .filter(|s| in_scope(query.scope, s))
        .filter(|s| matcher.is_empty() || matcher.matches(s))
        .filter(|s| query.category.admits(&s.category))
        .filter(|s| query.status.admits(&s.conservation_status))
        .collect()
}

/// Up to `options.limit` suggestions for incremental input.
///
/// Returns nothing without scanning when `term` is shorter than
/// `options.min_chars` characters (Unicode scalar values, not bytes).
pub fn suggest<'a>(
    species: &'a [Species],
    scope: Option<Category>,
    term: &str,
    options: SuggestOptions,
) -> Vec<Suggestion<'a>> {
    if term.chars().count() < options.min_chars {
        return Vec::new();
    }
    let matcher = TermMatcher::new(term);
    species
        .iter()
        .filter(|s| in_scope(scope, s))
        .filter(|s| matcher.matches(s))
        .take(options.limit)
        .map(Suggestion::from)
        .collect()
}

/// `All` followed by each conservation status present (within `scope`, when
/// given) in first-seen order.
pub fn distinct_statuses(
    species: &[Species],
    scope: Option<Category>,
) -> Vec<Facet<ConservationStatus>> {
    distinct_facets(
        species
            .iter()
            .filter(|s| in_scope(scope, s))
            .map(|s| s.conservation_status),
    )
}

/// `All` followed by each category present, in first-seen order.
pub fn distinct_categories(species: &[Species]) -> Vec<Facet<Category>> {
    distinct_facets(species.iter().map(|s| s.category))
}

fn distinct_facets<T, I>(values: I) -> Vec<Facet<T>>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    std::iter::once(Facet::All)
        .chain(
            values
                .into_iter()
                .filter(|v| seen.insert(*v))
                .map(Facet::Only),
        )
        .collect()
}

/// Look up one record. `None` is an ordinary "not found".
pub fn find_by_id(species: &[Species], id: SpeciesId) -> Option<&Species> {
    species.iter().find(|s| s.id == id)
}

/// Other records in the same category as `id`, first `limit` in dataset
/// order. Empty when `id` is unknown.
pub fn related_species(species: &[Species], id: SpeciesId, limit: usize) -> Vec<&Species> {
    let Some(anchor) = find_by_id(species, id) else {
        return Vec::new();
    };
    species
        .iter()
        .filter(|s| s.category == anchor.category && s.id != anchor.id)
        .take(limit)
        .collect()
}

/// Records for `ids`, in the order given. Unknown ids are skipped.
pub fn featured<'a>(species: &'a [Species], ids: &[SpeciesId]) -> Vec<&'a Species> {
    ids.iter().filter_map(|id| find_by_id(species, *id)).collect()
}

/// Number of records per category, in [`Category::ALL`] order. Categories
/// with no records are included with a count of zero.
pub fn category_counts(species: &[Species]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, species.iter().filter(|s| s.category == c).count()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
