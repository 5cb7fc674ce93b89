#![allow(unused)]
//! Query engine integration harness.
//!
//! # What this covers
//!
//! - **Identity**: the empty query returns the dataset unchanged, in order.
//! - **Text match**: a record matches when the term is a case-insensitive
//!   substring of its name or description, or an exact substring of its local
//!   name. Checked for soundness and completeness with proptest.
//! - **Stability**: results are a subsequence of the dataset; re-running the
//!   same query gives the same list.
//! - **Facets**: category, status and scope combine with AND; unrecognised
//!   facet values match nothing.
//! - **Suggestions**: bounded by the limit, empty below the character
//!   threshold, scoped like the result list.
//! - **Facet listings**: `distinct_statuses` starts with `All` and never
//!   repeats a value.
//! - **Tiger/Dolphin scenarios** from the reference dataset.
//!
//! # Running
//!
//! ```sh
//! cargo test --test query_harness
//! ```

mod common;
use common::*;

use bdwild_core::query::{
    self, category_counts, distinct_categories, distinct_statuses, filter_catalog, find_by_id,
    related_species, suggest, Query, SuggestOptions, MIN_SUGGESTION_CHARS,
};
use bdwild_core::{Category, ConservationStatus, Facet, Species, SpeciesId};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn matches_term(s: &Species, term: &str) -> bool {
    let folded = term.to_lowercase();
    s.name.to_lowercase().contains(&folded)
        || s.local_name.contains(term)
        || s.description.to_lowercase().contains(&folded)
}

fn ids(results: &[&Species]) -> Vec<u32> {
    results.iter().map(|s| s.id.0).collect()
}

// ---------------------------------------------------------------------------
// Tiger / Dolphin scenarios
// ---------------------------------------------------------------------------

#[test]
fn description_term_finds_only_the_tiger() {
    let d = tiger_and_dolphin();
    let results = filter_catalog(&d, &Query::new().with_term("sundarbans"));
    assert_names!(results, ["Royal Bengal Tiger"]);
}

#[test]
fn category_and_status_keep_both_in_order() {
    let d = tiger_and_dolphin();
    let q = Query::new()
        .with_category(Category::Mammal)
        .with_status(ConservationStatus::Endangered);
    assert_names!(filter_catalog(&d, &q), ["Royal Bengal Tiger", "Ganges River Dolphin"]);
}

#[test]
fn suggestion_for_dolphin_prefix() {
    let d = tiger_and_dolphin();
    let got = suggest(&d, None, "Gan", SuggestOptions::with_limit(4));
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].name, "Ganges River Dolphin");
    assert_eq!(got[0].local_name, "শুশুক");
}

/// Matching is a substring test, so a term can land inside a word:
/// "ga" is in "Ben*ga*l" as well as "*Ga*nges".
#[test]
fn suggestions_match_inside_words() {
    let d = tiger_and_dolphin();
    let got = suggest(&d, None, "Ga", SuggestOptions::with_limit(4));
    let names: Vec<&str> = got.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Royal Bengal Tiger", "Ganges River Dolphin"]);
}

#[test]
fn all_facets_and_empty_term_return_dataset() {
    let d = tiger_and_dolphin();
    let q = Query::new()
        .with_term("")
        .with_category(Facet::<Category>::parse("all"))
        .with_status(Facet::<ConservationStatus>::parse("all"));
    assert_eq!(ids(&filter_catalog(&d, &q)), vec![1, 2]);
}

#[test]
fn unmatched_term_is_empty_not_error() {
    let d = tiger_and_dolphin();
    assert!(filter_catalog(&d, &Query::new().with_term("penguin")).is_empty());
}

#[test]
fn local_name_matches_exact_script() {
    let d = tiger_and_dolphin();
    assert_names!(filter_catalog(&d, &Query::new().with_term("শুশুক")), ["Ganges River Dolphin"]);
}

// ---------------------------------------------------------------------------
// Facets and scope
// ---------------------------------------------------------------------------

#[rstest]
#[case("Dragon", "all")]
#[case("all", "Extinct in the Wild")]
#[case("Plants", "Mythical")]
fn unrecognised_facet_matches_nothing(#[case] category: &str, #[case] status: &str) {
    let d = mixed_dataset();
    let q = Query::new()
        .with_category(Facet::<Category>::parse(category))
        .with_status(Facet::<ConservationStatus>::parse(status));
    assert!(filter_catalog(&d, &q).is_empty());
}

#[rstest]
#[case(Category::Mammal, vec![1, 3, 6])]
#[case(Category::Bird, vec![2])]
#[case(Category::Amphibian, vec![])]
fn scope_restricts_before_matching(#[case] scope: Category, #[case] expected: Vec<u32>) {
    let d = mixed_dataset();
    let results = filter_catalog(&d, &Query::new().with_scope(Some(scope)));
    assert_eq!(ids(&results), expected);
}

#[test]
fn scope_and_category_can_disagree() {
    let d = mixed_dataset();
    let q = Query::new()
        .with_scope(Some(Category::Mammal))
        .with_category(Category::Bird);
    assert!(filter_catalog(&d, &q).is_empty());
}

#[test]
fn term_and_status_combine() {
    let d = mixed_dataset();
    let q = Query::new()
        .with_term("fish")
        .with_status(ConservationStatus::CriticallyEndangered);
    assert_names!(filter_catalog(&d, &q), ["Gharial"]);
}

#[test]
fn term_search_within_scope() {
    let d = mixed_dataset();
    let q = Query::new().with_term("national").with_scope(Some(Category::Fish));
    assert_names!(filter_catalog(&d, &q), ["Hilsa"]);
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggestions_are_scoped() {
    let d = mixed_dataset();
    let got = suggest(&d, Some(Category::Mammal), "fish", SuggestOptions::default());
    let names: Vec<&str> = got.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Fishing Cat"]);
}

#[test]
fn suggestion_threshold_counts_characters() {
    let d = tiger_and_dolphin();
    let opts = SuggestOptions { limit: 4, min_chars: 2 };
    // one Bangla character is several bytes but still below the threshold
    assert!(suggest(&d, None, "ব", opts).is_empty());
    assert_eq!(suggest(&d, None, "বা", opts).len(), 1);
    assert!(suggest(&d, None, "", SuggestOptions::default()).is_empty());
    assert_eq!(MIN_SUGGESTION_CHARS, 1);
}

#[test]
fn suggestions_preserve_dataset_order() {
    let d = mixed_dataset();
    let got = suggest(&d, None, "a", SuggestOptions::with_limit(3));
    let got_ids: Vec<u32> = got.iter().map(|s| s.id.0).collect();
    let all = filter_catalog(&d, &Query::new().with_term("a"));
    assert_eq!(got_ids, ids(&all[..3]));
}

// ---------------------------------------------------------------------------
// Lookups and facet listings
// ---------------------------------------------------------------------------

#[test]
fn distinct_statuses_first_seen_order() {
    let d = mixed_dataset();
    assert_eq!(
        distinct_statuses(&d, None),
        vec![
            Facet::All,
            Facet::Only(ConservationStatus::Endangered),
            Facet::Only(ConservationStatus::LeastConcern),
            Facet::Only(ConservationStatus::Vulnerable),
            Facet::Only(ConservationStatus::CriticallyEndangered),
        ]
    );
    assert_eq!(
        distinct_statuses(&d, Some(Category::Mammal)),
        vec![
            Facet::All,
            Facet::Only(ConservationStatus::Endangered),
            Facet::Only(ConservationStatus::Vulnerable),
        ]
    );
    assert_eq!(distinct_statuses(&d, Some(Category::Invertebrate)), vec![Facet::All]);
}

#[test]
fn distinct_categories_first_seen_order() {
    let d = mixed_dataset();
    assert_eq!(
        distinct_categories(&d),
        vec![
            Facet::All,
            Facet::Only(Category::Mammal),
            Facet::Only(Category::Bird),
            Facet::Only(Category::Reptile),
            Facet::Only(Category::Fish),
        ]
    );
}

#[test]
fn related_excludes_self_and_respects_limit() {
    let d = mixed_dataset();
    assert_eq!(ids(&related_species(&d, SpeciesId(1), 3)), vec![3, 6]);
    assert_eq!(ids(&related_species(&d, SpeciesId(1), 1)), vec![3]);
    assert!(related_species(&d, SpeciesId(2), 3).is_empty());
    assert!(related_species(&d, SpeciesId(99), 3).is_empty());
}

#[test]
fn lookup_and_featured() {
    let d = mixed_dataset();
    assert_eq!(find_by_id(&d, SpeciesId(4)).map(|s| s.name.as_str()), Some("Gharial"));
    assert!(find_by_id(&d, SpeciesId(40)).is_none());
    let featured = query::featured(&d, &[SpeciesId(5), SpeciesId(40), SpeciesId(1)]);
    assert_eq!(ids(&featured), vec![5, 1]);
}

#[test]
fn counts_cover_every_category() {
    let counts = category_counts(&mixed_dataset());
    assert_eq!(counts.len(), Category::ALL.len());
    assert_eq!(counts[0], (Category::Mammal, 3));
    assert!(counts.contains(&(Category::Amphibian, 0)));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_dataset() -> impl Strategy<Value = Vec<Species>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,12}", "[a-z ]{0,20}", 0..Category::ALL.len(), 0..ConservationStatus::ALL.len()),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, description, c, st))| {
                SpeciesBuilder::new(i as u32 + 1, name)
                    .description(description)
                    .category(Category::ALL[c])
                    .status(ConservationStatus::ALL[st])
                    .build()
            })
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = Query> {
    (
        "[a-zA-Z ]{0,3}",
        prop::option::of(0..Category::ALL.len()),
        prop::option::of(0..ConservationStatus::ALL.len()),
        prop::option::of(0..Category::ALL.len()),
    )
        .prop_map(|(term, c, st, scope)| {
            let mut q = Query::new()
                .with_term(term)
                .with_scope(scope.map(|i| Category::ALL[i]));
            if let Some(c) = c {
                q = q.with_category(Category::ALL[c]);
            }
            if let Some(st) = st {
                q = q.with_status(ConservationStatus::ALL[st]);
            }
            q
        })
}

proptest! {
    /// The default query is the identity.
    #[test]
    fn prop_empty_query_is_identity(d in arb_dataset()) {
        let results = filter_catalog(&d, &Query::new());
        prop_assert_eq!(ids(&results), d.iter().map(|s| s.id.0).collect::<Vec<_>>());
    }

    /// Every returned record matches the term, and every matching record is
    /// returned.
    #[test]
    fn prop_term_sound_and_complete(d in arb_dataset(), term in "[a-zA-Z ]{1,3}") {
        let results = filter_catalog(&d, &Query::new().with_term(term.as_str()));
        let expected: Vec<u32> = d
            .iter()
            .filter(|s| matches_term(s, &term))
            .map(|s| s.id.0)
            .collect();
        prop_assert_eq!(ids(&results), expected);
    }

    /// Results are an order-preserving subset and every facet holds.
    #[test]
    fn prop_results_respect_query(d in arb_dataset(), q in arb_query()) {
        let results = filter_catalog(&d, &q);
        assert_subsequence!(results, d);
        for s in &results {
            prop_assert!(q.category.admits(&s.category));
            prop_assert!(q.status.admits(&s.conservation_status));
            prop_assert!(q.scope.map_or(true, |c| c == s.category));
        }
    }

    /// Re-running a query gives the identical list.
    #[test]
    fn prop_filter_is_deterministic(d in arb_dataset(), q in arb_query()) {
        prop_assert_eq!(ids(&filter_catalog(&d, &q)), ids(&filter_catalog(&d, &q)));
    }

    /// Suggestions never exceed the limit and are empty below the threshold.
    #[test]
    fn prop_suggest_bounded(
        d in arb_dataset(),
        term in "[a-z]{0,4}",
        limit in 0usize..6,
        min_chars in 0usize..4,
    ) {
        let got = suggest(&d, None, &term, SuggestOptions { limit, min_chars });
        prop_assert!(got.len() <= limit);
        if term.chars().count() < min_chars {
            prop_assert!(got.is_empty());
        }
    }

    /// `All` first, no repeats.
    #[test]
    fn prop_distinct_statuses_unique(d in arb_dataset()) {
        let statuses = distinct_statuses(&d, None);
        prop_assert_eq!(&statuses[0], &Facet::All);
        for (i, a) in statuses.iter().enumerate() {
            prop_assert!(!statuses[i + 1..].contains(a));
        }
    }
}
