//! Domain-specific assertion macros for bdwild harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages naming the records
//! involved, which is easier to read than a diff of whole `Species` structs.

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a result list holds exactly the given species names, in order.
///
/// ```rust
/// assert_names!(results, ["Royal Bengal Tiger"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results = $results;
        let actual: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "result names differ");
    }};
}

/// Assert that every record in a result list satisfies a predicate.
///
/// ```rust
/// assert_all!(results, |s| s.category == Category::Mammal);
/// ```
#[macro_export]
macro_rules! assert_all {
    ($results:expr, |$s:ident| $pred:expr) => {{
        for $s in $results.iter() {
            if !$pred {
                panic!(
                    "assert_all! failed: record {} ({:?}) does not satisfy `{}`",
                    $s.id,
                    $s.name,
                    stringify!($pred)
                );
            }
        }
    }};
}

/// Assert that `sub` appears in `full` in the same relative order.
#[macro_export]
macro_rules! assert_subsequence {
    ($sub:expr, $full:expr) => {{
        let mut full = $full.iter().map(|s| s.id);
        for s in $sub.iter() {
            if !full.any(|id| id == s.id) {
                panic!(
                    "assert_subsequence! failed: record {} ({:?}) is missing or out of order",
                    s.id, s.name
                );
            }
        }
    }};
}
