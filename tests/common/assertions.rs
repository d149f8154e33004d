//! Domain-specific assertion macros for zynshop harnesses.
//!
//! These add context to failures so it is clear which ordering or
//! uniqueness rule broke, not just that two vectors differ.

// ---------------------------------------------------------------------------
// Ordering assertions
// ---------------------------------------------------------------------------

/// Assert the exact id order of a result list.
///
/// ```rust
/// assert_ids!(rank("nike shoe", &items), [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($items:expr, [$($id:expr),* $(,)?]) => {{
        let items: &[zyn_core::Item] = &$items;
        let actual: Vec<u32> = items.iter().map(|i| i.id).collect();
        let expected: Vec<u32> = vec![$($id),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_ids! failed: titles were {:?}",
            items.iter().map(|i| i.title.as_str()).collect::<Vec<_>>()
        );
    }};
}

/// Assert that no id appears twice in a result list.
#[macro_export]
macro_rules! assert_unique_ids {
    ($items:expr) => {{
        let items: &[zyn_core::Item] = &$items;
        let mut seen = std::collections::HashSet::new();
        for item in items {
            if !seen.insert(item.id) {
                panic!(
                    "assert_unique_ids! failed: id {} ({:?}) appears more than once",
                    item.id, item.title
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Membership assertions
// ---------------------------------------------------------------------------

/// Assert that every item in a result list satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |i| i.category == "shoes");
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($items:expr, $pred:expr) => {{
        let items: &[zyn_core::Item] = &$items;
        let pred = $pred;
        let failing: Vec<u32> = items.iter().filter(|i| !pred(i)).map(|i| i.id).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: ids {:?} of {} items did not satisfy predicate",
                failing,
                items.len()
            );
        }
    }};
}

/// Assert that `subset` ids all appear in `superset`.
#[macro_export]
macro_rules! assert_subset {
    ($subset:expr, $superset:expr) => {{
        let subset: &[zyn_core::Item] = &$subset;
        let superset: &[zyn_core::Item] = &$superset;
        for item in subset {
            if !superset.iter().any(|s| s.id == item.id) {
                panic!(
                    "assert_subset! failed: id {} ({:?}) is not in the source list",
                    item.id, item.title
                );
            }
        }
    }};
}
