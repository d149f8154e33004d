//! Search layer — token ranking, category filtering and load-more pagination.
//!
//! Everything here is a pure transformation over a slice of [`Item`]s. The
//! session state in [`crate::state`] decides which of these runs and when.
//!
//! # Ranking
//!
//! The query is lower-cased and split on whitespace. Each token is matched
//! against four fields with tiered weights:
//!
//! | Field | Exact (whole or word) | Substring | Prefix bonus |
//! |-------|-----------------------|-----------|--------------|
//! | title | +6 | +4 | +1 |
//! | brand | +5 | +3 | +1 |
//! | category | +4 (whole only) | +2 | — |
//! | description | — | +1 | — |
//!
//! Items matching every token rank first by score; items matching only some
//! tokens follow, ordered by how many tokens they matched and then by score.

use crate::types::Item;
use std::collections::HashSet;

/// Category filter value that disables filtering.
pub const ALL: &str = "all";

const TITLE_EXACT: u32 = 6;
const TITLE_SUBSTRING: u32 = 4;
const BRAND_EXACT: u32 = 5;
const BRAND_SUBSTRING: u32 = 3;
const PREFIX_BONUS: u32 = 1;
const CATEGORY_EXACT: u32 = 4;
const CATEGORY_SUBSTRING: u32 = 2;
const DESCRIPTION_SUBSTRING: u32 = 1;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Whether an item matched all query tokens or only some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Exact,
    Partial,
}

/// Ranking details for one item against one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: u32,
    /// Number of query tokens that hit at least one field.
    pub matched_tokens: usize,
    pub tier: MatchTier,
}

/// Lower-cased copies of the searchable fields of an item.
struct Haystack {
    title: String,
    brand: String,
    category: String,
    description: String,
}

impl Haystack {
    fn of(item: &Item) -> Self {
        Self {
            title: item.title.to_lowercase(),
            brand: item.brand.to_lowercase(),
            category: item.category.to_lowercase(),
            description: item.description.to_lowercase(),
        }
    }
}

/// Lower-case and whitespace-split a raw query. Blank input yields no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_whole_or_word(field: &str, token: &str) -> bool {
    field == token || field.split_whitespace().any(|w| w == token)
}

/// Score a single token against a field with word-aware tiers (title, brand).
fn tiered(field: &str, token: &str, exact: u32, substring: u32) -> Option<u32> {
    if is_whole_or_word(field, token) {
        Some(exact)
    } else if field.contains(token) {
        let bonus = if field.starts_with(token) { PREFIX_BONUS } else { 0 };
        Some(substring + bonus)
    } else {
        None
    }
}

fn score_token(hay: &Haystack, token: &str) -> Option<u32> {
    let hits = [
        tiered(&hay.title, token, TITLE_EXACT, TITLE_SUBSTRING),
        tiered(&hay.brand, token, BRAND_EXACT, BRAND_SUBSTRING),
        if hay.category == token {
            Some(CATEGORY_EXACT)
        } else if hay.category.contains(token) {
            Some(CATEGORY_SUBSTRING)
        } else {
            None
        },
        hay.description
            .contains(token)
            .then_some(DESCRIPTION_SUBSTRING),
    ];

    let mut matched = false;
    let mut total = 0;
    for points in hits.into_iter().flatten() {
        matched = true;
        total += points;
    }
    matched.then_some(total)
}

/// Score an item against pre-tokenized query terms.
///
/// Returns `None` when no token matched any field, or when `tokens` is empty.
pub fn score(tokens: &[String], item: &Item) -> Option<Scored> {
    if tokens.is_empty() {
        return None;
    }
    let hay = Haystack::of(item);

    let mut total = 0;
    let mut matched_tokens = 0;
    for token in tokens.iter().filter(|t| !t.is_empty()) {
        if let Some(points) = score_token(&hay, token) {
            total += points;
            matched_tokens += 1;
        }
    }

    if matched_tokens == 0 {
        return None;
    }
    let tier = if matched_tokens == tokens.len() {
        MatchTier::Exact
    } else {
        MatchTier::Partial
    };
    Some(Scored { score: total, matched_tokens, tier })
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Rank `items` against a free-text query.
///
/// A blank query returns the full list in original order. Otherwise items
/// that matched no token are dropped, exact matches precede partial ones, and
/// the result contains each item id at most once (first occurrence wins).
pub fn rank(query: &str, items: &[Item]) -> Vec<Item> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return items.to_vec();
    }

    let mut exact: Vec<(&Item, Scored)> = Vec::new();
    let mut partial: Vec<(&Item, Scored)> = Vec::new();
    for item in items {
        match score(&tokens, item) {
            Some(s) if s.tier == MatchTier::Exact => exact.push((item, s)),
            Some(s) => partial.push((item, s)),
            None => {}
        }
    }

    // sort_by is stable: equal keys keep scan order
    exact.sort_by(|a, b| b.1.score.cmp(&a.1.score));
    partial.sort_by(|a, b| {
        b.1.matched_tokens
            .cmp(&a.1.matched_tokens)
            .then(b.1.score.cmp(&a.1.score))
    });

    let ranked = dedupe_by_id(exact.into_iter().chain(partial).map(|(item, _)| item));
    tracing::trace!(query, tokens = tokens.len(), results = ranked.len(), "ranked");
    ranked
}

/// Drop repeated ids; the first occurrence keeps both its position and its data.
fn dedupe_by_id<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Filter `items` by a category tab or shortcut.
///
/// `"all"` (any case) returns the list unchanged. Otherwise items whose
/// category equals the filter come first, then items where the filter appears
/// inside the category, title, brand or description. Both groups keep scan
/// order and no item is placed twice.
pub fn filter_by_category(filter: &str, items: &[Item]) -> Vec<Item> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() || filter == ALL {
        return items.to_vec();
    }

    let mut exact = Vec::new();
    let mut fuzzy = Vec::new();
    for item in items {
        let hay = Haystack::of(item);
        if hay.category == filter {
            exact.push(item);
        } else if hay.category.contains(&filter)
            || hay.title.contains(&filter)
            || hay.brand.contains(&filter)
            || hay.description.contains(&filter)
        {
            fuzzy.push(item);
        }
    }

    exact.into_iter().chain(fuzzy).cloned().collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// The items of a single 1-based page: `[(page-1)*size, page*size)`.
///
/// Page 0, a zero page size, and pages past the end all yield an empty slice.
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Everything shown after `page` load-more steps: pages `1..=page` joined.
pub fn visible<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    let end = page.saturating_mul(page_size).min(list.len());
    &list[..end]
}

/// How many items remain hidden behind the load-more affordance.
pub fn remaining(total: usize, page: usize, page_size: usize) -> usize {
    total.saturating_sub(page.saturating_mul(page_size))
}

pub fn has_more(total: usize, page: usize, page_size: usize) -> bool {
    remaining(total, page, page_size) > 0
}

/// Text of the load-more control, or `None` when everything is shown.
pub fn load_more_label(total: usize, page: usize, page_size: usize) -> Option<String> {
    let left = remaining(total, page, page_size);
    (left > 0).then(|| format!("Load More Products ({left} remaining)"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: u32, title: &str, brand: &str, category: &str, description: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price: 10.0,
            rating: 4.0,
            image: String::new(),
        }
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Nike   SHOE "), vec!["nike", "shoe"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn title_word_beats_title_substring() {
        let tokens = tokenize("shoe");
        let word = score(&tokens, &item(1, "Red Shoe", "", "", "")).unwrap();
        let sub = score(&tokens, &item(2, "Shoelace", "", "", "")).unwrap();
        assert_eq!(word.score, 6);
        // substring + prefix bonus
        assert_eq!(sub.score, 5);
    }

    #[test]
    fn brand_tiers() {
        let tokens = tokenize("nik");
        let s = score(&tokens, &item(1, "", "Nike", "", "")).unwrap();
        assert_eq!(s.score, 4);
        let tokens = tokenize("ike");
        let s = score(&tokens, &item(1, "", "Nike", "", "")).unwrap();
        assert_eq!(s.score, 3);
        let tokens = tokenize("nike");
        let s = score(&tokens, &item(1, "", "Nike", "", "")).unwrap();
        assert_eq!(s.score, 5);
    }

    #[test]
    fn category_and_description_weights() {
        let tokens = tokenize("shoes");
        assert_eq!(score(&tokens, &item(1, "", "", "shoes", "")).unwrap().score, 4);
        let tokens = tokenize("hoe");
        assert_eq!(score(&tokens, &item(1, "", "", "shoes", "")).unwrap().score, 2);
        let tokens = tokenize("run");
        assert_eq!(score(&tokens, &item(1, "", "", "", "running")).unwrap().score, 1);
    }

    #[test]
    fn fields_accumulate_per_token() {
        // "shoe": title word (+6) + category substring (+2)
        let tokens = tokenize("shoe");
        let s = score(&tokens, &item(1, "Red Shoe", "Nike", "shoes", "")).unwrap();
        assert_eq!(s.score, 8);
        assert_eq!(s.tier, MatchTier::Exact);
    }

    #[test]
    fn no_match_scores_none() {
        let tokens = tokenize("zzz");
        assert_eq!(score(&tokens, &item(1, "Red Shoe", "Nike", "shoes", "")), None);
    }

    #[test]
    fn rank_worked_example() {
        let items = vec![
            item(1, "Red Shoe", "Nike", "shoes", "running"),
            item(2, "Blue Shoe", "Adidas", "shoes", ""),
        ];
        let tokens = tokenize("nike shoe");
        let first = score(&tokens, &items[0]).unwrap();
        let second = score(&tokens, &items[1]).unwrap();
        assert_eq!(first.tier, MatchTier::Exact);
        assert!(first.score >= 9);
        assert_eq!(second.tier, MatchTier::Partial);
        assert_eq!(second.matched_tokens, 1);

        assert_eq!(ids(&rank("nike shoe", &items)), vec![1, 2]);
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let items = vec![item(3, "C", "", "", ""), item(1, "A", "", "", "")];
        assert_eq!(ids(&rank("   ", &items)), vec![3, 1]);
    }

    #[test]
    fn partial_orders_by_token_count_then_score() {
        let items = vec![
            // one token, high score
            item(1, "lamp", "lamp", "lamp", "lamp"),
            // two tokens, low score
            item(2, "", "", "", "lamp desk"),
            // none of the three tokens hit both, so nobody is exact
        ];
        let ranked = rank("lamp desk chair", &items);
        assert_eq!(ids(&ranked), vec![2, 1]);
    }

    #[test]
    fn exact_ties_keep_scan_order() {
        let items = vec![
            item(5, "Desk", "", "", ""),
            item(4, "Desk", "", "", ""),
            item(6, "Desk", "", "", ""),
        ];
        assert_eq!(ids(&rank("desk", &items)), vec![5, 4, 6]);
    }

    #[test]
    fn rank_dedupes_by_id() {
        let items = vec![
            item(1, "Desk", "", "", ""),
            item(1, "Desk Lamp", "", "", ""),
            item(2, "Desk", "", "", ""),
        ];
        let ranked = rank("desk", &items);
        assert_eq!(ids(&ranked), vec![1, 2]);
        assert_eq!(ranked[0].title, "Desk");
    }

    #[test]
    fn filter_all_is_identity() {
        let items = vec![item(2, "B", "", "x", ""), item(1, "A", "", "y", "")];
        assert_eq!(filter_by_category("all", &items), items);
        assert_eq!(filter_by_category("ALL", &items), items);
    }

    #[test]
    fn filter_exact_category_first_then_fuzzy() {
        let items = vec![
            item(1, "Shoe horn", "", "accessories", ""),
            item(2, "Runner", "", "shoes", ""),
            item(3, "Sock", "", "apparel", "goes with shoes"),
            item(4, "Boot", "", "Shoes", ""),
            item(5, "Hat", "", "apparel", ""),
        ];
        assert_eq!(ids(&filter_by_category("Shoes", &items)), vec![2, 4, 3]);
        assert_eq!(ids(&filter_by_category("shoe", &items)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn paginate_twenty_items() {
        let list: Vec<u32> = (0..20).collect();
        assert_eq!(paginate(&list, 1, 12).len(), 12);
        assert_eq!(paginate(&list, 2, 12), &list[12..20]);
        assert!(paginate(&list, 3, 12).is_empty());
        assert!(paginate(&list, 0, 12).is_empty());
    }

    #[test]
    fn visible_is_cumulative() {
        let list: Vec<u32> = (0..20).collect();
        assert_eq!(visible(&list, 1, 12).len(), 12);
        assert_eq!(visible(&list, 2, 12).len(), 20);
        assert_eq!(visible(&list, 5, 12).len(), 20);
    }

    #[test]
    fn load_more_label_counts_remaining() {
        assert_eq!(
            load_more_label(20, 1, 12).as_deref(),
            Some("Load More Products (8 remaining)")
        );
        assert_eq!(load_more_label(20, 2, 12), None);
        assert!(!has_more(12, 1, 12));
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let items = [
            item(5, "First", "", "", ""),
            item(6, "Other", "", "", ""),
            item(5, "Second", "", "", ""),
        ];
        let deduped = dedupe_by_id(&items);
        assert_eq!(ids(&deduped), vec![5, 6]);
        assert_eq!(deduped[0].title, "First");
    }
}
