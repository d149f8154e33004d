//! Static catalogs used across harnesses.
//!
//! `mini_catalog` is small enough to reason about rankings by hand; the
//! expected orders in the harnesses are derived from the weights table in
//! `zyn_core::search`.

use super::builders::{item, ItemBuilder};
use zyn_core::Item;

/// Two shoes, a shirt from one of the shoe brands, and a lamp.
///
/// | id | title | brand | category | description |
/// |----|-------|-------|----------|-------------|
/// | 1 | Air Max Shoe | Nike | shoes | Cushioned running shoe |
/// | 2 | Running Shoe | Adidas | shoes | Light trainer |
/// | 3 | Nike Tee | Nike | fashion | Cotton shirt |
/// | 4 | Desk Lamp | Lumo | home | Warm light for reading |
pub fn mini_catalog() -> Vec<Item> {
    vec![
        item(1, "Air Max Shoe", "Nike", "shoes", "Cushioned running shoe"),
        item(2, "Running Shoe", "Adidas", "shoes", "Light trainer"),
        item(3, "Nike Tee", "Nike", "fashion", "Cotton shirt"),
        item(4, "Desk Lamp", "Lumo", "home", "Warm light for reading"),
    ]
}

/// Items whose categories only partly overlap the filter word, to exercise
/// the exact-then-fuzzy ordering of the category filter.
pub fn category_overlap_catalog() -> Vec<Item> {
    vec![
        ItemBuilder::new(1, "Yoga Mat").category("sports").build(),
        ItemBuilder::new(2, "Sports Bottle").category("home").build(),
        ItemBuilder::new(3, "Tennis Racket").category("Sports").build(),
        ItemBuilder::new(4, "Watch").category("sportswear").build(),
        ItemBuilder::new(5, "Kettle").category("home").build(),
        ItemBuilder::new(6, "Cap").brand("SportsCo").category("fashion").build(),
    ]
}

/// A catalog JSON document in the on-disk format.
pub const CATALOG_JSON: &str = r#"[
  {"id": 1, "title": "Air Max Shoe", "brand": "Nike", "category": "shoes",
   "description": "Cushioned running shoe", "price": 120.0, "rating": 4.5, "image": "a.jpg"},
  {"id": 2, "title": "Running Shoe", "brand": "Adidas", "category": "shoes",
   "description": "Light trainer", "price": 95.5, "rating": 4.0, "image": "b.jpg"},
  {"id": 3, "title": "Nike Tee", "brand": "Nike", "category": "fashion",
   "description": "Cotton shirt", "price": 25.0, "rating": 3.5, "image": "c.jpg"},
  {"id": 4, "title": "Desk Lamp", "brand": "Lumo", "category": "home",
   "price": 40.0, "rating": 5.0, "image": "d.jpg"}
]"#;
