//! Test builders — ergonomic constructors for `Item`, `Catalog` and
//! `ShopState`.
//!
//! These builders are for readability in test assertions, not production
//! use. They never fail; anything not set gets a bland default.

use zyn_core::{Catalog, Item, ShopState};

// ---------------------------------------------------------------------------
// ItemBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Item`] fixtures.
///
/// # Example
///
/// ```rust
/// let item = ItemBuilder::new(7, "Trail Runner")
///     .brand("Nike")
///     .category("shoes")
///     .price(89.5)
///     .build();
/// ```
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            item: Item {
                id,
                title: title.into(),
                brand: "Generic".to_string(),
                category: "misc".to_string(),
                description: String::new(),
                price: 10.0,
                rating: 4.0,
                image: format!("https://example.com/{id}.jpg"),
            },
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.item.brand = brand.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.item.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.item.price = price;
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.item.rating = rating;
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Shorthand for the four searchable fields.
pub fn item(id: u32, title: &str, brand: &str, category: &str, description: &str) -> Item {
    ItemBuilder::new(id, title)
        .brand(brand)
        .category(category)
        .description(description)
        .build()
}

/// `n` items with ids `1..=n`, cycling through three brands and categories.
pub fn numbered_items(n: u32) -> Vec<Item> {
    const BRANDS: [&str; 3] = ["Acme", "Globex", "Initech"];
    const CATEGORIES: [&str; 3] = ["tools", "garden", "kitchen"];
    (1..=n)
        .map(|id| {
            let slot = (id as usize) % 3;
            ItemBuilder::new(id, format!("Product {id}"))
                .brand(BRANDS[slot])
                .category(CATEGORIES[slot])
                .price(f64::from(id))
                .build()
        })
        .collect()
}

pub fn shop_of(items: Vec<Item>, page_size: usize) -> ShopState {
    ShopState::new(Catalog::new(items), page_size)
}

pub fn ids(items: &[Item]) -> Vec<u32> {
    items.iter().map(|i| i.id).collect()
}
