//! Catalog — the immutable product and service lists loaded at start-up.
//!
//! The default catalog is embedded in the binary via [`include_str!`] so the
//! application works without any files on disk. A JSON array of items can be
//! supplied instead with [`Catalog::from_path`].

use crate::search::ALL;
use crate::types::{Item, Service};
use std::path::Path;

const DEFAULT_CATALOG_SRC: &str = include_str!("data/catalog.json");
const DEFAULT_SERVICES_SRC: &str = include_str!("data/services.json");

/// Read-only product list. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load the embedded default catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_json_str(DEFAULT_CATALOG_SRC).expect("embedded catalog must be valid JSON")
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(src: &str) -> crate::Result<Self> {
        let items: Vec<Item> = serde_json::from_str(src)?;
        Ok(Self::new(items))
    }

    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&src)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with `id`, if any.
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Filter tabs: `"all"` followed by each distinct category (lower-cased)
    /// in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL.to_string()];
        for item in &self.items {
            let cat = item.category.to_lowercase();
            if !cat.is_empty() && !out.contains(&cat) {
                out.push(cat);
            }
        }
        out
    }
}

/// Load the embedded service cards for the services page.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed.
pub fn default_services() -> Vec<Service> {
    serde_json::from_str(DEFAULT_SERVICES_SRC).expect("embedded services must be valid JSON")
}
