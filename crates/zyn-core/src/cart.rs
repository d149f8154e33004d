//! Session cart and wishlist.
//!
//! Both hold copies of catalog items and live only as long as the session.
//! Repeat adds increment a cart line's quantity; toggling a wishlist item
//! twice removes it again.

use crate::types::{CartEntry, Item};

// ---------------------------------------------------------------------------
// Cart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Add one unit of `item`. Returns the line's new quantity.
    pub fn add(&mut self, item: &Item) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity += 1;
            return entry.quantity;
        }
        self.entries.push(CartEntry { item: item.clone(), quantity: 1 });
        1
    }

    /// Drop the whole line for `id`. Returns the removed entry.
    pub fn remove(&mut self, id: u32) -> Option<CartEntry> {
        let idx = self.entries.iter().position(|e| e.item.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|e| e.item.id == id)
    }

    pub fn quantity_of(&self, id: u32) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.id == id)
            .map_or(0, |e| e.quantity)
    }

    /// Badge count: sum of quantities.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Wishlist
// ---------------------------------------------------------------------------

/// Outcome of [`Wishlist::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    entries: Vec<Item>,
}

impl Wishlist {
    pub fn toggle(&mut self, item: &Item) -> WishlistChange {
        match self.entries.iter().position(|i| i.id == item.id) {
            Some(idx) => {
                self.entries.remove(idx);
                WishlistChange::Removed
            }
            None => {
                self.entries.push(item.clone());
                WishlistChange::Added
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|i| i.id == id)
    }

    /// Badge count: number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Item] {
        &self.entries
    }
}
