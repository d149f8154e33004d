//! Shop session state and its update operations.
//!
//! [`ShopState`] owns everything a shopping session mutates: the active
//! (ranked or filtered) list, the load-more page, the cart, the wishlist and
//! the current toast. Callers pass the clock in, so every update is a plain
//! function of its inputs and can be tested without a terminal.
//!
//! A new query and a new category tab each replace the active list outright;
//! the last one applied wins.

use crate::cart::{Cart, Wishlist, WishlistChange};
use crate::catalog::Catalog;
use crate::forms;
use crate::notify::Notification;
use crate::search::{self, ALL};
use crate::types::Item;
use chrono::{DateTime, Duration, Utc};

/// Which operation produced the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Everything,
    Search,
    Category,
}

/// Read model for the quick-view modal.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickView<'a> {
    pub item: &'a Item,
    pub in_cart: bool,
    pub in_wishlist: bool,
}

#[derive(Debug, Clone)]
pub struct ShopState {
    catalog: Catalog,
    /// Active category tab, lower-cased.
    pub filter: String,
    /// Last query applied (trimmed, as typed).
    pub query: String,
    /// 1-based load-more page.
    pub page: usize,
    pub page_size: usize,
    pub source: ListSource,
    active: Vec<Item>,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub notification: Option<Notification>,
}

impl ShopState {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let active = catalog.items().to_vec();
        Self {
            catalog,
            filter: ALL.to_string(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            source: ListSource::Everything,
            active,
            cart: Cart::default(),
            wishlist: Wishlist::default(),
            notification: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The full ranked or filtered list, before pagination.
    pub fn active(&self) -> &[Item] {
        &self.active
    }

    // -----------------------------------------------------------------------
    // Search / filter / pagination
    // -----------------------------------------------------------------------

    /// Rank the catalog against `raw` and show the first page.
    ///
    /// A search replaces any category tab, so the filter drops back to `all`.
    pub fn apply_query(&mut self, raw: &str) {
        let query = raw.trim();
        self.query = query.to_string();
        self.filter = ALL.to_string();
        self.page = 1;
        if query.is_empty() {
            self.active = self.catalog.items().to_vec();
            self.source = ListSource::Everything;
        } else {
            self.active = search::rank(query, self.catalog.items());
            self.source = ListSource::Search;
        }
        tracing::debug!(query, results = self.active.len(), "search applied");
    }

    /// Switch category tab and show the first page. Clears the search text.
    pub fn apply_category(&mut self, filter: &str) {
        let filter = filter.trim().to_lowercase();
        self.filter = if filter.is_empty() { ALL.to_string() } else { filter };
        self.query.clear();
        self.page = 1;
        self.active = search::filter_by_category(&self.filter, self.catalog.items());
        self.source = if self.filter == ALL {
            ListSource::Everything
        } else {
            ListSource::Category
        };
        tracing::debug!(filter = %self.filter, results = self.active.len(), "category applied");
    }

    /// Append the next page. Returns false when nothing was left to show.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        tracing::debug!(page = self.page, shown = self.visible().len(), "load more");
        true
    }

    /// Back to the unfiltered first page.
    pub fn reset(&mut self) {
        self.apply_category(ALL);
    }

    /// Every item shown so far (pages `1..=page`).
    pub fn visible(&self) -> &[Item] {
        search::visible(&self.active, self.page, self.page_size)
    }

    /// Only the items added by the most recent page.
    pub fn current_page(&self) -> &[Item] {
        search::paginate(&self.active, self.page, self.page_size)
    }

    pub fn has_more(&self) -> bool {
        search::has_more(self.active.len(), self.page, self.page_size)
    }

    pub fn remaining(&self) -> usize {
        search::remaining(self.active.len(), self.page, self.page_size)
    }

    pub fn load_more_label(&self) -> Option<String> {
        search::load_more_label(self.active.len(), self.page, self.page_size)
    }

    // -----------------------------------------------------------------------
    // Cart / wishlist
    // -----------------------------------------------------------------------

    /// Add one unit of `id`. Unknown ids do nothing and return false.
    pub fn add_to_cart(&mut self, id: u32, now: DateTime<Utc>) -> bool {
        let Some(item) = self.catalog.get(id) else {
            tracing::debug!(id, "add to cart: unknown id");
            return false;
        };
        let quantity = self.cart.add(item);
        self.notification = Some(Notification::success(
            format!("{} added to cart!", item.title),
            now,
        ));
        tracing::debug!(id, quantity, cart_count = self.cart.total_quantity(), "added to cart");
        true
    }

    pub fn remove_from_cart(&mut self, id: u32, now: DateTime<Utc>) -> bool {
        let Some(entry) = self.cart.remove(id) else {
            return false;
        };
        self.notification = Some(Notification::info(
            format!("{} removed from cart!", entry.item.title),
            now,
        ));
        tracing::debug!(id, "removed from cart");
        true
    }

    /// Add or remove `id` from the wishlist. Unknown ids do nothing.
    pub fn toggle_wishlist(&mut self, id: u32, now: DateTime<Utc>) -> Option<WishlistChange> {
        let Some(item) = self.catalog.get(id) else {
            tracing::debug!(id, "wishlist toggle: unknown id");
            return None;
        };
        let change = self.wishlist.toggle(item);
        self.notification = Some(match change {
            WishlistChange::Added => {
                Notification::success(format!("{} added to wishlist!", item.title), now)
            }
            WishlistChange::Removed => {
                Notification::info(format!("{} removed from wishlist!", item.title), now)
            }
        });
        tracing::debug!(id, ?change, wishlist_count = self.wishlist.len(), "wishlist toggled");
        Some(change)
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.total_quantity()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn cart_subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    pub fn quick_view(&self, id: u32) -> Option<QuickView<'_>> {
        let item = self.catalog.get(id)?;
        Some(QuickView {
            item,
            in_cart: self.cart.contains(id),
            in_wishlist: self.wishlist.contains(id),
        })
    }

    // -----------------------------------------------------------------------
    // Newsletter / notifications
    // -----------------------------------------------------------------------

    /// Blank input is ignored; anything else is thanked.
    pub fn subscribe_newsletter(&mut self, email: &str, now: DateTime<Utc>) -> bool {
        match forms::validate_newsletter(email) {
            Ok(email) => {
                tracing::debug!(email, "newsletter signup");
                self.notification = Some(Notification::success(forms::NEWSLETTER_THANKS, now));
                true
            }
            Err(_) => false,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the toast once it has been up for `ttl`. Returns true if removed.
    pub fn expire_notification(&mut self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now, ttl))
        {
            self.notification = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NotificationKind;
    use pretty_assertions::assert_eq;

    fn catalog(n: u32) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|id| Item {
                    id,
                    title: format!("Product {id}"),
                    brand: if id % 2 == 0 { "Even".into() } else { "Odd".into() },
                    category: if id % 3 == 0 { "tools".into() } else { "misc".into() },
                    description: String::new(),
                    price: f64::from(id),
                    rating: 4.0,
                    image: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn starts_on_first_page_of_everything() {
        let state = ShopState::new(catalog(20), 12);
        assert_eq!(state.visible().len(), 12);
        assert_eq!(state.remaining(), 8);
        assert_eq!(
            state.load_more_label().as_deref(),
            Some("Load More Products (8 remaining)")
        );
    }

    #[test]
    fn load_more_appends_until_exhausted() {
        let mut state = ShopState::new(catalog(20), 12);
        assert!(state.load_more());
        assert_eq!(state.visible().len(), 20);
        assert_eq!(state.current_page().len(), 8);
        assert!(!state.load_more());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn query_and_category_reset_page() {
        let mut state = ShopState::new(catalog(30), 12);
        state.load_more();
        state.apply_query("odd");
        assert_eq!(state.page, 1);
        assert_eq!(state.source, ListSource::Search);
        assert!(state.active().iter().all(|i| i.brand == "Odd"));

        state.load_more();
        state.apply_category("tools");
        assert_eq!(state.page, 1);
        assert_eq!(state.source, ListSource::Category);
        // category replaced the search result rather than narrowing it
        assert_eq!(state.active().len(), 10);
    }

    #[test]
    fn query_and_category_clear_each_other() {
        let mut state = ShopState::new(catalog(30), 12);
        state.apply_category("tools");
        state.apply_query("odd");
        assert_eq!(state.filter, ALL);
        assert_eq!(state.query, "odd");

        state.apply_category("tools");
        assert_eq!(state.query, "");
        assert_eq!(state.filter, "tools");
    }

    #[test]
    fn blank_query_restores_catalog_order() {
        let mut state = ShopState::new(catalog(5), 12);
        state.apply_query("product 3");
        state.apply_query("   ");
        let ids: Vec<u32> = state.active().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(state.source, ListSource::Everything);
    }

    #[test]
    fn add_to_cart_twice_is_one_line() {
        let mut state = ShopState::new(catalog(3), 12);
        let now = Utc::now();
        assert!(state.add_to_cart(2, now));
        assert!(state.add_to_cart(2, now));
        assert_eq!(state.cart.entries().len(), 1);
        assert_eq!(state.cart_count(), 2);
        let toast = state.notification.as_ref().unwrap();
        assert_eq!(toast.message, "Product 2 added to cart!");
        assert_eq!(toast.kind, NotificationKind::Success);
    }

    #[test]
    fn unknown_id_is_silent() {
        let mut state = ShopState::new(catalog(3), 12);
        let now = Utc::now();
        assert!(!state.add_to_cart(99, now));
        assert_eq!(state.toggle_wishlist(99, now), None);
        assert!(state.notification.is_none());
        assert!(state.quick_view(99).is_none());
    }

    #[test]
    fn wishlist_toggle_round_trip() {
        let mut state = ShopState::new(catalog(3), 12);
        let now = Utc::now();
        assert_eq!(state.toggle_wishlist(1, now), Some(WishlistChange::Added));
        assert_eq!(state.wishlist_count(), 1);
        assert_eq!(state.toggle_wishlist(1, now), Some(WishlistChange::Removed));
        assert_eq!(state.wishlist_count(), 0);
        assert_eq!(
            state.notification.as_ref().map(|n| n.message.as_str()),
            Some("Product 1 removed from wishlist!")
        );
    }

    #[test]
    fn quick_view_reports_membership() {
        let mut state = ShopState::new(catalog(3), 12);
        let now = Utc::now();
        state.add_to_cart(3, now);
        let view = state.quick_view(3).unwrap();
        assert!(view.in_cart);
        assert!(!view.in_wishlist);
    }

    #[test]
    fn notification_expires_after_ttl() {
        let mut state = ShopState::new(catalog(3), 12);
        let t0 = Utc::now();
        let ttl = Duration::milliseconds(3000);
        state.add_to_cart(1, t0);
        assert!(!state.expire_notification(t0 + Duration::milliseconds(100), ttl));
        assert!(state.expire_notification(t0 + Duration::milliseconds(3000), ttl));
        assert!(state.notification.is_none());
    }

    #[test]
    fn newsletter_blank_is_ignored() {
        let mut state = ShopState::new(catalog(1), 12);
        let now = Utc::now();
        assert!(!state.subscribe_newsletter("  ", now));
        assert!(state.notification.is_none());
        assert!(state.subscribe_newsletter("me@example.com", now));
        assert_eq!(
            state.notification.as_ref().map(|n| n.message.as_str()),
            Some(forms::NEWSLETTER_THANKS)
        );
    }
}
