//! zyn-core — catalog engine for zynshop.
//!
//! Pure data layer shared by the TUI and the headless binary. Nothing in here
//! touches a terminal.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Search (rank / filter_by_category) ──► ShopState ──► UI
//!                                   │                  │
//!                          paginate / visible     Cart, Wishlist, Notification
//! ```
//!
//! The services page has its own, simpler [`services::ServicesState`].

pub mod cart;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod notify;
pub mod prefs;
pub mod search;
pub mod services;
pub mod state;
pub mod types;

pub use catalog::Catalog;
pub use error::{Result, ShopError, ValidationError};
pub use state::ShopState;
pub use types::{CartEntry, Item, NotificationKind, Service, ThemeMode};
