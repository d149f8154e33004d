//! Core types for zyn-core.
//!
//! This module defines the data shared across every layer: the catalog
//! [`Item`], the cart's [`CartEntry`], the services page [`Service`] card and
//! the persisted [`ThemeMode`].

use serde::{Deserialize, Deserializer, Serialize};

/// A product in the catalog.
///
/// Items are immutable after load. String fields that are missing from the
/// source document, or explicitly `null`, deserialize to the empty string so
/// every matcher can treat them uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Average rating, 0–5.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f32,
    /// Image URL. Not rendered by the terminal front end but kept for export.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// `null` and missing both become `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A cart line: a copy of the item plus how many were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEntry {
    pub item: Item,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// A card on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

/// Colour scheme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Parse a stored preference. Anything that is not `"dark"` is light,
    /// which is also what an absent or corrupted value falls back to.
    pub fn from_stored(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label for the toggle control: it names the mode you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = crate::error::ShopError;

    /// Strict parse for user input (`:theme dark`). Stored values go through
    /// [`ThemeMode::from_stored`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(crate::error::ShopError::UnknownTheme(other.to_string())),
        }
    }
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}
