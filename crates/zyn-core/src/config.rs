//! Configuration types for zynshop.
//!
//! [`Config::load`] reads `~/.config/zynshop/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[catalog]
page_size          = 12
search_debounce_ms = 300

[ui]
notification_ttl_ms     = 3000
category_pane_width_pct = 22
show_categories         = true

[preferences]
theme_key = "zynshop-theme"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/zynshop/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Items appended per "load more".
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Quiet period after the last keystroke before the query runs.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_page_size() -> usize { 12 }
fn default_search_debounce_ms() -> u64 { 300 }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
    #[serde(default = "default_category_pane_width_pct")]
    pub category_pane_width_pct: u16,
    #[serde(default = "default_show_categories")]
    pub show_categories: bool,
}

fn default_notification_ttl_ms() -> u64 { 3000 }
fn default_category_pane_width_pct() -> u16 { 22 }
fn default_show_categories() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: default_notification_ttl_ms(),
            category_pane_width_pct: default_category_pane_width_pct(),
            show_categories: default_show_categories(),
        }
    }
}

/// `[preferences]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    /// Key under which the theme is persisted in the preference store.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_theme_key() -> String { "zynshop-theme".to_string() }

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self { theme_key: default_theme_key() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/zynshop/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] but for an explicit path.
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.catalog.search_debounce_ms)
    }

    pub fn notification_ttl(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.ui.notification_ttl_ms as i64)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("zynshop")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
