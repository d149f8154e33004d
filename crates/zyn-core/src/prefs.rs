//! Preferences — the single key-value setting that survives restarts.
//!
//! [`PreferenceStore`] is the seam: the TUI talks to a [`FilePreferenceStore`]
//! backed by `$XDG_DATA_HOME/zynshop/preferences.json`, tests use
//! [`MemoryPreferenceStore`].

use crate::types::ThemeMode;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// String key-value storage that outlives the session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> crate::Result<()>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// A flat JSON object on disk. Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the user's data directory.
    pub fn open_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> crate::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let src = std::fs::read_to_string(&self.path)?;
        if src.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&src)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    /// A corrupt file is replaced rather than blocking every later save.
    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let mut all = self.read_all().unwrap_or_else(|err| {
            tracing::warn!(
                error = %err,
                path = %self.path.display(),
                "unreadable preference file, starting over"
            );
            BTreeMap::new()
        });
        all.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        tracing::debug!(key, value, path = %self.path.display(), "preference saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Theme helpers
// ---------------------------------------------------------------------------

/// Stored theme, or light when nothing is stored or the store is unreadable.
pub fn load_theme(store: &dyn PreferenceStore, key: &str) -> ThemeMode {
    match store.get(key) {
        Ok(Some(value)) => ThemeMode::from_stored(&value),
        Ok(None) => ThemeMode::Light,
        Err(err) => {
            tracing::warn!(error = %err, key, "could not read theme preference, using light");
            ThemeMode::Light
        }
    }
}

pub fn save_theme(store: &mut dyn PreferenceStore, key: &str, mode: ThemeMode) -> crate::Result<()> {
    store.set(key, mode.as_str())
}

/// Flip the stored theme and return the new one.
pub fn toggle_theme(store: &mut dyn PreferenceStore, key: &str) -> crate::Result<ThemeMode> {
    let next = load_theme(store, key).toggled();
    save_theme(store, key, next)?;
    Ok(next)
}

fn default_path() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".local")
                .join("share")
        })
        .join("zynshop")
        .join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "zynshop-theme";

    #[test]
    fn empty_store_defaults_to_light() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(load_theme(&store, KEY), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_in_memory() {
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(toggle_theme(&mut store, KEY).unwrap(), ThemeMode::Dark);
        assert_eq!(load_theme(&store, KEY), ThemeMode::Dark);
        assert_eq!(toggle_theme(&mut store, KEY).unwrap(), ThemeMode::Light);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut store = FilePreferenceStore::new(&path);
        save_theme(&mut store, KEY, ThemeMode::Dark).unwrap();
        store.set("other", "kept").unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(load_theme(&reopened, KEY), ThemeMode::Dark);
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn corrupt_file_falls_back_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ nope").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert!(store.get(KEY).is_err());
        assert_eq!(load_theme(&store, KEY), ThemeMode::Light);
    }

    #[test]
    fn save_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{corrupt").unwrap();

        let mut store = FilePreferenceStore::new(&path);
        save_theme(&mut store, KEY, ThemeMode::Dark).unwrap();

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(load_theme(&reopened, KEY), ThemeMode::Dark);
        assert_eq!(toggle_theme(&mut store, KEY).unwrap(), ThemeMode::Light);
    }
}
