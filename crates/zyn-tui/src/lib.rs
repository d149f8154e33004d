//! zynshop TUI — ratatui application shell over `zyn-core`.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{App, AppState};

use zyn_core::{catalog::default_services, config::Config, prefs::FilePreferenceStore, Catalog};

/// Start the interactive shop over `catalog`. The theme preference is read
/// from and saved to the default preference file.
pub fn run(catalog: Catalog, config: Config) -> anyhow::Result<()> {
    let prefs = FilePreferenceStore::open_default();
    tracing::debug!(path = %prefs.path().display(), "preference store");
    let state = AppState::new(catalog, default_services(), config, Box::new(prefs));
    App::new(state).run()
}
