//! Folio application layer
//!
//! Hosts a portfolio page session: configuration, the theme controller
//! backed by a preference file, the project grid and the theme widget state.
//!
//! ```rust
//! use folio_app::prelude::*;
//!
//! let catalog = Catalog::default();
//! let controller = ThemeController::new(MemoryStore::new(), DocumentStyle::new());
//! let mut session = PortfolioSession::start(controller, &catalog, DEFAULT_PLACEHOLDER_URL);
//!
//! session.dispatch(UiEvent::SelectTheme { theme: "green".into() });
//! assert_eq!(session.controls().active_swatch().map(|s| s.theme), Some(ThemeName::Green));
//! ```

pub mod config;
pub mod controls;
pub mod logging;
pub mod session;

pub use config::FolioConfig;
pub use controls::{ModeIcon, ThemeControls};
pub use session::{PortfolioSession, SessionSnapshot, UiEvent};

use anyhow::{Context, Result};
use folio_catalog::Catalog;
use folio_theme::{DocumentStyle, FileStore, ThemeController};

/// Start a session from configuration: preferences from the configured
/// file, projects from the configured catalog.
///
/// A missing catalog file yields an empty grid; a malformed one is an error.
pub fn open_session(config: &FolioConfig) -> Result<PortfolioSession<FileStore, DocumentStyle>> {
    let catalog = if config.catalog.path.exists() {
        Catalog::load(&config.catalog.path)
            .with_context(|| format!("Failed to load {}", config.catalog.path.display()))?
    } else {
        tracing::warn!(
            "catalog {} not found, showing no projects",
            config.catalog.path.display()
        );
        Catalog::default()
    };

    let store = FileStore::open(&config.storage.path);
    let controller = ThemeController::with_keys(store, DocumentStyle::new(), config.storage.keys());
    Ok(PortfolioSession::start(
        controller,
        &catalog,
        config.catalog.placeholder_image.clone(),
    ))
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::FolioConfig;
    pub use crate::controls::{ModeIcon, ThemeControls};
    pub use crate::session::{PortfolioSession, SessionSnapshot, UiEvent};
    pub use folio_catalog::{Catalog, Project, DEFAULT_PLACEHOLDER_URL};
    pub use folio_theme::{
        ColorMode, DocumentStyle, FileStore, MemoryStore, PreferenceStore, ThemeController,
        ThemeName,
    };
}
