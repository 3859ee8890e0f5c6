//! Folio Theme
//!
//! Palette switching and light/dark mode for the Folio portfolio page, with
//! the selection persisted across sessions.
//!
//! # Overview
//!
//! - **Palettes**: a fixed catalog of [`ThemeName`]s, each mapping to three
//!   accent colors (primary, primary hover, border)
//! - **Color mode**: [`ColorMode::Dark`] or [`ColorMode::Light`]
//! - **Preferences**: any [`PreferenceStore`]; [`MemoryStore`] for tests,
//!   [`FileStore`] for persistence on disk
//! - **Presentation**: any [`Presentation`] sink; [`DocumentStyle`] records
//!   the applied state and renders it as CSS
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{DocumentStyle, MemoryStore, ThemeController};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), DocumentStyle::new());
//! controller.initialize();
//!
//! controller.select_theme("purple");
//! assert_eq!(
//!     controller.presentation().variable("--color-primary-500"),
//!     Some("124 58 237")
//! );
//!
//! // Unknown ids are ignored
//! controller.select_theme("orange");
//! assert_eq!(controller.theme().id(), "purple");
//! ```

pub mod controller;
pub mod error;
pub mod mode;
pub mod palette;
pub mod presentation;
pub mod store;

pub use controller::ThemeController;
pub use error::{StoreError, ThemeError};
pub use mode::ColorMode;
pub use palette::{Palette, Rgb, StyleVariable, ThemeName};
pub use presentation::{DocumentStyle, Presentation, DARK_MODE_CLASS};
pub use store::{
    FileStore, MemoryStore, PreferenceKeys, PreferenceStore, DEFAULT_MODE_KEY, DEFAULT_THEME_KEY,
};
