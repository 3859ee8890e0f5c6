//! Theme controller
//!
//! Owns the session's theme and color mode. Every mutation goes through the
//! same path: update the in-memory selection, re-apply presentation, write
//! the preference back to the store.

use tracing::{debug, warn};

use crate::mode::ColorMode;
use crate::palette::{Palette, ThemeName};
use crate::presentation::Presentation;
use crate::store::{PreferenceKeys, PreferenceStore};

/// Keeps presentation and persisted preferences in sync with the selected
/// theme and color mode.
///
/// ```
/// use folio_theme::{ColorMode, DocumentStyle, MemoryStore, ThemeController, ThemeName};
///
/// let mut controller = ThemeController::new(MemoryStore::new(), DocumentStyle::new());
/// controller.initialize();
/// assert_eq!(controller.theme(), ThemeName::Indigo);
/// assert_eq!(controller.mode(), ColorMode::Dark);
///
/// controller.select_theme("green");
/// controller.toggle_color_mode();
/// assert!(!controller.presentation().is_dark_mode());
/// ```
#[derive(Debug)]
pub struct ThemeController<S, P> {
    store: S,
    presentation: P,
    keys: PreferenceKeys,
    theme: ThemeName,
    mode: ColorMode,
}

impl<S: PreferenceStore, P: Presentation> ThemeController<S, P> {
    /// Create a controller using the default preference keys.
    ///
    /// The default palette and mode are pushed to the presentation right
    /// away so it never lags the reported selection. The store is neither
    /// read nor written until [`initialize`](Self::initialize).
    pub fn new(store: S, presentation: P) -> Self {
        Self::with_keys(store, presentation, PreferenceKeys::default())
    }

    pub fn with_keys(store: S, presentation: P, keys: PreferenceKeys) -> Self {
        let mut controller = Self {
            store,
            presentation,
            keys,
            theme: ThemeName::default(),
            mode: ColorMode::default(),
        };
        controller.present_theme();
        controller.present_mode();
        controller
    }

    /// Load the stored preferences and apply them.
    ///
    /// Missing or unrecognized values fall back to the first palette and
    /// dark mode. The resolved values are written back so the store always
    /// holds valid ids afterwards.
    pub fn initialize(&mut self) {
        let stored_theme = self.store.get(&self.keys.theme);
        let stored_mode = self.store.get(&self.keys.mode);

        self.theme = stored_theme
            .as_deref()
            .and_then(ThemeName::from_id)
            .unwrap_or_default();
        self.mode = stored_mode
            .as_deref()
            .and_then(ColorMode::from_id)
            .unwrap_or_default();

        debug!(
            "ThemeController::initialize - stored ({:?}, {:?}) resolved to ({}, {})",
            stored_theme,
            stored_mode,
            self.theme.id(),
            self.mode.id()
        );

        self.apply_theme();
        self.apply_mode();
    }

    // ========== Theme ==========

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Palette of the current theme
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Select a theme by id.
    ///
    /// An id that is not a known palette is ignored: no state change, no
    /// store write, no presentation update.
    pub fn select_theme(&mut self, id: &str) {
        match ThemeName::from_id(id) {
            Some(theme) => self.set_theme(theme),
            None => debug!("ThemeController::select_theme - ignoring unknown theme {:?}", id),
        }
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        debug!(
            "ThemeController::set_theme - switching from {} to {}",
            self.theme.id(),
            theme.id()
        );
        self.theme = theme;
        self.apply_theme();
    }

    // ========== Color Mode ==========

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Flip between dark and light mode
    pub fn toggle_color_mode(&mut self) {
        self.set_color_mode(self.mode.toggle());
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        debug!(
            "ThemeController::set_color_mode - switching from {} to {}",
            self.mode.id(),
            mode.id()
        );
        self.mode = mode;
        self.apply_mode();
    }

    // ========== Boundaries ==========

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &PreferenceKeys {
        &self.keys
    }

    /// Consume the controller, handing back its store and presentation
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.presentation)
    }

    fn apply_theme(&mut self) {
        self.present_theme();
        let key = self.keys.theme.clone();
        self.persist(&key, self.theme.id());
    }

    fn apply_mode(&mut self) {
        self.present_mode();
        let key = self.keys.mode.clone();
        self.persist(&key, self.mode.id());
    }

    fn present_theme(&mut self) {
        for (variable, rgb) in self.theme.palette().variables() {
            self.presentation
                .set_style_variable(variable.css_name(), &rgb.to_string());
        }
    }

    fn present_mode(&mut self) {
        self.presentation.set_dark_mode(self.mode.is_dark());
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("ThemeController - failed to persist {}={}: {}", key, value, err);
        }
    }
}
