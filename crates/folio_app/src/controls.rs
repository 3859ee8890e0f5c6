//! Theme control widget state
//!
//! Render-agnostic description of the floating theme widget: one swatch per
//! palette plus the light/dark toggle.

use folio_theme::{ColorMode, ThemeName};
use serde::Serialize;

/// Tooltip of the light/dark toggle
pub const MODE_TOGGLE_TITLE: &str = "Toggle dark mode";

/// A palette button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub theme: ThemeName,
    /// Tooltip, e.g. "Theme Indigo"
    pub title: String,
    /// Fill color in hex
    pub color: String,
    /// Drawn with the selection ring
    pub active: bool,
}

/// Icon shown on the mode toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeIcon {
    /// Shown while dark mode is on
    Sun,
    /// Shown while light mode is on
    Moon,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModeToggle {
    pub title: &'static str,
    pub icon: ModeIcon,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeControls {
    pub swatches: Vec<Swatch>,
    pub mode_toggle: ModeToggle,
}

impl ThemeControls {
    pub fn new(active: ThemeName, mode: ColorMode) -> Self {
        let swatches = ThemeName::all()
            .iter()
            .map(|&theme| Swatch {
                theme,
                title: format!("Theme {}", theme.display_name()),
                color: theme.palette().primary.to_hex(),
                active: theme == active,
            })
            .collect();

        let icon = match mode {
            ColorMode::Dark => ModeIcon::Sun,
            ColorMode::Light => ModeIcon::Moon,
        };

        Self {
            swatches,
            mode_toggle: ModeToggle {
                title: MODE_TOGGLE_TITLE,
                icon,
            },
        }
    }

    /// The swatch drawn as selected
    pub fn active_swatch(&self) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.active)
    }
}
