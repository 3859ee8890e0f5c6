//! Portfolio page session
//!
//! Wires the theme controller to the project cards and routes UI events to
//! whichever part owns them.

use anyhow::Result;
use folio_catalog::{Catalog, ImageState, ProjectCard};
use folio_theme::{
    ColorMode, DocumentStyle, Palette, PreferenceStore, Presentation, ThemeController, ThemeName,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::controls::ThemeControls;

/// User interaction on the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A palette swatch was clicked
    SelectTheme { theme: String },
    /// The light/dark button was clicked
    ToggleColorMode,
    /// A card's preview image finished loading
    ImageLoaded { card: usize },
    /// A card's preview image failed to load
    ImageFailed { card: usize },
}

impl UiEvent {
    /// Parse a JSON array of events
    pub fn list_from_json(input: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a JSON array of events from file
    pub fn list_from_path(path: &Path) -> Result<Vec<Self>> {
        let raw = std::fs::read_to_string(path)?;
        Self::list_from_json(&raw)
    }
}

/// One page session: theme state plus the project grid
pub struct PortfolioSession<S, P> {
    controller: ThemeController<S, P>,
    cards: Vec<ProjectCard>,
    placeholder: String,
}

impl<S: PreferenceStore, P: Presentation> PortfolioSession<S, P> {
    /// Start a session. The controller is initialized from its store here.
    pub fn start(
        mut controller: ThemeController<S, P>,
        catalog: &Catalog,
        placeholder: impl Into<String>,
    ) -> Self {
        controller.initialize();
        Self {
            controller,
            cards: catalog.cards(),
            placeholder: placeholder.into(),
        }
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        tracing::trace!("PortfolioSession::dispatch - {:?}", event);
        match event {
            UiEvent::SelectTheme { theme } => self.controller.select_theme(&theme),
            UiEvent::ToggleColorMode => self.controller.toggle_color_mode(),
            UiEvent::ImageLoaded { card } => {
                if let Some(card) = self.card_mut(card) {
                    card.image.on_load();
                }
            }
            UiEvent::ImageFailed { card } => {
                let placeholder = self.placeholder.clone();
                if let Some(card) = self.card_mut(card) {
                    card.image.on_error(&placeholder);
                }
            }
        }
    }

    pub fn controller(&self) -> &ThemeController<S, P> {
        &self.controller
    }

    pub fn theme(&self) -> ThemeName {
        self.controller.theme()
    }

    pub fn mode(&self) -> ColorMode {
        self.controller.mode()
    }

    pub fn palette(&self) -> Palette {
        self.controller.palette()
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn controls(&self) -> ThemeControls {
        ThemeControls::new(self.controller.theme(), self.controller.mode())
    }

    fn card_mut(&mut self, index: usize) -> Option<&mut ProjectCard> {
        let len = self.cards.len();
        let card = self.cards.get_mut(index);
        if card.is_none() {
            tracing::debug!("PortfolioSession - no card #{} (have {})", index, len);
        }
        card
    }
}

impl<S: PreferenceStore> PortfolioSession<S, DocumentStyle> {
    /// Serializable view of the applied page state
    pub fn snapshot(&self) -> SessionSnapshot {
        let style = self.controller.presentation();
        SessionSnapshot {
            theme: self.controller.theme(),
            mode: self.controller.mode(),
            root_css: style.to_css(),
            body_classes: style.body_classes(),
            controls: self.controls(),
            cards: self
                .cards
                .iter()
                .map(|card| CardSnapshot {
                    title: card.project.title.clone(),
                    image_src: card.image.src().to_string(),
                    image_fallback: card.image.state() == ImageState::Fallback,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub theme: ThemeName,
    pub mode: ColorMode,
    pub root_css: String,
    pub body_classes: Vec<&'static str>,
    pub controls: ThemeControls,
    pub cards: Vec<CardSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub title: String,
    pub image_src: String,
    pub image_fallback: bool,
}

impl SessionSnapshot {
    /// Plain-text report for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("theme: {}\nmode:  {}\n\n", self.theme.id(), self.mode.id()));
        out.push_str(&self.root_css);
        out.push_str(&format!("\nbody class=\"{}\"\n\n", self.body_classes.join(" ")));

        for swatch in &self.controls.swatches {
            let marker = if swatch.active { "*" } else { " " };
            out.push_str(&format!("[{marker}] {} {}\n", swatch.title, swatch.color));
        }
        out.push_str(&format!(
            "{} ({:?})\n",
            self.controls.mode_toggle.title, self.controls.mode_toggle.icon
        ));

        if !self.cards.is_empty() {
            out.push('\n');
        }
        for card in &self.cards {
            let note = if card.image_fallback { " (placeholder)" } else { "" };
            out.push_str(&format!("{}: {}{}\n", card.title, card.image_src, note));
        }
        out
    }
}
