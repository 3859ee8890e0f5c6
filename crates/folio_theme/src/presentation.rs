//! Presentation boundary
//!
//! The controller never styles anything itself. It pushes style variables
//! and the dark-mode flag through [`Presentation`]; the host decides what
//! they mean (a DOM root, a generated stylesheet, a test recorder).

use indexmap::IndexMap;

use crate::palette::{Palette, StyleVariable};

/// Class toggled on the document body while dark mode is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Sink for document-level presentation state.
pub trait Presentation {
    /// Set a CSS custom property on the document root
    fn set_style_variable(&mut self, name: &str, value: &str);

    /// Apply or remove the dark-mode flag
    fn set_dark_mode(&mut self, enabled: bool);
}

/// Recorded document presentation state.
///
/// Keeps every applied variable in first-set order and the dark-mode flag,
/// and can render them as the stylesheet fragment a static page would use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    variables: IndexMap<String, String>,
    dark_mode: bool,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a style variable
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// All applied variables, in the order they were first set
    pub fn variables(&self) -> &IndexMap<String, String> {
        &self.variables
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// The palette currently applied, if all three accent variables are set
    /// and well formed
    pub fn applied_palette(&self) -> Option<Palette> {
        let rgb = |v: StyleVariable| self.variable(v.css_name())?.parse().ok();
        Some(Palette {
            primary: rgb(StyleVariable::Primary)?,
            primary_hover: rgb(StyleVariable::PrimaryHover)?,
            border: rgb(StyleVariable::Border)?,
        })
    }

    /// Classes on the body element
    pub fn body_classes(&self) -> Vec<&'static str> {
        if self.dark_mode {
            vec![DARK_MODE_CLASS]
        } else {
            Vec::new()
        }
    }

    /// Render the `:root` block holding the applied variables
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.variables {
            css.push_str(&format!("    {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl Presentation for DocumentStyle {
    fn set_style_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }
}
