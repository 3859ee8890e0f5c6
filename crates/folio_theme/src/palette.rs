//! Built-in color palettes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// An 8-bit RGB triple.
///
/// Rendered as `"R G B"` so the presentation layer can consume it with
/// `rgb(var(--color-primary-500) / 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form (`#302ce9`), handy for logs and swatch previews
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidRgb(s.to_string());
        let mut parts = s.split_whitespace().map(|p| p.parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

/// Style variables driven by the active palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleVariable {
    /// Primary accent (buttons, links)
    Primary,
    /// Primary accent while hovered
    PrimaryHover,
    /// Card top border accent
    Border,
}

impl StyleVariable {
    /// CSS custom property name, including the `--` prefix.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "--color-primary-500",
            Self::PrimaryHover => "--color-primary-600",
            Self::Border => "--color-border-color",
        }
    }

    pub fn all() -> &'static [StyleVariable] {
        const VARIABLES: [StyleVariable; 3] = [
            StyleVariable::Primary,
            StyleVariable::PrimaryHover,
            StyleVariable::Border,
        ];
        &VARIABLES
    }
}

/// The three accent colors of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub primary_hover: Rgb,
    pub border: Rgb,
}

impl Palette {
    /// Value for a single style variable
    pub fn get(&self, variable: StyleVariable) -> Rgb {
        match variable {
            StyleVariable::Primary => self.primary,
            StyleVariable::PrimaryHover => self.primary_hover,
            StyleVariable::Border => self.border,
        }
    }

    /// All variables paired with their values, in declaration order
    pub fn variables(&self) -> [(StyleVariable, Rgb); 3] {
        [
            (StyleVariable::Primary, self.primary),
            (StyleVariable::PrimaryHover, self.primary_hover),
            (StyleVariable::Border, self.border),
        ]
    }
}

/// Built-in palette catalog.
///
/// The first entry of [`ThemeName::all`] is the startup default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Indigo 600/700/500
    #[default]
    Indigo,
    /// Green 600/700/500
    Green,
    /// Purple 600/700/500
    Purple,
}

impl ThemeName {
    /// Stable id used as the persisted preference value.
    pub fn id(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Indigo => "Indigo",
            Self::Green => "Green",
            Self::Purple => "Purple",
        }
    }

    /// Full palette list, default first.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 3] = [ThemeName::Indigo, ThemeName::Green, ThemeName::Purple];
        &THEMES
    }

    /// Look up a theme by its id. Exact, case-sensitive match.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|theme| theme.id() == id)
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Indigo => Palette {
                primary: Rgb::new(48, 44, 233),
                primary_hover: Rgb::new(67, 56, 202),
                border: Rgb::new(79, 70, 229),
            },
            Self::Green => Palette {
                primary: Rgb::new(22, 163, 74),
                primary_hover: Rgb::new(21, 128, 61),
                border: Rgb::new(34, 197, 94),
            },
            Self::Purple => Palette {
                primary: Rgb::new(124, 58, 237),
                primary_hover: Rgb::new(109, 40, 217),
                border: Rgb::new(168, 85, 247),
            },
        }
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_renders_space_separated() {
        assert_eq!(Rgb::new(48, 44, 233).to_string(), "48 44 233");
        assert_eq!(Rgb::new(48, 44, 233).to_hex(), "#302ce9");
    }

    #[test]
    fn rgb_parses_its_own_output() {
        let rgb: Rgb = " 22  163 74 ".parse().unwrap();
        assert_eq!(rgb, Rgb::new(22, 163, 74));
    }

    #[test]
    fn rgb_rejects_bad_triples() {
        for bad in ["", "1 2", "1 2 3 4", "256 0 0", "a b c"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn theme_ids_are_case_sensitive() {
        assert_eq!(ThemeName::from_id("green"), Some(ThemeName::Green));
        assert_eq!(ThemeName::from_id("Green"), None);
        assert_eq!(
            "orange".parse::<ThemeName>(),
            Err(ThemeError::UnknownTheme("orange".into()))
        );
    }

    #[test]
    fn default_theme_is_first_in_catalog() {
        assert_eq!(ThemeName::default(), ThemeName::all()[0]);
    }
}
