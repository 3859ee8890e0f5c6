//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when parsing theme values from text.
///
/// The controller never surfaces these: an unknown theme key passed to
/// [`ThemeController::select_theme`](crate::ThemeController::select_theme)
/// is ignored. They exist for callers that parse user input up front.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Not one of the known palette ids
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Not `dark` or `light`
    #[error("unknown color mode '{0}'")]
    UnknownMode(String),

    /// Not a space-separated `R G B` triple
    #[error("invalid rgb triple '{0}'")]
    InvalidRgb(String),
}

/// Preference store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a TOML table of strings
    #[error("preference file {path} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The in-memory preferences could not be encoded
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Result type for preference store operations
pub type Result<T> = std::result::Result<T, StoreError>;
