//! Catalog error types

use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or misses required fields
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A project entry is unusable
    #[error("project #{index}: {reason}")]
    InvalidProject { index: usize, reason: String },
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
