//! Folio configuration file handling

use anyhow::{Context, Result};
use folio_catalog::DEFAULT_PLACEHOLDER_URL;
use folio_theme::{PreferenceKeys, DEFAULT_MODE_KEY, DEFAULT_THEME_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where and under which keys preferences are persisted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Preference file, relative to the working directory
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    #[serde(default = "default_mode_key")]
    pub mode_key: String,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".folio/preferences.toml")
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

fn default_mode_key() -> String {
    DEFAULT_MODE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            theme_key: default_theme_key(),
            mode_key: default_mode_key(),
        }
    }
}

impl StorageConfig {
    pub fn keys(&self) -> PreferenceKeys {
        PreferenceKeys {
            theme: self.theme_key.clone(),
            mode: self.mode_key.clone(),
        }
    }
}

/// Project catalog source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog file, relative to the working directory
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Image shown when a project preview fails to load
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("resource/catalog.toml")
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            placeholder_image: default_placeholder(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid folio.toml")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
