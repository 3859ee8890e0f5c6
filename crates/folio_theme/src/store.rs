//! Preference persistence
//!
//! The controller only needs a string key-value boundary that survives
//! reloads. [`MemoryStore`] backs tests and throwaway sessions,
//! [`FileStore`] keeps preferences in a small TOML file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// Default key holding the theme id
pub const DEFAULT_THEME_KEY: &str = "portfolioTheme";

/// Default key holding the color mode
pub const DEFAULT_MODE_KEY: &str = "colorMode";

/// Persistent string key-value store.
pub trait PreferenceStore {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keys under which the two preferences are stored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceKeys {
    pub theme: String,
    pub mode: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_KEY.to_string(),
            mode: DEFAULT_MODE_KEY.to_string(),
        }
    }
}

/// In-memory store. Never fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`
    pub fn with_values<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a TOML file of string keys and values.
///
/// The whole file is rewritten on every [`set`](PreferenceStore::set).
/// Entries that are not strings are kept in the file but never returned by
/// [`get`](PreferenceStore::get).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: toml::Table,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that is unreadable or not
    /// valid TOML is logged and also treated as empty, so startup falls back
    /// to defaults; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_open(&path) {
            Ok(store) => store,
            Err(err) => {
                warn!("FileStore::open - ignoring unusable preferences: {}", err);
                Self {
                    path,
                    values: toml::Table::new(),
                }
            }
        }
    }

    /// Open the store at `path`, reporting unreadable or invalid TOML files.
    ///
    /// A valid file with some non-string entries is not an error: the string
    /// entries stay readable and the others are logged and skipped by `get`.
    pub fn try_open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values: toml::Table = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("FileStore::try_open - {} not found, starting empty", path.display());
                toml::Table::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        for (key, value) in values.iter().filter(|(_, v)| !v.is_str()) {
            warn!(
                "FileStore::try_open - {}: ignoring non-string value for {:?} ({})",
                path.display(),
                key,
                value.type_str()
            );
        }
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let content = toml::to_string(&self.values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)?.as_str().map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).and_then(toml::Value::as_str) == Some(value) && self.path.exists()
        {
            return Ok(());
        }
        self.values
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        self.flush()
    }
}
