//! Configuration-file key lookup.
//!
//! Deployments ship flat key/value settings files alongside the
//! application. [`ConfigStore`] loads one and answers string lookups;
//! scalar values (integers, booleans) are stringified so callers see a
//! uniform string surface.
//!
//! ```toml
//! approval_list_url = "/Lists/Approvals"
//! batch_size = 200
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or querying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The value is a table or array, which has no string rendering.
    #[error("config key {0} holds a non-scalar value")]
    NonScalar(String),

    #[error("missing config key: {0}")]
    MissingKey(String),
}

/// A loaded settings file.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Loads a flat TOML table from `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let table: toml::Table = text.parse()?;
        let mut values = BTreeMap::new();
        for (key, value) in table {
            let rendered = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(dt) => dt.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    return Err(ConfigError::NonScalar(key));
                }
            };
            values.insert(key, rendered);
        }
        Ok(Self { values })
    }

    /// Loads a settings file addressed relative to a deployment root.
    pub fn load_relative(root: &Path, relative: &str) -> ConfigResult<Self> {
        Self::load(&root.join(relative))
    }

    /// Returns the value for `key`, or `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, failing with
    /// [`ConfigError::MissingKey`] when absent.
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One-shot lookup of a single key from a settings file.
pub fn lookup(key: &str, path: &Path) -> ConfigResult<Option<String>> {
    let store = ConfigStore::load(path)?;
    Ok(store.get(key).map(ToString::to_string))
}
