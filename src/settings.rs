//! Settings accessor
//!
//! A read-only, default-tolerant key/value view over an application's
//! settings snapshot. Every maker reads configuration exclusively through
//! [`SettingsSource`], so a missing key can never abort a run by itself —
//! lookups fall back instead of failing.
//!
//! The concrete source is a JSON or YAML document exported from the
//! application (the Rust-side replacement for importing a live settings
//! module). A key holding an explicit `null` is indistinguishable from an
//! absent key, matching the lenient attribute access the snapshot format
//! grew out of.

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors loading or parsing a settings snapshot
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("settings document must be a mapping at the top level")]
    NotAMapping,
}

/// Read-only key/value access over a settings source
///
/// Implementations must never fail on a missing key; `lookup` returns
/// `None` and `get` falls back to the caller's default.
pub trait SettingsSource: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is
    /// absent or explicitly null.
    fn lookup(&self, key: &str) -> Option<Value>;

    /// Returns the value stored under `key`, or `default` when absent.
    fn get(&self, key: &str, default: Value) -> Value {
        self.lookup(key).unwrap_or(default)
    }
}

/// A settings snapshot backed by a top-level JSON object
#[derive(Debug, Clone, Default)]
pub struct SettingsSnapshot {
    values: serde_json::Map<String, Value>,
}

impl SettingsSnapshot {
    /// Wraps an already-parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NotAMapping` if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, SettingsError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(SettingsError::NotAMapping),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(input).map_err(|e| SettingsError::Parse {
            path: "<json>".to_string(),
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_yaml::from_str(input).map_err(|e| SettingsError::Parse {
            path: "<yaml>".to_string(),
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Loads a snapshot from disk, picking the parser from the file
    /// extension: `.json` parses as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: display.clone(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let result = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };

        result.map_err(|e| match e {
            SettingsError::Parse { message, .. } => SettingsError::Parse {
                path: display,
                message,
            },
            other => other,
        })
    }
}

impl SettingsSource for SettingsSnapshot {
    fn lookup(&self, key: &str) -> Option<Value> {
        match self.values.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.clone()),
        }
    }
}
