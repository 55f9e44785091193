//! Check makers
//!
//! Makers are first-class extraction rules, one per configuration domain.
//! Each reads its slice of the settings snapshot and produces zero or more
//! check descriptors; a maker with nothing to report returns an empty list,
//! while malformed or incomplete entries fail the whole run — a partial
//! check list is worse than none.

use crate::check::CheckDescriptor;
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by makers on malformed or incomplete configuration
#[derive(Debug, Error)]
pub enum MakerError {
    #[error("{maker}: entry '{entry}' is missing required field '{field}'")]
    MissingField {
        maker: &'static str,
        entry: String,
        field: &'static str,
    },

    #[error("{maker}: entry '{entry}' has invalid port value '{value}'")]
    InvalidPort {
        maker: &'static str,
        entry: String,
        value: String,
    },

    #[error("{maker}: cache location '{location}' in entry '{entry}' is not in host:port form")]
    MalformedLocation {
        maker: &'static str,
        entry: String,
        location: String,
    },

    #[error("{maker}: expected {expected} for '{entry}'")]
    UnexpectedShape {
        maker: &'static str,
        entry: String,
        expected: &'static str,
    },
}

/// A stateless extraction rule for one configuration domain
pub trait CheckMaker: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Produces the checks this maker can extract from the settings.
    ///
    /// An absent or empty configuration section is not an error; the maker
    /// returns an empty list.
    fn make(
        &self,
        settings: &dyn SettingsSource,
        options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError>;
}

/// Extracts a non-empty string field from a JSON object.
///
/// Null and empty-string values count as absent: settings snapshots
/// routinely carry `""` for unconfigured fields.
pub(crate) fn str_field(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Coerces a JSON value to a port number.
///
/// Accepts an integer or a numeric string; anything else is rejected so the
/// caller can raise a descriptive error instead of guessing.
pub(crate) fn coerce_port(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    }
}

/// Port field access with empty-string-as-absent semantics.
///
/// Returns `Ok(None)` when the field is absent, null, or empty; an error
/// when present but not coercible.
pub(crate) fn port_field(
    entry: &Value,
    key: &str,
    maker: &'static str,
    entry_name: &str,
) -> Result<Option<u16>, MakerError> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => coerce_port(value)
            .map(Some)
            .ok_or_else(|| MakerError::InvalidPort {
                maker,
                entry: entry_name.to_string(),
                value: value.to_string(),
            }),
    }
}

/// Splits an endpoint string on its last colon into host and port.
pub(crate) fn split_host_port(location: &str) -> Option<(&str, &str)> {
    location.rsplit_once(':')
}

pub mod broker;
pub mod cache;
pub mod database;
pub mod oops;
pub mod registry;
pub mod statsd;

pub use broker::LegacyBrokerMaker;
pub use cache::CacheMaker;
pub use database::DatabaseMaker;
pub use oops::OopsPublisherMaker;
pub use registry::MakerRegistry;
pub use statsd::StatsdMaker;
