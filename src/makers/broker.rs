//! Legacy broker maker
//!
//! Handles the superseded flat `BROKER_*` settings style. A check is
//! produced when no backend is named but a host is configured (resolved as
//! amqp), or when the backend is explicitly amqp or redis. Anything else is
//! a silent no-op: the newer transport-URL broker style is a known gap to be
//! covered by a future maker, not an error to report here.

use super::{coerce_port, CheckMaker, MakerError};
use crate::check::CheckDescriptor;
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use tracing::debug;

pub struct LegacyBrokerMaker;

const MAKER_NAME: &str = "broker";

fn str_setting(settings: &dyn SettingsSource, key: &str) -> Option<String> {
    match settings.lookup(key) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

impl CheckMaker for LegacyBrokerMaker {
    fn name(&self) -> &'static str {
        MAKER_NAME
    }

    fn make(
        &self,
        settings: &dyn SettingsSource,
        _options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let host = str_setting(settings, "BROKER_HOST");
        let backend = str_setting(settings, "BROKER_BACKEND");

        // Empty and unset backends are deliberately treated alike.
        let resolved = match backend.as_deref() {
            None if host.is_some() => "amqp",
            Some("amqp") => "amqp",
            Some("redis") => "redis",
            other => {
                if other.is_some() {
                    debug!(backend = other, "unsupported broker backend, skipping");
                }
                return Ok(Vec::new());
            }
        };

        let host = host.ok_or(MakerError::MissingField {
            maker: MAKER_NAME,
            entry: "broker".to_string(),
            field: "BROKER_HOST",
        })?;

        let port_value = settings.lookup("BROKER_PORT").ok_or(MakerError::MissingField {
            maker: MAKER_NAME,
            entry: "broker".to_string(),
            field: "BROKER_PORT",
        })?;
        let port = coerce_port(&port_value).ok_or_else(|| MakerError::InvalidPort {
            maker: MAKER_NAME,
            entry: "broker".to_string(),
            value: port_value.to_string(),
        })?;

        let username = str_setting(settings, "BROKER_USER");
        let password = str_setting(settings, "BROKER_PASSWORD");
        let vhost = str_setting(settings, "BROKER_VHOST");

        let check = match resolved {
            "amqp" => CheckDescriptor::Amqp {
                host,
                port,
                vhost,
                username,
                password,
            },
            _ => CheckDescriptor::Redis {
                host,
                port,
                vhost,
                username,
                password,
            },
        };

        Ok(vec![check])
    }
}
