//! Statsd maker
//!
//! Emits a single UDP probe check when a statsd host is configured. The
//! host setting may carry a combined `host:port`, which overrides the
//! separate port setting.

use super::{coerce_port, split_host_port, CheckMaker, MakerError};
use crate::check::CheckDescriptor;
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use serde_json::{json, Value};

pub struct StatsdMaker;

const MAKER_NAME: &str = "statsd";

const DEFAULT_STATSD_PORT: u16 = 8125;

impl CheckMaker for StatsdMaker {
    fn name(&self) -> &'static str {
        MAKER_NAME
    }

    fn make(
        &self,
        settings: &dyn SettingsSource,
        options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let host = match settings.lookup("STATSD_HOST") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Ok(Vec::new()),
        };

        // A combined host:port value overrides the separate port setting.
        let combined = split_host_port(&host).map(|(h, p)| (h.to_string(), p.to_string()));
        let (host, port) = match combined {
            Some((host, port)) => {
                let parsed = port
                    .parse::<u16>()
                    .map_err(|_| MakerError::InvalidPort {
                        maker: MAKER_NAME,
                        entry: "STATSD_HOST".to_string(),
                        value: port,
                    })?;
                (host, parsed)
            }
            None => {
                let value = settings.get("STATSD_PORT", json!(DEFAULT_STATSD_PORT));
                let port = coerce_port(&value).ok_or_else(|| MakerError::InvalidPort {
                    maker: MAKER_NAME,
                    entry: "STATSD_PORT".to_string(),
                    value: value.to_string(),
                })?;
                (host, port)
            }
        };

        Ok(vec![CheckDescriptor::Udp {
            host,
            port,
            send: options.statsd.send.clone(),
            expect: options.statsd.expect.clone(),
        }])
    }
}
