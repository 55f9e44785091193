//! Cache maker
//!
//! Walks the `CACHES` mapping and emits one memcached check per configured
//! location. A location may be a single `host:port` string or a list of
//! them; a location without a colon is a configuration mistake and fails
//! the run with a descriptive error.

use super::{split_host_port, str_field, CheckMaker, MakerError};
use crate::check::CheckDescriptor;
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use serde_json::Value;

pub struct CacheMaker;

const MAKER_NAME: &str = "cache";

const MEMCACHED_BACKEND: &str = "django.core.cache.backends.memcached.MemcachedCache";

fn locations_of(entry: &Value, name: &str) -> Result<Vec<String>, MakerError> {
    let location = entry.get("LOCATION").ok_or(MakerError::MissingField {
        maker: MAKER_NAME,
        entry: name.to_string(),
        field: "LOCATION",
    })?;

    match location {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(String::from)
                    .ok_or_else(|| MakerError::UnexpectedShape {
                        maker: MAKER_NAME,
                        entry: name.to_string(),
                        expected: "location entries to be strings",
                    })
            })
            .collect(),
        _ => Err(MakerError::UnexpectedShape {
            maker: MAKER_NAME,
            entry: name.to_string(),
            expected: "LOCATION to be a string or a list of strings",
        }),
    }
}

impl CheckMaker for CacheMaker {
    fn name(&self) -> &'static str {
        MAKER_NAME
    }

    fn make(
        &self,
        settings: &dyn SettingsSource,
        _options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let caches = settings.get("CACHES", Value::Object(Default::default()));
        let Some(caches) = caches.as_object() else {
            return Err(MakerError::UnexpectedShape {
                maker: MAKER_NAME,
                entry: "CACHES".to_string(),
                expected: "a mapping of cache configurations",
            });
        };

        let mut checks = Vec::new();
        for (name, cache) in caches {
            match str_field(cache, "BACKEND") {
                None => {}
                Some(backend) if backend == MEMCACHED_BACKEND => {}
                Some(_) => continue,
            }

            for location in locations_of(cache, name)? {
                let (host, port) =
                    split_host_port(&location).ok_or_else(|| MakerError::MalformedLocation {
                        maker: MAKER_NAME,
                        entry: name.clone(),
                        location: location.clone(),
                    })?;

                let port = port
                    .parse::<u16>()
                    .map_err(|_| MakerError::InvalidPort {
                        maker: MAKER_NAME,
                        entry: name.clone(),
                        value: port.to_string(),
                    })?;

                checks.push(CheckDescriptor::Memcached {
                    host: host.to_string(),
                    port,
                });
            }
        }

        Ok(checks)
    }
}
