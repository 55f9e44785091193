//! OOPS publisher maker
//!
//! The error-report publishing block has lived under two different settings
//! keys over time; the first non-empty one wins. Publishers declaring the
//! AMQP type become checks, and for those the connection fields are all
//! required — a publisher that cannot be checked is a configuration error,
//! not something to skip.

use super::{port_field, str_field, CheckMaker, MakerError};
use crate::check::{CheckDescriptor, DEFAULT_AMQP_PORT};
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use serde_json::Value;

pub struct OopsPublisherMaker;

const MAKER_NAME: &str = "oops";

/// Settings keys the publisher block has been stored under, newest first.
const SECTION_KEYS: [&str; 2] = ["OOPSES", "OOPS"];

fn publisher_section(settings: &dyn SettingsSource) -> Option<Value> {
    SECTION_KEYS.iter().find_map(|key| {
        settings
            .lookup(key)
            .filter(|v| v.as_object().map(|o| !o.is_empty()).unwrap_or(false))
    })
}

fn required(publisher: &Value, index: usize, field: &'static str) -> Result<String, MakerError> {
    str_field(publisher, field).ok_or(MakerError::MissingField {
        maker: MAKER_NAME,
        entry: format!("publishers[{}]", index),
        field,
    })
}

impl CheckMaker for OopsPublisherMaker {
    fn name(&self) -> &'static str {
        MAKER_NAME
    }

    fn make(
        &self,
        settings: &dyn SettingsSource,
        _options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let Some(section) = publisher_section(settings) else {
            return Ok(Vec::new());
        };

        let publishers = match section.get("publishers") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(publishers)) => publishers.clone(),
            Some(_) => {
                return Err(MakerError::UnexpectedShape {
                    maker: MAKER_NAME,
                    entry: "publishers".to_string(),
                    expected: "a list of publisher entries",
                })
            }
        };

        let mut checks = Vec::new();
        for (index, publisher) in publishers.iter().enumerate() {
            if str_field(publisher, "type").as_deref() != Some("amqp") {
                continue;
            }

            let entry = format!("publishers[{}]", index);
            checks.push(CheckDescriptor::Amqp {
                vhost: Some(required(publisher, index, "vhost")?),
                host: required(publisher, index, "host")?,
                port: port_field(publisher, "port", MAKER_NAME, &entry)?
                    .unwrap_or(DEFAULT_AMQP_PORT),
                username: Some(required(publisher, index, "user")?),
                password: Some(required(publisher, index, "password")?),
            });
        }

        Ok(checks)
    }
}
