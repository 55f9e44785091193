//! Check descriptor data structures
//!
//! This module defines the uniform output record every maker produces: a
//! tagged descriptor naming one network endpoint and how to validate it.
//! The `type` tag selects the shape of the remaining fields, and optional
//! fields that were absent from the input are omitted from the serialized
//! document rather than emitted as nulls.

use serde::{Deserialize, Serialize};

/// Standard AMQP port, used when a publisher entry omits its port.
pub const DEFAULT_AMQP_PORT: u16 = 5672;

fn default_amqp_port() -> u16 {
    DEFAULT_AMQP_PORT
}

/// Connection details shared by the relational database check types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCheck {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// One connectivity check for the external check runner
///
/// Serialized as a map with a `type` tag, e.g.
///
/// ```yaml
/// - type: memcached
///   host: cache.internal
///   port: 11211
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CheckDescriptor {
    Postgres(DatabaseCheck),
    Mysql(DatabaseCheck),
    Oracle(DatabaseCheck),
    Amqp {
        host: String,
        #[serde(default = "default_amqp_port")]
        port: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        vhost: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
    Redis {
        host: String,
        port: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        vhost: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        password: Option<String>,
    },
    Memcached {
        host: String,
        port: u16,
    },
    Udp {
        host: String,
        port: u16,
        send: String,
        expect: String,
    },
}

impl CheckDescriptor {
    /// The `type` tag this descriptor serializes under
    pub fn type_tag(&self) -> &'static str {
        match self {
            CheckDescriptor::Postgres(_) => "postgres",
            CheckDescriptor::Mysql(_) => "mysql",
            CheckDescriptor::Oracle(_) => "oracle",
            CheckDescriptor::Amqp { .. } => "amqp",
            CheckDescriptor::Redis { .. } => "redis",
            CheckDescriptor::Memcached { .. } => "memcached",
            CheckDescriptor::Udp { .. } => "udp",
        }
    }
}
