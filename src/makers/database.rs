//! Relational database maker
//!
//! Walks the `DATABASES` mapping and emits one check per entry whose engine
//! maps to a known network-reachable driver. Entries whose host is a
//! filesystem path are local-socket connections and are never check-targeted.

use super::{port_field, str_field, CheckMaker, MakerError};
use crate::check::{CheckDescriptor, DatabaseCheck};
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use serde_json::Value;
use tracing::debug;

pub struct DatabaseMaker;

const MAKER_NAME: &str = "database";

/// Maps a settings engine identifier to a check type tag.
///
/// Matching is on the final dotted segment so vendor-prefixed engine paths
/// (e.g. GIS backends) resolve the same as the stock ones.
fn driver_for_engine(engine: &str) -> Option<&'static str> {
    let segment = engine.rsplit('.').next().unwrap_or(engine);
    match segment {
        "postgresql" | "postgresql_psycopg2" | "postgis" => Some("postgres"),
        "mysql" => Some("mysql"),
        "oracle" => Some("oracle"),
        _ => None,
    }
}

impl CheckMaker for DatabaseMaker {
    fn name(&self) -> &'static str {
        MAKER_NAME
    }

    fn make(
        &self,
        settings: &dyn SettingsSource,
        options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let databases = settings.get("DATABASES", Value::Object(Default::default()));
        let Some(databases) = databases.as_object() else {
            return Err(MakerError::UnexpectedShape {
                maker: MAKER_NAME,
                entry: "DATABASES".to_string(),
                expected: "a mapping of database configurations",
            });
        };

        let mut checks = Vec::new();
        for (name, db) in databases {
            let Some(driver) = str_field(db, "ENGINE").and_then(|e| driver_for_engine(&e)) else {
                continue;
            };

            let host = str_field(db, "HOST").ok_or(MakerError::MissingField {
                maker: MAKER_NAME,
                entry: name.clone(),
                field: "HOST",
            })?;

            // A leading path separator means a unix socket, not an endpoint.
            if host.starts_with('/') {
                debug!(entry = %name, "skipping socket-path database host");
                continue;
            }

            let check = DatabaseCheck {
                host,
                database: str_field(db, "NAME").or_else(|| options.database_name.clone()),
                port: port_field(db, "PORT", MAKER_NAME, name)?,
                username: str_field(db, "USER"),
                password: str_field(db, "PASSWORD"),
            };

            checks.push(match driver {
                "postgres" => CheckDescriptor::Postgres(check),
                "mysql" => CheckDescriptor::Mysql(check),
                _ => CheckDescriptor::Oracle(check),
            });
        }

        Ok(checks)
    }
}
