//! conncheck-configs - connectivity check config generation
//!
//! This library inspects an application's runtime configuration (databases,
//! message brokers, caches, metrics endpoints) and emits a normalized list
//! of connectivity check descriptors for the external conn-check runner.
//!
//! # Core Concepts
//!
//! - **Settings Accessor**: a read-only, default-tolerant key/value view
//!   over a settings snapshot ([`settings::SettingsSource`])
//! - **Check Makers**: stateless extraction rules, one per configuration
//!   domain, each producing zero or more [`check::CheckDescriptor`]s
//! - **Registry**: the ordered list of active makers; gather order mirrors
//!   registration order, so output is reproducible for identical input
//!
//! # Example Usage
//!
//! ```
//! use conncheck_configs::{CheckOptions, MakerRegistry, SettingsSnapshot};
//!
//! let settings = SettingsSnapshot::from_yaml_str("STATSD_HOST: statsd.internal\n").unwrap();
//! let checks = MakerRegistry::with_defaults()
//!     .gather(&settings, &CheckOptions::new())
//!     .unwrap();
//! assert_eq!(checks.len(), 1);
//! ```

pub mod check;
pub mod cli;
pub mod makers;
pub mod options;
pub mod settings;
pub mod util;

// Re-export key types for convenient access
pub use check::{CheckDescriptor, DatabaseCheck};
pub use makers::{CheckMaker, MakerError, MakerRegistry};
pub use options::{CheckOptions, StatsdProbe};
pub use settings::{SettingsError, SettingsSnapshot, SettingsSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
