//! Maker registry and aggregator

use super::{
    CacheMaker, CheckMaker, DatabaseMaker, LegacyBrokerMaker, MakerError, OopsPublisherMaker,
    StatsdMaker,
};
use crate::check::CheckDescriptor;
use crate::options::CheckOptions;
use crate::settings::SettingsSource;
use std::sync::Arc;
use tracing::debug;

/// Ordered registry of check makers
///
/// Built-in makers come first; makers registered by the hosting application
/// are appended and run after them. Gather order is registration order, so
/// output is reproducible for identical input.
#[derive(Clone)]
pub struct MakerRegistry {
    makers: Vec<Arc<dyn CheckMaker>>,
}

impl MakerRegistry {
    pub fn new() -> Self {
        Self { makers: Vec::new() }
    }

    /// Registry with the built-in makers in their canonical order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DatabaseMaker));
        registry.register(Arc::new(OopsPublisherMaker));
        registry.register(Arc::new(LegacyBrokerMaker));
        registry.register(Arc::new(CacheMaker));
        registry.register(Arc::new(StatsdMaker));
        registry
    }

    /// Appends a maker; the extension point for host applications.
    pub fn register(&mut self, maker: Arc<dyn CheckMaker>) {
        self.makers.push(maker);
    }

    pub fn len(&self) -> usize {
        self.makers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.makers.is_empty()
    }

    /// Runs every maker in order and concatenates their checks.
    ///
    /// The first maker error aborts the gather; no partial result is
    /// returned.
    pub fn gather(
        &self,
        settings: &dyn SettingsSource,
        options: &CheckOptions,
    ) -> Result<Vec<CheckDescriptor>, MakerError> {
        let mut checks = Vec::new();
        for maker in &self.makers {
            let produced = maker.make(settings, options)?;
            debug!(maker = maker.name(), count = produced.len(), "maker ran");
            checks.extend(produced);
        }
        Ok(checks)
    }
}

impl Default for MakerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsSnapshot;
    use serde_json::json;

    struct FixedMaker(Vec<CheckDescriptor>);

    impl CheckMaker for FixedMaker {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn make(
            &self,
            _settings: &dyn SettingsSource,
            _options: &CheckOptions,
        ) -> Result<Vec<CheckDescriptor>, MakerError> {
            Ok(self.0.clone())
        }
    }

    struct FailingMaker;

    impl CheckMaker for FailingMaker {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn make(
            &self,
            _settings: &dyn SettingsSource,
            _options: &CheckOptions,
        ) -> Result<Vec<CheckDescriptor>, MakerError> {
            Err(MakerError::MissingField {
                maker: "failing",
                entry: "entry".to_string(),
                field: "field",
            })
        }
    }

    fn memcached(host: &str) -> CheckDescriptor {
        CheckDescriptor::Memcached {
            host: host.to_string(),
            port: 11211,
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = MakerRegistry::with_defaults();
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_empty_settings_gather_is_empty() {
        let registry = MakerRegistry::with_defaults();
        let settings = SettingsSnapshot::from_value(json!({})).unwrap();
        let checks = registry.gather(&settings, &CheckOptions::new()).unwrap();
        assert!(checks.is_empty());
    }

    #[test]
    fn test_registered_makers_run_in_order() {
        let mut registry = MakerRegistry::new();
        registry.register(Arc::new(FixedMaker(vec![memcached("a")])));
        registry.register(Arc::new(FixedMaker(vec![memcached("b"), memcached("c")])));

        let settings = SettingsSnapshot::from_value(json!({})).unwrap();
        let checks = registry.gather(&settings, &CheckOptions::new()).unwrap();

        assert_eq!(checks, vec![memcached("a"), memcached("b"), memcached("c")]);
    }

    #[test]
    fn test_external_maker_appends_after_defaults() {
        let mut registry = MakerRegistry::with_defaults();
        registry.register(Arc::new(FixedMaker(vec![memcached("extra")])));

        let settings =
            SettingsSnapshot::from_value(json!({"STATSD_HOST": "statsd.internal"})).unwrap();
        let checks = registry.gather(&settings, &CheckOptions::new()).unwrap();

        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].type_tag(), "udp");
        assert_eq!(checks[1], memcached("extra"));
    }

    #[test]
    fn test_maker_error_aborts_gather() {
        let mut registry = MakerRegistry::new();
        registry.register(Arc::new(FailingMaker));
        registry.register(Arc::new(FixedMaker(vec![memcached("never")])));

        let settings = SettingsSnapshot::from_value(json!({})).unwrap();
        let result = registry.gather(&settings, &CheckOptions::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_gather_is_idempotent() {
        let registry = MakerRegistry::with_defaults();
        let settings = SettingsSnapshot::from_value(json!({
            "STATSD_HOST": "udp.host:9999",
            "CACHES": {"default": {"LOCATION": ["a:1", "b:2"]}}
        }))
        .unwrap();
        let options = CheckOptions::new();

        let first = registry.gather(&settings, &options).unwrap();
        let second = registry.gather(&settings, &options).unwrap();
        assert_eq!(first, second);
    }
}
