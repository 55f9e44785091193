//! Per-run maker options
//!
//! Overrides that used to live in process-wide mutable defaults are an
//! explicit value here, built once from CLI input and handed to `gather`
//! before any maker runs. Makers only ever read from it.

/// Probe payload and expected response for the statsd UDP check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsdProbe {
    pub send: String,
    pub expect: String,
}

impl Default for StatsdProbe {
    fn default() -> Self {
        Self {
            send: "conncheck.test:1|c".to_string(),
            expect: String::new(),
        }
    }
}

/// Options shared by every maker in a single gather run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Fallback database name when an entry has no `NAME` of its own
    pub database_name: Option<String>,

    /// Probe for the statsd UDP check, after any CLI overrides
    pub statsd: StatsdProbe,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database_name(mut self, name: Option<String>) -> Self {
        self.database_name = name;
        self
    }

    /// Applies CLI overrides to the statsd probe; `None` keeps the default.
    pub fn with_statsd_overrides(mut self, send: Option<String>, expect: Option<String>) -> Self {
        if let Some(send) = send {
            self.statsd.send = send;
        }
        if let Some(expect) = expect {
            self.statsd.expect = expect;
        }
        self
    }
}
