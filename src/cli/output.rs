//! Output formatting for the check list
//!
//! The check runner consumes YAML, which is the default; JSON is offered for
//! machine consumers. Field order within a descriptor is not significant.

use anyhow::{Context, Result};
use crate::check::CheckDescriptor;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML format (what the check runner reads)
    Yaml,
    /// JSON format (machine-readable)
    Json,
}

/// Serializes a gathered check list into the configured format
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, checks: &[CheckDescriptor]) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => {
                serde_yaml::to_string(checks).context("Failed to serialize check list to YAML")
            }
            OutputFormat::Json => serde_json::to_string_pretty(checks)
                .context("Failed to serialize check list to JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checks() -> Vec<CheckDescriptor> {
        vec![
            CheckDescriptor::Memcached {
                host: "a".to_string(),
                port: 11211,
            },
            CheckDescriptor::Udp {
                host: "statsd.internal".to_string(),
                port: 8125,
                send: "conncheck.test:1|c".to_string(),
                expect: String::new(),
            },
        ]
    }

    #[test]
    fn test_yaml_format() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&sample_checks()).unwrap();

        assert!(output.contains("type: memcached"));
        assert!(output.contains("type: udp"));

        let parsed: Vec<CheckDescriptor> = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, sample_checks());
    }

    #[test]
    fn test_json_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&sample_checks()).unwrap();

        let parsed: Vec<CheckDescriptor> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample_checks());
    }

    #[test]
    fn test_empty_list_serializes() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&[]).unwrap();
        let parsed: Vec<CheckDescriptor> = serde_yaml::from_str(&output).unwrap();
        assert!(parsed.is_empty());
    }
}
