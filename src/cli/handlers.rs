//! Command handler
//!
//! Wires the pipeline together: load the settings snapshot, apply overrides,
//! gather checks, serialize, and write to the chosen sink. Returns a process
//! exit code; errors are logged rather than propagated so `main` stays thin.

use super::commands::CliArgs;
use super::output::OutputFormatter;
use crate::makers::MakerRegistry;
use crate::options::CheckOptions;
use crate::settings::SettingsSnapshot;
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, error, info};

/// Runs the export end to end, returning the process exit code.
pub fn handle_export(args: &CliArgs) -> i32 {
    match run_export(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("export failed: {:#}", e);
            1
        }
    }
}

fn run_export(args: &CliArgs) -> Result<()> {
    let settings = SettingsSnapshot::load(&args.settings)
        .with_context(|| format!("cannot load settings from {}", args.settings.display()))?;

    // Overrides are fully applied before the first maker runs.
    let options = CheckOptions::new()
        .with_database_name(args.database_name.clone())
        .with_statsd_overrides(args.statsd_send.clone(), args.statsd_expect.clone());

    let registry = MakerRegistry::with_defaults();
    let checks = registry
        .gather(&settings, &options)
        .context("gathering checks failed")?;
    debug!(count = checks.len(), "gathered checks");

    let formatter = OutputFormatter::new(args.format.into());
    let output = formatter.format(&checks)?;

    match &args.output_file {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("cannot write check config to {}", path.display()))?;
            info!(path = %path.display(), count = checks.len(), "wrote check config");
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
