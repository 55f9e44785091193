use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generates conn-check connectivity check configs from application settings snapshots
#[derive(Parser, Debug)]
#[command(
    name = "conncheck-configs",
    about = "Generate conn-check connectivity check configs from a settings snapshot",
    version,
    author,
    long_about = "conncheck-configs reads an application settings snapshot (JSON or YAML) \
                  and emits a normalized list of connectivity check descriptors for the \
                  conn-check runner: databases, AMQP publishers, legacy brokers, \
                  memcached backends, and the statsd endpoint."
)]
pub struct CliArgs {
    #[arg(
        short = 's',
        long,
        value_name = "FILE",
        help = "Settings snapshot to read (JSON or YAML)"
    )]
    pub settings: PathBuf,

    #[arg(
        short = 'f',
        long = "output-file",
        value_name = "FILE",
        conflicts_with = "print",
        help = "File path to save the check config to"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(
        short = 'P',
        long,
        help = "Output the check config to stdout (the default when no file is given)"
    )]
    pub print: bool,

    #[arg(
        short = 'd',
        long = "database-name",
        value_name = "NAME",
        help = "Database schema to use when not discoverable from the settings"
    )]
    pub database_name: Option<String>,

    #[arg(
        long = "statsd-send",
        value_name = "PAYLOAD",
        help = "Test string to send to the statsd server"
    )]
    pub statsd_send: Option<String>,

    #[arg(
        long = "statsd-expect",
        value_name = "RESPONSE",
        help = "Successful response string from the statsd test"
    )]
    pub statsd_expect: Option<String>,

    #[arg(long, value_enum, default_value = "yaml", help = "Output format")]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Yaml,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}
