use conncheck_configs::cli::commands::CliArgs;
use conncheck_configs::cli::handlers::handle_export;
use conncheck_configs::util::logging::{init_from_env, init_logging, parse_level, LoggingConfig};
use conncheck_configs::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("conncheck-configs v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_export(&args);

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    if let Some(level_str) = &args.log_level {
        init_logging(LoggingConfig::with_level(parse_level(level_str)));
    } else if args.verbose {
        init_logging(LoggingConfig::with_level(Level::DEBUG));
    } else if args.quiet {
        init_logging(LoggingConfig::with_level(Level::ERROR));
    } else {
        init_from_env();
    }
}
