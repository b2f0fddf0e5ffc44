use std::process;

use codemap::{
    cli::{Args, Command},
    core::interrupt,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    init_logging(&args);

    if let Err(err) = interrupt::install_handler() {
        tracing::warn!("{}", err);
    }

    // Create command from arguments and exit with its status
    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over
/// the verbosity flags.
fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codemap={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
