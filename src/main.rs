//! awsconf - Export temporary AWS credentials to your shell dotfile.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use awsconf::cli::output;
use awsconf::cli::{execute, report_error, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("AWSCONF_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("awsconf=debug")
        } else {
            EnvFilter::new("awsconf=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let reporter = output::Terminal;
    if let Err(e) = execute(cli, &reporter) {
        report_error(&e, &reporter);
        std::process::exit(1);
    }
}
