//! pagekit CLI
//!
//! Command-line interface for the pagination model

use clap::Parser;
use pagekit::cli::{Cli, Runner};
use pagekit::LogLevel;

fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let config = match runner.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level = if runner.cli().verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::from(level).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = runner.run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
