//! Storefront command-line client

use std::process;

use tracing::error;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;
mod render;

/// Storefront CLI entry point
#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(message) = cli.run().await {
        error!("{message}");

        #[expect(
            clippy::print_stderr,
            reason = "command failures are reported to the user on stderr"
        )]
        {
            eprintln!("{message}");
        }

        process::exit(1);
    }
}
