//! Inventrak command line front end

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    let mut context = cli.config.context();
    let mut out = io::stdout().lock();

    match cli.run(&mut context, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            debug!(error = ?failure, "command failed");

            #[expect(
                clippy::print_stderr,
                reason = "command errors are user-facing output"
            )]
            {
                eprintln!("error: {failure}");
            }

            ExitCode::FAILURE
        }
    }
}
