// SPDX-License-Identifier: Apache-2.0

//! repolist - Codeup repository manifest synchronization.
//!
//! A one-shot CLI that lists the organization's repositories via the Codeup
//! API, filters out archived and demo entries, and writes a grouped
//! `repos-list.txt` manifest of directory names and clone URLs.

mod cli;
mod commands;
mod errors;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match commands::sync::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
