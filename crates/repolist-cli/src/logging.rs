// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the repolist CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to
//! stderr, keeping stdout clean for the dry-run manifest preview.
//! The `RUST_LOG` environment variable overrides the defaults.
//!
//! # Examples
//!
//! ```bash
//! # Debug output for troubleshooting
//! RUST_LOG=repolist_core=debug repolist --dry-run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `-v` flag raises our own crates to debug level; `RUST_LOG` takes
/// precedence when set.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "repolist_cli=debug,repolist_core=debug,reqwest=warn"
    } else {
        "repolist_cli=warn,repolist_core=warn,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
