// SPDX-License-Identifier: Apache-2.0

//! Error types for the repolist CLI.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while synchronizing the repository manifest.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No access token available after resolving flags and environment.
    #[error("No access token provided - set CODEUP_TOKEN or pass --token")]
    MissingToken,

    /// The API answered with a non-success HTTP status.
    #[error("Codeup API request failed with HTTP {status}: {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// Network/HTTP error from reqwest, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON array.
    #[error("Invalid response body from Codeup API: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// Filesystem error while writing the manifest.
    #[error("Failed to write manifest: {0}")]
    Io(#[from] std::io::Error),
}
