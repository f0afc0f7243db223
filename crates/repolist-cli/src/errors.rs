// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `SyncError` and appends a hint for the
//! error classes a user can act on. Errors that are not a `SyncError`
//! surface with their original message.

use anyhow::Error;
use repolist_core::SyncError;
use repolist_core::config::TOKEN_ENV;

/// Formats an error for CLI display with helpful hints.
pub fn format_error(error: &Error) -> String {
    if let Some(sync_err) = error.downcast_ref::<SyncError>() {
        match sync_err {
            SyncError::MissingToken => {
                format!(
                    "{sync_err}\n\nTip: Create a personal access token in the Codeup console and export {TOKEN_ENV}."
                )
            }
            SyncError::Api { status, .. } if *status == 401 || *status == 403 => {
                format!(
                    "{sync_err}\n\nTip: Check that your token is valid and has repository read permission."
                )
            }
            SyncError::Network(_) => {
                format!("{sync_err}\n\nTip: Check your internet connection and try again.")
            }
            _ => sync_err.to_string(),
        }
    } else {
        error.to_string()
    }
}
