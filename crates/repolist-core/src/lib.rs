// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Repolist Core
//!
//! Core library for the repolist CLI - Codeup repository discovery and
//! manifest generation.
//!
//! This crate provides reusable components for:
//! - Listing an organization's repositories via the Codeup REST API
//! - Filtering out archived and demo repositories
//! - Grouping repositories by namespace and rendering a `repos-list.txt`
//!   manifest
//! - Configuration resolution from environment variables and overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repolist_core::{CodeupClient, SyncConfig, filter_repos, render_manifest};
//!
//! # async fn example() -> repolist_core::Result<()> {
//! let config = SyncConfig::from_env();
//! let token = config.require_token()?;
//!
//! let client = CodeupClient::new(token, &config.org_id, &config.api_domain)?;
//! let repos = client.list_repositories().await?;
//!
//! let filtered = filter_repos(repos, None);
//! let manifest = render_manifest(&filtered, None, chrono::Local::now());
//! println!("{manifest}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Codeup repository listing client
//! - [`config`] - Configuration resolution
//! - [`error`] - Error types
//! - [`filter`] - Archived/demo/keyword filtering
//! - [`manifest`] - Namespace grouping and manifest rendering
//! - [`record`] - Repository records from the API

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod manifest;
pub mod record;

pub use api::CodeupClient;
pub use config::SyncConfig;
pub use error::SyncError;
pub use filter::filter_repos;
pub use manifest::{MANIFEST_FILE_NAME, entry_count, render_manifest, write_manifest};
pub use record::RepositoryRecord;

/// Convenience Result type for repolist operations.
///
/// This is equivalent to `std::result::Result<T, SyncError>`.
pub type Result<T> = std::result::Result<T, SyncError>;
