// SPDX-License-Identifier: Apache-2.0

//! Configuration resolution for the repolist CLI.
//!
//! Configuration is resolved once at startup and threaded explicitly
//! through the pipeline, keeping the filter and renderer pure.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Command-line flags (`--token`, `--org-id`)
//! 2. Environment variables (`CODEUP_TOKEN`, `CODEUP_ORG_ID`)
//! 3. Built-in defaults (organization id only; there is no default token)

use crate::Result;
use crate::error::SyncError;

/// Environment variable holding the Codeup personal access token.
pub const TOKEN_ENV: &str = "CODEUP_TOKEN";

/// Environment variable holding the Codeup organization id.
pub const ORG_ID_ENV: &str = "CODEUP_ORG_ID";

/// Fallback organization id used when `CODEUP_ORG_ID` is unset.
pub const DEFAULT_ORG_ID: &str = "69094bdef9c52e7d8c272ffc";

/// Domain of the Codeup OpenAPI endpoint.
pub const API_DOMAIN: &str = "openapi-rdc.aliyuncs.com";

/// Resolved configuration for one synchronization run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Personal access token, if any source provided one.
    pub token: Option<String>,
    /// Organization whose repositories are listed.
    pub org_id: String,
    /// API domain, fixed in production but injectable for tests.
    pub api_domain: String,
}

impl SyncConfig {
    /// Builds a configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(ORG_ID_ENV).ok(),
        )
    }

    /// Builds a configuration from explicit environment values.
    ///
    /// Empty values are treated as unset, matching shell usage where an
    /// exported-but-empty variable carries no credential.
    #[must_use]
    pub fn resolve(token: Option<String>, org_id: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            org_id: org_id
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| DEFAULT_ORG_ID.to_string()),
            api_domain: API_DOMAIN.to_string(),
        }
    }

    /// Applies command-line overrides on top of the environment values.
    #[must_use]
    pub fn with_overrides(self, token: Option<String>, org_id: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).or(self.token),
            org_id: org_id.filter(|o| !o.is_empty()).unwrap_or(self.org_id),
            api_domain: self.api_domain,
        }
    }

    /// Returns the access token, or [`SyncError::MissingToken`] when no
    /// source provided one. Called before any network activity.
    pub fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(SyncError::MissingToken)
    }
}
