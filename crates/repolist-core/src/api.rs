// SPDX-License-Identifier: Apache-2.0

//! Codeup repository listing client.
//!
//! Performs a single authenticated page request against the organization's
//! repository-listing endpoint. There is no retry and no pagination past the
//! first page; any transport failure, timeout, or unparsable body is fatal
//! to the run.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::Result;
use crate::error::SyncError;
use crate::record::RepositoryRecord;

/// Authentication header expected by the Codeup OpenAPI.
const TOKEN_HEADER: &str = "x-yunxiao-token";

/// Timeout for the single listing request.
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Results requested per page; only the first page is fetched.
const PAGE_SIZE: u32 = 100;

/// Client for the Codeup organization repository listing.
///
/// Holds the HTTP client, credential, and organization for one run.
#[derive(Debug)]
pub struct CodeupClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// Personal access token sent in the authentication header.
    token: String,
    /// Organization whose repositories are listed.
    org_id: String,
    /// API domain, injectable for tests.
    api_domain: String,
}

impl CodeupClient {
    /// Creates a new client with a 30 second request timeout.
    pub fn new(token: &str, org_id: &str, api_domain: &str) -> Result<Self> {
        let http = Client::builder().timeout(API_TIMEOUT).build()?;
        Ok(Self {
            http,
            token: token.to_string(),
            org_id: org_id.to_string(),
            api_domain: api_domain.to_string(),
        })
    }

    /// URL of the first listing page.
    fn listing_url(&self) -> String {
        format!(
            "https://{}/oapi/v1/codeup/organizations/{}/repositories?page=1&perPage={PAGE_SIZE}",
            self.api_domain, self.org_id
        )
    }

    /// Fetches the first page of the organization's repositories.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or timeout, on a non-2xx
    /// status, or when the body is not a JSON array. Individual array
    /// elements that do not decode as repository records are skipped with
    /// a warning rather than aborting the run.
    pub async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>> {
        let url = self.listing_url();
        debug!(%url, "requesting repository listing");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SyncError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        decode_records(&body)
    }
}

/// Decodes a listing response body into repository records.
///
/// The body must be a top-level JSON array. Elements that are not
/// well-formed repository objects are logged and dropped.
fn decode_records(body: &str) -> Result<Vec<RepositoryRecord>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(SyncError::InvalidResponse)?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<RepositoryRecord>(entry) {
            Ok(record) => records.push(record),
            Err(err) => warn!(%err, "skipping malformed repository entry"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_includes_org_and_page() {
        let client = CodeupClient::new("t", "my-org", "api.example.com").unwrap();
        assert_eq!(
            client.listing_url(),
            "https://api.example.com/oapi/v1/codeup/organizations/my-org/repositories?page=1&perPage=100"
        );
    }

    #[test]
    fn test_decode_records_parses_array() {
        let body = r#"[
            {"name": "a", "path": "grp/a", "pathWithNamespace": "ns/grp/a"},
            {"name": "b", "path": "grp/b", "pathWithNamespace": "ns/grp/b"}
        ]"#;
        let records = decode_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a");
        assert_eq!(records[1].path_with_namespace, "ns/grp/b");
    }

    #[test]
    fn test_decode_records_skips_malformed_elements() {
        let body = r#"[
            {"name": "a", "path": "grp/a"},
            "not an object",
            {"path": "missing-name"},
            {"name": "b", "path": "grp/b"}
        ]"#;
        let records = decode_records(body).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_decode_records_rejects_non_array_body() {
        assert!(matches!(
            decode_records(r#"{"error": "forbidden"}"#),
            Err(SyncError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_decode_records_empty_array() {
        assert!(decode_records("[]").unwrap().is_empty());
    }
}
