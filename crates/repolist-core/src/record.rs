// SPDX-License-Identifier: Apache-2.0

//! Repository records returned by the Codeup listing API.

use serde::{Deserialize, Deserializer};

/// Group assigned to repositories whose path has fewer than two segments.
pub const FALLBACK_GROUP: &str = "other";

/// A repository as returned by the organization listing endpoint.
///
/// `name` and `path` are required; everything else defaults when absent so
/// that sparse entries survive decoding. An entry missing the required
/// fields is treated as malformed and skipped by the API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// Display name, used for sorting within a group.
    pub name: String,
    /// Repository path, used as the local directory name.
    pub path: String,
    /// Full slash-delimited path including the namespace.
    #[serde(default)]
    pub path_with_namespace: String,
    /// Owning namespace identifier. The API serves this as a string or a
    /// number depending on endpoint version.
    #[serde(default, deserialize_with = "namespace_id_compat")]
    pub namespace_id: String,
    /// Web URL of the repository, if published.
    #[serde(default)]
    pub web_url: Option<String>,
    /// Whether the repository has been archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether the repository is a demo project.
    #[serde(default)]
    pub demo_project: bool,
}

impl RepositoryRecord {
    /// Returns the namespace group: the second slash-delimited segment of
    /// `path_with_namespace`, or [`FALLBACK_GROUP`] when the path has fewer
    /// than two segments.
    #[must_use]
    pub fn namespace_group(&self) -> &str {
        let mut segments = self.path_with_namespace.split('/');
        match (segments.next(), segments.next()) {
            (Some(_), Some(group)) => group,
            _ => FALLBACK_GROUP,
        }
    }

    /// Returns the git clone URL: `web_url` with a `.git` suffix, or an
    /// empty string when `web_url` is absent or empty.
    #[must_use]
    pub fn clone_url(&self) -> String {
        match self.web_url.as_deref() {
            Some(url) if !url.is_empty() => format!("{url}.git"),
            _ => String::new(),
        }
    }
}

/// Accepts a namespace id serialized as a JSON string or number.
fn namespace_id_compat<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
