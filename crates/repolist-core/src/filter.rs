// SPDX-License-Identifier: Apache-2.0

//! Repository filtering.
//!
//! Drops archived and demo repositories, and optionally restricts the list
//! to repositories matching a keyword. Ordering is established later by the
//! renderer; this stage preserves input order as-is.

use crate::record::RepositoryRecord;

/// Filters the fetched records.
///
/// A record survives when it is neither archived nor a demo project, and,
/// if a non-empty `filter` keyword is given, when its full path either
/// starts with `"<namespace_id>/"` or contains the keyword
/// case-insensitively. An absent or empty keyword excludes nothing.
#[must_use]
pub fn filter_repos(
    records: Vec<RepositoryRecord>,
    filter: Option<&str>,
) -> Vec<RepositoryRecord> {
    records
        .into_iter()
        .filter(|record| retain(record, filter))
        .collect()
}

fn retain(record: &RepositoryRecord, filter: Option<&str>) -> bool {
    if record.archived || record.demo_project {
        return false;
    }

    match filter {
        Some(keyword) if !keyword.is_empty() => {
            let path = &record.path_with_namespace;
            path.starts_with(&format!("{}/", record.namespace_id))
                || path.to_lowercase().contains(&keyword.to_lowercase())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, archived: bool, demo_project: bool) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            path: format!("grp/{name}"),
            path_with_namespace: format!("ns/grp/{name}"),
            namespace_id: "12345".to_string(),
            web_url: None,
            archived,
            demo_project,
        }
    }

    #[test]
    fn test_drops_archived_and_demo_repos() {
        let records = vec![
            record("keep", false, false),
            record("archived", true, false),
            record("demo", false, true),
            record("both", true, true),
        ];
        let filtered = filter_repos(records, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "keep");
    }

    #[test]
    fn test_keyword_matches_case_insensitively() {
        let mut a = record("a", false, false);
        a.path_with_namespace = "ns/Tools/a".to_string();
        let mut b = record("b", false, false);
        b.path_with_namespace = "ns/infra/b".to_string();

        let filtered = filter_repos(vec![a, b], Some("tools"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "a");
    }

    #[test]
    fn test_namespace_prefix_bypasses_keyword() {
        let mut r = record("a", false, false);
        r.path_with_namespace = "12345/grp/a".to_string();

        let filtered = filter_repos(vec![r], Some("nomatch"));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_empty_keyword_excludes_nothing() {
        let records = vec![record("a", false, false), record("b", false, false)];
        assert_eq!(filter_repos(records.clone(), Some("")).len(), 2);
        assert_eq!(filter_repos(records, None).len(), 2);
    }

    #[test]
    fn test_keyword_still_drops_archived() {
        let mut r = record("a", true, false);
        r.path_with_namespace = "12345/grp/a".to_string();
        assert!(filter_repos(vec![r], Some("grp")).is_empty());
    }
}
