// SPDX-License-Identifier: Apache-2.0

//! Namespace grouping and manifest rendering.
//!
//! Partitions the filtered repositories by namespace group and renders the
//! `repos-list.txt` text. Output is deterministic for a given input: groups
//! are ordered by a `BTreeMap`, members are sorted by name, and the only
//! run-dependent line is the generation timestamp, which is passed in by
//! the caller.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::Result;
use crate::error::SyncError;
use crate::record::RepositoryRecord;

/// File name of the generated manifest.
pub const MANIFEST_FILE_NAME: &str = "repos-list.txt";

/// Title line of the manifest header.
const MANIFEST_TITLE: &str = "# Repository list (auto-generated)";

/// Format comment of the manifest header.
const FORMAT_COMMENT: &str = "# Format: <directory>|<git URL>";

/// Renders the manifest text.
///
/// When `include_groups` is `Some`, repositories whose namespace group is
/// not in the list are dropped; `None` includes every group. Each surviving
/// repository appears exactly once, under exactly one group header, with
/// groups and members both in ascending lexicographic order.
#[must_use]
pub fn render_manifest(
    records: &[RepositoryRecord],
    include_groups: Option<&[String]>,
    generated_at: DateTime<Local>,
) -> String {
    let mut lines = vec![
        MANIFEST_TITLE.to_string(),
        format!("# Updated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        FORMAT_COMMENT.to_string(),
        String::new(),
    ];

    let mut groups: BTreeMap<&str, Vec<&RepositoryRecord>> = BTreeMap::new();
    for record in records {
        let group = record.namespace_group();
        if let Some(allowed) = include_groups
            && !allowed.iter().any(|g| g == group)
        {
            continue;
        }
        groups.entry(group).or_default().push(record);
    }

    for (group, members) in &mut groups {
        members.sort_by(|a, b| a.name.cmp(&b.name));
        lines.push(format!("# === {group} ==="));
        for record in &*members {
            lines.push(format!("{}|{}", record.path, record.clone_url()));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Writes the manifest all-or-nothing: the content lands in a temporary
/// file in the destination directory and is renamed over the target, so a
/// failed run never leaves a partial manifest behind.
pub fn write_manifest(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("manifest path {} has no parent directory", path.display()),
        )
    })?;
    debug!(path = %path.display(), "writing manifest");

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| SyncError::Io(e.error))?;
    Ok(())
}

/// Counts the manifest's entry lines: everything that is neither a comment
/// nor blank. Used for the post-write summary.
#[must_use]
pub fn entry_count(manifest: &str) -> usize {
    manifest
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}
