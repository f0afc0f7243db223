// SPDX-License-Identifier: Apache-2.0

//! The synchronization pipeline: fetch, filter, group, render, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use console::style;
use tracing::debug;

use repolist_core::{
    CodeupClient, MANIFEST_FILE_NAME, SyncConfig, entry_count, filter_repos, render_manifest,
    write_manifest,
};

use crate::cli::Cli;

/// Runs one synchronization pass.
///
/// The credential is resolved before any network activity so a missing
/// token aborts without an API call.
pub async fn run(cli: Cli) -> Result<()> {
    let config = SyncConfig::from_env().with_overrides(cli.token, cli.org_id);
    let token = config.require_token()?;
    debug!(org_id = %config.org_id, "configuration resolved");

    let client = CodeupClient::new(token, &config.org_id, &config.api_domain)?;

    println!(
        "{}",
        style("Fetching repository list from Codeup...").bold()
    );
    let repos = client.list_repositories().await?;
    println!("  found {} repositories", repos.len());

    let filtered = filter_repos(repos, cli.filter.as_deref());
    println!(
        "  {} remaining after excluding archived and demo projects",
        filtered.len()
    );

    let include_groups = if cli.all {
        None
    } else {
        Some(cli.groups.as_slice())
    };
    let manifest = render_manifest(&filtered, include_groups, Local::now());

    deliver(&manifest_path()?, &manifest, cli.dry_run)
}

/// Emits the rendered manifest: a stdout preview under dry-run, otherwise
/// an atomic write to `path`. The preview text and the written text are
/// the same string.
fn deliver(path: &Path, manifest: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!();
        println!("{}", style("Preview of repos-list.txt:").bold());
        println!();
        println!("{manifest}");
        return Ok(());
    }

    write_manifest(path, manifest)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!();
    println!(
        "{} {} ({} entries)",
        style("Updated").green().bold(),
        path.display(),
        entry_count(manifest)
    );
    Ok(())
}

/// Destination of the manifest: `repos-list.txt` one directory above the
/// executable's own directory.
fn manifest_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the executable")?;
    let root = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| anyhow!("Executable path {} has no parent directory", exe.display()))?;
    Ok(root.join(MANIFEST_FILE_NAME))
}
