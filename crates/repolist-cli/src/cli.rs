// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for repolist.
//!
//! Uses clap's derive API. The tool is a single-shot synchronizer, so
//! there are no subcommands; every option configures the one pipeline run.

use clap::Parser;

/// Group included in the manifest when `--groups` is not given.
pub const DEFAULT_GROUP: &str = "ecomind";

/// repolist - Codeup repository manifest synchronization.
///
/// Lists the organization's repositories, filters out archived and demo
/// entries, and writes a grouped repos-list.txt manifest next to the
/// installation directory.
#[derive(Parser)]
#[command(name = "repolist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Codeup personal access token (defaults to $CODEUP_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Codeup organization id (defaults to $CODEUP_ORG_ID)
    #[arg(long)]
    pub org_id: Option<String>,

    /// Print the manifest to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Namespace groups to include in the manifest
    #[arg(long, num_args = 1.., default_values_t = [DEFAULT_GROUP.to_string()])]
    pub groups: Vec<String>,

    /// Include every group, overriding --groups
    #[arg(long)]
    pub all: bool,

    /// Keep only repositories whose path matches this keyword
    /// (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,

    /// Enable verbose (debug-level) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
