//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - install: Install and update command arguments
//! - check: Check command arguments
//! - remove: Remove command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::settings::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use crate::source::parser::{GITHUB_RAW_HOST, GITHUB_WEB_HOST};

pub mod add;
pub mod check;
pub mod completions;
pub mod install;
pub mod list;
pub mod remove;

pub use add::AddArgs;
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use install::{InstallArgs, UpdateArgs};
pub use list::ListArgs;
pub use remove::RemoveArgs;

/// filedep - single-file dependency manager
///
/// Vendor individual files from GitHub repositories, pinned to commits in a lockfile.
#[derive(Parser, Debug)]
#[command(
    name = "filedep",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Single-file dependency manager",
    long_about = "filedep vendors individual files from GitHub repositories into your project. \
                  Dependencies are declared in filedep.toml and pinned to commits in filedep.lock.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  filedep init                                        \x1b[90m# Create filedep.toml\x1b[0m\n   \
                  filedep add github:rxi/json.lua/json.lua@master     \x1b[90m# Vendor a file\x1b[0m\n   \
                  filedep install                                     \x1b[90m# Fetch missing or stale files\x1b[0m\n   \
                  filedep check                                       \x1b[90m# Report what needs fetching\x1b[0m\n   \
                  filedep update json                                 \x1b[90m# Re-fetch a dependency\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory, searched upward)
    #[arg(long, short = 'w', global = true, env = "FILEDEP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// GitHub REST API base URL used to resolve refs to commits
    #[arg(
        long,
        global = true,
        env = "FILEDEP_GITHUB_API",
        default_value = DEFAULT_API_BASE,
        value_name = "URL"
    )]
    pub github_api: String,

    /// Host of GitHub web URLs accepted as sources
    #[arg(
        long,
        global = true,
        env = "FILEDEP_WEB_HOST",
        default_value = GITHUB_WEB_HOST,
        value_name = "HOST"
    )]
    pub web_host: String,

    /// Host serving raw file content (prefix with http:// to fetch over plain HTTP)
    #[arg(
        long,
        global = true,
        env = "FILEDEP_RAW_HOST",
        default_value = GITHUB_RAW_HOST,
        value_name = "HOST"
    )]
    pub raw_host: String,

    /// Network timeout in seconds
    #[arg(
        long,
        global = true,
        env = "FILEDEP_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        value_name = "SECS"
    )]
    pub timeout: u64,

    /// Token for the GitHub API (raises rate limits, grants private repo access)
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty filedep.toml
    Init,

    /// Declare a dependency and fetch it
    Add(AddArgs),

    /// Fetch dependencies that are missing or out of date
    Install(InstallArgs),

    /// Re-fetch dependencies from their declared refs
    Update(UpdateArgs),

    /// Report which dependencies need fetching
    Check(CheckArgs),

    /// Remove a dependency and its vendored file
    Remove(RemoveArgs),

    /// List declared dependencies
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
