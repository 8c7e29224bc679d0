//! Runtime settings
//!
//! Settings come from global command-line flags, each with an environment
//! variable fallback handled by clap. Nothing here is process-global: the
//! parser, resolver and downloader receive the values they need explicitly.

use std::time::Duration;

use crate::source::HostConfig;

/// Default GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default network timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("filedep/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the network-facing components
#[derive(Debug, Clone)]
pub struct Settings {
    /// Hosts source URLs may point at
    pub hosts: HostConfig,

    /// Base URL of the commit-history API
    pub api_base: String,

    /// Client-side timeout for every request
    pub timeout: Duration,

    /// Bearer token for the commit-history API
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hosts: HostConfig::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl Settings {
    /// Build settings from the global CLI options
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            hosts: HostConfig::new(&cli.web_host, &cli.raw_host),
            api_base: cli.github_api.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(cli.timeout),
            token: cli.github_token.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}
