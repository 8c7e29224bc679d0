//! GitHub commit-history lookups
//!
//! Uses `GET /repos/{owner}/{repo}/commits?path=..&sha=..&per_page=1`, which
//! lists the commits touching a path on a ref, most recent first.

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::config::Settings;
use crate::error::{Result, fetch};
use crate::fetch::http;

use super::CommitHistory;

/// One element of the commit list response
#[derive(Debug, Deserialize)]
struct CommitSummary {
    sha: String,
}

/// Commit history backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubHistory {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubHistory {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http::build_client(settings)?,
            api_base: settings.api_base.clone(),
            token: settings.token.clone(),
        })
    }

    /// URL of the commit list for a path on a ref, limited to one result
    pub fn commits_url(&self, owner: &str, repo: &str, path: &str, git_ref: &str) -> Result<Url> {
        let base = format!("{}/repos/{owner}/{repo}/commits", self.api_base);
        let mut url =
            Url::parse(&base).map_err(|e| fetch::request_failed(&base, e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("path", path)
            .append_pair("sha", git_ref)
            .append_pair("per_page", "1");
        Ok(url)
    }
}

impl CommitHistory for GitHubHistory {
    fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<Option<String>> {
        let url = self.commits_url(owner, repo, path, git_ref)?;
        tracing::debug!(%url, "querying commit history");

        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = http::send(request, url.as_str())?;
        let commits: Vec<CommitSummary> = response
            .json()
            .map_err(|e| fetch::request_failed(url.as_str(), http::interpret_error(&e)))?;

        Ok(commits.into_iter().next().map(|c| c.sha))
    }
}
