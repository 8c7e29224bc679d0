//! Reference resolution
//!
//! Pins a descriptor whose ref is a branch or tag to the most recent commit
//! that touched the file on that ref. Refs that already look like commits are
//! used as-is without any network access.
//!
//! ## Module Organization
//!
//! - `mod.rs`: the [`CommitHistory`] seam and [`RefResolver`]
//! - `github.rs`: [`GitHubHistory`], the GitHub REST implementation

pub mod github;

pub use github::GitHubHistory;

use crate::error::{Result, fetch};
use crate::source::{SourceDescriptor, is_commit_like};

/// Lists commits affecting a path
pub trait CommitHistory {
    /// Most recent commit touching `path` on `git_ref`, `None` when there is none
    fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<Option<String>>;
}

/// Resolves branch and tag refs to commits
pub struct RefResolver {
    history: Box<dyn CommitHistory>,
}

impl RefResolver {
    pub fn new(history: Box<dyn CommitHistory>) -> Self {
        Self { history }
    }

    /// Pin `descriptor` to a commit
    ///
    /// Commit-like refs are returned unchanged. Otherwise exactly one history
    /// request is made; an empty history is an error, as are transport and
    /// decode failures. Whether to fall back to the unresolved ref is the
    /// caller's decision.
    pub fn resolve(&self, descriptor: &SourceDescriptor) -> Result<SourceDescriptor> {
        if descriptor.is_pinned() {
            tracing::debug!(source = %descriptor, "ref is already a commit");
            return Ok(descriptor.clone());
        }

        let latest = self.history.latest_commit(
            &descriptor.owner,
            &descriptor.repo,
            &descriptor.path_in_repo,
            &descriptor.git_ref,
        )?;

        let Some(commit) = latest else {
            return Err(fetch::resolution_failed(
                descriptor.location(),
                &descriptor.git_ref,
                "no commits found for this path at this ref",
            ));
        };

        if !is_commit_like(&commit) {
            return Err(fetch::resolution_failed(
                descriptor.location(),
                &descriptor.git_ref,
                format!("history returned an unexpected commit id '{commit}'"),
            ));
        }

        tracing::debug!(source = %descriptor, %commit, "resolved ref");
        Ok(descriptor.pinned_to(&commit))
    }
}
