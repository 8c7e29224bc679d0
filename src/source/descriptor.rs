//! Parsed source descriptor

use std::fmt;

use super::commit::is_commit_like;
use super::parser::encode_segment;

/// Hosting provider a source lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    GitHub,
}

impl Provider {
    /// Prefix used by the canonical source string
    pub fn prefix(self) -> &'static str {
        match self {
            Provider::GitHub => "github",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A single remote file addressed by repository, path and ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub provider: Provider,
    pub owner: String,
    pub repo: String,
    /// Slash-separated path inside the repository
    pub path_in_repo: String,
    /// Branch, tag or commit
    pub git_ref: String,
    /// URL the file content is downloaded from
    pub fetch_url: String,
}

impl SourceDescriptor {
    /// Canonical `github:<owner>/<repo>/<path>@<ref>` form stored in the manifest
    ///
    /// Depends only on provider, owner, repo, path and ref, never on the
    /// syntax the source was written in.
    pub fn canonical_id(&self) -> String {
        format!(
            "{}:{}/{}/{}@{}",
            self.provider.prefix(),
            self.owner,
            self.repo,
            self.path_in_repo,
            self.git_ref
        )
    }

    /// Suggested local filename (last path segment)
    pub fn filename(&self) -> &str {
        self.path_in_repo
            .rsplit('/')
            .next()
            .unwrap_or(&self.path_in_repo)
    }

    /// `owner/repo/path` without the ref, for messages
    pub fn location(&self) -> String {
        format!("{}/{}/{}", self.owner, self.repo, self.path_in_repo)
    }

    /// Whether the ref already names a commit
    pub fn is_pinned(&self) -> bool {
        is_commit_like(&self.git_ref)
    }

    /// Copy of this descriptor pinned to `commit`
    ///
    /// Only the `/<owner>/<repo>/<ref>/` segment of the fetch URL is replaced.
    pub fn pinned_to(&self, commit: &str) -> Self {
        let owner = encode_segment(&self.owner);
        let repo = encode_segment(&self.repo);
        let unresolved = format!("/{owner}/{repo}/{}/", encode_segment(&self.git_ref));
        let resolved = format!("/{owner}/{repo}/{commit}/");
        Self {
            git_ref: commit.to_string(),
            fetch_url: self.fetch_url.replacen(&unresolved, &resolved, 1),
            ..self.clone()
        }
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_id())
    }
}
