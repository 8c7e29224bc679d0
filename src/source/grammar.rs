//! Source string grammar
//!
//! A raw source string is classified into exactly one [`SourceForm`] before any
//! descriptor is built:
//!
//! ```text
//! Shorthand     github:<owner>/<repo>/<path...>@<ref>
//! RawUrl        https://<raw-host>/<owner>/<repo>/<ref>/<path...>
//! BlobUrl       https://<web-host>/<owner>/<repo>/(blob|raw)/<ref>/<path...>
//! AmbiguousUrl  https://<web-host>/<owner>/<repo>/<path...>[@<ref>]
//! ```
//!
//! `https://<web-host>/<owner>/<repo>/tree/...` is a directory link and is
//! rejected during classification.

use percent_encoding::percent_decode_str;
use reqwest::Url;
use thiserror::Error;

use super::parser::HostConfig;

/// Prefix of the shorthand form
pub const SHORTHAND_PREFIX: &str = "github:";

/// Why a source string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("source is empty")]
    Empty,

    #[error("missing ref: append @<branch, tag or commit>")]
    MissingRef,

    #[error("empty ref after '@'")]
    EmptyRef,

    #[error("owner/repo/path required")]
    MissingSegments,

    #[error("{0} must not be empty")]
    EmptyComponent(&'static str),

    #[error("ref '{0}' must not contain '/'")]
    RefContainsSlash(String),

    #[error("'{0}' is not allowed as a path segment")]
    InvalidSegment(String),

    #[error("points to a directory, not a file")]
    Directory,

    #[error("tree URLs link to a directory, not a file; use a /blob/ or /raw/ URL")]
    TreeUrl,

    #[error("ambiguous URL, ref required: use /blob/<ref>/<path> or append @<ref>")]
    AmbiguousRef,

    #[error("raw URLs must look like /<owner>/<repo>/<ref>/<path>")]
    RawTooShort,

    #[error("unsupported host '{0}'")]
    UnsupportedHost(String),

    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("query strings and fragments are not supported")]
    QueryOrFragment,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("path segment '{0}' is not valid percent-encoded UTF-8")]
    InvalidEncoding(String),
}

/// Owner, repository and in-repository path shared by every form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub owner: String,
    pub repo: String,
    pub path: String,
}

/// One production of the source grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceForm {
    /// `github:<owner>/<repo>/<path>@<ref>`
    Shorthand { location: RepoPath, git_ref: String },
    /// Raw-content URL; the URL itself is fetchable
    RawUrl {
        location: RepoPath,
        git_ref: String,
        url: String,
    },
    /// Web URL with a `/blob/<ref>/` or `/raw/<ref>/` marker
    BlobUrl { location: RepoPath, git_ref: String },
    /// Web URL without a marker; the ref may be appended to the path with `@`
    AmbiguousUrl {
        location: RepoPath,
        git_ref: Option<String>,
    },
}

/// Classify `input` into a grammar production
pub fn classify(input: &str, hosts: &HostConfig) -> Result<SourceForm, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(rest) = input.strip_prefix(SHORTHAND_PREFIX) {
        return shorthand(rest);
    }

    if input.contains("://") {
        return url_form(input, hosts);
    }

    Err(ParseError::UnsupportedScheme(
        input.split(':').next().unwrap_or(input).to_string(),
    ))
}

fn shorthand(rest: &str) -> Result<SourceForm, ParseError> {
    // The ref separator is the last '@'; earlier ones belong to the path.
    let at = rest.rfind('@').ok_or(ParseError::MissingRef)?;
    let (before, git_ref) = (&rest[..at], &rest[at + 1..]);
    let git_ref = validate_ref(git_ref)?;

    let mut parts = before.splitn(3, '/');
    let (Some(owner), Some(repo), Some(path)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MissingSegments);
    };

    Ok(SourceForm::Shorthand {
        location: repo_path(owner, repo, path)?,
        git_ref,
    })
}

fn url_form(input: &str, hosts: &HostConfig) -> Result<SourceForm, ParseError> {
    let url = Url::parse(input).map_err(|e| ParseError::InvalidUrl(e.to_string()))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ParseError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ParseError::QueryOrFragment);
    }

    let host = host_key(&url);
    let decoded = decode_segments(&url)?;
    let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

    if hosts.is_raw_host(&host) {
        raw_url(input, &segments)
    } else if hosts.is_web_host(&host) {
        web_url(&segments)
    } else {
        Err(ParseError::UnsupportedHost(host))
    }
}

fn raw_url(input: &str, segments: &[&str]) -> Result<SourceForm, ParseError> {
    reject_directory(segments)?;
    let [owner, repo, git_ref, path @ ..] = segments else {
        return Err(ParseError::RawTooShort);
    };
    if path.is_empty() {
        return Err(ParseError::RawTooShort);
    }

    Ok(SourceForm::RawUrl {
        location: repo_path(owner, repo, &path.join("/"))?,
        git_ref: validate_ref(git_ref)?,
        url: input.to_string(),
    })
}

fn web_url(segments: &[&str]) -> Result<SourceForm, ParseError> {
    if let [_, _, "tree", ..] = segments {
        return Err(ParseError::TreeUrl);
    }
    reject_directory(segments)?;

    match segments {
        [owner, repo, "blob" | "raw", git_ref, path @ ..] if !path.is_empty() => {
            Ok(SourceForm::BlobUrl {
                location: repo_path(owner, repo, &path.join("/"))?,
                git_ref: validate_ref(git_ref)?,
            })
        }
        [_, _, "blob" | "raw", ..] => Err(ParseError::MissingSegments),
        [owner, repo, path @ ..] if !path.is_empty() => {
            let (path, git_ref) = split_trailing_ref(path)?;
            Ok(SourceForm::AmbiguousUrl {
                location: repo_path(owner, repo, &path)?,
                git_ref,
            })
        }
        _ => Err(ParseError::MissingSegments),
    }
}

/// Percent-decoded path segments of `url`
///
/// A segment decoding to something containing '/' would change the shape of
/// the path and is rejected.
fn decode_segments(url: &Url) -> Result<Vec<String>, ParseError> {
    let Some(segments) = url.path_segments() else {
        return Ok(Vec::new());
    };
    segments
        .map(|raw| {
            let decoded = percent_decode_str(raw)
                .decode_utf8()
                .map_err(|_| ParseError::InvalidEncoding(raw.to_string()))?;
            if decoded.contains('/') {
                return Err(ParseError::InvalidEncoding(raw.to_string()));
            }
            Ok(decoded.into_owned())
        })
        .collect()
}

/// A trailing slash leaves an empty final segment
fn reject_directory(segments: &[&str]) -> Result<(), ParseError> {
    if segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        return Err(ParseError::Directory);
    }
    Ok(())
}

/// Split a trailing `@<ref>` off the final path segment, if present
fn split_trailing_ref(path: &[&str]) -> Result<(String, Option<String>), ParseError> {
    let joined = path.join("/");
    let last = path.last().copied().unwrap_or_default();
    let Some(at) = last.rfind('@') else {
        return Ok((joined, None));
    };

    let git_ref = validate_ref(&last[at + 1..])?;
    let cut = joined.len() - (last.len() - at);
    Ok((joined[..cut].to_string(), Some(git_ref)))
}

fn host_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    }
}

fn validate_ref(git_ref: &str) -> Result<String, ParseError> {
    if git_ref.is_empty() {
        return Err(ParseError::EmptyRef);
    }
    if git_ref.contains('/') {
        return Err(ParseError::RefContainsSlash(git_ref.to_string()));
    }
    Ok(git_ref.to_string())
}

fn repo_path(owner: &str, repo: &str, path: &str) -> Result<RepoPath, ParseError> {
    if owner.is_empty() {
        return Err(ParseError::EmptyComponent("owner"));
    }
    if repo.is_empty() {
        return Err(ParseError::EmptyComponent("repo"));
    }
    validate_path(path)?;

    Ok(RepoPath {
        owner: owner.to_string(),
        repo: repo.to_string(),
        path: path.to_string(),
    })
}

fn validate_path(path: &str) -> Result<(), ParseError> {
    if path.is_empty() {
        return Err(ParseError::EmptyComponent("path"));
    }
    if path.ends_with('/') {
        return Err(ParseError::Directory);
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(ParseError::EmptyComponent("path segment")),
            "." | ".." => return Err(ParseError::InvalidSegment(segment.to_string())),
            _ => {}
        }
    }
    Ok(())
}
