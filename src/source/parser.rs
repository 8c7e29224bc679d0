//! Source parser: grammar production to descriptor

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::Result;

use super::descriptor::{Provider, SourceDescriptor};
use super::grammar::{self, ParseError, RepoPath, SourceForm};

/// Default web host for GitHub
pub const GITHUB_WEB_HOST: &str = "github.com";

/// Default raw-content host for GitHub
pub const GITHUB_RAW_HOST: &str = "raw.githubusercontent.com";

/// Bytes escaped when a decoded segment goes back into a URL path
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode one path segment
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Hosts a source URL may point at
///
/// Host names may carry a port (`localhost:8080`). Comparison is
/// case-insensitive. The raw host may be given as `http://host` to fetch
/// over plain HTTP; anything else is fetched over HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub web_host: String,
    pub raw_host: String,
    pub raw_scheme: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new(GITHUB_WEB_HOST, GITHUB_RAW_HOST)
    }
}

impl HostConfig {
    pub fn new(web_host: impl Into<String>, raw_host: impl Into<String>) -> Self {
        let web_host = web_host.into().to_ascii_lowercase();
        let raw_host = raw_host.into().to_ascii_lowercase();
        let (_, web_host) = split_scheme(&web_host);
        let (raw_scheme, raw_host) = split_scheme(&raw_host);
        Self {
            web_host: web_host.to_string(),
            raw_host: raw_host.to_string(),
            raw_scheme: raw_scheme.to_string(),
        }
    }

    pub fn is_web_host(&self, host: &str) -> bool {
        host.eq_ignore_ascii_case(&self.web_host)
    }

    pub fn is_raw_host(&self, host: &str) -> bool {
        host.eq_ignore_ascii_case(&self.raw_host)
    }

    /// Raw-content URL for a file at a ref
    pub fn raw_url(&self, location: &RepoPath, git_ref: &str) -> String {
        let path = location
            .path
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{}://{}/{}/{}/{}/{}",
            self.raw_scheme,
            self.raw_host,
            encode_segment(&location.owner),
            encode_segment(&location.repo),
            encode_segment(git_ref),
            path
        )
    }
}

/// Split an optional `http://` or `https://` prefix off a host
fn split_scheme(host: &str) -> (&str, &str) {
    for scheme in ["https", "http"] {
        if let Some(rest) = host
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("://"))
        {
            return (scheme, rest.trim_end_matches('/'));
        }
    }
    ("https", host.trim_end_matches('/'))
}

/// Turns source strings into [`SourceDescriptor`]s
#[derive(Debug, Clone, Default)]
pub struct SourceParser {
    hosts: HostConfig,
}

impl SourceParser {
    pub fn new(hosts: HostConfig) -> Self {
        Self { hosts }
    }

    /// Parse a source string (shorthand or URL) into a descriptor
    pub fn parse(&self, input: &str) -> Result<SourceDescriptor> {
        self.parse_form(input)
            .map_err(|reason| crate::error::source::parse_failed(input.trim(), reason))
    }

    fn parse_form(&self, input: &str) -> std::result::Result<SourceDescriptor, ParseError> {
        let (location, git_ref, fetch_url) = match grammar::classify(input, &self.hosts)? {
            SourceForm::RawUrl {
                location,
                git_ref,
                url,
            } => (location, git_ref, url),
            SourceForm::Shorthand { location, git_ref } | SourceForm::BlobUrl { location, git_ref } => {
                let url = self.hosts.raw_url(&location, &git_ref);
                (location, git_ref, url)
            }
            SourceForm::AmbiguousUrl { location, git_ref } => {
                // No default-branch lookup: the caller has to say which ref.
                let git_ref = git_ref.ok_or(ParseError::AmbiguousRef)?;
                let url = self.hosts.raw_url(&location, &git_ref);
                (location, git_ref, url)
            }
        };

        Ok(SourceDescriptor {
            provider: Provider::GitHub,
            owner: location.owner,
            repo: location.repo,
            path_in_repo: location.path,
            git_ref,
            fetch_url,
        })
    }
}

/// Parse with the default GitHub hosts
#[cfg(test)]
pub fn parse(input: &str) -> Result<SourceDescriptor> {
    SourceParser::default().parse(input)
}
