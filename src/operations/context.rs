//! Shared services for operations
//!
//! [`Context`] owns the parser, the ref resolver and the downloader so each
//! operation borrows them instead of building its own.

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::{Downloader, HttpDownloader};
use crate::reconcile::Reconciler;
use crate::resolver::{CommitHistory, GitHubHistory, RefResolver};
use crate::source::SourceParser;

use super::fetch::Fetcher;

/// Parser, resolver and downloader used by every operation
pub struct Context {
    pub parser: SourceParser,
    pub resolver: RefResolver,
    pub downloader: Box<dyn Downloader>,
}

impl Context {
    pub fn new(
        parser: SourceParser,
        history: Box<dyn CommitHistory>,
        downloader: Box<dyn Downloader>,
    ) -> Self {
        Self {
            parser,
            resolver: RefResolver::new(history),
            downloader,
        }
    }

    /// Context talking to GitHub with the given settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            SourceParser::new(settings.hosts.clone()),
            Box::new(GitHubHistory::new(settings)?),
            Box::new(HttpDownloader::new(settings)?),
        ))
    }

    pub fn fetcher(&self) -> Fetcher<'_> {
        Fetcher::new(&self.parser, &self.resolver, self.downloader.as_ref())
    }

    pub fn reconciler(&self) -> Reconciler<'_> {
        Reconciler::new(&self.parser, &self.resolver)
    }
}
