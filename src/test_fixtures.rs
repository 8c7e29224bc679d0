//! Test fixtures and fakes for reducing test setup duplication.
//!
//! The network-facing seams ([`CommitHistory`] and [`Downloader`]) get
//! in-memory fakes here so the resolver, reconciliation engine and fetch
//! pipeline can be tested without any network access.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeHistory, SHA, create_workspace};
//!
//! #[test]
//! fn my_test() {
//!     let history = FakeHistory::with_commit(SHA);
//!     let calls = history.calls();
//!     let (temp, workspace) = create_workspace();
//!     // ...
//!     assert_eq!(calls.get(), 1);
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tempfile::TempDir;

use crate::error::{Result, fetch};
use crate::fetch::Downloader;
use crate::operations::Context;
use crate::resolver::CommitHistory;
use crate::source::SourceParser;
use crate::workspace::Workspace;

/// A full 40-character commit id
pub const SHA: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

/// A different full commit id
pub const OTHER_SHA: &str = "cafebabecafebabecafebabecafebabecafebabe";

#[derive(Debug, Clone)]
enum HistoryResponse {
    Commit(String),
    Empty,
    Status(u16),
}

/// Commit history returning a canned answer and counting calls
#[derive(Debug)]
pub struct FakeHistory {
    response: HistoryResponse,
    calls: Rc<Cell<usize>>,
}

impl FakeHistory {
    /// History whose latest commit is `sha`
    pub fn with_commit(sha: &str) -> Self {
        Self::new(HistoryResponse::Commit(sha.to_string()))
    }

    /// History with no commits for any path
    pub fn empty() -> Self {
        Self::new(HistoryResponse::Empty)
    }

    /// History endpoint answering with a non-2xx status
    pub fn failing(status: u16) -> Self {
        Self::new(HistoryResponse::Status(status))
    }

    fn new(response: HistoryResponse) -> Self {
        Self {
            response,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Shared call counter, readable after the fake is boxed
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl CommitHistory for FakeHistory {
    fn latest_commit(
        &self,
        owner: &str,
        repo: &str,
        _path: &str,
        _git_ref: &str,
    ) -> Result<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        match &self.response {
            HistoryResponse::Commit(sha) => Ok(Some(sha.clone())),
            HistoryResponse::Empty => Ok(None),
            HistoryResponse::Status(status) => Err(fetch::http_status(
                format!("https://api.github.com/repos/{owner}/{repo}/commits"),
                *status,
            )),
        }
    }
}

/// Downloader serving fixed content and recording requested URLs
#[derive(Debug)]
pub struct FakeDownloader {
    content: std::result::Result<Vec<u8>, u16>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl FakeDownloader {
    /// Serve `content` for every URL
    pub fn serving(content: &[u8]) -> Self {
        Self {
            content: Ok(content.to_vec()),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Answer every URL with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            content: Err(status),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared list of requested URLs
    pub fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requests)
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.content {
            Ok(bytes) => Ok(bytes.clone()),
            Err(status) => Err(fetch::http_status(url, *status)),
        }
    }
}

/// Create a temp directory holding an initialized project
#[allow(clippy::expect_used)]
pub fn create_workspace() -> (TempDir, Workspace) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let workspace = Workspace::init(temp.path()).expect("Failed to init workspace");
    (temp, workspace)
}

/// Operation context wired to fakes and the default GitHub hosts
pub fn context(history: FakeHistory, downloader: FakeDownloader) -> Context {
    Context::new(
        SourceParser::default(),
        Box::new(history),
        Box::new(downloader),
    )
}
