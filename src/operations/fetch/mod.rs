//! Fetch pipeline for a single dependency
//!
//! parse -> resolve -> download -> integrity -> write file -> save manifest
//! -> save lockfile.
//!
//! A failed resolution is not fatal: the unresolved ref is fetched instead and
//! the lockfile records a content hash. Everything from the file write onward
//! is guarded by a [`Transaction`], so a failed save leaves the vendored file
//! as it was.


use crate::config::{Integrity, LockEntry, ManifestEntry};
use crate::error::{FiledepError, Result, Step};
use crate::fetch::Downloader;
use crate::resolver::RefResolver;
use crate::source::{SourceDescriptor, SourceParser};
use crate::transaction::Transaction;
use crate::workspace::Workspace;

/// What to fetch and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub name: String,

    /// Source string in any accepted form
    pub source: String,

    /// Local path, relative to the project root
    pub local_path: String,

    /// Write the manifest entry too (only `add` declares dependencies)
    pub record_manifest: bool,
}

/// Result of a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub name: String,

    /// Descriptor as declared, before pinning
    pub declared: SourceDescriptor,

    /// Lock entry that was written
    pub locked: LockEntry,

    /// Number of bytes written
    pub size: usize,
}

impl FetchOutcome {
    /// Whether the content came from a resolved commit
    pub fn is_pinned(&self) -> bool {
        self.locked.integrity.is_commit()
    }
}

/// Runs the fetch pipeline
pub struct Fetcher<'a> {
    parser: &'a SourceParser,
    resolver: &'a RefResolver,
    downloader: &'a dyn Downloader,
}

impl<'a> Fetcher<'a> {
    pub fn new(
        parser: &'a SourceParser,
        resolver: &'a RefResolver,
        downloader: &'a dyn Downloader,
    ) -> Self {
        Self {
            parser,
            resolver,
            downloader,
        }
    }

    /// Fetch one dependency into the workspace
    ///
    /// Errors are tagged with the dependency name and the failing step. When
    /// the lockfile cannot be saved after the manifest was, the error says so.
    pub fn fetch(&self, workspace: &mut Workspace, request: &FetchRequest) -> Result<FetchOutcome> {
        let name = request.name.as_str();

        let declared = self
            .parser
            .parse(&request.source)
            .map_err(|e| e.in_step(name, Step::Parse))?;

        let file_path = workspace
            .resolve_local_path(name, &request.local_path)
            .map_err(|e| e.in_step(name, Step::Write))?;

        let (target, commit) = match self.resolver.resolve(&declared) {
            Ok(pinned) => {
                let commit = pinned.git_ref.clone();
                (pinned, Some(commit))
            }
            Err(err) => {
                tracing::warn!(
                    name,
                    source = %declared,
                    error = %err,
                    "could not pin to a commit, fetching the unresolved ref"
                );
                (declared.clone(), None)
            }
        };

        let content = self
            .downloader
            .download(&target.fetch_url)
            .map_err(|e| e.in_step(name, Step::Download))?;

        let integrity = match commit {
            Some(commit) => Integrity::Commit(commit),
            None => Integrity::of_content(&content),
        };

        let mut transaction = Transaction::new();
        transaction
            .write_file(&file_path, &content)
            .map_err(|e| e.in_step(name, Step::Write))?;

        if request.record_manifest {
            let entry = ManifestEntry::new(declared.canonical_id(), &request.local_path);
            save_manifest_entry(workspace, name, entry)?;
        }

        let locked = LockEntry {
            url: target.fetch_url.clone(),
            path: request.local_path.clone(),
            integrity,
        };
        save_lock_entry(workspace, name, locked.clone(), request.record_manifest)?;

        transaction.commit();
        tracing::debug!(name, url = %locked.url, integrity = %locked.integrity, "fetched");

        Ok(FetchOutcome {
            name: name.to_string(),
            declared,
            locked,
            size: content.len(),
        })
    }
}

/// Upsert and persist a manifest entry; memory is restored if saving fails
fn save_manifest_entry(workspace: &mut Workspace, name: &str, entry: ManifestEntry) -> Result<()> {
    let previous = workspace.manifest.get(name).cloned();
    workspace.manifest.upsert(name, entry);

    workspace.save_manifest().map_err(|err| {
        match previous {
            Some(previous) => workspace.manifest.upsert(name, previous),
            None => {
                workspace.manifest.remove(name);
            }
        }
        err.in_step(name, Step::SaveManifest)
    })
}

/// Upsert and persist a lock entry; memory is restored if saving fails
fn save_lock_entry(
    workspace: &mut Workspace,
    name: &str,
    entry: LockEntry,
    manifest_saved: bool,
) -> Result<()> {
    let previous = workspace.lockfile.get(name).cloned();
    workspace.lockfile.upsert(name, entry);

    workspace.save_lockfile().map_err(|err| {
        match previous {
            Some(previous) => workspace.lockfile.upsert(name, previous),
            None => {
                workspace.lockfile.remove(name);
            }
        }
        let err = if manifest_saved {
            FiledepError::LockfileSaveAfterManifest {
                reason: err.to_string(),
            }
        } else {
            err
        };
        err.in_step(name, Step::SaveLockfile)
    })
}
