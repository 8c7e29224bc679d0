//! Rollback guard for vendored file writes
//!
//! A fetch writes the downloaded file before persisting the manifest and the
//! lockfile. If anything after the write fails, the file system has to look
//! as it did before: a new file (and any directories created for it) is
//! removed, an overwritten file gets its previous bytes back.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.write_file(&path, &bytes)?;
//!
//! // Persist manifest and lockfile...
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```


use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::atomic_write;
use crate::error::{Result, persist};

/// Original content of a file that is about to be overwritten
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// Tracks file system changes so they can be undone
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files that did not exist before this transaction
    created_files: Vec<PathBuf>,

    /// Files overwritten during this transaction (with original content)
    modified_files: Vec<FileBackup>,

    /// Directories created during this transaction, outermost first
    created_dirs: Vec<PathBuf>,

    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `content` to `path`, recording what is needed to undo it
    ///
    /// Missing parent directories are created and tracked.
    pub fn write_file(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.create_dirs(parent)?;
        }

        if path.is_file() {
            let original = fs::read(path).map_err(|e| persist::read_failed(path, e))?;
            self.modified_files.push(FileBackup {
                path: path.to_path_buf(),
                content: original,
            });
        } else {
            self.created_files.push(path.to_path_buf());
        }

        atomic_write(path, content)
    }

    /// Create `dir` and its missing ancestors, tracking each one created
    fn create_dirs(&mut self, dir: &Path) -> Result<()> {
        let missing: Vec<&Path> = dir
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
            .collect();

        for path in missing.into_iter().rev() {
            fs::create_dir(path).map_err(|e| persist::write_failed(path, e))?;
            self.created_dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    /// Keep every change (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo every tracked change
    ///
    /// Failures are logged and do not stop the remaining steps.
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for path in self.created_files.drain(..) {
            if path.exists() {
                if let Err(e) = fs::remove_file(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove file during rollback");
                }
            }
        }

        for backup in self.modified_files.drain(..) {
            if let Err(e) = atomic_write(&backup.path, &backup.content) {
                tracing::warn!(path = %backup.path.display(), error = %e, "failed to restore file during rollback");
            }
        }

        // Innermost first; a directory only goes if it is empty again
        for path in self.created_dirs.drain(..).rev() {
            let empty = fs::read_dir(&path)
                .map(|mut d| d.next().is_none())
                .unwrap_or(false);
            if empty {
                if let Err(e) = fs::remove_dir(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove directory during rollback");
                }
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}
