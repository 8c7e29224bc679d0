//! Remove operation module
//!
//! Drops a dependency from filedep.toml and filedep.lock and deletes its
//! vendored file. Both config files are saved before the file is deleted, so
//! a failed save never loses the file.

use std::fs;

use crate::cli::RemoveArgs;
use crate::error::{FiledepError, Result, persist};
use crate::workspace::Workspace;

/// Configuration options for remove
#[derive(Debug, Clone)]
pub struct RemoveOptions {
    pub name: String,
    pub keep_file: bool,
}

impl From<&RemoveArgs> for RemoveOptions {
    fn from(args: &RemoveArgs) -> Self {
        Self {
            name: args.name.clone(),
            keep_file: args.keep_file,
        }
    }
}

/// High-level remove operation
pub struct RemoveOperation<'a> {
    workspace: &'a mut Workspace,
}

impl<'a> RemoveOperation<'a> {
    pub fn new(workspace: &'a mut Workspace) -> Self {
        Self { workspace }
    }

    /// Execute remove operation, returning whether a file was deleted
    pub fn execute(&mut self, options: &RemoveOptions) -> Result<bool> {
        let name = options.name.as_str();
        let Some(entry) = self.workspace.manifest.remove(name) else {
            return Err(FiledepError::DependencyNotFound {
                name: name.to_string(),
            });
        };
        let locked = self.workspace.lockfile.remove(name);

        self.workspace.save_manifest()?;
        if locked.is_some() {
            self.workspace.save_lockfile().map_err(|err| {
                FiledepError::LockfileSaveAfterManifest {
                    reason: err.to_string(),
                }
            })?;
        }

        if options.keep_file {
            return Ok(false);
        }

        let path = match self.workspace.resolve_local_path(name, &entry.path) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(name, error = %err, "not deleting file outside the project");
                return Ok(false);
            }
        };
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| persist::write_failed(&path, e))?;
        tracing::debug!(name, path = %path.display(), "removed vendored file");
        Ok(true)
    }
}
