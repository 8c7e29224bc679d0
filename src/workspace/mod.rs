//! Project workspace for filedep
//!
//! This module handles:
//! - Locating the project root (the directory holding `filedep.toml`)
//! - Loading and atomically saving the manifest and lockfile
//! - Resolving dependency paths against the project root
//!
//! ## Workspace Structure
//!
//! ```text
//! project/
//! ├── filedep.toml   # Declared dependencies
//! ├── filedep.lock   # Fetched URLs and integrity fingerprints
//! └── vendor/...     # Vendored files, wherever each entry's path points
//! ```
//!
//! Every path is resolved against [`Workspace::root`]; nothing here reads the
//! process working directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::common::fs::atomic_write;
use crate::config::lockfile::LOCKFILE_NAME;
use crate::config::manifest::MANIFEST_FILE;
use crate::config::{Lockfile, Manifest};
use crate::error::{FiledepError, Result, persist};

/// A filedep project: root directory plus its manifest and lockfile
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the project (where filedep.toml is located)
    pub root: PathBuf,

    /// Declared dependencies (filedep.toml)
    pub manifest: Manifest,

    /// Fetched dependencies (filedep.lock)
    pub lockfile: Lockfile,
}

impl Workspace {
    /// Detect if a manifest exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(MANIFEST_FILE).is_file()
    }

    /// Find a project by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open an existing project
    pub fn open(root: &Path) -> Result<Self> {
        let manifest = Self::load_manifest(root)?;
        let lockfile = Self::load_lockfile(root)?;

        tracing::debug!(
            root = %root.display(),
            dependencies = manifest.dependencies.len(),
            locked = lockfile.files.len(),
            "opened workspace"
        );

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            lockfile,
        })
    }

    /// Create a new project with an empty manifest
    pub fn init(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        if path.exists() {
            return Err(FiledepError::ManifestExists {
                path: path.display().to_string(),
            });
        }

        fs::create_dir_all(root).map_err(|e| persist::write_failed(root, e))?;

        let workspace = Self {
            root: root.to_path_buf(),
            manifest: Manifest::default(),
            lockfile: Lockfile::default(),
        };
        workspace.save_manifest()?;

        Ok(workspace)
    }

    /// Load the manifest; a missing file is an error
    fn load_manifest(root: &Path) -> Result<Manifest> {
        let path = root.join(MANIFEST_FILE);

        if !path.exists() {
            return Err(FiledepError::ManifestNotFound {
                path: root.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| persist::read_failed(&path, e))?;
        Manifest::from_toml(&content)
    }

    /// Load the lockfile; a missing file yields an empty lockfile
    fn load_lockfile(root: &Path) -> Result<Lockfile> {
        let path = root.join(LOCKFILE_NAME);

        if !path.exists() {
            return Ok(Lockfile::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| persist::read_failed(&path, e))?;
        Lockfile::from_toml(&content)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn lockfile_path(&self) -> PathBuf {
        self.root.join(LOCKFILE_NAME)
    }

    /// Atomically write filedep.toml
    pub fn save_manifest(&self) -> Result<()> {
        let content = self.manifest.to_toml()?;
        atomic_write(&self.manifest_path(), content.as_bytes())
    }

    /// Atomically write filedep.lock
    pub fn save_lockfile(&self) -> Result<()> {
        let content = self.lockfile.to_toml()?;
        atomic_write(&self.lockfile_path(), content.as_bytes())
    }

    /// Absolute location of a dependency's local path
    ///
    /// Rejects absolute paths and paths that climb out of the project root.
    pub fn resolve_local_path(&self, name: &str, local_path: &str) -> Result<PathBuf> {
        let relative = Path::new(local_path);
        let escapes = relative.as_os_str().is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(FiledepError::PathOutsideProject {
                name: name.to_string(),
                path: local_path.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }

    /// Whether the vendored file for `local_path` is present
    pub fn local_file_exists(&self, local_path: &str) -> bool {
        self.root.join(local_path).is_file()
    }
}
