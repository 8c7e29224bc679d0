//! Operations module for managing vendored dependencies
//!
//! This module provides high-level operations that coordinate:
//! - AddOperation: Declare a dependency and fetch it
//! - InstallOperation: Reconcile, then fetch what needs it (also `update`)
//! - CheckOperation: Reconcile only
//! - RemoveOperation: Drop a dependency and its file
//! - ListOperation: Describe declared dependencies
//!
//! The operations coordinate with:
//! - Reconciler: Staleness decisions (from reconcile module)
//! - Fetcher: The per-dependency fetch pipeline (from `fetch` submodule)
//! - Workspace: Manifest and lockfile persistence (from workspace module)

pub mod add;
pub mod check;
pub mod context;
pub mod fetch;
pub mod install;
pub mod list;
pub mod remove;

pub use add::{AddOperation, AddOptions};
pub use check::CheckOperation;
pub use context::Context;
pub use install::{BatchReport, InstallOperation, InstallOptions};
pub use list::{ListOperation, ListedDependency};
pub use remove::{RemoveOperation, RemoveOptions};

use crate::error::{FiledepError, Result};
use crate::workspace::Workspace;

/// Names a batch operates on
///
/// No names selects every declared dependency. Unknown names are an error;
/// duplicates are dropped.
pub fn select_names(workspace: &Workspace, names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(workspace.manifest.names().map(String::from).collect());
    }

    let mut selected: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !workspace.manifest.contains(name) {
            return Err(FiledepError::DependencyNotFound { name: name.clone() });
        }
        if !selected.contains(name) {
            selected.push(name.clone());
        }
    }
    Ok(selected)
}
