//! Command helper utilities

use std::path::PathBuf;

use console::style;

use crate::config::Integrity;
use crate::error::{FiledepError, Result};
use crate::workspace::Workspace;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise, resolve to the current
/// directory. Existing paths are canonicalized.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| FiledepError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    Ok(dunce::canonicalize(&path).unwrap_or(path))
}

/// Open the project containing the workspace path (searching upward)
pub fn open_workspace(workspace: Option<PathBuf>) -> Result<Workspace> {
    let start = resolve_workspace_path(workspace)?;
    let root = Workspace::find_from(&start).ok_or_else(|| FiledepError::ManifestNotFound {
        path: start.display().to_string(),
    })?;
    Workspace::open(&root)
}

/// Short human form of an integrity value
pub fn describe_integrity(integrity: &Integrity) -> String {
    match integrity {
        Integrity::Commit(sha) => format!("commit {}", sha.get(..7).unwrap_or(sha)),
        Integrity::Sha256(hex) => format!("sha256 {}", hex.get(..12).unwrap_or(hex)),
    }
}

/// Print per-dependency failures to stderr
pub fn print_failures(failures: &[FiledepError]) {
    for failure in failures {
        eprintln!("  {} {failure}", style("✗").red().bold());
    }
}
