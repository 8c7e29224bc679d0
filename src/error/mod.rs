//! Error types and handling for filedep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors are grouped by the step that produced them:
//! - [`source`]: source string parsing
//! - [`fetch`]: reference resolution and downloads
//! - [`persist`]: manifest, lockfile and vendored file writes

pub mod fetch;
pub mod persist;
pub mod source;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

use crate::source::ParseError;

/// Main error type for filedep operations
#[derive(Error, Diagnostic, Debug)]
pub enum FiledepError {
    // Source errors
    #[error("Invalid source '{input}': {reason}")]
    #[diagnostic(
        code(filedep::source::parse_failed),
        help(
            "Valid formats: github:owner/repo/path/file@ref, \
             https://raw.githubusercontent.com/owner/repo/ref/path/file, \
             https://github.com/owner/repo/blob/ref/path/file"
        )
    )]
    SourceParseFailed {
        input: String,
        #[source]
        reason: ParseError,
    },

    // Resolution errors
    #[error("Failed to resolve ref '{git_ref}' for {target}: {reason}")]
    #[diagnostic(code(filedep::resolve::failed))]
    ResolutionFailed {
        target: String,
        git_ref: String,
        reason: String,
    },

    // Transport errors
    #[error("Request to {url} failed with HTTP status {status}")]
    #[diagnostic(
        code(filedep::transport::status),
        help("Check that the file exists at that ref and that you have access to the repository")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(code(filedep::transport::request_failed))]
    RequestFailed { url: String, reason: String },

    // Project errors
    #[error("No filedep.toml found in {path} or any parent directory")]
    #[diagnostic(
        code(filedep::project::not_found),
        help("Run 'filedep init' to create a manifest")
    )]
    ManifestNotFound { path: String },

    #[error("A manifest already exists at {path}")]
    #[diagnostic(code(filedep::project::already_initialized))]
    ManifestExists { path: String },

    #[error("Dependency '{name}' is already declared")]
    #[diagnostic(
        code(filedep::deps::exists),
        help("Pass --force to replace it, or choose another name with --name")
    )]
    DependencyExists { name: String },

    #[error("Dependency '{name}' is not declared in filedep.toml")]
    #[diagnostic(code(filedep::deps::not_found))]
    DependencyNotFound { name: String },

    #[error("Invalid dependency name '{name}': {reason}")]
    #[diagnostic(code(filedep::deps::invalid_name))]
    InvalidDependencyName { name: String, reason: String },

    #[error("Local path '{path}' for '{name}' escapes the project root")]
    #[diagnostic(
        code(filedep::deps::path_outside_project),
        help("Use a relative path inside the project")
    )]
    PathOutsideProject { name: String, path: String },

    // Configuration errors
    #[error("Failed to parse {path}: {reason}")]
    #[diagnostic(code(filedep::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to serialize {path}: {reason}")]
    #[diagnostic(code(filedep::config::serialize_failed))]
    ConfigSerializeFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(filedep::config::invalid))]
    ConfigInvalid { message: String },

    // Persistence errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(filedep::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(filedep::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to save lockfile after filedep.toml was already updated: {reason}")]
    #[diagnostic(
        code(filedep::persist::lockfile_after_manifest),
        help("filedep.toml was saved but filedep.lock was not; once filedep.lock is writable, run 'filedep install' or edit filedep.lock to bring them back in sync")
    )]
    LockfileSaveAfterManifest { reason: String },

    // Per-dependency failure inside a batch
    #[error("{name}: {step} failed: {source}")]
    #[diagnostic(code(filedep::deps::step_failed))]
    DependencyFailed {
        name: String,
        step: Step,
        #[source]
        source: Box<FiledepError>,
    },

    #[error("{failed} of {total} dependencies failed")]
    #[diagnostic(
        code(filedep::batch::failed),
        help("Fix the errors listed above and rerun the command")
    )]
    BatchFailed { failed: usize, total: usize },

    #[error("{count} dependencies need action")]
    #[diagnostic(
        code(filedep::check::stale),
        help("Run 'filedep install' to bring them up to date")
    )]
    OutOfDate { count: usize },

    #[error("IO error: {message}")]
    #[diagnostic(code(filedep::fs::io_error))]
    IoError { message: String },
}

/// The pipeline step a per-dependency failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Parse,
    Download,
    Write,
    SaveManifest,
    SaveLockfile,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Parse => "parse",
            Step::Download => "download",
            Step::Write => "write",
            Step::SaveManifest => "save manifest",
            Step::SaveLockfile => "save lockfile",
        };
        f.write_str(name)
    }
}

impl FiledepError {
    /// Wrap this error with the dependency name and the step that failed
    pub fn in_step(self, name: impl Into<String>, step: Step) -> Self {
        FiledepError::DependencyFailed {
            name: name.into(),
            step,
            source: Box::new(self),
        }
    }

    /// Whether the error came from the persistence layer
    ///
    /// Persistence failures abort a whole batch; everything else only fails
    /// the dependency it belongs to.
    pub fn is_persistence(&self) -> bool {
        match self {
            FiledepError::DependencyFailed { step, .. } => {
                matches!(step, Step::SaveManifest | Step::SaveLockfile)
            }
            FiledepError::LockfileSaveAfterManifest { .. }
            | FiledepError::ConfigSerializeFailed { .. } => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for FiledepError {
    fn from(err: std::io::Error) -> Self {
        FiledepError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FiledepError {
    fn from(err: toml::de::Error) -> Self {
        FiledepError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for FiledepError {
    fn from(err: toml::ser::Error) -> Self {
        FiledepError::ConfigSerializeFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FiledepError {
    fn from(err: serde_json::Error) -> Self {
        FiledepError::ConfigParseFailed {
            path: "response body".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FiledepError>;
