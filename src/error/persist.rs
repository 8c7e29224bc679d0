//! File system and persistence errors

use std::path::Path;

use super::FiledepError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> FiledepError {
    FiledepError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failure for `path`
pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> FiledepError {
    FiledepError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
