//! Resolution and transport errors

use super::FiledepError;

/// Creates a ref resolution error
pub fn resolution_failed(
    target: impl Into<String>,
    git_ref: impl Into<String>,
    reason: impl Into<String>,
) -> FiledepError {
    FiledepError::ResolutionFailed {
        target: target.into(),
        git_ref: git_ref.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a non-2xx response
pub fn http_status(url: impl Into<String>, status: u16) -> FiledepError {
    FiledepError::HttpStatus {
        url: url.into(),
        status,
    }
}

/// Creates an error for a request that never produced a usable response
pub fn request_failed(url: impl Into<String>, reason: impl Into<String>) -> FiledepError {
    FiledepError::RequestFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
