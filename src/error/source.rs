//! Source parsing errors

use super::FiledepError;
use crate::source::ParseError;

/// Creates a source parse error for the given raw input
pub fn parse_failed(input: impl Into<String>, reason: ParseError) -> FiledepError {
    FiledepError::SourceParseFailed {
        input: input.into(),
        reason,
    }
}
