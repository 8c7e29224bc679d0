//! Source identifiers
//!
//! This module turns user-supplied source strings into canonical descriptors:
//! - Shorthand: `github:owner/repo/path/to/file.lua@main`
//! - Raw-content URLs: `https://raw.githubusercontent.com/owner/repo/main/path/to/file.lua`
//! - Web URLs: `https://github.com/owner/repo/blob/main/path/to/file.lua`
//! - Web URLs with an appended ref: `https://github.com/owner/repo/path/to/file.lua@main`
//!
//! ## Module Organization
//!
//! - `commit.rs`: the commit-identifier predicate shared by every component
//! - `grammar.rs`: classification of raw strings into named productions
//! - `parser.rs`: `SourceParser` and the injected host allow-list
//! - `descriptor.rs`: the parsed `SourceDescriptor`

pub mod commit;
pub mod descriptor;
pub mod grammar;
pub mod parser;

#[cfg(test)]
mod tests;

pub use commit::{is_commit_like, same_commit};
pub use descriptor::{Provider, SourceDescriptor};
pub use grammar::ParseError;
pub use parser::{HostConfig, SourceParser};
