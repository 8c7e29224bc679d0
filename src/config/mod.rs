//! Configuration file handling for filedep
//!
//! This module contains data structures for:
//! - `filedep.toml` - Manifest of declared dependencies
//! - `filedep.lock` - Lockfile with fetched URLs and integrity fingerprints
//! - Runtime settings taken from flags and environment

pub mod lockfile;
pub mod manifest;
pub mod settings;

// Re-export commonly used types
pub use lockfile::{Integrity, LockEntry, Lockfile};
pub use manifest::{Manifest, ManifestEntry};
pub use settings::Settings;
