//! Lockfile (filedep.lock) data structures
//!
//! The lockfile records, per dependency, the URL the bytes were fetched from,
//! where they were written, and an integrity fingerprint: the pinned commit when
//! one could be resolved, otherwise a SHA-256 of the content.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FiledepError, Result};
use crate::hash::{self, HASH_PREFIX};
use crate::source::is_commit_like;

/// Lockfile filename
pub const LOCKFILE_NAME: &str = "filedep.lock";

/// Current lockfile format version
pub const LOCKFILE_VERSION: u32 = 1;

const COMMIT_PREFIX: &str = "commit:";

/// Lockfile structure (filedep.lock)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    pub version: u32,

    /// Locked files keyed by dependency name
    #[serde(default)]
    pub files: BTreeMap<String, LockEntry>,
}

/// A fetched dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEntry {
    /// URL the content was downloaded from
    pub url: String,

    /// Local path, relative to the project root
    pub path: String,

    pub integrity: Integrity,
}

/// Provenance of a locked file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Integrity {
    /// `commit:<sha>`, the content came from a resolved commit
    Commit(String),
    /// `sha256:<hex>`, content fingerprint when no commit was available
    Sha256(String),
}

impl Integrity {
    /// Content-hash integrity of `bytes`
    pub fn of_content(bytes: &[u8]) -> Self {
        Integrity::Sha256(hash::sha256_hex(bytes))
    }

    pub fn is_commit(&self) -> bool {
        matches!(self, Integrity::Commit(_))
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integrity::Commit(sha) => write!(f, "{COMMIT_PREFIX}{sha}"),
            Integrity::Sha256(hex) => write!(f, "{HASH_PREFIX}{hex}"),
        }
    }
}

impl std::str::FromStr for Integrity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(sha) = s.strip_prefix(COMMIT_PREFIX) {
            if is_commit_like(sha) {
                return Ok(Integrity::Commit(sha.to_string()));
            }
            return Err(format!("invalid commit in integrity '{s}'"));
        }
        if let Some(hex) = s.strip_prefix(HASH_PREFIX) {
            if hash::is_sha256_hex(hex) {
                return Ok(Integrity::Sha256(hex.to_string()));
            }
            return Err(format!("invalid sha256 digest in integrity '{s}'"));
        }
        Err(format!(
            "integrity '{s}' must start with '{COMMIT_PREFIX}' or '{HASH_PREFIX}'"
        ))
    }
}

impl TryFrom<String> for Integrity {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Integrity> for String {
    fn from(value: Integrity) -> Self {
        value.to_string()
    }
}

impl Default for Lockfile {
    fn default() -> Self {
        Self {
            version: LOCKFILE_VERSION,
            files: BTreeMap::new(),
        }
    }
}

impl Lockfile {
    /// Parse lockfile from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let lockfile: Self = toml::from_str(content).map_err(|e| FiledepError::ConfigParseFailed {
            path: LOCKFILE_NAME.to_string(),
            reason: e.to_string(),
        })?;

        if lockfile.version != LOCKFILE_VERSION {
            return Err(FiledepError::ConfigInvalid {
                message: format!(
                    "{LOCKFILE_NAME} has version {}, expected {LOCKFILE_VERSION}",
                    lockfile.version
                ),
            });
        }
        Ok(lockfile)
    }

    /// Serialize lockfile to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FiledepError::ConfigSerializeFailed {
            path: LOCKFILE_NAME.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&LockEntry> {
        self.files.get(name)
    }

    /// Insert or overwrite the entry for `name`
    pub fn upsert(&mut self, name: impl Into<String>, entry: LockEntry) {
        self.files.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<LockEntry> {
        self.files.remove(name)
    }
}
