//! SHA-256 content digests for lockfile integrity

use sha2::{Digest, Sha256};

/// Prefix of content-hash integrity strings
pub const HASH_PREFIX: &str = "sha256:";

/// Lowercase hex SHA-256 digest of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Whether `s` looks like a digest produced by [`sha256_hex`]
pub fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
