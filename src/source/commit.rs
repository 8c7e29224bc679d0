//! Commit identifier shape

/// Shortest abbreviated commit accepted as a pin
pub const MIN_COMMIT_LEN: usize = 7;

/// Length of a full SHA-1 commit identifier
pub const FULL_COMMIT_LEN: usize = 40;

/// Whether `git_ref` looks like a commit identifier rather than a branch or tag
///
/// Accepts 7 to 40 lowercase hex characters. Refs of this shape are used as-is
/// and never trigger a remote lookup.
pub fn is_commit_like(git_ref: &str) -> bool {
    (MIN_COMMIT_LEN..=FULL_COMMIT_LEN).contains(&git_ref.len())
        && git_ref
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Whether two commit identifiers name the same commit
///
/// An abbreviated identifier matches a longer one it is a prefix of.
pub fn same_commit(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    short.len() >= MIN_COMMIT_LEN && is_commit_like(short) && long.starts_with(short)
}
