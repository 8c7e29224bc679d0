//! Common file system operations with unified error handling

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, persist};

/// Atomically replace `path` with `content`
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the target, so readers never observe a partial file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| persist::write_failed(path, e))?;
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| persist::write_failed(path, e))?;
    temp.persist(path)
        .map_err(|e| persist::write_failed(path, e.error))?;

    Ok(())
}
