//! I/O helpers used around candidate selection

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Create the parent directories of `path` so it can be opened for writing.
///
/// Returns `true` if any directory had to be created. Racing creators are
/// harmless: `create_dir_all` succeeds when the directory already exists.
pub fn ensure_parent_dir(path: &NormalizedPath) -> Result<bool> {
    let Some(parent) = path.parent() else {
        return Ok(false);
    };
    if parent.is_dir() {
        return Ok(false);
    }

    let native_parent = parent.to_native();
    fs::create_dir_all(&native_parent).map_err(|e| Error::io(&native_parent, e))?;
    tracing::debug!(dir = %parent, "created parent directories");
    Ok(true)
}
