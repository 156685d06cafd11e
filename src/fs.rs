//! Filesystem precondition checks.
//!
//! The `ensure_file`/`ensure_dir` pair returns typed results; the
//! `*_exists` wrappers are the outermost layer that reports and
//! terminates the process.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::report;

/// Verify that `path` exists and is a regular file.
///
/// Tilde prefixes are expanded before checking. Error messages echo the
/// path as the caller wrote it.
pub fn ensure_file(path: &str) -> Result<()> {
    let expanded = shellexpand::tilde(path);
    let file = Path::new(expanded.as_ref());

    if !file.exists() {
        return Err(Error::FileMissing(path.to_string()));
    }

    if !file.is_file() {
        return Err(Error::NotAFile(path.to_string()));
    }

    Ok(())
}

/// Verify that `path` is a directory, creating it and any missing
/// parents otherwise. Calling this on an existing directory is a no-op.
pub fn ensure_dir(path: &str) -> Result<()> {
    let expanded = shellexpand::tilde(path);

    fs::create_dir_all(expanded.as_ref()).map_err(|source| Error::DirCreate {
        path: path.to_string(),
        source,
    })
}

/// Like [`ensure_file`], but reports the failure and terminates the
/// process with exit code 1.
pub fn ensure_file_exists(path: &str) {
    if let Err(err) = ensure_file(path) {
        report::error_exit(&err.to_string());
    }
}

/// Like [`ensure_dir`], but reports the failure and terminates the
/// process with exit code 1.
pub fn ensure_dir_exists(path: &str) {
    if let Err(err) = ensure_dir(path) {
        report::error_exit(&err.to_string());
    }
}
