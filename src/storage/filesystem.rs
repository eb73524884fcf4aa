//! File system helpers
//!
//! Small wrappers shared by path validation and the file operations.

use std::fs;
use std::io::Result;
use std::path::Path;

/// Create every missing parent directory of `path`
pub fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Check if anything exists at `path`
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}
