//! Path validation
//!
//! Every path handed to a file operation goes through [`validate_path`] first:
//! it is resolved to an absolute path, checked for characters that are not
//! portable across platforms, and its parent directories are created.

use std::env;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::PathError;
use crate::storage::filesystem::create_parent_dirs;

/// Characters rejected in any path component.
///
/// `:` is handled separately: it only survives as part of a drive prefix.
pub const ILLEGAL_CHARS: [char; 6] = ['<', '>', '"', '|', '?', '*'];

/// Validate a raw path and return its absolute form.
///
/// Relative paths are resolved against the current working directory. The
/// target itself need not exist, but its missing parent directories are
/// created as a side effect.
pub fn validate_path<P: AsRef<Path>>(raw: P) -> Result<PathBuf, PathError> {
    let raw = raw.as_ref();
    let absolute = to_absolute(raw)?;

    if let Err(e) = check_components(&absolute) {
        debug!("Rejected path {}: {}", raw.display(), e);
        return Err(e);
    }

    create_parent_dirs(&absolute).map_err(|source| PathError::CreateParents {
        path: absolute.display().to_string(),
        source,
    })?;

    debug!("Validated {} -> {}", raw.display(), absolute.display());
    Ok(absolute)
}

fn to_absolute(raw: &Path) -> Result<PathBuf, PathError> {
    if raw.is_absolute() {
        return Ok(normalize(raw));
    }

    let cwd = env::current_dir().map_err(|source| PathError::Resolve {
        path: raw.display().to_string(),
        source,
    })?;
    Ok(normalize(&cwd.join(raw)))
}

/// Lexically drop `.` and fold `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn check_components(path: &Path) -> Result<(), PathError> {
    for component in path.components() {
        // Drive letters and UNC prefixes arrive as `Prefix` and are skipped
        let Component::Normal(segment) = component else {
            continue;
        };

        let segment = segment.to_string_lossy();
        if segment.chars().any(is_illegal_char) {
            return Err(PathError::IllegalComponent(segment.into_owned()));
        }
    }
    Ok(())
}

fn is_illegal_char(c: char) -> bool {
    c == ':' || ILLEGAL_CHARS.contains(&c)
}
