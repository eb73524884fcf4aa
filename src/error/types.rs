//! Error types
//!
//! Path validation errors and the single user-facing error raised by file operations.

use std::fmt;
use std::io;

use thiserror::Error;

/// Path validation errors
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Invalid characters in path component: {0}")]
    IllegalComponent(String),

    #[error("Invalid path {path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid path {path}: cannot create parent directories: {source}")]
    CreateParents {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Which argument of an operation referred to a missing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    File,
    Source,
    First,
    Second,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::File => write!(f, "File"),
            FileRole::Source => write!(f, "Source file"),
            FileRole::First => write!(f, "First file"),
            FileRole::Second => write!(f, "Second file"),
        }
    }
}

/// User-facing error returned by every file operation
#[derive(Debug, Error)]
pub enum FileToolError {
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("{role} not found: {path}")]
    NotFound { role: FileRole, path: String },

    #[error("Failed to {action}: {source}")]
    OperationFailed {
        action: &'static str,
        #[source]
        source: io::Error,
    },
}

impl FileToolError {
    pub(crate) fn not_found(role: FileRole, path: impl Into<String>) -> Self {
        FileToolError::NotFound {
            role,
            path: path.into(),
        }
    }

    pub(crate) fn failed(action: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| FileToolError::OperationFailed { action, source }
    }
}
