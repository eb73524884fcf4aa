//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// Result of a file creation
#[derive(Debug, Clone)]
pub struct CreateResult {
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Result of a file copy
#[derive(Debug, Clone)]
pub struct CopyResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes_copied: u64,
}

/// Result of combining two files into a third
#[derive(Debug, Clone)]
pub struct CombineResult {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
    pub bytes_written: u64,
}

/// Result of a file deletion
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub path: PathBuf,
}
