//! file-tool
//!
//! Create, copy, combine and delete files, with every path validated and
//! resolved before it reaches the filesystem.

pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod utils;

pub use error::{FileRole, FileToolError, PathError};
pub use storage::{combine_files, copy_file, create_file, delete_file, validate_path};
