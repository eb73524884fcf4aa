//! File system storage management
//!
//! Path validation plus the four file operations built on top of it.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod validation;

pub use operations::{combine_files, copy_file, create_file, delete_file};
pub use results::{CombineResult, CopyResult, CreateResult, DeleteResult};
pub use validation::{ILLEGAL_CHARS, validate_path};
