//! Storage operations
//!
//! Create, copy, combine and delete. Each operation validates its path
//! arguments, checks its preconditions, then performs one filesystem action.

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{FileRole, FileToolError};
use crate::storage::filesystem::path_exists;
use crate::storage::results::{CombineResult, CopyResult, CreateResult, DeleteResult};
use crate::storage::validation::validate_path;

/// Creates a new file, optionally with content
pub fn create_file(
    path: impl AsRef<Path>,
    content: Option<&str>,
) -> Result<CreateResult, FileToolError> {
    let file_path = validate_path(path)?;
    let display = file_path.display().to_string();

    if path_exists(&file_path) {
        return Err(FileToolError::AlreadyExists(display));
    }

    let content = content.unwrap_or_default();

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => FileToolError::AlreadyExists(display.clone()),
            _ => FileToolError::failed("create file")(e),
        })?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| {
            debug!("Write to {} failed: {}", display, e);
            FileToolError::failed("create file")(e)
        })?;

    Ok(CreateResult {
        path: file_path,
        bytes_written: content.len() as u64,
    })
}

/// Copies `source` over `destination`, byte for byte
pub fn copy_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<CopyResult, FileToolError> {
    let source = validate_path(source)?;
    let destination = validate_path(destination)?;

    if !path_exists(&source) {
        return Err(FileToolError::not_found(
            FileRole::Source,
            source.display().to_string(),
        ));
    }

    // Read fully before writing so a copy onto itself keeps its content
    let bytes = fs::read(&source).map_err(FileToolError::failed("copy file"))?;
    fs::write(&destination, &bytes).map_err(FileToolError::failed("copy file"))?;

    Ok(CopyResult {
        source,
        destination,
        bytes_copied: bytes.len() as u64,
    })
}

/// Writes the text of `first` followed by the text of `second` to `output`
pub fn combine_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<CombineResult, FileToolError> {
    let first = validate_path(first)?;
    let second = validate_path(second)?;
    let output = validate_path(output)?;

    if !path_exists(&first) {
        return Err(FileToolError::not_found(
            FileRole::First,
            first.display().to_string(),
        ));
    }
    if !path_exists(&second) {
        return Err(FileToolError::not_found(
            FileRole::Second,
            second.display().to_string(),
        ));
    }

    let first_text = fs::read_to_string(&first).map_err(FileToolError::failed("combine files"))?;
    let second_text =
        fs::read_to_string(&second).map_err(FileToolError::failed("combine files"))?;

    let mut combined = String::with_capacity(first_text.len() + second_text.len());
    combined.push_str(&first_text);
    combined.push_str(&second_text);

    fs::write(&output, &combined).map_err(FileToolError::failed("combine files"))?;

    Ok(CombineResult {
        first,
        second,
        output,
        bytes_written: combined.len() as u64,
    })
}

/// Deletes a file
pub fn delete_file(path: impl AsRef<Path>) -> Result<DeleteResult, FileToolError> {
    let file_path = validate_path(path)?;

    if !path_exists(&file_path) {
        return Err(FileToolError::not_found(
            FileRole::File,
            file_path.display().to_string(),
        ));
    }

    fs::remove_file(&file_path).map_err(|e| {
        debug!("Failed to delete {}: {}", file_path.display(), e);
        FileToolError::failed("delete file")(e)
    })?;

    Ok(DeleteResult { path: file_path })
}
