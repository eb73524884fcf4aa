//! Command-line surface
//!
//! Maps each subcommand onto one storage operation and renders the
//! confirmation line printed on success.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use crate::error::FileToolError;
use crate::storage::{combine_files, copy_file, create_file, delete_file};

/// File manipulation tool for common operations.
#[derive(Debug, Parser)]
#[command(name = "file-tool", version)]
pub struct Cli {
    /// Do not print a confirmation on success
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file; built-in defaults are used when omitted
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new file with optional content
    Create {
        path: PathBuf,

        /// Content to write to the file
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Copy a file to a new location
    Copy {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Combine two files into a third file
    Combine {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },

    /// Delete a file
    Delete { path: PathBuf },
}

impl Command {
    /// Run the operation and return the confirmation message.
    ///
    /// Messages name the paths as they were typed; the resolved paths go to
    /// the log.
    pub fn execute(&self) -> Result<String, FileToolError> {
        match self {
            Command::Create { path, content } => {
                let created = create_file(path, content.as_deref())?;
                info!(
                    "Created file {} ({} bytes)",
                    created.path.display(),
                    created.bytes_written
                );
                Ok(format!("Created file: {}", path.display()))
            }
            Command::Copy {
                source,
                destination,
            } => {
                let copied = copy_file(source, destination)?;
                info!(
                    "Copied {} to {} ({} bytes)",
                    copied.source.display(),
                    copied.destination.display(),
                    copied.bytes_copied
                );
                Ok(format!(
                    "Copied {} to {}",
                    source.display(),
                    destination.display()
                ))
            }
            Command::Combine {
                first,
                second,
                output,
            } => {
                let combined = combine_files(first, second, output)?;
                info!(
                    "Combined {} and {} into {} ({} bytes)",
                    combined.first.display(),
                    combined.second.display(),
                    combined.output.display(),
                    combined.bytes_written
                );
                Ok(format!(
                    "Combined {} and {} into {}",
                    first.display(),
                    second.display(),
                    output.display()
                ))
            }
            Command::Delete { path } => {
                let deleted = delete_file(path)?;
                info!("Deleted file {}", deleted.path.display());
                Ok(format!("Deleted file: {}", path.display()))
            }
        }
    }
}
