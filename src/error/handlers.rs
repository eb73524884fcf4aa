//! Error handlers
//!
//! Turns operation failures into the message shown at the CLI boundary.

use log::debug;

use crate::error::types::FileToolError;

/// Handle a failed command and return the line to show the user
pub fn handle_error(err: &FileToolError) -> String {
    debug!("Command failed: {:?}", err);
    format!("Error: {err}")
}
