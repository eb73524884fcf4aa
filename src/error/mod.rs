//! Error handling
//!
//! Defines the error taxonomy and the CLI-boundary handler.

pub mod handlers;
pub mod types;

pub use types::*;
