//! jbscript diagnostics and error handling
//!
//! This crate provides the error handling infrastructure for the jbscript
//! front end, including error codes, source positions, and diagnostic
//! reporting.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for jbscript operations
pub type Result<T> = std::result::Result<T, ScriptError>;
