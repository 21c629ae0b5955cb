//! Error types for sfpack
//!
//! Uses `thiserror` for library errors. Discovery itself never returns
//! these: missing or malformed project input degrades to warnings there.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sfpack operations
pub type SfpackResult<T> = Result<T, SfpackError>;

/// Main error type for sfpack operations
#[derive(Error, Debug)]
pub enum SfpackError {
    /// Project directory passed on the command line does not exist
    #[error("project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    /// Component selector is not of the form TYPE:NAME
    #[error("invalid selector '{value}' - expected TYPE:NAME")]
    InvalidSelector { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
