//! Error types for the Atlas bulk-edit tools.
//!
//! Each pipeline stage has its own error type:
//!
//! - [`LoadError`] - reading the ID list or the collection document
//! - [`TransformError`] - preconditions of the record transformers
//! - [`WriteError`] - serializing and writing the updated document
//! - [`ToolError`] - top-level error returned by the pipelines
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while reading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("The file '{}' was not found.", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Failed to parse JSON file '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The JSON document is not a list of objects.
    #[error("Expected the JSON file '{}' to contain a list of objects: {}", .path.display(), .problems.join("; "))]
    Shape { path: PathBuf, problems: Vec<String> },
}

impl LoadError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Read { path, source },
        }
    }
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors raised before a transformer mutates anything.
#[derive(Debug, Error)]
pub enum TransformError {
    /// ID list and record set are not aligned.
    #[error("Number of IDs ({ids}) does not match number of JSON entries ({records}).")]
    CountMismatch { ids: usize, records: usize },

    /// The image URL rule cannot be used.
    #[error("Invalid image URL rule: {0}")]
    InvalidRule(String),

    /// The filename pattern could not be compiled.
    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),
}

// =============================================================================
// Writing Errors
// =============================================================================

/// Errors while producing the output document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Serialization failed.
    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Error writing to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Tool Errors (top-level)
// =============================================================================

/// Top-level error of a tool run.
///
/// Every variant is fatal: the binaries print it and exit with status 1.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for transformer preconditions.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for writing operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for a whole tool run.
pub type ToolResult<T> = Result<T, ToolError>;
