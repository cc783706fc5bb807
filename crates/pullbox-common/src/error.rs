//! Base error types for the Pullbox workspace.
//!
//! The image and runtime crates define their own domain-specific error
//! enums (pull stages, launch stages) that wrap these common variants
//! where a filesystem or validation failure is the root cause.

use std::path::PathBuf;

use thiserror::Error;

/// Low-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PullboxError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid value.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// A content digest did not match its expected value.
    #[error("digest mismatch for {resource}: expected {expected}, got {actual}")]
    HashMismatch {
        /// Resource that failed validation.
        resource: String,
        /// Expected digest value.
        expected: String,
        /// Actual computed digest value.
        actual: String,
    },
}

impl PullboxError {
    /// Wraps an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PullboxError>;
