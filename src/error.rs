//! Error types for TreeKV
//!
//! Provides a unified error type for tree, codec and file operations.
//! The public store API never returns these directly; it folds them into
//! an `OperationResult` whose failure is classified by [`FailureKind`].

use thiserror::Error;

/// Result type alias using TreeKvError
pub type Result<T> = std::result::Result<T, TreeKvError>;

/// Unified error type for TreeKV operations
#[derive(Debug, Error)]
pub enum TreeKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The two failure classes reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Search, delete or update missed
    KeyNotFound,

    /// The backing file could not be opened, read, written or decoded
    IoFailure,
}

impl TreeKvError {
    /// Classify this error. A missing file and a corrupt file are the same
    /// `IoFailure` to the caller; key misses never become errors.
    pub fn kind(&self) -> FailureKind {
        match self {
            TreeKvError::Io(_) | TreeKvError::Corruption(_) | TreeKvError::Config(_) => {
                FailureKind::IoFailure
            }
        }
    }
}
