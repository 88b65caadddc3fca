//! Store Module
//!
//! Owns one tree and the snapshot file that backs it.
//!
//! ## Responsibilities
//! - Key-value API over the tree (insert/update/delete/search/get-all)
//! - Full-snapshot save and load
//! - Translate structural outcomes into [`OperationResult`]
//!
//! ## Concurrency
//! [`Store`] has no internal synchronization: mutation takes `&mut self`.
//! Long-running callers share it through [`SharedStore`], which holds one
//! lock for the duration of every operation.

mod command;
mod kv;
mod shared;

pub use command::{Command, Output};
pub use kv::Store;
pub use shared::SharedStore;

use crate::error::{FailureKind, TreeKvError};

/// An ordered (key, value) pair as returned by `get_all`
pub type Entry = (Vec<u8>, Vec<u8>);

// =============================================================================
// Messages
// =============================================================================

pub(crate) const MSG_INSERTED: &str = "Key-Value pair inserted successfully";
pub(crate) const MSG_DELETED: &str = "Key deleted successfully";
pub(crate) const MSG_DELETE_MISS: &str = "Key not found for deletion";
pub(crate) const MSG_SEARCH_MISS: &str = "Key not found";
pub(crate) const MSG_UPDATED: &str = "Key updated successfully";
pub(crate) const MSG_UPDATE_MISS: &str = "Key not found for update";
pub(crate) const MSG_SAVED: &str = "Data saved successfully";
pub(crate) const MSG_EMPTY: &str = "No data available";
pub(crate) const MSG_RETRIEVED: &str = "Data retrieved successfully";

// =============================================================================
// Operation Result
// =============================================================================

/// Outcome of a store operation
///
/// Expected failures (missing key, unopenable file) are reported here with
/// `success == false`, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult<T = ()> {
    /// Human-readable outcome
    pub message: String,

    /// Whether the operation took effect / found its key
    pub success: bool,

    /// Failure class when `success` is false
    pub failure: Option<FailureKind>,

    /// Payload for query operations
    pub value: Option<T>,
}

impl<T> OperationResult<T> {
    /// Successful outcome with no payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            failure: None,
            value: None,
        }
    }

    /// Successful outcome carrying a payload
    pub fn ok_with(message: impl Into<String>, value: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            failure: None,
            value: Some(value),
        }
    }

    /// Failed outcome
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            failure: Some(kind),
            value: None,
        }
    }

    /// Key miss
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(FailureKind::KeyNotFound, message)
    }

    /// Failed outcome derived from an error, prefixed with context
    pub fn from_error(context: impl AsRef<str>, err: &TreeKvError) -> Self {
        Self::failure(err.kind(), format!("{}: {}", context.as_ref(), err))
    }

    /// True when the operation failed because the key was absent
    pub fn is_not_found(&self) -> bool {
        self.failure == Some(FailureKind::KeyNotFound)
    }

    /// Take the payload, if any
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Re-type a payload-free result, keeping message and status
    pub fn erase<U>(self) -> OperationResult<U> {
        OperationResult {
            message: self.message,
            success: self.success,
            failure: self.failure,
            value: None,
        }
    }

    /// Convert the payload, keeping message and status
    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        OperationResult {
            message: self.message,
            success: self.success,
            failure: self.failure,
            value: self.value.map(f),
        }
    }
}
