//! Command definitions
//!
//! One variant per store operation, so callers (the CLI, a service loop)
//! can route through a single `execute` entry point.

use std::path::PathBuf;

use super::Entry;

/// A store operation with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a key-value pair (duplicates are not checked)
    Insert { key: Vec<u8>, value: Vec<u8> },

    /// Delete a key
    Delete { key: Vec<u8> },

    /// Look up a key
    Search { key: Vec<u8> },

    /// Replace the value of an existing key
    Update { key: Vec<u8>, value: Vec<u8> },

    /// Write a snapshot to the configured data path
    Save,

    /// Replace the tree with a snapshot (configured data path when `None`)
    Load { path: Option<PathBuf> },

    /// Dump all pairs in key order
    GetAll,
}

impl Command {
    /// Whether a successful run of this command changes the tree
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Insert { .. } | Command::Delete { .. } | Command::Update { .. }
        )
    }
}

/// Payload produced by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Value found by `Search`
    Value(Vec<u8>),

    /// Ordered pairs from `GetAll`
    Entries(Vec<Entry>),
}
