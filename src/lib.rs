//! # TreeKV
//!
//! An in-memory ordered key-value store with:
//! - An unbalanced binary search tree over byte-string keys
//! - In-place updates and in-order-successor deletion
//! - Full-snapshot binary persistence (save overwrites, load replaces)
//! - An explicit single-writer/multi-reader wrapper for shared use
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Callers (CLI, service loop, tests)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    SharedStore (RwLock)                      │
//! │                  optional, for shared use                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Store                                │
//! │        owns the root + snapshot path, OperationResult        │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │    tree::ops    │                │   tree::codec   │
//!   │ insert / delete │                │  node records   │
//!   │ search / walk   │                │  (u64 LE lens)  │
//!   └─────────────────┘                └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod tree;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FailureKind, Result, TreeKvError};
pub use config::Config;
pub use store::{Command, Entry, OperationResult, Output, SharedStore, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TreeKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
