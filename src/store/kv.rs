//! Store implementation
//!
//! Single-tree key-value store with full-snapshot persistence.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{FailureKind, Result, TreeKvError};
use crate::tree::{self, Link, Node};

use super::{
    Command, Entry, OperationResult, Output, MSG_DELETED, MSG_DELETE_MISS, MSG_EMPTY,
    MSG_INSERTED, MSG_RETRIEVED, MSG_SAVED, MSG_SEARCH_MISS, MSG_UPDATED, MSG_UPDATE_MISS,
};

/// The key-value store
///
/// Owns exactly one tree root and the identity of its snapshot file.
///
/// ## Persistence
/// Nothing is persisted implicitly. `save` rewrites the whole snapshot
/// (truncate, then one record per node in key order); a failure part way
/// leaves a truncated file behind. `load` reads a snapshot into a fresh tree
/// and only replaces the current one once the whole file decoded.
///
/// ## Concurrency
/// Mutating operations take `&mut self`; wrap the store in a
/// [`SharedStore`](super::SharedStore) to share it between threads.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Tree root (None when empty)
    root: Link,
}

impl Store {
    /// Create an empty store. Does not touch the filesystem.
    pub fn new(config: Config) -> Self {
        Self { config, root: None }
    }

    /// Create a store, loading the configured snapshot when enabled
    ///
    /// A missing snapshot file yields an empty store; an unreadable or
    /// corrupt one is an error.
    pub fn open(config: Config) -> Result<Self> {
        let mut store = Self::new(config);

        if store.config.load_on_open && store.config.data_path.exists() {
            let path = store.config.data_path.clone();
            let (root, records) = store.read_snapshot(File::open(&path)?)?;
            store.root = root;
            tracing::info!("Loaded {} records from {}", records, path.display());
        }

        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified snapshot file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_path(path).build();
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> OperationResult<Output> {
        match command {
            Command::Insert { key, value } => self.insert(&key, &value).erase(),
            Command::Delete { key } => self.delete(&key).erase(),
            Command::Search { key } => self.search(&key).map(Output::Value),
            Command::Update { key, value } => self.update(&key, &value).erase(),
            Command::Save => self.save().erase(),
            Command::Load { path: Some(path) } => self.load(path).erase(),
            Command::Load { path: None } => self.reload().erase(),
            Command::GetAll => self.get_all().map(Output::Entries),
        }
    }

    // =========================================================================
    // Key-Value Operations
    // =========================================================================

    /// Insert a key-value pair
    ///
    /// Always succeeds. An existing key is not overwritten: the new node is
    /// placed in the existing node's right subtree and stays shadowed by it.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> OperationResult {
        self.root = tree::insert(self.root.take(), key.to_vec(), value.to_vec());
        tracing::debug!("Inserted key ({} bytes)", key.len());
        OperationResult::ok(MSG_INSERTED)
    }

    /// Delete a key
    pub fn delete(&mut self, key: &[u8]) -> OperationResult {
        if tree::search(&self.root, key).is_none() {
            tracing::debug!("Delete missed key ({} bytes)", key.len());
            return OperationResult::not_found(MSG_DELETE_MISS);
        }

        self.root = tree::delete(self.root.take(), key);
        tracing::debug!("Deleted key ({} bytes)", key.len());
        OperationResult::ok(MSG_DELETED)
    }

    /// Look up a key; the value is returned in `value` and echoed in the message
    pub fn search(&self, key: &[u8]) -> OperationResult<Vec<u8>> {
        match tree::search(&self.root, key) {
            Some(node) => OperationResult::ok_with(
                format!("Value: {}", String::from_utf8_lossy(&node.value)),
                node.value.clone(),
            ),
            None => OperationResult::not_found(MSG_SEARCH_MISS),
        }
    }

    /// Replace the value of an existing key in place
    pub fn update(&mut self, key: &[u8], value: &[u8]) -> OperationResult {
        match tree::search_mut(&mut self.root, key) {
            Some(node) => {
                node.value = value.to_vec();
                tracing::debug!("Updated key ({} bytes)", key.len());
                OperationResult::ok(MSG_UPDATED)
            }
            None => OperationResult::not_found(MSG_UPDATE_MISS),
        }
    }

    /// All pairs in ascending key order
    pub fn get_all(&self) -> OperationResult<Vec<Entry>> {
        if self.root.is_none() {
            return OperationResult::not_found(MSG_EMPTY);
        }

        let mut entries = Vec::new();
        tree::traverse_in_order(&self.root, |node| {
            entries.push((node.key.clone(), node.value.clone()));
        });
        OperationResult::ok_with(MSG_RETRIEVED, entries)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the whole tree to the configured data path, replacing its contents
    pub fn save(&self) -> OperationResult {
        let path = &self.config.data_path;

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to open {} for saving: {}", path.display(), e);
                return OperationResult::from_error(
                    "Error opening file for saving",
                    &TreeKvError::from(e),
                );
            }
        };

        match self.write_snapshot(file) {
            Ok(records) => {
                tracing::info!("Saved {} records to {}", records, path.display());
                OperationResult::ok(MSG_SAVED)
            }
            Err(e) => {
                tracing::warn!("Snapshot write to {} failed: {}", path.display(), e);
                OperationResult::from_error(
                    format!("Error writing snapshot {}", path.display()),
                    &e,
                )
            }
        }
    }

    /// Replace the tree with the contents of a snapshot file
    ///
    /// On any failure the current tree is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> OperationResult {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to open {} for reading: {}", path.display(), e);
                return OperationResult::failure(
                    FailureKind::IoFailure,
                    format!("Error opening file for reading: {}", path.display()),
                );
            }
        };

        match self.read_snapshot(file) {
            Ok((root, records)) => {
                // Old tree is released here
                self.root = root;
                tracing::info!("Loaded {} records from {}", records, path.display());
                OperationResult::ok(format!("Data loaded successfully from {}", path.display()))
            }
            Err(e) => {
                tracing::warn!("Snapshot read from {} failed: {}", path.display(), e);
                OperationResult::from_error(
                    format!("Error reading snapshot {}", path.display()),
                    &e,
                )
            }
        }
    }

    /// Load from the configured data path
    pub fn reload(&mut self) -> OperationResult {
        let path = self.config.data_path.clone();
        self.load(path)
    }

    /// Encode every node, in key order, into `file`
    fn write_snapshot(&self, file: File) -> Result<usize> {
        let mut writer = BufWriter::with_capacity(self.config.io_buffer_size, file);
        let mut records = 0;

        for node in tree::iter(&self.root) {
            tree::write_node(&mut writer, node)?;
            records += 1;
        }
        writer.flush()?;

        Ok(records)
    }

    /// Decode a snapshot into a new tree, re-inserting records in file order
    fn read_snapshot(&self, file: File) -> Result<(Link, usize)> {
        let mut reader = BufReader::with_capacity(self.config.io_buffer_size, file);

        let mut root: Link = None;
        let mut records = 0;
        while let Some(node) = tree::decode_node(&mut reader)? {
            let (key, value) = node.into_parts();
            root = tree::insert(root, key, value);
            records += 1;
        }

        Ok((root, records))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of nodes in the tree, shadowed duplicates included
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// True when the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree in nodes
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Root node, for structural inspection
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Snapshot file path
    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
