//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use treekv::tree::Node;
use treekv::{Config, Store};

/// Store whose snapshot lives in a fresh temp directory
pub fn setup_temp_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_path(temp_dir.path().join("data.bin"))
        .build();
    let store = Store::open(config).unwrap();
    (temp_dir, store)
}

/// Fresh store reading/writing `path`
pub fn store_at(path: &Path) -> Store {
    Store::new(Config::builder().data_path(path).build())
}

/// Assert strict BST ordering: left < node < right for every node
pub fn assert_bst(root: Option<&Node>) {
    check_bounds(root, None, None);
}

fn check_bounds(node: Option<&Node>, lower: Option<&[u8]>, upper: Option<&[u8]>) {
    let Some(node) = node else {
        return;
    };
    if let Some(lower) = lower {
        assert!(
            node.key.as_slice() > lower,
            "key {:?} not greater than ancestor {:?}",
            node.key,
            lower
        );
    }
    if let Some(upper) = upper {
        assert!(
            node.key.as_slice() < upper,
            "key {:?} not less than ancestor {:?}",
            node.key,
            upper
        );
    }
    check_bounds(node.left.as_deref(), lower, Some(node.key.as_slice()));
    check_bounds(node.right.as_deref(), Some(node.key.as_slice()), upper);
}

/// Keys in pre-order; equal sequences mean equal shapes for unique keys
pub fn preorder_keys(root: Option<&Node>) -> Vec<Vec<u8>> {
    let mut keys = Vec::new();
    let mut pending: Vec<&Node> = root.into_iter().collect();
    while let Some(node) = pending.pop() {
        keys.push(node.key.clone());
        pending.extend(node.right.as_deref());
        pending.extend(node.left.as_deref());
    }
    keys
}

/// Owned (key, value) pair from string literals
pub fn pair(key: &str, value: &str) -> (Vec<u8>, Vec<u8>) {
    (key.as_bytes().to_vec(), value.as_bytes().to_vec())
}
