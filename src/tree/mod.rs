//! Tree Module
//!
//! Unbalanced binary search tree over byte-string keys.
//!
//! ## Responsibilities
//! - Structural algorithms (insert, search, delete, in-order traversal)
//! - Node-level binary encoding for snapshots
//!
//! ## Ownership Model
//! Every node exclusively owns its children (`Option<Box<Node>>`). The
//! algorithms take a root `Link` by value and hand back the possibly-new root,
//! so callers simply reassign: `root = ops::insert(root, k, v)`.
//!
//! ```text
//!            ┌──────────┐
//!            │ key: "b" │
//!            └──┬────┬──┘
//!        left   │    │   right
//!        ┌──────▼─┐ ┌▼───────┐
//!        │ key:"a"│ │ key:"c"│
//!        └────────┘ └────────┘
//! ```
//!
//! No rebalancing is performed. Inserting keys in sorted order produces a
//! list-shaped tree, so the algorithms walk with explicit cursors and stacks
//! rather than the call stack.

use std::mem;

pub mod codec;
pub mod ops;

pub use codec::{decode_node, encode_node, write_node, LEN_FIELD_SIZE};
pub use ops::{
    delete, find_leftmost, height, insert, iter, len, search, search_mut, traverse_in_order,
    InOrder,
};

/// An owned, possibly empty, subtree
pub type Link = Option<Box<Node>>;

/// One key-value entry and its position in the tree
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    /// Ordering key (byte-wise comparison)
    pub key: Vec<u8>,
    /// Opaque payload
    pub value: Vec<u8>,
    /// Subtree with keys less than `key`
    pub left: Link,
    /// Subtree with keys greater than or equal to `key`
    pub right: Link,
}

impl Node {
    /// Create a leaf node
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Split into key and value, releasing any children
    pub fn into_parts(mut self) -> (Vec<u8>, Vec<u8>) {
        (mem::take(&mut self.key), mem::take(&mut self.value))
    }

    /// True when the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Release descendants iteratively; the default recursive drop would
        // overflow the stack on a degenerate tree.
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
