//! Tree operations
//!
//! Stateless structural algorithms. Each mutating operation takes the root by
//! value and returns the root the caller must keep.
//!
//! ## Duplicate keys
//! `insert` never overwrites: a key equal to an existing node's key is routed
//! into that node's right subtree, creating a second node with the same key.
//! `search` and `delete` stop at the first match on the root-to-leaf path, so
//! the shadowed duplicate stays physically present (and is persisted) until
//! the node above it is deleted. Callers that want to replace a value must use
//! `search_mut` instead of `insert`.

use std::cmp::Ordering;
use std::mem;

use super::{Link, Node};

// =============================================================================
// Insert / Search
// =============================================================================

/// Insert a new node, returning the (possibly new) root
///
/// Keys strictly less than a node go left, everything else goes right.
pub fn insert(mut root: Link, key: Vec<u8>, value: Vec<u8>) -> Link {
    let mut slot = &mut root;
    while let Some(node) = slot {
        slot = if key < node.key {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *slot = Some(Box::new(Node::new(key, value)));
    root
}

/// Find the first node whose key equals `key`
///
/// Cost is O(height); height is unbounded.
pub fn search<'a>(root: &'a Link, key: &[u8]) -> Option<&'a Node> {
    let mut current = root.as_deref();
    while let Some(node) = current {
        current = match key.cmp(&node.key[..]) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

/// Mutable variant of [`search`], used for in-place value updates
pub fn search_mut<'a>(root: &'a mut Link, key: &[u8]) -> Option<&'a mut Node> {
    let mut current = root.as_deref_mut();
    while let Some(node) = current {
        current = match key.cmp(&node.key[..]) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref_mut(),
            Ordering::Greater => node.right.as_deref_mut(),
        };
    }
    None
}

/// Node with the minimum key in the subtree, if any
pub fn find_leftmost(root: &Link) -> Option<&Node> {
    let mut current = root.as_deref()?;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    Some(current)
}

// =============================================================================
// Delete
// =============================================================================

/// Remove the first node matching `key`, returning the (possibly new) root
///
/// - No left child: the right child takes the node's place.
/// - No right child: the left child takes the node's place.
/// - Two children: the in-order successor's key and value move into the
///   node, and the successor is unlinked from the right subtree.
///
/// A missing key leaves the tree unchanged.
pub fn delete(mut root: Link, key: &[u8]) -> Link {
    unlink(find_slot(&mut root, key));
    root
}

/// Locate the link holding the first node equal to `key`, or the empty link
/// where such a node would hang.
fn find_slot<'a>(mut slot: &'a mut Link, key: &[u8]) -> &'a mut Link {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => key.cmp(&node.key[..]),
            None => return slot,
        };
        if ordering == Ordering::Equal {
            return slot;
        }
        slot = match slot {
            Some(node) => match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            },
            None => return slot,
        };
    }
}

/// Splice the node held by `slot` out of the tree
fn unlink(slot: &mut Link) {
    let Some(mut node) = slot.take() else {
        return;
    };

    *slot = match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            if let Some(mut successor) = take_leftmost(&mut right) {
                node.key = mem::take(&mut successor.key);
                node.value = mem::take(&mut successor.value);
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
}

/// Detach the minimum node of a subtree; its right child takes its place
fn take_leftmost(mut slot: &mut Link) -> Option<Box<Node>> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node)
}

// =============================================================================
// Traversal
// =============================================================================

/// In-order iterator (ascending key order) over a tree
pub struct InOrder<'a> {
    /// Nodes whose left subtree is done but which are not yet yielded
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

/// Iterate the tree left subtree, node, right subtree
pub fn iter(root: &Link) -> InOrder<'_> {
    InOrder::new(root)
}

/// Visit every node in ascending key order
pub fn traverse_in_order<F>(root: &Link, mut visit: F)
where
    F: FnMut(&Node),
{
    for node in iter(root) {
        visit(node);
    }
}

// =============================================================================
// Shape
// =============================================================================

/// Number of nodes, shadowed duplicates included
pub fn len(root: &Link) -> usize {
    iter(root).count()
}

/// Nodes on the longest root-to-leaf path (0 for an empty tree)
pub fn height(root: &Link) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&Node, usize)> = root.as_deref().map(|n| (n, 1)).into_iter().collect();

    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    deepest
}
