//! Tree node for slab-based storage.
//!
//! ## Design
//!
//! `BidNode` wraps a `Bid` with the slab keys of its two children. A node
//! does not know its parent; the tree finds parents by descending from the
//! root.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

use crate::types::Bid;

/// Tree node stored in the slab.
///
/// ## Invariant
///
/// Every id in the `left` subtree compares strictly less than `bid.id`;
/// every id in the `right` subtree compares greater than or equal to it.
#[derive(Debug, Clone)]
pub struct BidNode {
    /// The stored bid
    pub bid: Bid,

    /// Left child (slab key), None if absent
    pub left: Option<usize>,

    /// Right child (slab key), None if absent
    pub right: Option<usize>,
}

impl BidNode {
    /// Create a new node with no children
    ///
    /// # Example
    ///
    /// ```
    /// use bid_tree::tree::BidNode;
    /// use bid_tree::types::Bid;
    ///
    /// let node = BidNode::new(Bid::new("1", "Desk", "General Fund", 5.0));
    ///
    /// assert!(node.is_leaf());
    /// assert_eq!(node.id(), "1");
    /// ```
    #[inline]
    pub fn new(bid: Bid) -> Self {
        Self {
            bid,
            left: None,
            right: None,
        }
    }

    /// Get the ordering key
    #[inline]
    pub fn id(&self) -> &str {
        &self.bid.id
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
