//! Binary search tree over bids.
//!
//! ## Ordering
//!
//! Nodes are ordered by `Bid::id`. On insert, an id equal to a node's id
//! descends to the right, so duplicates are kept as separate nodes and
//! insert never overwrites. Search and remove stop at the first exact match
//! on the way down.
//!
//! ## Removal
//!
//! The node to remove is found by descent from the root, remembering the
//! slot (root, or a parent's left/right link) that points at it:
//!
//! - **No children**: the slot is cleared
//! - **Only a left child** / **only a right child**: the child is spliced
//!   into the slot
//! - **Two children**: the in-order successor (leftmost node of the right
//!   subtree) is copied into the node by value, then the successor's own
//!   node is removed by re-descending the right subtree with its id
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup

use std::cmp::Ordering;
use std::mem;

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::debug;

use crate::tree::{BidNode, InOrder};
use crate::types::Bid;

/// A link that can point at a node: the root, or one side of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Root,
    Left(usize),
    Right(usize),
}

/// Unbalanced binary search tree keyed by bid id.
///
/// The tree exclusively owns all of its nodes. Dropping it releases every
/// node exactly once, children before parents.
#[derive(Debug)]
pub struct BinarySearchTree {
    /// Node storage
    /// Key: slab index, Value: BidNode
    nodes: Slab<BidNode>,

    /// Slab key of the root node, None when empty
    root: Option<usize>,
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinarySearchTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create a tree with pre-allocated node capacity
    ///
    /// # Example
    ///
    /// ```
    /// use bid_tree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::with_capacity(10_000);
    /// assert!(tree.capacity() >= 10_000);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated node slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Check if the tree has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Count the nodes reachable from the root
    ///
    /// Walks the whole tree, so this is O(n).
    ///
    /// # Example
    ///
    /// ```
    /// use bid_tree::tree::BinarySearchTree;
    /// use bid_tree::types::Bid;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// tree.insert(Bid::new("1", "Desk", "General Fund", 5.0));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|key| (key, 1)).into_iter().collect();

        while let Some((key, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[key];
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }

        max_depth
    }

    // ========================================================================
    // Insert / Search / Remove
    // ========================================================================

    /// Insert a bid as a new node
    ///
    /// Descends left while the bid's id is smaller than the node's id and
    /// right otherwise, attaching the new node at the first empty link.
    /// Equal ids go right, so an existing bid is never overwritten.
    ///
    /// # Example
    ///
    /// ```
    /// use bid_tree::tree::BinarySearchTree;
    /// use bid_tree::types::Bid;
    ///
    /// let mut tree = BinarySearchTree::with_capacity(100);
    /// tree.insert(Bid::new("42", "Desk", "General Fund", 5.0));
    ///
    /// assert_eq!(tree.search("42").unwrap().title, "Desk");
    /// ```
    pub fn insert(&mut self, bid: Bid) {
        let mut slot = Slot::Root;
        let mut cur = self.root;

        while let Some(key) = cur {
            let node = &self.nodes[key];
            if bid.id.as_str() < node.id() {
                slot = Slot::Left(key);
                cur = node.left;
            } else {
                slot = Slot::Right(key);
                cur = node.right;
            }
        }

        let key = self.nodes.insert(BidNode::new(bid));
        self.set_link(slot, Some(key));
    }

    /// Search for a bid by id, returning a copy
    ///
    /// # Returns
    ///
    /// The first bid with a matching id on the descent, or None
    pub fn search(&self, id: &str) -> Option<Bid> {
        self.get(id).cloned()
    }

    /// Get a reference to a bid by id
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Bid> {
        self.locate(Slot::Root, id)
            .map(|(key, _)| &self.nodes[key].bid)
    }

    /// Check if a bid with this id exists
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.locate(Slot::Root, id).is_some()
    }

    /// Remove the first bid with a matching id on the descent
    ///
    /// Exactly one node is removed even if the id is duplicated elsewhere.
    /// A missing id leaves the tree unchanged.
    ///
    /// # Returns
    ///
    /// The removed bid, or None if no bid matched
    ///
    /// # Example
    ///
    /// ```
    /// use bid_tree::tree::BinarySearchTree;
    /// use bid_tree::types::Bid;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(Bid::new("42", "Desk", "General Fund", 5.0));
    ///
    /// let removed = tree.remove("42");
    /// assert_eq!(removed.unwrap().id, "42");
    /// assert!(tree.is_empty());
    ///
    /// assert!(tree.remove("42").is_none());
    /// ```
    pub fn remove(&mut self, id: &str) -> Option<Bid> {
        self.remove_below(Slot::Root, id)
    }

    /// Remove the first match for `id` in the subtree hanging off `start`
    fn remove_below(&mut self, start: Slot, id: &str) -> Option<Bid> {
        let (key, slot) = self.locate(start, id)?;
        let node = &self.nodes[key];

        match (node.left, node.right) {
            (None, None) => {
                debug!(id, ?slot, "removing leaf");
                self.set_link(slot, None);
                Some(self.nodes.remove(key).bid)
            }
            (Some(left), None) => {
                debug!(id, ?slot, "splicing left child into removed node");
                self.set_link(slot, Some(left));
                Some(self.nodes.remove(key).bid)
            }
            (None, Some(right)) => {
                debug!(id, ?slot, "splicing right child into removed node");
                self.set_link(slot, Some(right));
                Some(self.nodes.remove(key).bid)
            }
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let replacement = self.nodes[successor].bid.clone();
                let successor_id = replacement.id.clone();
                debug!(id, successor = %successor_id, "promoting in-order successor");

                let removed = mem::replace(&mut self.nodes[key].bid, replacement);

                // Every node between `right` and the successor has a strictly
                // greater id, so the first match is the successor itself.
                let spliced = self.remove_below(Slot::Right(key), &successor_id);
                debug_assert!(spliced.is_some(), "successor not found in right subtree");

                Some(removed)
            }
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over bids in ascending id order
    #[inline]
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.nodes, self.root)
    }

    /// Release every node, children before parents
    pub fn clear(&mut self) {
        let mut stack: Vec<(usize, bool)> = self.root.take().map(|key| (key, false)).into_iter().collect();

        while let Some((key, children_done)) = stack.pop() {
            if children_done {
                self.nodes.remove(key);
                continue;
            }

            stack.push((key, true));
            let node = &self.nodes[key];
            if let Some(right) = node.right {
                stack.push((right, false));
            }
            if let Some(left) = node.left {
                stack.push((left, false));
            }
        }

        debug_assert!(self.nodes.is_empty(), "unreachable nodes left in slab");
    }

    // ========================================================================
    // Fingerprint
    // ========================================================================

    /// SHA-256 over the bids in traversal order
    ///
    /// Trees holding the same bids in the same order hash identically,
    /// regardless of shape.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        for bid in self.iter() {
            for field in [&bid.id, &bid.title, &bid.fund] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
            hasher.update(bid.amount.to_bits().to_le_bytes());
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint())
    }

    // ========================================================================
    // Link Helpers
    // ========================================================================

    /// Descend from `start` looking for `id`
    ///
    /// Returns the matching node's key and the slot that points at it.
    fn locate(&self, start: Slot, id: &str) -> Option<(usize, Slot)> {
        let mut slot = start;
        let mut cur = self.link(start);

        while let Some(key) = cur {
            let node = &self.nodes[key];
            match node.id().cmp(id) {
                Ordering::Equal => return Some((key, slot)),
                Ordering::Greater => {
                    slot = Slot::Left(key);
                    cur = node.left;
                }
                Ordering::Less => {
                    slot = Slot::Right(key);
                    cur = node.right;
                }
            }
        }

        None
    }

    /// Key of the leftmost node in the subtree rooted at `key`
    fn leftmost(&self, mut key: usize) -> usize {
        while let Some(left) = self.nodes[key].left {
            key = left;
        }
        key
    }

    fn link(&self, slot: Slot) -> Option<usize> {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes[parent].left,
            Slot::Right(parent) => self.nodes[parent].right,
        }
    }

    fn set_link(&mut self, slot: Slot, child: Option<usize>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => self.nodes[parent].left = child,
            Slot::Right(parent) => self.nodes[parent].right = child,
        }
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a Bid;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Bid> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = Bid>>(&mut self, bids: I) {
        for bid in bids {
            self.insert(bid);
        }
    }
}

impl FromIterator<Bid> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = Bid>>(bids: I) -> Self {
        let mut tree = Self::new();
        tree.extend(bids);
        tree
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
