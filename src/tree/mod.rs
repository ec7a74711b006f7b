//! Ordered bid store.
//!
//! ## Architecture
//!
//! The store is an unbalanced binary search tree ordered by bid id:
//!
//! - **Slab-backed nodes**: every node lives in a `Slab<BidNode>`; child
//!   links are slab keys, never references
//! - **Exclusive ownership**: each node is reachable from exactly one
//!   parent link (or the root), so every key is released exactly once
//! - **No parent links**: removal re-descends from the root to find the
//!   parent slot of the node being removed
//!
//! ## Components
//!
//! - [`BidNode`]: A bid plus its left/right child keys
//! - [`BinarySearchTree`]: The store (insert, search, remove, traverse)
//! - [`InOrder`]: Ascending-order iterator over the stored bids
//!
//! ## Complexity
//!
//! | Operation | Expected | Worst case |
//! |-----------|----------|------------|
//! | Insert    | O(log n) | O(n)       |
//! | Search    | O(log n) | O(n)       |
//! | Remove    | O(log n) | O(n)       |
//! | Traverse  | O(n)     | O(n)       |
//! | Size      | O(n)     | O(n)       |
//!
//! The tree never rebalances: sorted insertion degrades it to a list.
//!
//! ## Example
//!
//! ```
//! use bid_tree::tree::BinarySearchTree;
//! use bid_tree::types::Bid;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(Bid::new("98109", "Chair", "General Fund", 12.0));
//! tree.insert(Bid::new("97990", "Vacuum", "General Fund", 27.0));
//!
//! let ids: Vec<&str> = tree.iter().map(|bid| bid.id.as_str()).collect();
//! assert_eq!(ids, ["97990", "98109"]);
//! ```

pub mod node;
pub mod bst;
pub mod iter;

pub use node::BidNode;
pub use bst::BinarySearchTree;
pub use iter::InOrder;
