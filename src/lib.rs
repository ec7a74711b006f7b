//! # Bid Tree
//!
//! In-memory ordered store of auction bids, keyed by bid id.
//!
//! ## Architecture
//!
//! - **Types**: The `Bid` record and amount parsing
//! - **Tree**: Unbalanced binary search tree with slab-based node storage
//! - **Loader**: CSV ingestion into a tree
//! - **Console**: Menu-driven front end used by the binary
//!
//! ## Design Principles
//!
//! 1. **Single owner**: The tree owns every node; no shared or weak links
//! 2. **No balancing**: Shape follows insertion order; sorted input gives O(n) depth
//! 3. **No recursion**: Traversal, sizing and teardown use explicit stacks
//! 4. **Synchronous**: Every operation runs to completion; no internal locking
//!
//! ## Example
//!
//! ```
//! use bid_tree::{BinarySearchTree, Bid};
//!
//! let mut tree = BinarySearchTree::new();
//! for id in ["5", "3", "8", "1", "4", "7", "9"] {
//!     tree.insert(Bid::new(id, "Item", "General Fund", 1.0));
//! }
//!
//! tree.remove("5");
//!
//! let ids: Vec<&str> = tree.iter().map(|bid| bid.id.as_str()).collect();
//! assert_eq!(ids, ["1", "3", "4", "7", "8", "9"]);
//! assert!(tree.search("5").is_none());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Bid, amount parsing
pub mod types;

/// Ordered store: binary search tree over bids
pub mod tree;

/// CSV loading
pub mod loader;

/// Command-line configuration
pub mod config;

/// Interactive menu
pub mod console;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::Bid;
pub use tree::{BinarySearchTree, BidNode, InOrder};
pub use loader::{load_bids, load_bids_from_path, LoadSummary};
pub use error::{AmountError, LoadError};
