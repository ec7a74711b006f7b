//! Core data types for the bid store
//!
//! ## Types
//!
//! - [`Bid`]: A record held by the tree, keyed by its `id`
//! - [`amount`]: Parsing and formatting of currency amounts
//!
//! ## Ordering
//!
//! Bids are ordered by `id` using plain byte-wise string comparison
//! (`str::cmp`). Numeric-looking ids are therefore ordered
//! lexicographically: `"10"` sorts before `"9"`.

mod bid;
pub mod amount;

// Re-export all types at module level
pub use bid::Bid;
