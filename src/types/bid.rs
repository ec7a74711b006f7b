//! Bid record stored in the tree.
//!
//! A `Bid` is a plain value: the tree stores its own copy on insert and
//! hands out copies (or borrows) on lookup. The `id` field is the ordering
//! key and must not be changed while the bid is held by a tree.

use std::fmt;

use crate::types::amount::format_amount;

/// A single bid, keyed by `id`.
///
/// ## Example
///
/// ```
/// use bid_tree::types::Bid;
///
/// let bid = Bid::new("98109", "Office Chair", "General Fund", 120.5);
/// assert_eq!(bid.to_string(), "98109: Office Chair | 120.50 | General Fund");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bid {
    /// Unique identifier; the comparison key for ordering
    pub id: String,

    /// Auction item title
    pub title: String,

    /// Fund (category) the bid is charged to
    pub fund: String,

    /// Winning bid amount. Non-negative by convention, not enforced.
    pub amount: f64,
}

impl Bid {
    /// Create a new bid
    ///
    /// # Arguments
    ///
    /// * `id` - Unique bid identifier
    /// * `title` - Auction item title
    /// * `fund` - Fund the bid belongs to
    /// * `amount` - Bid amount
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }

    /// Check if this is the empty bid (no id)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id,
            self.title,
            format_amount(self.amount),
            self.fund
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_new() {
        let bid = Bid::new("1", "Desk", "Enterprise", 10.0);

        assert_eq!(bid.id, "1");
        assert_eq!(bid.title, "Desk");
        assert_eq!(bid.fund, "Enterprise");
        assert_eq!(bid.amount, 10.0);
        assert!(!bid.is_empty());
    }

    #[test]
    fn test_bid_default_is_empty() {
        let bid = Bid::default();

        assert!(bid.is_empty());
        assert_eq!(bid.amount, 0.0);
    }

    #[test]
    fn test_bid_display() {
        let bid = Bid::new("97990", "Hoover Vacuum", "General Fund", 27.0);
        assert_eq!(bid.to_string(), "97990: Hoover Vacuum | 27.00 | General Fund");
    }
}
