//! In-order traversal.
//!
//! Uses an explicit stack of slab keys instead of recursion, so a
//! degenerate (list-shaped) tree cannot overflow the call stack. The visit
//! order is the same as the recursive left / node / right walk.

use std::iter::FusedIterator;

use slab::Slab;

use crate::tree::BidNode;
use crate::types::Bid;

/// Iterator over bids in ascending id order.
///
/// Created by [`BinarySearchTree::iter`](crate::tree::BinarySearchTree::iter).
/// Each call to `iter()` starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    nodes: &'a Slab<BidNode>,

    /// Nodes whose left subtree has been pushed but which are not yet emitted
    stack: Vec<usize>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(nodes: &'a Slab<BidNode>, root: Option<usize>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<usize>) {
        while let Some(key) = cur {
            self.stack.push(key);
            cur = self.nodes[key].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let node = &self.nodes[key];
        self.push_left_spine(node.right);
        Some(&node.bid)
    }
}

impl FusedIterator for InOrder<'_> {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn node(slab: &mut Slab<BidNode>, id: &str) -> usize {
        slab.insert(BidNode::new(Bid::new(id, "", "", 0.0)))
    }

    #[test]
    fn test_in_order_empty() {
        let slab: Slab<BidNode> = Slab::new();
        let mut iter = InOrder::new(&slab, None);

        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_in_order_hand_built() {
        //       b
        //      / \
        //     a   d
        //        /
        //       c
        let mut slab = Slab::new();
        let a = node(&mut slab, "a");
        let b = node(&mut slab, "b");
        let c = node(&mut slab, "c");
        let d = node(&mut slab, "d");
        slab[b].left = Some(a);
        slab[b].right = Some(d);
        slab[d].left = Some(c);

        let ids: Vec<&str> = InOrder::new(&slab, Some(b))
            .map(|bid| bid.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }
}
