//! Skew heap representation
//!
//! A skew heap keeps no balance information. Every merge swaps the children of
//! the surviving root before descending, which gives O(log n) amortized merge
//! without any bookkeeping.
//!
//! NPL values are still maintained on every node so the tree can later be
//! switched to leftist form without a separate pass to recompute them.
//!
//! # Time Complexity
//!
//! | Operation | Complexity           |
//! |-----------|----------------------|
//! | `merge`   | O(log n) amortized   |
//! | `convert` | O(n)                 |

use crate::node::{Link, Node};
use crate::policy::HeapOrder;
use crate::traits::MergeStrategy;
use std::mem;

/// Skew heap merge strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Skew;

impl MergeStrategy for Skew {
    fn merge(a: Link, b: Link, order: &HeapOrder<'_>) -> Link {
        let (mut root, mut other) = match (a, b) {
            (None, b) => return b,
            (a, None) => return a,
            (Some(a), Some(b)) => (a, b),
        };

        if order.outranks(&other.post, &root.post) {
            mem::swap(&mut root, &mut other);
        }

        // The skew step: swap unconditionally, then merge into the new left
        root.swap_children();
        root.left = Self::merge(root.left.take(), Some(other), order);
        root.update_npl();

        Some(root)
    }

    fn convert(root: Link) -> Link {
        Node::postorder(root, |node| {
            node.swap_children();
            node.update_npl();
        })
    }
}
