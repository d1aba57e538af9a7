//! Leftist heap representation
//!
//! A leftist heap keeps `NPL(left) >= NPL(right)` at every node, so the right
//! spine is the shortest root-to-leaf path and merges only walk down it.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `merge`   | O(log n)   |
//! | `convert` | O(n)       |

use crate::node::{Link, Node};
use crate::policy::HeapOrder;
use crate::traits::MergeStrategy;
use std::mem;

/// Leftist heap merge strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Leftist;

impl MergeStrategy for Leftist {
    fn merge(a: Link, b: Link, order: &HeapOrder<'_>) -> Link {
        let (mut root, mut other) = match (a, b) {
            (None, b) => return b,
            (a, None) => return a,
            (Some(a), Some(b)) => (a, b),
        };

        if order.outranks(&other.post, &root.post) {
            mem::swap(&mut root, &mut other);
        }

        root.right = Self::merge(root.right.take(), Some(other), order);

        if root.left.is_none() {
            root.left = root.right.take();
            root.post.set_npl(0);
        } else {
            if Node::link_npl(&root.left) < Node::link_npl(&root.right) {
                root.swap_children();
            }
            root.update_npl();
        }

        Some(root)
    }

    fn convert(root: Link) -> Link {
        Node::postorder(root, |node| {
            // An absent child has effective NPL 0, a present one 1 + its NPL
            let left = Node::link_npl(&node.left) + 1;
            let right = Node::link_npl(&node.right) + 1;
            if left < right {
                node.swap_children();
            }
            node.update_npl();
        })
    }
}
