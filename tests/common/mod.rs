//! Structural checks shared by the integration tests
//!
//! These walk a queue's tree through [`NodeView`] and verify the heap-order
//! and leftist invariants directly, independent of extraction order.

#![allow(dead_code)]

use post_queue::node::NodeView;
use post_queue::policy::{HeapType, PriorityPolicy};
use post_queue::post::Post;
use post_queue::squeue::{SQueue, Structure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Policy keyed on likes + 1, so every valid post scores at least 1
pub fn likes_policy() -> PriorityPolicy {
    PriorityPolicy::new("likes", |post: &Post| post.num_likes() + 1)
}

/// Post whose priority under [`likes_policy`] is exactly `priority`
pub fn post_with_priority(id: i32, priority: i32) -> Post {
    Post::new(id, priority - 1, 1, 1, 1)
}

/// Random valid posts from a fixed seed
pub fn random_posts(seed: u64, count: usize) -> Vec<Post> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Post::new(
                rng.gen_range(100_001..=999_999),
                rng.gen_range(0..=500),
                rng.gen_range(1..=5),
                rng.gen_range(1..=50),
                rng.gen_range(1..=10),
            )
        })
        .collect()
}

fn no_worse(priority: &PriorityPolicy, heap_type: HeapType, parent: &Post, child: &Post) -> bool {
    let (p, c) = (priority.priority(parent), priority.priority(child));
    match heap_type {
        HeapType::MinHeap => p <= c,
        HeapType::MaxHeap => p >= c,
    }
}

fn check_order(node: NodeView<'_>, priority: &PriorityPolicy, heap_type: HeapType) -> bool {
    [node.left(), node.right()].into_iter().flatten().all(|child| {
        no_worse(priority, heap_type, node.post(), child.post())
            && check_order(child, priority, heap_type)
    })
}

fn npl_of(node: Option<NodeView<'_>>) -> i32 {
    node.map_or(-1, |n| n.npl())
}

fn check_leftist(node: NodeView<'_>) -> bool {
    let (left, right) = (node.left(), node.right());
    npl_of(left) >= npl_of(right)
        && node.npl() == npl_of(right) + 1
        && left.map_or(true, check_leftist)
        && right.map_or(true, check_leftist)
}

/// Heap order under the queue's current policy and direction
pub fn satisfies_heap_order(queue: &SQueue) -> bool {
    queue
        .root()
        .map_or(true, |root| check_order(root, queue.priority_fn(), queue.heap_type()))
}

/// Full structural check: heap order, plus the NPL invariant for leftist queues
pub fn satisfies_heap_property(queue: &SQueue) -> bool {
    let leftist_ok = match (queue.structure(), queue.root()) {
        (Structure::Leftist, Some(root)) => check_leftist(root),
        _ => true,
    };
    leftist_ok && satisfies_heap_order(queue)
}

/// Number of nodes reachable from the root
pub fn reachable(queue: &SQueue) -> usize {
    fn walk(node: Option<NodeView<'_>>) -> usize {
        node.map_or(0, |n| 1 + walk(n.left()) + walk(n.right()))
    }
    walk(queue.root())
}

/// Sorted post ids, for comparing the multiset of stored posts
pub fn stored_ids(queue: &SQueue) -> Vec<i32> {
    fn walk(node: Option<NodeView<'_>>, out: &mut Vec<i32>) {
        if let Some(n) = node {
            out.push(n.post().post_id());
            walk(n.left(), out);
            walk(n.right(), out);
        }
    }
    let mut ids = Vec::new();
    walk(queue.root(), &mut ids);
    ids.sort_unstable();
    ids
}

/// Extracts everything, returning priorities under the queue's policy
pub fn drain_priorities(queue: &mut SQueue) -> Vec<i32> {
    let priority = queue.priority_fn().clone();
    let mut out = Vec::new();
    while let Ok(post) = queue.get_next_post() {
        out.push(priority.priority(&post));
    }
    out
}
