//! Priority policies and heap ordering
//!
//! A [`PriorityPolicy`] maps a [`Post`] to an integer key. A key of 0 marks the
//! post as unorderable under that policy, and the queue refuses to store it.
//!
//! Closures cannot be compared, so every policy carries an explicit id. Two
//! policies are equal exactly when their ids are equal; this is what the
//! queue checks before merging two queues.
//!
//! [`HeapType`] picks the direction (smallest key first or largest key first)
//! and [`HeapOrder`] pairs the two for the merge algorithms.
//!
//! # Example
//!
//! ```rust
//! use post_queue::policy::{HeapOrder, HeapType, PriorityPolicy};
//! use post_queue::post::Post;
//!
//! let by_likes = PriorityPolicy::new("likes", |post: &Post| post.num_likes());
//! let order = HeapOrder::new(&by_likes, HeapType::MaxHeap);
//!
//! let popular = Post::new(100_001, 400, 1, 1, 1);
//! let quiet = Post::new(100_002, 3, 1, 1, 1);
//! assert!(order.outranks(&popular, &quiet));
//! ```

use crate::post::Post;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Direction of the heap order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapType {
    /// Smallest priority is extracted first
    #[default]
    MinHeap,
    /// Largest priority is extracted first
    MaxHeap,
}

type ScoreFn = Rc<dyn Fn(&Post) -> i32>;

/// A named priority function
///
/// Cloning a policy is cheap: the function itself is shared.
#[derive(Clone)]
pub struct PriorityPolicy {
    id: Cow<'static, str>,
    score: Option<ScoreFn>,
}

impl PriorityPolicy {
    /// Creates a policy identified by `id`
    ///
    /// The id must be unique per scoring rule: queues treat policies with the
    /// same id as interchangeable.
    pub fn new<F>(id: impl Into<Cow<'static, str>>, score: F) -> Self
    where
        F: Fn(&Post) -> i32 + 'static,
    {
        Self {
            id: id.into(),
            score: Some(Rc::new(score)),
        }
    }

    /// The "no policy" value a cleared queue falls back to
    ///
    /// It scores every post as 0, so nothing can be inserted under it.
    pub fn none() -> Self {
        Self {
            id: Cow::Borrowed("none"),
            score: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_none(&self) -> bool {
        self.score.is_none()
    }

    /// Scores a post; 0 means the post must not be queued
    pub fn priority(&self, post: &Post) -> i32 {
        self.score.as_ref().map_or(0, |score| score(post))
    }
}

impl PartialEq for PriorityPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.is_none() == other.is_none() && self.id == other.id
    }
}

impl Eq for PriorityPolicy {}

impl fmt::Debug for PriorityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityPolicy")
            .field("id", &self.id)
            .field("is_none", &self.is_none())
            .finish()
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// A priority policy paired with a heap direction
///
/// Priorities are recomputed on every comparison; nothing is cached on nodes.
#[derive(Debug, Clone, Copy)]
pub struct HeapOrder<'a> {
    policy: &'a PriorityPolicy,
    heap_type: HeapType,
}

impl<'a> HeapOrder<'a> {
    pub fn new(policy: &'a PriorityPolicy, heap_type: HeapType) -> Self {
        Self { policy, heap_type }
    }

    pub fn priority(&self, post: &Post) -> i32 {
        self.policy.priority(post)
    }

    pub fn heap_type(&self) -> HeapType {
        self.heap_type
    }

    /// Returns true if `a` belongs strictly above `b`
    ///
    /// Equal priorities never outrank each other.
    pub fn outranks(&self, a: &Post, b: &Post) -> bool {
        let (pa, pb) = (self.priority(a), self.priority(b));
        match self.heap_type {
            HeapType::MinHeap => pa < pb,
            HeapType::MaxHeap => pa > pb,
        }
    }
}

pub const ENGAGEMENT_MIN: i32 = 1;
pub const ENGAGEMENT_MAX: i32 = 510;
pub const RECENCY_MIN: i32 = 2;
pub const RECENCY_MAX: i32 = 55;

/// Likes plus interest level, for use with [`HeapType::MaxHeap`]
///
/// Sums outside `1..=510` score 0.
pub fn engagement() -> PriorityPolicy {
    PriorityPolicy::new("engagement", |post: &Post| {
        let priority = post.num_likes() + post.interest_level();
        if (ENGAGEMENT_MIN..=ENGAGEMENT_MAX).contains(&priority) {
            priority
        } else {
            0
        }
    })
}

/// Post time plus connection level, for use with [`HeapType::MinHeap`]
///
/// Sums outside `2..=55` score 0.
pub fn recency() -> PriorityPolicy {
    PriorityPolicy::new("recency", |post: &Post| {
        let priority = post.post_time() + post.connect_level();
        if (RECENCY_MIN..=RECENCY_MAX).contains(&priority) {
            priority
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_equality_uses_id() {
        let a = PriorityPolicy::new("likes", |post: &Post| post.num_likes());
        let b = PriorityPolicy::new("likes", |post: &Post| post.num_likes() * 2);
        let c = PriorityPolicy::new("time", |post: &Post| post.post_time());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_none_policy() {
        let none = PriorityPolicy::none();
        assert!(none.is_none());
        assert_eq!(none.priority(&Post::new(100_001, 10, 1, 1, 1)), 0);
        assert_eq!(none, PriorityPolicy::default());

        // A real policy that happens to be called "none" is still distinct
        let named_none = PriorityPolicy::new("none", |_: &Post| 1);
        assert_ne!(none, named_none);
    }

    #[test]
    fn test_outranks_min_and_max() {
        let policy = PriorityPolicy::new("likes", |post: &Post| post.num_likes());
        let low = Post::new(100_001, 5, 1, 1, 1);
        let high = Post::new(100_002, 50, 1, 1, 1);
        let tie = Post::new(100_003, 5, 1, 1, 1);

        let min = HeapOrder::new(&policy, HeapType::MinHeap);
        assert!(min.outranks(&low, &high));
        assert!(!min.outranks(&high, &low));
        assert!(!min.outranks(&low, &tie));
        assert!(!min.outranks(&tie, &low));

        let max = HeapOrder::new(&policy, HeapType::MaxHeap);
        assert!(max.outranks(&high, &low));
        assert!(!max.outranks(&low, &high));
        assert!(!max.outranks(&low, &tie));
    }

    #[test]
    fn test_builtin_policies() {
        let post = Post::new(100_001, 100, 3, 20, 7);
        assert_eq!(engagement().priority(&post), 107);
        assert_eq!(recency().priority(&post), 23);

        // Zero likes and out-of-range interest falls back to 1, which is still valid
        let quiet = Post::new(100_001, 0, 1, 1, 0);
        assert_eq!(engagement().priority(&quiet), 1);
        assert_eq!(recency().priority(&quiet), 2);

        let loudest = Post::new(100_001, 500, 5, 50, 10);
        assert_eq!(engagement().priority(&loudest), 510);
        assert_eq!(recency().priority(&loudest), 55);
    }
}
