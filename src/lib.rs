//! Mergeable Priority Queue of Posts
//!
//! This crate provides [`SQueue`](squeue::SQueue), a mergeable priority queue for
//! fixed-shape [`Post`](post::Post) records. A queue can be switched between
//! two heap representations and two heap directions while it holds data.
//!
//! # Features
//!
//! - **Skew Heap**: O(log n) amortized insert, extract and merge; no balance bookkeeping
//! - **Leftist Heap**: O(log n) worst-case insert, extract and merge via the NPL invariant
//! - **Switchable representation**: convert a populated queue between skew and leftist in O(n)
//! - **Switchable priority**: swap the priority policy and heap direction, re-heapifying in place
//! - **Transfer merge**: splice one queue into another without copying posts
//!
//! # Example
//!
//! ```rust
//! use post_queue::policy::{HeapType, PriorityPolicy};
//! use post_queue::post::Post;
//! use post_queue::squeue::{SQueue, Structure};
//!
//! let by_likes = PriorityPolicy::new("likes", |post: &Post| post.num_likes());
//! let mut queue = SQueue::new(by_likes, HeapType::MaxHeap, Structure::Skew);
//! queue.insert_post(&Post::new(100_001, 5, 1, 1, 1)).unwrap();
//! queue.insert_post(&Post::new(100_002, 40, 1, 1, 1)).unwrap();
//!
//! queue.set_structure(Structure::Leftist).unwrap();
//! assert_eq!(queue.get_next_post().unwrap().post_id(), 100_002);
//! ```

mod leftist;
pub mod node;
pub mod policy;
pub mod post;
mod skew;
pub mod squeue;
pub mod traits;

// Re-export the main types for convenience
pub use squeue::{SQueue, Structure};
pub use traits::QueueError;
