//! Common traits and errors for the post queue
//!
//! This module holds the two pieces every other module leans on:
//!
//! - [`QueueError`]: the error type returned by fallible queue operations
//! - `MergeStrategy`: the crate-internal seam between the engine and the two
//!   mergeable-heap representations (skew and leftist)

use crate::node::Link;
use crate::policy::HeapOrder;
use std::cell::BorrowMutError;
use std::convert::Infallible;
use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The priority policy scored the post as 0, so it cannot be queued
    RejectedPost,
    /// Extraction was attempted on a queue with no posts
    EmptyQueue,
    /// A queue was asked to merge with itself
    SelfMerge,
    /// The two queues differ in structure, heap type or priority policy
    ConfigMismatch,
    /// A structure tag did not name a known representation
    InvalidStructure,
    /// A shared queue was already borrowed elsewhere
    QueueBusy,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::RejectedPost => {
                write!(f, "post has priority 0 under the current policy")
            }
            QueueError::EmptyQueue => write!(f, "queue is empty"),
            QueueError::SelfMerge => write!(f, "a queue cannot be merged with itself"),
            QueueError::ConfigMismatch => {
                write!(f, "queues differ in structure, heap type or priority policy")
            }
            QueueError::InvalidStructure => write!(f, "unknown heap structure"),
            QueueError::QueueBusy => write!(f, "queue is already borrowed"),
        }
    }
}

impl std::error::Error for QueueError {}

// Lets infallible conversions (a `Structure` into itself) share the `?` path
impl From<Infallible> for QueueError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<BorrowMutError> for QueueError {
    fn from(_: BorrowMutError) -> Self {
        QueueError::QueueBusy
    }
}

/// A mergeable-heap representation over the shared [`Node`](crate::node::Node) tree
///
/// Both representations store the same node type, so a populated tree can be
/// handed from one strategy to the other with [`MergeStrategy::convert`].
///
/// Merging only relinks existing nodes; no post is copied.
pub(crate) trait MergeStrategy {
    /// Merges two trees, either of which may be empty, and returns the new root
    ///
    /// When both roots have equal priority the first argument stays on top.
    fn merge(a: Link, b: Link, order: &HeapOrder<'_>) -> Link;

    /// Rewrites every node's child assignment and NPL into this representation
    ///
    /// Heap order is preserved because no node changes its ancestors.
    fn convert(root: Link) -> Link;
}
