//! Post record
//!
//! A [`Post`] is the fixed-shape record stored in a [`SQueue`](crate::squeue::SQueue).
//! It has five bounded integer attributes and no ordering of its own; the
//! queue orders posts through a [`PriorityPolicy`](crate::policy::PriorityPolicy).
//!
//! # Validation
//!
//! Every attribute is checked independently at construction. A value outside
//! its range is replaced by that attribute's fallback rather than rejected:
//!
//! | Attribute        | Range              | Fallback  |
//! |------------------|--------------------|-----------|
//! | post id          | 100001 ..= 999999  | 100000    |
//! | likes            | 0 ..= 500          | 0         |
//! | connect level    | 1 ..= 5            | 5         |
//! | post time        | 1 ..= 50           | 50        |
//! | interest level   | 1 ..= 10           | 1         |
//!
//! # Example
//!
//! ```rust
//! use post_queue::post::{Post, DEFAULT_POST_ID};
//!
//! let post = Post::new(42, 900, 3, 12, 7);
//! assert_eq!(post.post_id(), DEFAULT_POST_ID);
//! assert_eq!(post.num_likes(), 0);
//! assert_eq!(post.connect_level(), 3);
//! ```

use std::fmt;
use std::mem;

/// Sentinel id given to posts whose id is out of range
pub const DEFAULT_POST_ID: i32 = 100_000;
pub const MIN_POST_ID: i32 = 100_001;
pub const MAX_POST_ID: i32 = 999_999;
pub const MIN_LIKES: i32 = 0;
pub const MAX_LIKES: i32 = 500;
/// Closest connection
pub const MIN_CON_LEVEL: i32 = 1;
/// Most distant connection
pub const MAX_CON_LEVEL: i32 = 5;
/// Newest post
pub const MIN_TIME: i32 = 1;
/// Oldest post
pub const MAX_TIME: i32 = 50;
pub const MIN_INTEREST_LEVEL: i32 = 1;
pub const MAX_INTEREST_LEVEL: i32 = 10;

/// A post with five validated attributes
///
/// Posts are immutable once built. The null path length is not part of the
/// post's identity: it belongs to the tree position the post occupies and is
/// maintained by the queue.
#[derive(Debug, Clone)]
pub struct Post {
    post_id: i32,
    likes: i32,
    connect_level: i32,
    post_time: i32,
    interest_level: i32,
    npl: i32,
}

fn in_range_or(value: i32, min: i32, max: i32, fallback: i32) -> i32 {
    if (min..=max).contains(&value) {
        value
    } else {
        fallback
    }
}

impl Post {
    /// Creates a post, replacing each out-of-range attribute with its fallback
    pub fn new(
        post_id: i32,
        likes: i32,
        connect_level: i32,
        post_time: i32,
        interest_level: i32,
    ) -> Self {
        Self {
            post_id: in_range_or(post_id, MIN_POST_ID, MAX_POST_ID, DEFAULT_POST_ID),
            likes: in_range_or(likes, MIN_LIKES, MAX_LIKES, MIN_LIKES),
            connect_level: in_range_or(connect_level, MIN_CON_LEVEL, MAX_CON_LEVEL, MAX_CON_LEVEL),
            post_time: in_range_or(post_time, MIN_TIME, MAX_TIME, MAX_TIME),
            interest_level: in_range_or(
                interest_level,
                MIN_INTEREST_LEVEL,
                MAX_INTEREST_LEVEL,
                MIN_INTEREST_LEVEL,
            ),
            npl: 0,
        }
    }

    pub fn post_id(&self) -> i32 {
        self.post_id
    }

    pub fn num_likes(&self) -> i32 {
        self.likes
    }

    pub fn connect_level(&self) -> i32 {
        self.connect_level
    }

    pub fn post_time(&self) -> i32 {
        self.post_time
    }

    pub fn interest_level(&self) -> i32 {
        self.interest_level
    }

    /// Null path length of the position this post last occupied
    pub fn npl(&self) -> i32 {
        self.npl
    }

    pub(crate) fn set_npl(&mut self, npl: i32) {
        self.npl = npl;
    }

    /// Copy of the five attributes with a fresh NPL, as stored by a new node
    pub(crate) fn detached(&self) -> Self {
        Self { npl: 0, ..self.clone() }
    }

    /// Swaps the five attributes with `other`, leaving both NPLs in place
    pub(crate) fn swap_payload(&mut self, other: &mut Post) {
        mem::swap(&mut self.post_id, &mut other.post_id);
        mem::swap(&mut self.likes, &mut other.likes);
        mem::swap(&mut self.connect_level, &mut other.connect_level);
        mem::swap(&mut self.post_time, &mut other.post_time);
        mem::swap(&mut self.interest_level, &mut other.interest_level);
    }
}

impl Default for Post {
    /// A post holding every attribute's fallback value
    fn default() -> Self {
        Self {
            post_id: DEFAULT_POST_ID,
            likes: MIN_LIKES,
            connect_level: MAX_CON_LEVEL,
            post_time: MAX_TIME,
            interest_level: MIN_INTEREST_LEVEL,
            npl: 0,
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post#: {}, likes#: {}, connect level: {}",
            self.post_id, self.likes, self.connect_level
        )
    }
}
