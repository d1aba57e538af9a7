//! Post queue engine
//!
//! [`SQueue`] is a mergeable priority queue of [`Post`]s. Its behaviour is set
//! along two independent axes, both of which can be changed on a populated
//! queue without losing posts:
//!
//! - **Structure** ([`Structure`]): skew heap or leftist heap. Switching
//!   rewrites child assignments and NPLs in place.
//! - **Priority** ([`PriorityPolicy`] + [`HeapType`]): switching the heap type
//!   re-heapifies the tree by moving post payloads between fixed positions.
//!
//! # Example
//!
//! ```rust
//! use post_queue::policy::{self, HeapType};
//! use post_queue::post::Post;
//! use post_queue::squeue::{SQueue, Structure};
//!
//! let mut queue = SQueue::new(policy::recency(), HeapType::MinHeap, Structure::Leftist);
//! queue.insert_post(&Post::new(100_001, 10, 2, 30, 4)).unwrap();
//! queue.insert_post(&Post::new(100_002, 99, 1, 5, 8)).unwrap();
//!
//! queue.set_structure(Structure::Skew).unwrap();
//! assert_eq!(queue.get_next_post().unwrap().post_id(), 100_002);
//!
//! queue.set_priority_fn(policy::engagement(), HeapType::MaxHeap);
//! assert_eq!(queue.get_next_post().unwrap().post_id(), 100_001);
//! assert!(queue.is_empty());
//! ```

use crate::leftist::Leftist;
use crate::node::{Link, Node, NodeView};
use crate::policy::{HeapOrder, HeapType, PriorityPolicy};
use crate::post::Post;
use crate::skew::Skew;
use crate::traits::{MergeStrategy, QueueError};
use log::{debug, trace};
use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;
use std::str::FromStr;

/// Heap representation used by a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Structure {
    #[default]
    Skew,
    Leftist,
}

impl Structure {
    fn merge(self, a: Link, b: Link, order: &HeapOrder<'_>) -> Link {
        match self {
            Structure::Skew => Skew::merge(a, b, order),
            Structure::Leftist => Leftist::merge(a, b, order),
        }
    }

    fn convert(self, root: Link) -> Link {
        match self {
            Structure::Skew => Skew::convert(root),
            Structure::Leftist => Leftist::convert(root),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Skew => write!(f, "skew"),
            Structure::Leftist => write!(f, "leftist"),
        }
    }
}

impl TryFrom<u8> for Structure {
    type Error = QueueError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Structure::Skew),
            1 => Ok(Structure::Leftist),
            _ => Err(QueueError::InvalidStructure),
        }
    }
}

impl TryFrom<&str> for Structure {
    type Error = QueueError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        if name.eq_ignore_ascii_case("skew") {
            Ok(Structure::Skew)
        } else if name.eq_ignore_ascii_case("leftist") {
            Ok(Structure::Leftist)
        } else {
            Err(QueueError::InvalidStructure)
        }
    }
}

impl FromStr for Structure {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Structure::try_from(s)
    }
}

/// A queue shared between several owners
///
/// Merging through [`merge_shared`] is the one place a queue can be handed
/// itself as the donor.
pub type SharedQueue = Rc<RefCell<SQueue>>;

/// Mergeable priority queue of posts
///
/// Cloning a queue deep-copies every node, keeping the exact tree shape.
#[derive(Debug, Clone, Default)]
pub struct SQueue {
    heap: Link,
    size: usize,
    priority: PriorityPolicy,
    heap_type: HeapType,
    structure: Structure,
}

impl Drop for SQueue {
    fn drop(&mut self) {
        Node::dismantle(self.heap.take());
    }
}

impl SQueue {
    /// Creates an empty queue
    pub fn new(priority: PriorityPolicy, heap_type: HeapType, structure: Structure) -> Self {
        Self {
            heap: None,
            size: 0,
            priority,
            heap_type,
            structure,
        }
    }

    fn merge_trees(&self, a: Link, b: Link) -> Link {
        let order = HeapOrder::new(&self.priority, self.heap_type);
        self.structure.merge(a, b, &order)
    }

    /// Inserts a copy of `post`
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::RejectedPost`] if the current policy scores the
    /// post as 0. The queue is left untouched.
    pub fn insert_post(&mut self, post: &Post) -> Result<(), QueueError> {
        if self.priority.priority(post) == 0 {
            return Err(QueueError::RejectedPost);
        }

        let node = Node::new(post.detached());
        let root = self.heap.take();
        self.heap = self.merge_trees(root, Some(node));
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the highest-priority post
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to remove.
    pub fn get_next_post(&mut self) -> Result<Post, QueueError> {
        let mut top = self.heap.take().ok_or(QueueError::EmptyQueue)?;
        let (left, right) = (top.left.take(), top.right.take());

        self.heap = self.merge_trees(left, right);
        self.size -= 1;

        debug_assert_eq!(
            Node::count(&self.heap),
            self.size,
            "Length mismatch after get_next_post"
        );

        let Node { post, .. } = *top;
        Ok(post)
    }

    /// Moves every post of `other` into this queue, leaving `other` empty
    ///
    /// No posts are copied; `other`'s nodes are spliced in with a single
    /// merge. `other` keeps its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::ConfigMismatch`] if the queues differ in
    /// structure, heap type or policy id. Neither queue is modified.
    pub fn merge_with_queue(&mut self, other: &mut SQueue) -> Result<(), QueueError> {
        if self.structure != other.structure
            || self.heap_type != other.heap_type
            || self.priority != other.priority
        {
            return Err(QueueError::ConfigMismatch);
        }

        let donor = other.heap.take();
        let donor_size = mem::take(&mut other.size);
        if donor.is_some() {
            trace!("merging {} posts into a queue of {}", donor_size, self.size);
            let root = self.heap.take();
            self.heap = self.merge_trees(root, donor);
            self.size += donor_size;
        }
        Ok(())
    }

    /// Frees every post and resets the configuration
    ///
    /// Afterwards the policy is [`PriorityPolicy::none`], the heap type is
    /// [`HeapType::MinHeap`] and the structure is [`Structure::Skew`].
    pub fn clear(&mut self) {
        Node::dismantle(self.heap.take());
        self.size = 0;
        self.priority = PriorityPolicy::none();
        self.heap_type = HeapType::MinHeap;
        self.structure = Structure::Skew;
    }

    pub fn num_posts(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_none()
    }

    pub fn priority_fn(&self) -> &PriorityPolicy {
        &self.priority
    }

    pub fn heap_type(&self) -> HeapType {
        self.heap_type
    }

    pub fn structure(&self) -> Structure {
        self.structure
    }

    /// The root node, for inspecting the tree's shape
    pub fn root(&self) -> Option<NodeView<'_>> {
        self.heap.as_deref().map(NodeView::new)
    }

    /// Replaces the policy and heap type, then re-heapifies
    ///
    /// Nothing happens when `heap_type` equals the current heap type, even if
    /// `priority` is a different policy. The tree is only rebuilt when the
    /// direction changes, so swapping between policies of the same direction
    /// leaves the old arrangement in place.
    pub fn set_priority_fn(&mut self, priority: PriorityPolicy, heap_type: HeapType) {
        if heap_type == self.heap_type {
            return;
        }

        debug!(
            "re-heapifying {} posts: {} {:?} -> {} {:?}",
            self.size,
            self.priority.id(),
            self.heap_type,
            priority.id(),
            heap_type
        );
        self.priority = priority;
        self.heap_type = heap_type;

        // Children are fixed first, so each node only has to sift its own payload
        let order = HeapOrder::new(&self.priority, self.heap_type);
        self.heap = Node::postorder(self.heap.take(), |node| sift_down(node, &order));
    }

    /// Switches the heap representation in place
    ///
    /// Accepts a [`Structure`] or anything that parses into one, such as
    /// `"leftist"` or the numeric tag `1`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidStructure`] if `structure` does not name a
    /// known representation. The queue is left untouched.
    pub fn set_structure<S>(&mut self, structure: S) -> Result<(), QueueError>
    where
        S: TryInto<Structure>,
        QueueError: From<S::Error>,
    {
        let structure = structure.try_into()?;
        if self.heap.is_none() || structure == self.structure {
            self.structure = structure;
            return Ok(());
        }

        debug!(
            "converting {} posts from {} to {}",
            self.size, self.structure, structure
        );
        let root = self.heap.take();
        self.heap = structure.convert(root);
        self.structure = structure;
        Ok(())
    }

    /// Parenthesized in-order dump of the tree
    ///
    /// Each node renders as `priority:id` for skew heaps and
    /// `priority:id:npl` for leftist heaps.
    pub fn dump(&self) -> Dump<'_> {
        Dump { queue: self }
    }

    /// Root-left-right listing of every post with its priority
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { queue: self }
    }
}

/// Moves `donor`'s posts into `target`
///
/// # Errors
///
/// Returns [`QueueError::SelfMerge`] if both handles point at the same queue,
/// [`QueueError::QueueBusy`] if either queue is already borrowed, or
/// [`QueueError::ConfigMismatch`] as for [`SQueue::merge_with_queue`].
pub fn merge_shared(target: &SharedQueue, donor: &SharedQueue) -> Result<(), QueueError> {
    if Rc::ptr_eq(target, donor) {
        return Err(QueueError::SelfMerge);
    }
    let mut target = target.try_borrow_mut()?;
    let mut donor = donor.try_borrow_mut()?;
    target.merge_with_queue(&mut donor)
}

enum Leader {
    Node,
    Left,
    Right,
}

/// Moves `node`'s payload down until neither child outranks it
fn sift_down(mut node: &mut Node, order: &HeapOrder<'_>) {
    loop {
        let mut leader = Leader::Node;
        let mut best = &node.post;
        if let Some(left) = node.left.as_deref() {
            if order.outranks(&left.post, best) {
                leader = Leader::Left;
                best = &left.post;
            }
        }
        if let Some(right) = node.right.as_deref() {
            if order.outranks(&right.post, best) {
                leader = Leader::Right;
            }
        }

        let child = match leader {
            Leader::Node => return,
            Leader::Left => node.left.as_deref_mut(),
            Leader::Right => node.right.as_deref_mut(),
        };
        let Some(child) = child else {
            return;
        };
        node.post.swap_payload(&mut child.post);
        node = child;
    }
}

/// [`Display`](fmt::Display) adapter returned by [`SQueue::dump`]
pub struct Dump<'a> {
    queue: &'a SQueue,
}

enum Piece<'a> {
    Open(&'a Node),
    Label(&'a Node),
    Close,
}

impl Dump<'_> {
    fn label(&self, f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
        let queue = self.queue;
        let priority = queue.priority.priority(&node.post);
        match queue.structure {
            Structure::Skew => write!(f, "{}:{}", priority, node.post.post_id()),
            Structure::Leftist => write!(
                f,
                "{}:{}:{}",
                priority,
                node.post.post_id(),
                node.npl()
            ),
        }
    }

    fn tree(&self, f: &mut fmt::Formatter<'_>, root: &Node) -> fmt::Result {
        let mut pieces = vec![Piece::Open(root)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Open(node) => {
                    write!(f, "(")?;
                    pieces.push(Piece::Close);
                    pieces.extend(node.right.as_deref().map(Piece::Open));
                    pieces.push(Piece::Label(node));
                    pieces.extend(node.left.as_deref().map(Piece::Open));
                }
                Piece::Label(node) => self.label(f, node)?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.queue.heap.as_deref() {
            None => write!(f, "Empty heap."),
            Some(root) => self.tree(f, root),
        }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`SQueue::preorder`]
pub struct Preorder<'a> {
    queue: &'a SQueue,
}

impl Preorder<'_> {
    fn tree(&self, f: &mut fmt::Formatter<'_>, root: &Node) -> fmt::Result {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let priority = self.queue.priority.priority(&node.post);
            writeln!(f, "[{}] {}", priority, node.post)?;
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        Ok(())
    }
}

impl fmt::Display for Preorder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.queue.heap.as_deref() {
            None => writeln!(f, "There is no post yet"),
            Some(root) => {
                writeln!(f, "Contents of the queue:")?;
                self.tree(f, root)
            }
        }
    }
}
