//! Tree nodes shared by both heap representations
//!
//! Each node exclusively owns its two children, so the whole tree is owned by
//! the queue holding the root. There are no parent links.
//!
//! The null path length (NPL) lives on the stored [`Post`] but describes the
//! node's position: it is `1 + NPL(right)`, with a missing child counting as
//! -1, so a node without a right child has NPL 0.

use crate::post::Post;

/// An owned subtree, empty when `None`
pub type Link = Option<Box<Node>>;

/// A heap node
///
/// Cloning copies the whole subtree without recursing.
#[derive(Debug)]
pub struct Node {
    pub(crate) post: Post,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(post: Post) -> Box<Self> {
        Box::new(Self {
            post,
            left: None,
            right: None,
        })
    }

    pub(crate) fn npl(&self) -> i32 {
        self.post.npl()
    }

    /// NPL of a subtree, -1 for an empty one
    pub(crate) fn link_npl(link: &Link) -> i32 {
        link.as_ref().map_or(-1, |node| node.npl())
    }

    pub(crate) fn update_npl(&mut self) {
        let npl = Self::link_npl(&self.right) + 1;
        self.post.set_npl(npl);
    }

    pub(crate) fn swap_children(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Frees a subtree without recursing, so long spines cannot overflow the stack
    pub(crate) fn dismantle(root: Link) {
        let mut stack: Vec<Box<Node>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Rebuilds a subtree bottom-up, calling `visit` on each node once both of
    /// its children have been visited and reattached
    ///
    /// Uses an explicit stack, so the depth of the tree is not limited by the
    /// call stack.
    pub(crate) fn postorder(root: Link, mut visit: impl FnMut(&mut Node)) -> Link {
        enum Step {
            Enter(Link),
            Leave(Box<Node>),
        }

        let mut steps = vec![Step::Enter(root)];
        let mut done: Vec<Link> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(None) => done.push(None),
                Step::Enter(Some(mut node)) => {
                    let (left, right) = (node.left.take(), node.right.take());
                    steps.push(Step::Leave(node));
                    steps.push(Step::Enter(right));
                    steps.push(Step::Enter(left));
                }
                Step::Leave(mut node) => {
                    node.right = done.pop().flatten();
                    node.left = done.pop().flatten();
                    visit(&mut node);
                    done.push(Some(node));
                }
            }
        }
        done.pop().flatten()
    }

    /// Deep-copies a subtree, keeping its exact shape
    fn copy_link(root: &Link) -> Link {
        enum Step<'a> {
            Enter(Option<&'a Node>),
            Leave(&'a Node),
        }

        let mut steps = vec![Step::Enter(root.as_deref())];
        let mut done: Vec<Link> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(None) => done.push(None),
                Step::Enter(Some(node)) => {
                    steps.push(Step::Leave(node));
                    steps.push(Step::Enter(node.right.as_deref()));
                    steps.push(Step::Enter(node.left.as_deref()));
                }
                Step::Leave(node) => {
                    let right = done.pop().flatten();
                    let left = done.pop().flatten();
                    done.push(Some(Box::new(Node {
                        post: node.post.clone(),
                        left,
                        right,
                    })));
                }
            }
        }
        done.pop().flatten()
    }

    /// Counts the nodes reachable from `root`
    pub(crate) fn count(root: &Link) -> usize {
        let mut stack: Vec<&Node> = root.as_deref().into_iter().collect();
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            post: self.post.clone(),
            left: Self::copy_link(&self.left),
            right: Self::copy_link(&self.right),
        }
    }
}

/// Read-only view of a node, for inspecting tree shape
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    node: &'a Node,
}

impl<'a> NodeView<'a> {
    pub(crate) fn new(node: &'a Node) -> Self {
        Self { node }
    }

    pub fn post(&self) -> &'a Post {
        &self.node.post
    }

    pub fn npl(&self) -> i32 {
        self.node.npl()
    }

    pub fn left(&self) -> Option<NodeView<'a>> {
        self.node.left.as_deref().map(NodeView::new)
    }

    pub fn right(&self) -> Option<NodeView<'a>> {
        self.node.right.as_deref().map(NodeView::new)
    }
}
