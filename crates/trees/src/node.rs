//! Perfect binary tree built out of individually boxed nodes.
//!
//! Every node is its own heap allocation and owns both of its children, so
//! dropping the root frees the whole tree. A node either has two children or
//! none; a half-filled node cannot be constructed.

#[derive(PartialEq, Eq, Debug)]
pub struct Node {
    children: Option<(Box<Node>, Box<Node>)>,
}

impl Node {
    pub fn leaf() -> Self {
        Node { children: None }
    }

    pub fn branch(left: Box<Node>, right: Box<Node>) -> Self {
        Node {
            children: Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn left(&self) -> Option<&Node> {
        self.children.as_ref().map(|(left, _)| left.as_ref())
    }

    pub fn right(&self) -> Option<&Node> {
        self.children.as_ref().map(|(_, right)| right.as_ref())
    }
}

/// Build a perfect tree of the given depth, bottom up.
///
/// Depth 0 is a single leaf. Each subtree is built separately, so the two
/// children of a node never share storage.
pub fn make_tree(depth: u32) -> Box<Node> {
    if depth == 0 {
        return Box::new(Node::leaf());
    }

    let left = make_tree(depth - 1);
    let right = make_tree(depth - 1);

    Box::new(Node::branch(left, right))
}

/// Walk the whole tree, counting one per node.
pub fn checksum(node: &Node) -> u64 {
    match &node.children {
        None => 1,
        Some((left, right)) => 1 + checksum(left) + checksum(right),
    }
}

/// Number of nodes in a perfect tree of `depth`.
pub fn nodes_for_depth(depth: u32) -> u64 {
    (1u64 << (depth + 1)) - 1
}
