//! Index based tree storage.
//!
//! All nodes of a build live in one `Vec`. Resetting the arena drops every
//! node at once but keeps the buffer, so rebuilding a tree of the same depth
//! allocates nothing.

use std::collections::TryReserveError;

use crate::node::nodes_for_depth;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Slot {
    children: Option<(NodeId, NodeId)>,
}

#[derive(Default, Debug)]
pub struct TreeArena {
    slots: Vec<Slot>,
}

impl TreeArena {
    pub fn new() -> Self {
        TreeArena { slots: Vec::new() }
    }

    /// Arena presized for a single tree of `depth`.
    ///
    /// Panics if a tree that deep cannot be allocated. See [`Self::try_for_depth`].
    pub fn for_depth(depth: u32) -> Self {
        match TreeArena::try_for_depth(depth) {
            Ok(arena) => arena,
            Err(err) => panic!("Error: Unable to presize arena for depth {depth}. See: {err}"),
        }
    }

    /// Arena presized for a single tree of `depth`, or the reservation error
    /// when the tree does not fit in memory.
    pub fn try_for_depth(depth: u32) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();

        match usize::try_from(nodes_for_depth(depth)) {
            Ok(nodes) => slots.try_reserve_exact(nodes)?,
            // more nodes than the address space holds; let the reservation report it
            Err(_) => slots.try_reserve_exact(usize::MAX)?,
        }

        Ok(TreeArena { slots })
    }

    pub fn with_capacity(nodes: usize) -> Self {
        TreeArena {
            slots: Vec::with_capacity(nodes),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Forget every node. Ids handed out before the reset are invalid.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Build a perfect tree of `depth` and return its root.
    pub fn build(&mut self, depth: u32) -> NodeId {
        let children = match depth {
            0 => None,
            _ => {
                let left = self.build(depth - 1);
                let right = self.build(depth - 1);
                Some((left, right))
            }
        };

        self.push(Slot { children })
    }

    pub fn checksum(&self, id: NodeId) -> u64 {
        match self.slots[id.0].children {
            None => 1,
            Some((left, right)) => 1 + self.checksum(left) + self.checksum(right),
        }
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.slots[id.0].children.is_none()
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].children.map(|(left, _)| left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].children.map(|(_, right)| right)
    }

    fn push(&mut self, slot: Slot) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(slot);

        id
    }
}
