use crate::arena::TreeArena;
use crate::node::{checksum, make_tree};

/// How the short-lived trees of a depth pass are stored.
pub trait TreeStrategy {
    /// Build a tree of `depth`, checksum it and release it before returning.
    fn churn(&mut self, depth: u32) -> u64;
}

/// One heap allocation per node, freed on drop.
#[derive(Default, Debug)]
pub struct Boxed;

impl TreeStrategy for Boxed {
    fn churn(&mut self, depth: u32) -> u64 {
        let tree = make_tree(depth);
        checksum(&tree)
    }
}

/// Every tree is built into the same arena, reset after each checksum.
#[derive(Default, Debug)]
pub struct Arena {
    arena: TreeArena,
}

impl Arena {
    pub fn new() -> Self {
        Arena {
            arena: TreeArena::new(),
        }
    }
}

impl TreeStrategy for Arena {
    fn churn(&mut self, depth: u32) -> u64 {
        let root = self.arena.build(depth);
        let check = self.arena.checksum(root);
        self.arena.reset();

        check
    }
}
