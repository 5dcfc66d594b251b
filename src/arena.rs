//! A node store that flattens every node of a linked structure onto a single
//! Vec, addressed by position. Links between nodes are plain indices, so a
//! back-link (a list node's `prev`, a tree node's `parent`) never owns what it
//! points at and no ownership cycles can form.

use std::ops::{Index, IndexMut};

/// Alias for the index of a node in the arena's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// Owns the nodes of exactly one structure. Slots of removed nodes are
/// freelisted and reused by later inserts; there is no compaction.
#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    /// The nodes, with `None` marking a slot that is on the freelist.
    store: Vec<Option<N>>,

    /// Slots which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// The number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    /// Moves `node` into the arena and returns its handle.
    pub(crate) fn insert(&mut self, node: N) -> NodeHandle {
        // use the first available slot, or infer what the next location will
        // be on push
        match self.free.pop() {
            Some(handle) => {
                self.store[handle.0] = Some(node);
                handle
            }
            None => {
                self.store.push(Some(node));
                NodeHandle(self.store.len() - 1)
            }
        }
    }

    /// Moves the node out of the arena and freelists its slot. The handle
    /// is dead afterwards.
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> N {
        match self.store.get_mut(handle.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(handle);
                node
            }
            None => panic!("node handle {} is not live", handle.0),
        }
    }

    /// Borrows a node if the handle is live.
    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&N> {
        self.store.get(handle.0).and_then(Option::as_ref)
    }

    /// Drops every node. Does not free the underlying buffer.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeHandle> for Arena<N> {
    type Output = N;

    fn index(&self, handle: NodeHandle) -> &N {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("node handle {} is not live", handle.0),
        }
    }
}

impl<N> IndexMut<NodeHandle> for Arena<N> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut N {
        match self.store.get_mut(handle.0).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("node handle {} is not live", handle.0),
        }
    }
}
