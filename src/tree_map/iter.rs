use std::iter::FusedIterator;

use super::TreeNode;
use crate::arena::{Arena, NodeHandle};

/// In-order walk over a map's entries. Holds its own stack of pending nodes
/// (the left spine still to be visited), so its memory use is bounded by the
/// tree's height and any number of them can run over the same map.
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<TreeNode<K, V>>,
    stack: Vec<NodeHandle>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(
        nodes: &'a Arena<TreeNode<K, V>>,
        root: Option<NodeHandle>,
    ) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            remaining: nodes.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    /// The next node in ascending order.
    pub(super) fn next_node(&mut self) -> Option<&'a TreeNode<K, V>> {
        let nodes = self.nodes;
        let node = &nodes[self.stack.pop()?];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node)
    }

    fn push_left_spine(&mut self, mut cursor: Option<NodeHandle>) {
        while let Some(handle) = cursor {
            self.stack.push(handle);
            cursor = self.nodes[handle].left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| (&node.entry.0, &node.entry.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Keys in ascending order.
pub struct Keys<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Values in ascending key order.
pub struct Values<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Consumes a map, handing out its entries in ascending order. Each node is
/// taken out of the arena as it is visited.
pub struct IntoIter<K, V> {
    nodes: Arena<TreeNode<K, V>>,
    stack: Vec<NodeHandle>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(nodes: Arena<TreeNode<K, V>>, root: Option<NodeHandle>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<NodeHandle>) {
        while let Some(handle) = cursor {
            self.stack.push(handle);
            cursor = self.nodes[handle].left;
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let node = self.nodes.remove(self.stack.pop()?);
        self.push_left_spine(node.right);
        Some(node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
