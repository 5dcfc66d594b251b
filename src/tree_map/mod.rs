mod iter;
mod ordered_map;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use ordered_map::OrderedMap;

use crate::arena::NodeHandle;

// The tree never rebalances, so an adversarial insert order makes it a
// linked list. Everything that walks it (insert, lookup, traversal, removal)
// is a loop rather than a recursion for that reason.

/// A node of the search tree. Children are owned through the map's arena;
/// `parent` is just a handle back up and owns nothing.
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<K, V> {
    entry: (K, V),
    parent: Option<NodeHandle>,
    left: Option<NodeHandle>,
    right: Option<NodeHandle>,
}

impl<K, V> TreeNode<K, V> {
    fn leaf(key: K, value: V, parent: Option<NodeHandle>) -> Self {
        Self {
            entry: (key, value),
            parent,
            left: None,
            right: None,
        }
    }
}
