use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt, mem,
    ops::{Index, IndexMut},
};

use super::iter::{IntoIter, Iter, Keys, Values};
use super::TreeNode;
use crate::arena::{Arena, NodeHandle};
use crate::collection::Collection;
use crate::error::{check_copy_bounds, CollectionError, Result};

/// An ordered map on an unbalanced binary search tree.
///
/// Keys in a node's left subtree compare less than the node's key, keys in
/// its right subtree compare greater or equal. Nothing rebalances the tree,
/// so sorted insert orders degrade it to a chain; no operation recurses, so
/// that costs time but never stack.
///
/// Whether two entries may share a key is fixed when the map is built. With
/// duplicates disallowed (the default) inserting an existing key overwrites
/// its value. With duplicates allowed the new entry goes to the right of the
/// equal ones, so equal keys iterate in insertion order.
///
/// `len` is always the number of entries in the tree; an overwrite doesn't
/// change it.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    nodes: Arena<TreeNode<K, V>>,
    root: Option<NodeHandle>,
    allow_duplicate_keys: bool,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map that overwrites on duplicate keys.
    pub fn new() -> Self {
        Self::with_key_policy(false)
    }

    /// Creates an empty map that keeps one entry per insert, even when keys
    /// repeat.
    pub fn with_duplicate_keys() -> Self {
        Self::with_key_policy(true)
    }

    /// Creates an empty map with the given duplicate-key policy.
    pub fn with_key_policy(allow_duplicate_keys: bool) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            allow_duplicate_keys,
        }
    }

    pub fn allows_duplicate_keys(&self) -> bool {
        self.allow_duplicate_keys
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops the whole tree.
    pub fn clear(&mut self) {
        log::debug!("clearing ordered map of {} entries", self.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.root)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// The number of nodes on the longest root-to-leaf path; zero when
    /// empty. Since nothing rebalances, this is anywhere from `log2(len)`
    /// to `len`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeHandle, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[handle];
            for child in [node.left, node.right].iter().flatten() {
                stack.push((*child, depth + 1));
            }
        }

        height
    }

    /// The leftmost node of the subtree rooted at `handle`.
    fn leftmost(&self, mut handle: NodeHandle) -> NodeHandle {
        while let Some(left) = self.nodes[handle].left {
            handle = left;
        }
        handle
    }

    /// Puts `new` (or nothing) where `old` hangs off its parent, and points
    /// `new` back up at that parent.
    fn replace_child(&mut self, old: NodeHandle, new: Option<NodeHandle>) {
        let parent = self.nodes[old].parent;

        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }

        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Adds an entry. If duplicates are disallowed and the key is already
    /// present, the value is overwritten in place and the old one returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let overwrite = !self.allow_duplicate_keys;
        let mut parent = None;
        let mut goes_left = false;
        let mut cursor = self.root;

        while let Some(handle) = cursor {
            let node = &mut self.nodes[handle];
            match key.cmp(&node.entry.0) {
                Ordering::Equal if overwrite => {
                    return Some(mem::replace(&mut node.entry.1, value));
                }
                Ordering::Less => {
                    goes_left = true;
                    cursor = node.left;
                }
                Ordering::Equal | Ordering::Greater => {
                    goes_left = false;
                    cursor = node.right;
                }
            }
            parent = Some(handle);
        }

        let handle = self.nodes.insert(TreeNode::leaf(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) if goes_left => self.nodes[parent].left = Some(handle),
            Some(parent) => self.nodes[parent].right = Some(handle),
        }

        #[cfg(test)]
        self.continuity_test();

        None
    }

    /// Assigns `value` to `key`. An existing entry is overwritten in place,
    /// whatever the duplicate-key policy; otherwise this is an insert.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Some(handle) => {
                Some(mem::replace(&mut self.nodes[handle].entry.1, value))
            }
            None => self.insert(key, value),
        }
    }

    /// Looks a key up. With duplicate keys this finds whichever equal entry
    /// sits nearest the root.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|handle| &self.nodes[handle].entry.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.find(key)?;
        Some(&mut self.nodes[handle].entry.1)
    }

    /// Like [`OrderedMap::get`], for callers that require the key to exist.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(CollectionError::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.find(key)?;
        Some(self.remove_node(handle).1)
    }

    /// Removes the entry with this key only if it also holds this value.
    /// Returns whether anything was removed.
    pub fn remove_pair<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: PartialEq,
    {
        match self.find_matching(key, |entry| entry.1 == *value) {
            Some(handle) => {
                self.remove_node(handle);
                true
            }
            None => false,
        }
    }

    /// Takes a node's entry out of the tree, keeping the ordering intact.
    fn remove_node(&mut self, target: NodeHandle) -> (K, V) {
        let (left, right) = {
            let node = &self.nodes[target];
            (node.left, node.right)
        };

        let removed = match (left, right) {
            (Some(_), Some(right)) => {
                // the in-order successor is the leftmost node on the right;
                // it has no left child, so it can be spliced out like a node
                // with at most one child, and its entry moves up into target
                log::trace!("removing node with two children");
                let successor = self.leftmost(right);
                let successor_right = self.nodes[successor].right;
                self.replace_child(successor, successor_right);

                let successor = self.nodes.remove(successor);
                mem::replace(&mut self.nodes[target].entry, successor.entry)
            }
            (child, None) | (None, child) => {
                log::trace!(
                    "removing node with {} child",
                    if child.is_some() { "one" } else { "no" }
                );
                self.replace_child(target, child);
                self.nodes.remove(target).entry
            }
        };

        #[cfg(test)]
        self.continuity_test();

        removed
    }

    #[cfg(test)]
    pub(crate) fn continuity_test(&self) {
        // every node reachable from the root must point back at the node
        // that owns it, and the arena must hold nothing else
        let mut reachable = 0;
        let mut stack: Vec<(NodeHandle, Option<NodeHandle>)> =
            self.root.map(|root| (root, None)).into_iter().collect();

        while let Some((handle, parent)) = stack.pop() {
            reachable += 1;
            assert!(reachable <= self.len());

            let node = &self.nodes[handle];
            assert_eq!(parent, node.parent);
            if let Some(left) = node.left {
                assert!(self.nodes[left].entry.0 < node.entry.0);
                stack.push((left, Some(handle)));
            }
            if let Some(right) = node.right {
                assert!(self.nodes[right].entry.0 >= node.entry.0);
                stack.push((right, Some(handle)));
            }
        }

        assert_eq!(self.len(), reachable);

        // and the in-order walk must come out sorted
        let keys: Vec<&K> = self.keys().collect();
        assert_eq!(self.len(), keys.len());
        for pair in keys.windows(2) {
            if self.allow_duplicate_keys {
                assert!(pair[0] <= pair[1]);
            } else {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    /// Descends to the first node holding `key`.
    fn find<Q>(&self, key: &Q) -> Option<NodeHandle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_matching(key, |_| true)
    }

    /// Descends to the first node holding `key` whose entry satisfies
    /// `accept`. Entries equal in key to a rejected one can only be in its
    /// right subtree, so the search carries on to the right.
    fn find_matching<Q, F>(&self, key: &Q, accept: F) -> Option<NodeHandle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: Fn(&(K, V)) -> bool,
    {
        let mut cursor = self.root;

        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            cursor = match key.cmp(node.entry.0.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal if accept(&node.entry) => return Some(handle),
                Ordering::Equal | Ordering::Greater => node.right,
            };
        }

        None
    }
}

impl<K: Ord, V> Collection for OrderedMap<K, V> {
    type Item = (K, V);

    fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether an entry with this key holds this value.
    fn contains(&self, item: &(K, V)) -> bool
    where
        (K, V): PartialEq,
    {
        self.find_matching(&item.0, |entry| entry == item).is_some()
    }

    fn copy_to(&self, buffer: &mut [(K, V)], offset: usize) -> Result<()>
    where
        (K, V): Clone,
    {
        let len = self.nodes.len();
        check_copy_bounds(offset, len, buffer.len())?;

        let mut nodes = self.iter();
        for slot in &mut buffer[offset..offset + len] {
            if let Some(node) = nodes.next_node() {
                *slot = node.entry.clone();
            }
        }
        Ok(())
    }

    fn clear(&mut self) {
        OrderedMap::clear(self);
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, Q> Index<&Q> for OrderedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<K, V, Q> IndexMut<&Q> for OrderedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("{}", CollectionError::KeyNotFound),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter::new(self.nodes, self.root)
    }
}
