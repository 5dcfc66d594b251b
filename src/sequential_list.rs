//! A singly linked list. Nodes are kept in an [`Arena`] and chained forward
//! by handle; the list owns the arena and so owns every node.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::arena::{Arena, NodeHandle};
use crate::collection::{Collection, Sequence};
use crate::error::{check_copy_bounds, check_index, CollectionError, Result};

/// A node that lives in a singly linked list.
#[derive(Clone, Debug)]
struct Node<T> {
    /// The value being stored.
    value: T,

    /// The next node in the list, `None` on the tail.
    next: Option<NodeHandle>,
}

/// Forward-only linked list with O(1) push at either end and O(n) indexed
/// access.
#[derive(Clone)]
pub struct SequentialList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

impl<T> SequentialList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Borrows the first element.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    /// Borrows the last element.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|h| &self.nodes[h].value)
    }

    /// Puts `value` in front of the current head.
    pub fn push_front(&mut self, value: T) {
        let handle = self.nodes.insert(Node {
            value,
            next: self.head,
        });

        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }

        #[cfg(test)]
        self.continuity_test();
    }

    /// Appends `value` after the current tail.
    pub fn push_back(&mut self, value: T) {
        let handle = self.nodes.insert(Node { value, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);

        #[cfg(test)]
        self.continuity_test();
    }

    /// Takes the first element off the list.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        #[cfg(test)]
        self.continuity_test();

        Some(node.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// The node following `node` in the chain.
    fn next_node(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes[node].next
    }

    /// Walks from the head to the node at `index`.
    fn node_at(&self, index: usize) -> Result<NodeHandle> {
        check_index(index, self.len())?;

        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|h| self.next_node(h));
        }

        cursor.ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    #[cfg(test)]
    fn continuity_test(&self) {
        let mut count = 0;
        let mut last = None;
        let mut cursor = self.head;

        // walk the chain and make sure it matches the number of nodes in the
        // arena and ends on the tail
        while let Some(h) = cursor {
            count += 1;
            assert!(count <= self.len());
            last = Some(h);
            cursor = self.next_node(h);
        }

        assert_eq!(self.len(), count);
        assert_eq!(self.tail, last);
    }
}

impl<T> Collection for SequentialList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    fn copy_to(&self, buffer: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        check_copy_bounds(offset, self.len(), buffer.len())?;
        for (slot, value) in buffer[offset..].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T> Sequence for SequentialList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        Ok(&self.nodes[node].value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_at(index)?;
        Ok(&mut self.nodes[node].value)
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        // splice in after the predecessor; index < len so the tail is
        // never the predecessor and doesn't move
        let prev = self.node_at(index - 1)?;
        let handle = self.nodes.insert(Node {
            value,
            next: self.next_node(prev),
        });
        self.nodes[prev].next = Some(handle);

        #[cfg(test)]
        self.continuity_test();

        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        check_index(index, len)?;

        if index == 0 {
            return self
                .pop_front()
                .ok_or(CollectionError::IndexOutOfRange { index, len });
        }

        let prev = self.node_at(index - 1)?;
        let target = self
            .next_node(prev)
            .ok_or(CollectionError::IndexOutOfRange { index, len })?;
        let node = self.nodes.remove(target);

        self.nodes[prev].next = node.next;
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }

        #[cfg(test)]
        self.continuity_test();

        Ok(node.value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SequentialList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequentialList<T> {}

impl<T> Index<usize> for SequentialList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for SequentialList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator from head to tail. Each one keeps its own cursor.
pub struct Iter<'a, T> {
    list: &'a SequentialList<T>,
    cursor: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let node = &self.list.nodes[handle];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator that pops from the head.
pub struct IntoIter<T>(SequentialList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SequentialList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for SequentialList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}
