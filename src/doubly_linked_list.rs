//! A doubly linked list. Like [`SequentialList`](crate::SequentialList) the
//! nodes live in an [`Arena`], but each also carries a `prev` handle, so once
//! a node is located it can be spliced in or out in O(1) and the list can be
//! walked from either end.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::arena::{Arena, NodeHandle};
use crate::collection::{Collection, Sequence};
use crate::error::{check_copy_bounds, check_index, CollectionError, Result};

/// A node that lives in a doubly linked list.
#[derive(Clone, Debug)]
struct Node<T> {
    /// The value being stored.
    value: T,

    /// The node before this one, `None` on the head.
    prev: Option<NodeHandle>,

    /// The node after this one, `None` on the tail.
    next: Option<NodeHandle>,
}

/// Linked list with back-links. Push and pop are O(1) at both ends; indexed
/// access walks from whichever end is closer.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|h| &self.nodes[h].value)
    }

    /// Puts `value` in front of the current head.
    pub fn push_front(&mut self, value: T) {
        let handle = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.nodes[head].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);

        #[cfg(test)]
        self.continuity_test();
    }

    /// Appends `value` after the current tail.
    pub fn push_back(&mut self, value: T) {
        let handle = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });

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
        self.head.map(|head| self.unlink(head))
    }

    /// Takes the last element off the list.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| self.unlink(tail))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Walks to the node at `index`, starting from the nearer end.
    fn node_at(&self, index: usize) -> Result<NodeHandle> {
        let len = self.len();
        check_index(index, len)?;

        let mut cursor;
        if index < len / 2 {
            cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|h| self.nodes[h].next);
            }
        } else {
            cursor = self.tail;
            for _ in index..len - 1 {
                cursor = cursor.and_then(|h| self.nodes[h].prev);
            }
        }

        cursor.ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Remove an arbitrary node from the list, linking its neighbours to
    /// each other.
    fn unlink(&mut self, node: NodeHandle) -> T {
        let removed = self.nodes.remove(node);

        match removed.prev {
            Some(prev) => self.nodes[prev].next = removed.next,
            None => self.head = removed.next,
        }

        match removed.next {
            Some(next) => self.nodes[next].prev = removed.prev,
            None => self.tail = removed.prev,
        }

        #[cfg(test)]
        self.continuity_test();

        removed.value
    }

    #[cfg(test)]
    fn continuity_test(&self) {
        // walk forwards and make sure the chain matches the number of nodes
        // and ends on the tail
        let mut forward = Vec::new();
        let mut cursor = self.head;
        while let Some(h) = cursor {
            forward.push(h);
            assert!(forward.len() <= self.len());
            cursor = self.nodes[h].next;
        }
        assert_eq!(self.len(), forward.len());
        assert_eq!(self.tail, forward.last().copied());

        // walking backwards must reproduce the reverse
        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(h) = cursor {
            backward.push(h);
            assert!(backward.len() <= self.len());
            cursor = self.nodes[h].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

impl<T> Collection for DoublyLinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == item)
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

impl<T> Sequence for DoublyLinkedList<T> {
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
        let at = self.node_at(index)?;
        let prev = self.nodes[at].prev;

        let handle = self.nodes.insert(Node {
            value,
            prev,
            next: Some(at),
        });

        self.nodes[at].prev = Some(handle);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(handle),
            None => self.head = Some(handle),
        }

        #[cfg(test)]
        self.continuity_test();

        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index)?;
        Ok(self.unlink(node))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator that can be consumed from both ends.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the values, front to back.
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::DoublyLinkedList;
    use crate::{Collection, CollectionError, Sequence};

    fn one_to_ten() -> DoublyLinkedList<i32> {
        (1..=10).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list: DoublyLinkedList<String> = DoublyLinkedList::new();
        assert_eq!(0, list.len());
        assert_eq!(None, list.front());
        assert_eq!(None, list.back());
    }

    #[test]
    fn test_push_back_many() {
        let mut list = DoublyLinkedList::new();
        list.push(100);
        for i in 0..1_000 {
            list.push(i);
        }
        assert_eq!(1_001, list.len());
        assert_eq!(Some(&100), list.front());
        assert_eq!(Some(&999), list.back());
    }

    #[test]
    fn test_get_from_both_halves() {
        let list = one_to_ten();
        for i in 0..10 {
            assert_eq!(i as i32 + 1, list[i]);
        }
    }

    #[test]
    fn test_set() {
        let mut list = one_to_ten();
        list[0] = 100;
        assert_eq!(100, list[0]);
        assert_eq!(Ok(10), list.set(9, 100));
        assert_eq!(100, list[9]);
    }

    #[test]
    fn test_out_of_range() {
        let mut list = one_to_ten();
        let oor = CollectionError::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(Err(oor), list.get(10));
        assert_eq!(Err(oor), list.set(10, 100));
        assert_eq!(Err(oor), list.insert(10, 100));
        assert_eq!(Err(oor), list.remove_at(10));
        assert!(list.set(usize::MAX, 100).is_err());
        assert_eq!(10, list.len());
    }

    #[test]
    fn test_remove_at_both_ends() {
        let mut list = one_to_ten();
        assert_eq!(Ok(1), list.remove_at(0));
        assert_eq!(9, list.len());
        assert_eq!(Some(&2), list.front());

        let last = list.len() - 1;
        assert_eq!(Ok(10), list.remove_at(last));
        assert_eq!(8, list.len());
        assert_eq!(Some(&9), list.back());
        assert_eq!(9, list[7]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = one_to_ten();
        assert!(list.remove(&5));
        assert!(!list.remove(&5));
        assert_eq!(
            vec![1, 2, 3, 4, 6, 7, 8, 9, 10],
            list.iter().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_insert() {
        let mut list = one_to_ten();
        list.insert(0, 100).unwrap();
        assert_eq!(11, list.len());
        assert_eq!(100, list[0]);
        assert_eq!(1, list[1]);

        list.insert(10, 1000).unwrap();
        assert_eq!(12, list.len());
        assert_eq!(1000, list[10]);
        assert_eq!(10, list[11]);
        assert_eq!(Some(&10), list.back());
    }

    #[test]
    fn test_push_and_pop_front_and_back() {
        let mut list = DoublyLinkedList::new();
        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(Some(1), list.pop_front());
        assert_eq!(Some(3), list.pop_back());
        assert_eq!(Some(2), list.pop_back());
        assert_eq!(None, list.pop_front());
        assert!(list.is_empty());
    }

    #[test]
    fn test_reverse_iteration() {
        let list = one_to_ten();
        assert_eq!(
            (1..=10).rev().collect::<Vec<_>>(),
            list.iter().rev().copied().collect::<Vec<_>>()
        );

        // meeting in the middle must not yield anything twice
        let mut iter = list.iter();
        assert_eq!(Some(&1), iter.next());
        assert_eq!(Some(&10), iter.next_back());
        assert_eq!(8, iter.count());

        assert_eq!(
            (1..=10).rev().collect::<Vec<_>>(),
            list.into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_contains_index_of_copy_to() {
        let list = one_to_ten();
        assert!(list.contains(&1));
        assert!(list.contains(&10));
        assert!(!list.contains(&25));
        assert_eq!(Some(4), list.index_of(&5));
        assert_eq!(None, list.index_of(&100));

        let mut buffer = vec![0; list.len()];
        list.copy_to(&mut buffer, 0).unwrap();
        assert_eq!((1..=10).collect::<Vec<_>>(), buffer);
    }

    #[test]
    fn test_clear() {
        let mut list = one_to_ten();
        list.clear();
        assert_eq!(0, list.len());
        assert_eq!(None, list.back());
    }
}
