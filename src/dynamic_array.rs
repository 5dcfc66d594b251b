//! A growable array list over one contiguous buffer.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::collection::{Collection, Sequence};
use crate::error::{check_copy_bounds, check_index, CollectionError, Result};

/// Capacity of a list made with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous, growable list. When the buffer is full it grows by half its
/// size plus one, which keeps appends amortized O(1) and still makes
/// progress from a capacity of zero.
#[derive(Clone)]
pub struct DynamicArray<T> {
    /// Live elements are `buffer[..buffer.len()]`; spare room past that is
    /// the unused capacity.
    buffer: Vec<T>,
}

/// The capacity a full buffer of `capacity` elements grows to.
fn grown_capacity(capacity: usize) -> usize {
    capacity + capacity / 2 + 1
}

impl<T> DynamicArray<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// How many elements fit before the buffer has to grow.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            front: 0,
            back: self.buffer.len(),
        }
    }

    /// Makes room for one more element.
    fn grow_if_full(&mut self) {
        let capacity = self.buffer.capacity();
        if self.buffer.len() < capacity {
            return;
        }

        let target = grown_capacity(capacity);
        log::trace!("growing dynamic array from {} to {}", capacity, target);
        self.buffer.reserve_exact(target - self.buffer.len());
    }
}

impl<T> Collection for DynamicArray<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.buffer.iter().any(|v| v == item)
    }

    fn copy_to(&self, buffer: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let len = self.buffer.len();
        check_copy_bounds(offset, len, buffer.len())?;
        buffer[offset..offset + len].clone_from_slice(&self.buffer);
        Ok(())
    }

    /// Drops every element but keeps the allocated capacity.
    fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<T> Sequence for DynamicArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        let len = self.buffer.len();
        self.buffer
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.buffer.len();
        self.buffer
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    fn push(&mut self, value: T) {
        self.grow_if_full();
        self.buffer.push(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.buffer.len())?;
        self.grow_if_full();
        self.buffer.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_index(index, self.buffer.len())?;
        Ok(self.buffer.remove(index))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buffer.iter().position(|v| v == value)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    /// Copies `items` into a buffer sized exactly to fit them.
    fn from(items: &[T]) -> Self {
        Self {
            buffer: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Borrowing iterator with its own cursors, so any number of them can read
/// the same list at once.
pub struct Iter<'a, T> {
    array: &'a DynamicArray<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = &self.array.buffer[self.front];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(&self.array.buffer[self.back])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the values, first to last.
pub struct IntoIter<T>(std::vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.buffer.into_iter())
    }
}
