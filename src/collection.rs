use crate::error::Result;

/// Describes what a collection is: something with a size that can be probed
/// for membership, copied out, and emptied.
///
/// None of the implementors are synchronized. Callers that share one across
/// threads must put it behind their own lock.
pub trait Collection {
    /// The element type. For maps this is the `(key, value)` pair.
    type Item;

    /// The number of elements stored right now.
    fn len(&self) -> usize;

    /// Whether there are no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an element equal to `item` is present.
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Clones every element, in iteration order, into
    /// `buffer[offset..offset + len]`. If they won't fit, nothing is written
    /// and an `IndexOutOfRange` error comes back.
    fn copy_to(&self, buffer: &mut [Self::Item], offset: usize) -> Result<()>
    where
        Self::Item: Clone;

    /// Drops every element.
    fn clear(&mut self);
}

/// A collection addressed by position. Valid positions are `[0, len)` for
/// every indexed operation, `insert` included.
pub trait Sequence: Collection {
    /// Borrows the element at `index`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Mutably borrows the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Appends `value` at the end.
    fn push(&mut self, value: Self::Item);

    /// Inserts `value` so that it ends up at `index`, shifting the element
    /// previously there (and everything after it) back by one. Inserting at
    /// `len` is out of range; use [`Sequence::push`] for that.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Takes out the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// Removes the first element equal to `value`. Returns whether anything
    /// was removed.
    fn remove(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}
