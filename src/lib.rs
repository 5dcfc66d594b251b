//! Hand-built generic containers that share one contract.
//!
//! - [`SequentialList`]: singly linked list
//! - [`DoublyLinkedList`]: linked list with back-links
//! - [`DynamicArray`]: growable array list
//! - [`OrderedMap`]: ordered map on an unbalanced binary search tree
//!
//! The lists and the array implement [`Sequence`], and all four implement
//! [`Collection`], so client code can swap one for another.
//!
//! The linked structures keep their nodes in an arena and link them by
//! index, so a back-link never owns the node it points to.
//!
//! Nothing in here is synchronized. To share a structure between threads,
//! put it behind a lock of your own. Iterators borrow the structure they
//! walk, so the compiler rejects any mutation while one is alive.

mod arena;
mod collection;
pub mod doubly_linked_list;
pub mod dynamic_array;
mod error;
pub mod sequential_list;
pub mod tree_map;

pub use collection::{Collection, Sequence};
pub use doubly_linked_list::DoublyLinkedList;
pub use dynamic_array::{DynamicArray, DEFAULT_CAPACITY};
pub use error::{CollectionError, Result};
pub use sequential_list::SequentialList;
pub use tree_map::OrderedMap;

