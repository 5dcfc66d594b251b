#![allow(dead_code)]

use plain_collections::{Collection, OrderedMap, Sequence};

/// Builds any sequence holding `1..=n`.
pub fn one_to<S>(n: i32) -> S
where
    S: FromIterator<i32>,
{
    (1..=n).collect()
}

/// Reads a sequence out through its indexed accessor.
pub fn by_index<S>(seq: &S) -> Vec<i32>
where
    S: Sequence<Item = i32>,
{
    (0..seq.len()).map(|i| *seq.get(i).unwrap()).collect()
}

/// Keys of a map in traversal order.
pub fn keys_of<K: Clone, V>(map: &OrderedMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Asserts that `keys` never decrease, and never repeat when `strict`.
pub fn assert_sorted<K: Ord + std::fmt::Debug>(keys: &[K], strict: bool) {
    for pair in keys.windows(2) {
        if strict {
            assert!(pair[0] < pair[1], "{:?} is not ascending", keys);
        } else {
            assert!(pair[0] <= pair[1], "{:?} is not ascending", keys);
        }
    }
}
