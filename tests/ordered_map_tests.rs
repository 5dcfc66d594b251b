//! Scenario tests for `OrderedMap`.

use plain_collections::{Collection, CollectionError, OrderedMap};
use rstest::{fixture, rstest};

mod common;
use common::*;

/// The tree
///
/// ```text
///         10
///       5    15
///      2 7     20
/// ```
#[fixture]
fn six_keys() -> OrderedMap<i32, i32> {
    let mut map = OrderedMap::new();
    for (k, v) in [(10, 25), (15, 50), (20, 99), (5, 25), (7, 50), (2, 99)] {
        map.insert(k, v);
    }
    map
}

#[rstest]
#[case::leaf(2, vec![5, 7, 10, 15, 20])]
#[case::one_child(15, vec![2, 5, 7, 10, 20])]
#[case::two_children(5, vec![2, 7, 10, 15, 20])]
#[case::root_with_two_children(10, vec![2, 5, 7, 15, 20])]
fn removal_keeps_order(
    mut six_keys: OrderedMap<i32, i32>,
    #[case] key: i32,
    #[case] expected: Vec<i32>,
) {
    assert!(six_keys.remove(&key).is_some());
    assert_eq!(5, six_keys.len());
    assert_eq!(expected, keys_of(&six_keys));
    assert_eq!(None, six_keys.get(&key));

    // every survivor is still reachable by descent, not just by traversal
    for k in expected {
        assert!(six_keys.contains_key(&k));
    }
}

#[rstest]
fn removal_of_absent_key_changes_nothing(mut six_keys: OrderedMap<i32, i32>) {
    let before: Vec<_> = six_keys.iter().map(|(k, v)| (*k, *v)).collect();
    let height = six_keys.height();

    assert_eq!(None, six_keys.remove(&99));
    assert!(!six_keys.remove_pair(&99, &0));

    assert_eq!(6, six_keys.len());
    assert_eq!(height, six_keys.height());
    assert_eq!(
        before,
        six_keys.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>()
    );
}

#[rstest]
fn remove_everything_in_insertion_order(mut six_keys: OrderedMap<i32, i32>) {
    for (removed, key) in [10, 15, 20, 5, 7, 2].iter().enumerate() {
        assert!(six_keys.remove(key).is_some());
        assert_eq!(5 - removed, six_keys.len());
        assert_sorted(&keys_of(&six_keys), true);
    }
    assert!(six_keys.is_empty());
    assert_eq!(0, six_keys.height());
}

#[rstest]
fn pair_mismatch_is_not_removed() {
    let mut map = OrderedMap::new();
    map.insert(10, 25);
    assert!(!map.remove_pair(&10, &30));
    assert_eq!(Some(&25), map.get(&10));
    assert!(map.contains(&(10, 25)));
    assert!(!map.contains(&(10, 30)));
}

#[rstest]
fn three_adds_two_keys() {
    let mut map = OrderedMap::new();
    map.insert(10, 25);
    map.insert(100, 50);
    map.insert(10, 99);
    assert_eq!(2, map.len());
    assert_eq!(2, map.iter().count());
    assert_eq!(vec![&99, &50], map.values().collect::<Vec<_>>());
}

#[rstest]
#[case::disallowed(false, 2)]
#[case::allowed(true, 3)]
fn duplicate_policy_decides_count(#[case] allow: bool, #[case] expected: usize) {
    let mut map = OrderedMap::with_key_policy(allow);
    map.insert(10, 25);
    map.insert(100, 50);
    map.insert(10, 99);
    assert_eq!(allow, map.allows_duplicate_keys());
    assert_eq!(expected, map.len());
    assert_eq!(expected, map.iter().count());
    assert_sorted(&keys_of(&map), !allow);
}

#[rstest]
fn duplicates_survive_two_child_removal() {
    let mut map = OrderedMap::with_duplicate_keys();
    for (k, v) in [(5, 'a'), (3, 'b'), (8, 'c'), (5, 'd'), (5, 'e'), (9, 'f')] {
        map.insert(k, v);
    }
    assert!(map.remove_pair(&5, &'a'));
    assert_eq!(5, map.len());
    assert_sorted(&keys_of(&map), false);
    assert!(map.contains(&(5, 'd')));
    assert!(map.contains(&(5, 'e')));
    assert!(!map.contains(&(5, 'a')));
}

#[rstest]
fn indexed_get_requires_the_key() {
    let map: OrderedMap<i32, i32> = [(10, 25)].into_iter().collect();
    assert_eq!(Ok(&25), map.try_get(&10));
    assert_eq!(Err(CollectionError::KeyNotFound), map.try_get(&0));
}

#[rstest]
fn sorted_inserts_degrade_to_a_chain() {
    let mut map = OrderedMap::new();
    for i in 0..10_000 {
        map.insert(i, i * 2);
    }
    assert_eq!(10_000, map.height());
    assert_eq!(Some(&19_998), map.get(&9_999));
    assert_eq!((0..10_000).collect::<Vec<_>>(), keys_of(&map));

    // tear down from the deep end too
    for i in (0..10_000).rev().step_by(2) {
        assert_eq!(Some(i * 2), map.remove(&i));
    }
    assert_eq!(5_000, map.len());
    drop(map);
}

#[rstest]
fn copy_to_fills_from_offset() {
    let map: OrderedMap<i32, i32> = [(20, 99), (10, 25), (15, 50)].into_iter().collect();
    let mut buffer = [(0, 0); 10];
    map.copy_to(&mut buffer, 5).unwrap();
    assert_eq!([(10, 25), (15, 50), (20, 99)], buffer[5..8]);
    assert_eq!(
        Err(CollectionError::IndexOutOfRange { index: 11, len: 10 }),
        map.copy_to(&mut buffer, 8)
    );
}

#[rstest]
fn clear_releases_everything(mut six_keys: OrderedMap<i32, i32>) {
    six_keys.clear();
    assert_eq!(0, six_keys.len());
    assert_eq!(None, six_keys.iter().next());
    six_keys.insert(1, 1);
    assert_eq!(vec![1], keys_of(&six_keys));
}

/// Any `Collection` can be probed and copied out the same way.
fn copy_out<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection,
    C::Item: Clone + Default,
{
    let mut buffer = vec![C::Item::default(); collection.len()];
    collection.copy_to(&mut buffer, 0).unwrap();
    buffer
}

#[rstest]
fn map_is_a_collection_of_pairs(six_keys: OrderedMap<i32, i32>) {
    assert_eq!(
        vec![(2, 99), (5, 25), (7, 50), (10, 25), (15, 50), (20, 99)],
        copy_out(&six_keys)
    );
}
