use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use osrb_tree::osrb_set;
use osrb_tree::{Descending, OSRBTreeSet, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Values drawn from a range that guarantees collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Erase(i64),
    Contains(i64),
    First,
    Last,
    PopFirst,
    PopLast,
    OrderOf(i64),
    FindByOrder(isize),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        2 => value_strategy().prop_map(SetOp::Remove),
        1 => value_strategy().prop_map(SetOp::Erase),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
        2 => value_strategy().prop_map(SetOp::OrderOf),
        2 => (-2_500isize..2_500).prop_map(SetOp::FindByOrder),
    ]
}

fn signed_nth(set: &BTreeSet<i64>, index: isize) -> Option<&i64> {
    if index < 0 {
        set.len().checked_sub(index.unsigned_abs()).and_then(|rank| set.iter().nth(rank))
    } else {
        set.iter().nth(index.unsigned_abs())
    }
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OSRBTreeSet and
    /// BTreeSet and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut os_set: OSRBTreeSet<i64> = OSRBTreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    let position = os_set.insert(*v);
                    bt_set.insert(*v);
                    prop_assert_eq!(os_set.key_at(position), Ok(v));
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(os_set.remove(v), bt_set.remove(v), "remove({})", v);
                }
                SetOp::Erase(v) => {
                    let next = os_set.erase(v);
                    let expected = if bt_set.remove(v) { bt_set.range(v..).next() } else { None };
                    prop_assert_eq!(os_set.key_at(next).ok(), expected, "erase({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(os_set.contains(v), bt_set.contains(v), "contains({})", v);
                }
                SetOp::First => prop_assert_eq!(os_set.first(), bt_set.first()),
                SetOp::Last => prop_assert_eq!(os_set.last(), bt_set.last()),
                SetOp::PopFirst => prop_assert_eq!(os_set.pop_first(), bt_set.pop_first()),
                SetOp::PopLast => prop_assert_eq!(os_set.pop_last(), bt_set.pop_last()),
                SetOp::OrderOf(v) => {
                    prop_assert_eq!(os_set.order_of(v), bt_set.range(..*v).count(), "order_of({})", v);
                }
                SetOp::FindByOrder(index) => {
                    let found = os_set.key_at(os_set.find_by_order(*index)).ok();
                    prop_assert_eq!(found, signed_nth(&bt_set, *index), "find_by_order({})", index);
                }
            }
            prop_assert_eq!(os_set.len(), bt_set.len(), "len mismatch after {:?}", op);
        }
    }

    /// Rank indexing agrees with the sorted order at every rank.
    #[test]
    fn rank_index_matches_sorted_order(values in proptest::collection::vec(value_strategy(), 1..1_000)) {
        let os_set: OSRBTreeSet<i64> = values.iter().copied().collect();
        let bt_set: BTreeSet<i64> = values.iter().copied().collect();

        for (rank, expected) in bt_set.iter().enumerate() {
            prop_assert_eq!(&os_set[Rank(rank)], expected);
            prop_assert_eq!(os_set.rank_of(expected), Some(rank));
        }
        prop_assert!(os_set.iter().eq(bt_set.iter()));
        prop_assert!(os_set.iter().rev().eq(bt_set.iter().rev()));
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn ascending_inserts_rank_and_select() {
    let mut set = OSRBTreeSet::new();
    for i in 0..1_000 {
        set.insert(i);
    }
    assert_eq!(set.len(), 1_000);
    assert_eq!(set.order_of(&500), 500);
    assert_eq!(set.key_at(set.find_by_order(999)), Ok(&999));
    assert!(set.find_by_order(1_000).is_end());
}

#[test]
fn duplicate_insert_keeps_one() {
    let mut set = OSRBTreeSet::new();
    let first = set.insert(5);
    let again = set.insert(5);
    assert_eq!(first, again);
    assert_eq!(set.len(), 1);
    assert_eq!(set.count(&5), 1);
    assert_eq!(set.count(&6), 0);
}

#[rstest]
#[case(&[], 0, None)]
#[case(&[1], 0, Some(1))]
#[case(&[3, 1, 2], 1, Some(2))]
#[case(&[3, 1, 2], 3, None)]
fn get_by_rank_cases(#[case] values: &[i32], #[case] rank: usize, #[case] expected: Option<i32>) {
    let set: OSRBTreeSet<i32> = values.iter().copied().collect();
    assert_eq!(set.get_by_rank(rank).copied(), expected);
}

#[test]
fn take_and_get_return_stored_elements() {
    let mut set = OSRBTreeSet::from([1, 2, 3]);
    assert_eq!(set.get(&2), Some(&2));
    assert_eq!(set.take(&2), Some(2));
    assert_eq!(set.take(&2), None);
    assert_eq!(set.get(&2), None);
}

#[test]
fn retain_and_extend_by_reference() {
    let mut set: OSRBTreeSet<i32> = (0..10).collect();
    set.retain(|v| v % 2 == 1);
    set.extend(&[20, 21]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7, 9, 20, 21]);
}

#[test]
fn descending_set() {
    let mut set = OSRBTreeSet::with_comparator(Descending);
    set.extend([4, 1, 3, 2]);
    assert_eq!(set.first(), Some(&4));
    assert_eq!(set.order_of(&3), 1);
    assert_eq!(set[Rank(3)], 1);
}

#[test]
fn clear_resets_and_reuses() {
    let mut set: OSRBTreeSet<i32> = (0..100).collect();
    let capacity = set.capacity();
    set.clear();
    assert!(set.is_empty());
    assert!(set.begin().is_end());
    set.extend(0..100);
    assert_eq!(set.capacity(), capacity);
    assert_eq!(set.len(), 100);
}

#[test]
fn traits() {
    let a = OSRBTreeSet::from([3, 1, 2]);
    let b: OSRBTreeSet<i32> = [1, 2, 3].into();
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), "{1, 2, 3}");

    let iter: osrb_set::Iter<'_, i32, _> = a.iter();
    assert_eq!(format!("{iter:?}"), "[1, 2, 3]");
    assert_eq!(iter.last(), Some(&3));

    let mut owned = a.clone().into_iter();
    assert_eq!(owned.next(), Some(1));
    assert_eq!(owned.next_back(), Some(3));
    assert_eq!(owned.len(), 1);

    let default: OSRBTreeSet<i32> = OSRBTreeSet::default();
    assert!(default.is_empty());
}

#[test]
fn unordered_inserts_come_out_sorted() {
    let mut set = OSRBTreeSet::new();
    for v in [1, 5, 3, 2, 4] {
        set.insert(v);
    }
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(set.key_at(set.find_by_order(0)), Ok(&1));
    assert_eq!(set.key_at(set.find_by_order(4)), Ok(&5));
    assert_eq!(set.order_of(&3), 2);
    assert_eq!(set.key_at(set.find_by_order(-1)), Ok(&5));
    assert!(set.find_by_order(5).is_end());
}

#[test]
fn insert_then_erase_round_trips() {
    let mut set: OSRBTreeSet<i32> = (0..10).step_by(2).collect();
    set.insert(5);
    assert!(set.contains(&5));
    assert_eq!(set.len(), 6);
    set.erase(&5);
    assert!(!set.contains(&5));
    assert_eq!(set.len(), 5);
    assert!(set.erase(&5).is_end());
    assert_eq!(set.len(), 5);
}

#[test]
fn moving_out_leaves_an_empty_set() {
    let mut set = OSRBTreeSet::from([1, 2, 3]);
    let moved = std::mem::take(&mut set);
    assert!(set.is_empty());
    assert_eq!(moved.len(), 3);
}

#[test]
fn set_iterator_clone_resumes_where_it_was() {
    let set = OSRBTreeSet::from([10, 20, 30]);
    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(&10));
    let copy = iter.clone();
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(copy.copied().collect::<Vec<_>>(), [20, 30]);
    assert_eq!(format!("{:?}", set.iter()), "[10, 20, 30]");
}
