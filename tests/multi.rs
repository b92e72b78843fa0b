use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use osrb_tree::{OSRBTreeMultiMap, OSRBTreeMultiSet, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i16> {
    // A narrow range so that long runs of equal keys build up.
    -40i16..40i16
}

// ─── Sorted-vector model ─────────────────────────────────────────────────────

/// Entries kept sorted by key, equal keys in insertion order.
#[derive(Default)]
struct Model {
    entries: Vec<(i16, u32)>,
}

impl Model {
    fn lower(&self, key: i16) -> usize {
        self.entries.partition_point(|(k, _)| *k < key)
    }

    fn upper(&self, key: i16) -> usize {
        self.entries.partition_point(|(k, _)| *k <= key)
    }

    fn insert(&mut self, key: i16, value: u32) -> usize {
        let at = self.upper(key);
        self.entries.insert(at, (key, value));
        at
    }
}

#[derive(Debug, Clone)]
enum MultiOp {
    Insert(i16),
    RemoveFirstOfRun(i16),
    RemoveAtRank(usize),
    Count(i16),
    OrderOf(i16),
}

fn multi_op_strategy() -> impl Strategy<Value = MultiOp> {
    prop_oneof![
        6 => key_strategy().prop_map(MultiOp::Insert),
        2 => key_strategy().prop_map(MultiOp::RemoveFirstOfRun),
        1 => (0usize..200).prop_map(MultiOp::RemoveAtRank),
        2 => key_strategy().prop_map(MultiOp::Count),
        2 => key_strategy().prop_map(MultiOp::OrderOf),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// A multimap tagged with insertion sequence numbers must agree with the
    /// sorted-vector model entry for entry, which checks that runs of equal
    /// keys stay in insertion order.
    #[test]
    fn multimap_matches_stable_sorted_vec(ops in proptest::collection::vec(multi_op_strategy(), TEST_SIZE)) {
        let mut map: OSRBTreeMultiMap<i16, u32> = OSRBTreeMultiMap::new();
        let mut model = Model::default();
        let mut sequence = 0u32;

        for op in &ops {
            match op {
                MultiOp::Insert(k) => {
                    sequence += 1;
                    let position = map.insert(*k, sequence);
                    let rank = model.insert(*k, sequence);
                    prop_assert_eq!(map.order_of_position(position), Ok(rank));
                }
                MultiOp::RemoveFirstOfRun(k) => {
                    let position = map.lower_bound(k);
                    let found = map.key_at(position).ok() == Some(k);
                    if found {
                        let next = map.remove_at(position).unwrap();
                        let at = model.lower(*k);
                        model.entries.remove(at);
                        prop_assert_eq!(map.order_of_position(next), Ok(at));
                    }
                }
                MultiOp::RemoveAtRank(rank) => {
                    let position = map.find_by_order(isize::try_from(*rank).unwrap());
                    let next = map.remove_at(position).unwrap();
                    if *rank < model.entries.len() {
                        model.entries.remove(*rank);
                        prop_assert_eq!(map.order_of_position(next), Ok(*rank));
                    } else {
                        prop_assert!(next.is_end());
                    }
                }
                MultiOp::Count(k) => {
                    prop_assert_eq!(map.count(k), model.upper(*k) - model.lower(*k), "count({})", k);
                }
                MultiOp::OrderOf(k) => {
                    prop_assert_eq!(map.order_of(k), model.lower(*k), "order_of({})", k);
                }
            }
            prop_assert_eq!(map.len(), model.entries.len());
        }

        let entries: Vec<(i16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(entries, model.entries);
    }

    /// `find` lands inside the run, and the run is exactly the span between
    /// the bounds.
    #[test]
    fn find_lands_in_run(keys in proptest::collection::vec(key_strategy(), 0..400), probe in key_strategy()) {
        let set: OSRBTreeMultiSet<i16> = keys.iter().copied().collect();
        let expected = keys.iter().filter(|&&k| k == probe).count();

        let found = set.find(&probe);
        if expected == 0 {
            prop_assert!(found.is_end());
        } else {
            prop_assert_eq!(set.key_at(found), Ok(&probe));
            let rank = set.order_of_position(found).unwrap();
            prop_assert!(rank >= set.order_of(&probe) && rank < set.order_of(&probe) + expected);
        }

        let run = set.distance(set.upper_bound(&probe), set.lower_bound(&probe)).unwrap();
        prop_assert_eq!(usize::try_from(run).unwrap(), expected);
        prop_assert_eq!(set.count(&probe), expected);
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn triple_five() {
    let mut set = OSRBTreeMultiSet::new();
    set.insert(5);
    set.insert(5);
    set.insert(5);

    assert_eq!(set.len(), 3);
    assert_eq!(set.order_of(&5), 0);
    assert_eq!(set.distance(set.upper_bound(&5), set.lower_bound(&5)), Ok(3));

    set.erase(&5);
    assert_eq!(set.len(), 2);
    assert_eq!(set.count(&5), 2);
}

#[test]
fn multimap_runs_keep_insertion_order() {
    let mut map = OSRBTreeMultiMap::new();
    for (k, v) in [(2, "x"), (1, "a"), (2, "y"), (3, "c"), (2, "z")] {
        map.insert(k, v);
    }

    let run: Vec<&str> = {
        let mut out = Vec::new();
        let end = map.upper_bound(&2);
        let mut p = map.lower_bound(&2);
        while p != end {
            out.push(*map.value_at(p).unwrap());
            p = map.next(p).unwrap();
        }
        out
    };
    assert_eq!(run, ["x", "y", "z"]);
    assert_eq!(map[Rank(4)], "c");
}

#[test]
fn removing_from_the_middle_of_a_run() {
    let mut map = OSRBTreeMultiMap::new();
    let mut middle = None;
    for i in 0..5 {
        let p = map.insert(7, i);
        if i == 2 {
            middle = Some(p);
        }
    }
    let middle = middle.unwrap();

    let next = map.remove_at(middle).unwrap();
    assert_eq!(map.value_at(next), Ok(&3));
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [0, 1, 3, 4]);
}

#[rstest]
#[case(&[], 1, 0)]
#[case(&[1, 1, 1], 1, 0)]
#[case(&[1, 1, 1], 2, 3)]
#[case(&[0, 1, 1, 2], 1, 1)]
#[case(&[0, 1, 1, 2], 2, 3)]
fn multiset_order_of(#[case] values: &[i32], #[case] probe: i32, #[case] expected: usize) {
    let set: OSRBTreeMultiSet<i32> = values.iter().copied().collect();
    assert_eq!(set.order_of(&probe), expected);
}

#[test]
fn multiset_clone_preserves_runs() {
    let mut map = OSRBTreeMultiMap::new();
    for (i, k) in [3, 1, 3, 2, 3].into_iter().enumerate() {
        map.insert(k, i);
    }
    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(copy.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), [(1, 1), (2, 3), (3, 0), (3, 2), (3, 4)]);
}

#[test]
fn multimap_get_or_insert_default_reuses_existing() {
    let mut map: OSRBTreeMultiMap<&str, u32> = OSRBTreeMultiMap::new();
    *map.get_or_insert_default("k") += 1;
    *map.get_or_insert_default("k") += 1;
    assert_eq!(map.len(), 1);
    assert_eq!(map[&"k"], 2);
}

#[test]
fn erase_by_key_returns_the_next_element() {
    let mut map = OSRBTreeMultiMap::new();
    for (k, v) in [(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd')] {
        map.insert(k, v);
    }

    let next = map.erase(&2);
    assert_eq!(map.entry_at(next), Ok((&2, &'c')));
    let next = map.erase(&2);
    assert_eq!(map.entry_at(next), Ok((&3, &'d')));
    assert!(map.erase(&3).is_end());

    assert!(map.erase(&2).is_end());
    assert_eq!(map.len(), 1);
    assert_eq!(map.first_key_value(), Some((&1, &'a')));
}
