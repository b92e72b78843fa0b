use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use osrb_tree::{Error, OSRBTreeMap, OSRBTreeSet};

fn set_of(range: std::ops::Range<i32>) -> OSRBTreeSet<i32> {
    range.collect()
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn positions_from_another_tree_are_rejected() {
    let a = set_of(0..10);
    let b = set_of(0..10);
    let p = a.find(&3);

    assert_eq!(b.key_at(p), Err(Error::ForeignPosition));
    assert_eq!(b.next(p), Err(Error::ForeignPosition));
    assert_eq!(b.distance(p, b.begin()), Err(Error::ForeignPosition));
    assert_eq!(b.order_of_position(a.end()), Err(Error::ForeignPosition));
}

#[test]
fn removal_invalidates_only_the_removed_element() {
    let mut set = set_of(0..10);
    let three = set.find(&3);
    let four = set.find(&4);

    set.remove(&3);
    assert_eq!(set.key_at(three), Err(Error::InvalidatedPosition));
    assert_eq!(set.advance(three, 1), Err(Error::InvalidatedPosition));
    assert_eq!(set.key_at(four), Ok(&4));
    assert_eq!(set.order_of_position(four), Ok(3));
}

#[test]
fn reused_slots_do_not_revive_stale_positions() {
    let mut set = set_of(0..4);
    let two = set.find(&2);
    set.remove(&2);
    set.insert(100);
    assert_eq!(set.key_at(two), Err(Error::InvalidatedPosition));
}

#[test]
fn clear_invalidates_everything_but_the_end() {
    let mut set = set_of(0..4);
    let first = set.begin();
    let end = set.end();
    set.clear();
    assert_eq!(set.key_at(first), Err(Error::InvalidatedPosition));
    assert_eq!(set.order_of_position(end), Ok(0));
}

#[test]
fn stale_remove_leaves_tree_untouched() {
    let mut set = set_of(0..4);
    let one = set.find(&1);
    set.remove(&1);
    assert_eq!(set.remove_at(one), Err(Error::InvalidatedPosition));
    assert_eq!(set.len(), 3);
}

#[test]
fn end_position_has_no_element() {
    let set = set_of(0..3);
    assert_eq!(set.key_at(set.end()), Err(Error::EndPosition));
    assert_eq!(set.key_at(set.rend()), Err(Error::EndPosition));
}

// ─── Movement ────────────────────────────────────────────────────────────────

#[test]
fn stepping_off_the_end_and_back() {
    let set = set_of(1..4);
    let last = set.find(&3);
    let end = set.next(last).unwrap();
    assert!(end.is_end());
    assert_eq!(set.key_at(set.prev(end).unwrap()), Ok(&3));
    assert_eq!(set.key_at(set.next(end).unwrap()), Ok(&1));
}

#[test]
fn reverse_walk() {
    let set = set_of(0..5);
    let mut walked = Vec::new();
    let mut p = set.rbegin();
    assert!(p.is_reverse());
    while p != set.rend() {
        walked.push(*set.key_at(p).unwrap());
        p = set.next(p).unwrap();
    }
    assert_eq!(walked, [4, 3, 2, 1, 0]);

    let second = set.advance(set.rbegin(), 1).unwrap();
    assert_eq!(set.key_at(second), Ok(&3));
    assert_eq!(set.order_of_position(second), Ok(1));
    assert_eq!(set.distance(set.rend(), set.rbegin()), Ok(5));
}

#[test]
fn comparing_positions() {
    let set = set_of(0..10);
    let (two, seven) = (set.find(&2), set.find(&7));
    assert_eq!(set.compare_positions(two, seven), Ok(Ordering::Less));
    assert_eq!(set.compare_positions(set.end(), seven), Ok(Ordering::Greater));
    assert_eq!(set.distance(two, seven), Ok(-5));
    assert_eq!(set.compare_positions(two, set.rbegin()), Err(Error::DirectionMismatch));
}

#[test]
fn advance_from_end_counts_back() {
    let set = set_of(0..10);
    assert_eq!(set.key_at(set.advance(set.end(), -3).unwrap()), Ok(&7));
    assert!(set.advance(set.end(), 1).unwrap().is_end());
    assert!(set.advance(set.begin(), -1).unwrap().is_end());
}

#[test]
fn positions_survive_rebalancing() {
    let mut map: OSRBTreeMap<i32, i32> = OSRBTreeMap::new();
    let held = map.insert(500, 0);
    for k in 0..1_000 {
        if k != 500 {
            map.insert(k, k);
        }
    }
    for k in (0..1_000).filter(|k| k % 3 == 0 && *k != 500) {
        map.remove(&k);
    }
    assert_eq!(map.key_at(held), Ok(&500));
    assert_eq!(map.order_of_position(held), Ok(map.order_of(&500)));
}

#[test]
fn erase_while_walking() {
    let mut map: OSRBTreeMap<i32, i32> = (0..20).map(|k| (k, k)).collect();
    let mut p = map.begin();
    while !p.is_end() {
        p = if map.key_at(p).unwrap() % 4 == 0 { map.remove_at(p).unwrap() } else { map.next(p).unwrap() };
    }
    assert_eq!(map.len(), 15);
    assert!(map.keys().all(|k| k % 4 != 0));
}

#[test]
fn reverse_remove_returns_the_smaller_neighbour() {
    let mut set = set_of(0..5);
    let three = set.advance(set.rbegin(), 1).unwrap();
    let next = set.remove_at(three).unwrap();
    assert!(next.is_reverse());
    assert_eq!(set.key_at(next), Ok(&2));
}
