/// A zero-based rank into the sorted order of a map or set.
///
/// Indexing a map by rank yields the value stored there; indexing a set
/// yields the element.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeMap, OSRBTreeMultiSet, Rank};
///
/// let mut map = OSRBTreeMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
/// assert_eq!(map[Rank(0)], 10);
///
/// let set = OSRBTreeMultiSet::from([7, 3, 7]);
/// assert_eq!(set[Rank(2)], 7);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
