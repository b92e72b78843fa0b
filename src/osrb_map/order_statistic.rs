use core::ops::{Index, IndexMut};

use super::OSRBMap;
use crate::compare::Comparator;
use crate::duplicates::Duplicates;
use crate::position::{Direction, Position};
use crate::Rank;

impl<K, V, D: Duplicates, C> OSRBMap<K, V, D, C> {
    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select(rank).map(|id| self.entry(id))
    }

    /// Returns the key and a mutable reference to the value at position
    /// `rank` in sorted order.
    ///
    /// The key stays shared because mutating it could break the ordering.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let id = self.raw.select(rank)?;
        let node = self.raw.node_mut(id);
        Some((&node.key, &mut node.value))
    }

    /// Returns the position of the element at `index` in sorted order.
    ///
    /// Negative indices count back from the end, so `-1` is the last
    /// element. Anything out of range is the end position.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(map.key_at(map.find_by_order(0)), Ok(&1));
    /// assert_eq!(map.key_at(map.find_by_order(-1)), Ok(&3));
    /// assert!(map.find_by_order(3).is_end());
    /// ```
    #[must_use]
    pub fn find_by_order(&self, index: isize) -> Position {
        self.raw.position(self.raw.find_by_order(index), Direction::Forward)
    }

    /// Returns the rank of the element at `position`; the end ranks at
    /// `len()`. Reverse positions count from the back.
    ///
    /// # Errors
    ///
    /// Fails if the position belongs to another tree or its element has
    /// been removed.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn order_of_position(&self, position: Position) -> crate::Result<usize> {
        self.raw.position_rank(position)
    }
}

impl<K, V, D: Duplicates, C: Comparator<K>> OSRBMap<K, V, D, C> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// The key does not have to be present: the result is then the rank it
    /// would take once inserted. In a multimap this is the rank of the first
    /// element of the run.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.order_of(&20), 1);
    /// assert_eq!(map.order_of(&25), 2);
    /// assert_eq!(map.order_of(&99), 3);
    /// ```
    #[must_use]
    pub fn order_of(&self, key: &K) -> usize {
        self.raw.order_of(key)
    }

    /// Returns the zero-based rank of `key`, or `None` if it is absent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.rank_of(&10), Some(0));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: &K) -> Option<usize> {
        let id = self.raw.lower_bound(key)?;
        let found = self.raw.comparator().compare(&self.raw.node(id).key, key).is_eq();
        found.then(|| self.raw.rank_of_node(id))
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeMap, Rank};
///
/// let map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V, D: Duplicates, C> Index<Rank> for OSRBMap<K, V, D, C> {
    type Output = V;

    fn index(&self, rank: Rank) -> &V {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeMap, Rank};
///
/// let mut map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V, D: Duplicates, C> IndexMut<Rank> for OSRBMap<K, V, D, C> {
    fn index_mut(&mut self, rank: Rank) -> &mut V {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
