use super::OSRBMap;
use crate::compare::Natural;
use crate::duplicates::Duplicates;
use crate::raw::RawRBTree;

impl<K, V, D: Duplicates> OSRBMap<K, V, D, Natural> {
    /// Creates an empty map with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map: OSRBTreeMap<i32, i32> = OSRBTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, D: Duplicates, C> OSRBMap<K, V, D, C> {
    /// Makes a new, empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Descending, OSRBTreeMap};
    ///
    /// let mut map = OSRBTreeMap::with_comparator(Descending);
    /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        OSRBMap::from_raw(RawRBTree::new(comparator))
    }

    /// Makes a new, empty map ordered by `comparator` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        OSRBMap::from_raw(RawRBTree::with_capacity(capacity, comparator))
    }

    /// Returns the number of elements the map can hold without
    /// reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the comparator ordering this map.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }
}
