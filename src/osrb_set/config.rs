use super::OSRBSet;
use crate::compare::Natural;
use crate::duplicates::Duplicates;
use crate::osrb_map::OSRBMap;

impl<K, D: Duplicates> OSRBSet<K, D, Natural> {
    /// Creates an empty set with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set: OSRBTreeSet<i32> = OSRBTreeSet::with_capacity(32);
    /// assert!(set.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSRBSet {
            map: OSRBMap::with_capacity(capacity),
        }
    }
}

impl<K, D: Duplicates, C> OSRBSet<K, D, C> {
    /// Makes a new, empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{Descending, OSRBTreeMultiSet};
    ///
    /// let mut set = OSRBTreeMultiSet::with_comparator(Descending);
    /// set.extend([1, 3, 3, 2]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        OSRBSet {
            map: OSRBMap::with_comparator(comparator),
        }
    }

    /// Makes a new, empty set ordered by `comparator` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        OSRBSet {
            map: OSRBMap::with_capacity_and_comparator(capacity, comparator),
        }
    }

    /// Returns the number of elements the set can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns the comparator ordering this set.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.map.comparator()
    }
}
