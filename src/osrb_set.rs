use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::compare::{Comparator, Natural};
use crate::duplicates::{Duplicates, Multi, Unique};
use crate::error::Result;
use crate::osrb_map::{self, OSRBMap};
use crate::position::Position;
use crate::Rank;

mod config;

/// An ordered set backed by an order-statistic red-black tree.
///
/// The set is a thin layer over [`OSRBMap`] with `()` values, so it shares
/// the map's positions, rank queries, and duplicate policy. With [`Multi`]
/// (see [`OSRBTreeMultiSet`]) equal keys are all kept, in the order they
/// were inserted.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeSet, Rank};
///
/// let mut books = OSRBTreeSet::new();
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// assert!(!books.contains(&"The Winds of Winter"));
/// assert_eq!(books[Rank(1)], "The Great Gatsby");
/// assert_eq!(books.order_of(&"The Odyssey"), 2);
/// ```
///
/// A set with a known list of items can be initialized from an array:
///
/// ```
/// use osrb_tree::OSRBTreeMultiSet;
///
/// let set = OSRBTreeMultiSet::from([5, 5, 5]);
/// assert_eq!(set.len(), 3);
/// ```
pub struct OSRBSet<K, D = Unique, C = Natural> {
    map: OSRBMap<K, (), D, C>,
}

/// An ordered set of distinct keys.
pub type OSRBTreeSet<K, C = Natural> = OSRBSet<K, Unique, C>;

/// An ordered multiset; equal keys form runs kept in insertion order.
pub type OSRBTreeMultiSet<K, C = Natural> = OSRBSet<K, Multi, C>;

/// An iterator over the items of an `OSRBSet`, in sorted order.
///
/// This `struct` is created by the [`iter`] method on [`OSRBSet`].
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let set = OSRBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// ```
///
/// [`iter`]: OSRBSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, C> {
    inner: osrb_map::Keys<'a, K, (), C>,
}

/// An owning iterator over the items of an `OSRBSet`, in sorted order.
pub struct IntoIter<K> {
    inner: osrb_map::IntoIter<K, ()>,
}

impl<K, D: Duplicates> OSRBSet<K, D, Natural> {
    /// Makes a new, empty set ordered by the key's [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let mut set: OSRBTreeSet<i32> = OSRBTreeSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OSRBSet { map: OSRBMap::new() }
    }
}

impl<K, D: Duplicates, C> OSRBSet<K, D, C> {
    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, invalidating every position taken from it.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.map.first_key_value().map(|(k, _)| k)
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.map.last_key_value().map(|(k, _)| k)
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<K> {
        self.map.pop_first().map(|(k, _)| k)
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<K> {
        self.map.pop_last().map(|(k, _)| k)
    }

    /// Gets an iterator that visits the elements in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter { inner: self.map.keys() }
    }

    /// Returns the element at position `rank` in sorted order.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([30, 10, 20]);
    /// assert_eq!(set.get_by_rank(0), Some(&10));
    /// assert_eq!(set.get_by_rank(3), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&K> {
        self.map.get_by_rank(rank).map(|(k, _)| k)
    }

    /// Returns the position of the element at `index`; negative indices
    /// count back from the end.
    #[must_use]
    pub fn find_by_order(&self, index: isize) -> Position {
        self.map.find_by_order(index)
    }

    /// Returns the rank of the element at `position`; the end ranks at
    /// `len()`.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn order_of_position(&self, position: Position) -> Result<usize> {
        self.map.order_of_position(position)
    }

    /// Returns the position of the smallest element, or the end.
    #[must_use]
    pub fn begin(&self) -> Position {
        self.map.begin()
    }

    /// Returns the past-the-end position.
    #[must_use]
    pub fn end(&self) -> Position {
        self.map.end()
    }

    /// Returns a reverse position at the largest element.
    #[must_use]
    pub fn rbegin(&self) -> Position {
        self.map.rbegin()
    }

    /// Returns the end of a reverse walk.
    #[must_use]
    pub fn rend(&self) -> Position {
        self.map.rend()
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::EndPosition`](crate::Error::EndPosition) for an end position,
    /// and the usual validation errors for foreign or stale ones.
    pub fn key_at(&self, position: Position) -> Result<&K> {
        self.map.key_at(position)
    }

    /// Returns the position one step ahead of `position`.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn next(&self, position: Position) -> Result<Position> {
        self.map.next(position)
    }

    /// Returns the position one step behind `position`.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn prev(&self, position: Position) -> Result<Position> {
        self.map.prev(position)
    }

    /// Jumps `offset` elements from `position`; out of range is the end.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn advance(&self, position: Position, offset: isize) -> Result<Position> {
        self.map.advance(position, offset)
    }

    /// Returns `rank(a) - rank(b)`.
    ///
    /// # Errors
    ///
    /// Fails for foreign or stale positions, or mixed directions.
    pub fn distance(&self, a: Position, b: Position) -> Result<isize> {
        self.map.distance(a, b)
    }

    /// Orders two positions by rank.
    ///
    /// # Errors
    ///
    /// Fails for foreign or stale positions, or mixed directions.
    pub fn compare_positions(&self, a: Position, b: Position) -> Result<Ordering> {
        self.map.compare_positions(a, b)
    }

    /// Removes the element at `position` and returns the position that
    /// followed it.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn remove_at(&mut self, position: Position) -> Result<Position> {
        self.map.remove_at(position)
    }
}

impl<K, D: Duplicates, C: Comparator<K>> OSRBSet<K, D, C> {
    /// Adds a value to the set and returns its position.
    ///
    /// In a unique set an equal element already present is left in place
    /// and its position returned; a multiset always adds a new element at
    /// the end of the run of equal ones.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{OSRBTreeMultiSet, OSRBTreeSet};
    ///
    /// let mut set = OSRBTreeSet::new();
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    ///
    /// let mut multi = OSRBTreeMultiSet::new();
    /// multi.insert(2);
    /// let second = multi.insert(2);
    /// assert_eq!(multi.len(), 2);
    /// assert_eq!(multi.order_of_position(second), Ok(1));
    /// ```
    pub fn insert(&mut self, value: K) -> Position {
        self.map.insert(value, ())
    }

    /// Returns `true` if the set contains an element equal to `value`.
    pub fn contains(&self, value: &K) -> bool {
        self.map.contains_key(value)
    }

    /// Returns a reference to an element equal to `value`, if any.
    pub fn get(&self, value: &K) -> Option<&K> {
        self.map.get_key_value(value).map(|(k, _)| k)
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &K) -> usize {
        self.map.count(value)
    }

    /// Removes one element equal to `value`. Returns whether one was
    /// present.
    pub fn remove(&mut self, value: &K) -> bool {
        self.map.remove(value).is_some()
    }

    /// Removes and returns one element equal to `value`, if any.
    pub fn take(&mut self, value: &K) -> Option<K> {
        self.map.remove_entry(value).map(|(k, _)| k)
    }

    /// Removes one element equal to `value` and returns the position of the
    /// element that followed it, or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMultiSet;
    ///
    /// let mut set = OSRBTreeMultiSet::from([5, 5, 5]);
    /// set.erase(&5);
    /// assert_eq!(set.count(&5), 2);
    /// ```
    pub fn erase(&mut self, value: &K) -> Position {
        self.map.erase(value)
    }

    /// Retains only the elements for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.retain(|k, _| f(k));
    }

    /// Returns the position of an element equal to `value`, or the end.
    pub fn find(&self, value: &K) -> Position {
        self.map.find(value)
    }

    /// Returns the position of the first element not less than `value`.
    pub fn lower_bound(&self, value: &K) -> Position {
        self.map.lower_bound(value)
    }

    /// Returns the position of the first element greater than `value`.
    pub fn upper_bound(&self, value: &K) -> Position {
        self.map.upper_bound(value)
    }

    /// Returns the number of elements strictly less than `value`, whether or
    /// not `value` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMultiSet;
    ///
    /// let set = OSRBTreeMultiSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.order_of(&2), 1);
    /// assert_eq!(set.order_of(&3), 3);
    /// assert_eq!(set.order_of(&9), 4);
    /// ```
    #[must_use]
    pub fn order_of(&self, value: &K) -> usize {
        self.map.order_of(value)
    }

    /// Returns the rank of `value`, or `None` if it is absent.
    #[must_use]
    pub fn rank_of(&self, value: &K) -> Option<usize> {
        self.map.rank_of(value)
    }
}

impl<K: Clone, D: Duplicates, C: Comparator<K> + Clone> Clone for OSRBSet<K, D, C> {
    fn clone(&self) -> Self {
        OSRBSet { map: self.map.clone() }
    }
}

impl<K: Hash, D: Duplicates, C> Hash for OSRBSet<K, D, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for k in self {
            k.hash(state);
        }
    }
}

impl<K: PartialEq, D: Duplicates, C> PartialEq for OSRBSet<K, D, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Eq, D: Duplicates, C> Eq for OSRBSet<K, D, C> {}

impl<K: fmt::Debug, D: Duplicates, C> fmt::Debug for OSRBSet<K, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, D: Duplicates, C: Default> Default for OSRBSet<K, D, C> {
    fn default() -> Self {
        OSRBSet { map: OSRBMap::default() }
    }
}

impl<K, D: Duplicates, C: Comparator<K> + Default> FromIterator<K> for OSRBSet<K, D, C> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = OSRBSet::default();
        set.extend(iter);
        set
    }
}

impl<K, D: Duplicates, C: Comparator<K>> Extend<K> for OSRBSet<K, D, C> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<'a, K: 'a + Copy, D: Duplicates, C: Comparator<K>> Extend<&'a K> for OSRBSet<K, D, C> {
    fn extend<T: IntoIterator<Item = &'a K>>(&mut self, iter: T) {
        <Self as Extend<K>>::extend(self, iter.into_iter().copied());
    }
}

impl<K: Ord, D: Duplicates, const N: usize> From<[K; N]> for OSRBSet<K, D, Natural> {
    /// Converts a `[K; N]` into an `OSRBSet`.
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set1 = OSRBTreeSet::from([1, 2, 3, 4]);
    /// let set2: OSRBTreeSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [K; N]) -> Self {
        let mut set = OSRBSet::with_capacity(N);
        set.extend(arr);
        set
    }
}

impl<'a, K, D: Duplicates, C> IntoIterator for &'a OSRBSet<K, D, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, C>;

    fn into_iter(self) -> Iter<'a, K, C> {
        self.iter()
    }
}

impl<K, D: Duplicates, C> IntoIterator for OSRBSet<K, D, C> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Gets an owning iterator over the elements, in sorted order.
    ///
    /// ```
    /// use osrb_tree::OSRBTreeSet;
    ///
    /// let set = OSRBTreeSet::from([1, 2, 3, 4]);
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<K> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

/// Indexes into the set by rank, yielding the element itself.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use osrb_tree::{OSRBTreeSet, Rank};
///
/// let set = OSRBTreeSet::from(["b", "a", "c"]);
/// assert_eq!(set[Rank(2)], "c");
/// ```
impl<K, D: Duplicates, C> Index<Rank> for OSRBSet<K, D, C> {
    type Output = K;

    fn index(&self, rank: Rank) -> &K {
        self.get_by_rank(rank.0).expect("rank out of bounds")
    }
}

impl<'a, K, C> Iterator for Iter<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, C> DoubleEndedIterator for Iter<'a, K, C> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.inner.next_back()
    }
}

impl<K, C> ExactSizeIterator for Iter<'_, K, C> {}

impl<K, C> FusedIterator for Iter<'_, K, C> {}

impl<K, C> Clone for Iter<'_, K, C> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for Iter<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

impl<K: fmt::Debug> fmt::Debug for IntoIter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}
