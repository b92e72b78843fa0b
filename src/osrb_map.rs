use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Index;

use crate::compare::{Comparator, Natural};
use crate::duplicates::{Duplicates, Multi, Unique};
use crate::position::Position;
use crate::raw::{Inserted, Link, RawRBTree};

mod config;
mod order_statistic;
mod position;

/// An ordered map backed by an order-statistic [red-black tree].
///
/// Besides the usual ordered-map operations, every entry can be reached by
/// its zero-based rank in sorted order, and every key's rank can be
/// computed, both in O(log n).
///
/// The duplicate policy `D` is either [`Unique`] (one value per key, see
/// [`OSRBTreeMap`]) or [`Multi`] (runs of equal keys, see
/// [`OSRBTreeMultiMap`]). The ordering `C` is any [`Comparator`];
/// [`Natural`] uses the key's [`Ord`].
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let mut scores = OSRBTreeMap::new();
/// scores.insert("Alice", 100);
/// scores.insert("Bob", 85);
/// scores.insert("Carol", 92);
///
/// assert_eq!(scores.get(&"Bob"), Some(&85));
///
/// // Order-statistic queries.
/// assert_eq!(scores.get_by_rank(1), Some((&"Bob", &85)));
/// assert_eq!(scores.rank_of(&"Carol"), Some(2));
///
/// // Indexed access inserts a default value for a missing key.
/// *scores.get_or_insert_default("Dave") += 70;
/// assert_eq!(scores[&"Dave"], 70);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct OSRBMap<K, V, D = Unique, C = Natural> {
    raw: RawRBTree<K, V, C>,
    _duplicates: PhantomData<D>,
}

/// An ordered map with one value per key.
pub type OSRBTreeMap<K, V, C = Natural> = OSRBMap<K, V, Unique, C>;

/// An ordered map where equal keys form runs kept in insertion order.
pub type OSRBTreeMultiMap<K, V, C = Natural> = OSRBMap<K, V, Multi, C>;

/// An iterator over the entries of an `OSRBMap`, in sorted order.
///
/// This `struct` is created by the [`iter`] method on [`OSRBMap`].
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeMap;
///
/// let map = OSRBTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OSRBMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C> {
    tree: &'a RawRBTree<K, V, C>,
    front: Link,
    back: Link,
    remaining: usize,
}

/// An iterator over the keys of an `OSRBMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `OSRBMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An owning iterator over the entries of an `OSRBMap`, in sorted order.
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V, D: Duplicates> OSRBMap<K, V, D, Natural> {
    /// Makes a new, empty map ordered by the key's [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{OSRBTreeMap, OSRBTreeMultiMap};
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    ///
    /// let mut multi = OSRBTreeMultiMap::new();
    /// multi.insert(1, "a");
    /// multi.insert(1, "b");
    /// assert_eq!(multi.len(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, D: Duplicates, C> OSRBMap<K, V, D, C> {
    pub(crate) fn from_raw(raw: RawRBTree<K, V, C>) -> Self {
        OSRBMap {
            raw,
            _duplicates: PhantomData,
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all elements.
    ///
    /// Every position taken from the map becomes invalid.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut a = OSRBTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the first key-value pair in the map.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|id| self.entry(id))
    }

    /// Returns the last key-value pair in the map.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|id| self.entry(id))
    }

    /// Removes and returns the first element in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.first().map(|id| self.raw.remove_node(id))
    }

    /// Removes and returns the last element in the map.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.last().map(|id| self.raw.remove_node(id))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    fn entry(&self, id: crate::raw::NodeId) -> (&K, &V) {
        let node = self.raw.node(id);
        (&node.key, &node.value)
    }
}

impl<K, V, D: Duplicates, C: Comparator<K>> OSRBMap<K, V, D, C> {
    /// Inserts a key-value pair and returns its position.
    ///
    /// In a unique map an existing key keeps its place and only has its
    /// value overwritten. In a multimap the pair is always added, after any
    /// entries with an equal key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::{OSRBTreeMap, OSRBTreeMultiMap};
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(37, "a");
    /// let position = map.insert(37, "b");
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.value_at(position), Ok(&"b"));
    ///
    /// let mut multi = OSRBTreeMultiMap::new();
    /// multi.insert(37, "a");
    /// multi.insert(37, "b");
    /// assert_eq!(multi.values().copied().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Position {
        let id = self.raw.insert(key, value, D::ALLOWED).id();
        self.raw.position(Some(id), crate::position::Direction::Forward)
    }

    /// Inserts a key-value pair, handing back the value it displaced.
    ///
    /// Only a unique map ever displaces a value; a multimap always returns
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// assert_eq!(map.replace(37, "a"), None);
    /// assert_eq!(map.replace(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        match self.raw.insert(key, value, D::ALLOWED) {
            Inserted::New(_) => None,
            Inserted::Replaced(_, old) => Some(old),
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// In a multimap this is the value of some entry with an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.find(key, D::ALLOWED).map(|id| &self.raw.node(id).value)
    }

    /// Returns the stored key-value pair corresponding to the supplied key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.find(key, D::ALLOWED).map(|id| self.entry(id))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.raw.find(key, D::ALLOWED)?;
        Some(&mut self.raw.node_mut(id).value)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.find(key, D::ALLOWED).is_some()
    }

    /// Returns the number of entries whose key equals `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMultiMap;
    ///
    /// let mut map = OSRBTreeMultiMap::new();
    /// map.insert("x", 1);
    /// map.insert("x", 2);
    /// map.insert("y", 3);
    /// assert_eq!(map.count(&"x"), 2);
    /// assert_eq!(map.count(&"z"), 0);
    /// ```
    pub fn count(&self, key: &K) -> usize {
        self.raw.count(key, D::ALLOWED)
    }

    /// Returns a mutable reference to the value for `key`, inserting
    /// `V::default()` first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(*map.get_or_insert_default("a"), 1);
    /// assert_eq!(*map.get_or_insert_default("c"), 0);
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let id = match self.raw.find(&key, D::ALLOWED) {
            Some(id) => id,
            None => self.raw.insert(key, V::default(), D::ALLOWED).id(),
        };
        &mut self.raw.node_mut(id).value
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// In a multimap a single entry is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if
    /// the key was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.raw.find(key, D::ALLOWED)?;
        Some(self.raw.remove_node(id))
    }

    /// Removes one entry with key `key` and returns the position of the
    /// entry that followed it, or the end if there was no such key.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// let next = map.erase(&2);
    /// assert_eq!(map.key_at(next), Ok(&3));
    /// assert!(map.erase(&7).is_end());
    /// ```
    pub fn erase(&mut self, key: &K) -> Position {
        let Some(id) = self.raw.find(key, D::ALLOWED) else {
            return self.raw.end();
        };
        let following = self.raw.successor(id);
        self.raw.remove_node(id);
        self.forward(following)
    }

    /// Retains only the entries for which `f` returns `true`, visiting them
    /// in sorted order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.raw.first();
        while let Some(id) = current {
            current = self.raw.successor(id);
            let node = self.raw.node_mut(id);
            if !f(&node.key, &mut node.value) {
                self.raw.remove_node(id);
            }
        }
    }

    /// Returns the position of an entry with key `key`, or the end.
    pub fn find(&self, key: &K) -> Position {
        self.forward(self.raw.find(key, D::ALLOWED))
    }

    /// Returns the position of the first entry whose key is not less than
    /// `key`, or the end.
    pub fn lower_bound(&self, key: &K) -> Position {
        self.forward(self.raw.lower_bound(key))
    }

    /// Returns the position of the first entry whose key is greater than
    /// `key`, or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMultiMap;
    ///
    /// let mut map = OSRBTreeMultiMap::new();
    /// for (k, v) in [(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd')] {
    ///     map.insert(k, v);
    /// }
    /// let run = map.distance(map.upper_bound(&2), map.lower_bound(&2));
    /// assert_eq!(run, Ok(2));
    /// ```
    pub fn upper_bound(&self, key: &K) -> Position {
        self.forward(self.raw.upper_bound(key))
    }
}

impl<K, V, D: Duplicates, C> OSRBMap<K, V, D, C> {
    fn forward(&self, link: Link) -> Position {
        self.raw.position(link, crate::position::Direction::Forward)
    }
}

impl<K: Clone, V: Clone, D: Duplicates, C: Comparator<K> + Clone> Clone for OSRBMap<K, V, D, C> {
    /// Copies the map by re-inserting every entry, in order, into a fresh
    /// tree. Positions into the original do not carry over.
    fn clone(&self) -> Self {
        OSRBMap::from_raw(self.raw.clone())
    }
}

impl<K: Hash, V: Hash, D: Duplicates, C> Hash for OSRBMap<K, V, D, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq, D: Duplicates, C> PartialEq for OSRBMap<K, V, D, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, D: Duplicates, C> Eq for OSRBMap<K, V, D, C> {}

impl<K: fmt::Debug, V: fmt::Debug, D: Duplicates, C> fmt::Debug for OSRBMap<K, V, D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, D: Duplicates, C: Default> Default for OSRBMap<K, V, D, C> {
    fn default() -> Self {
        OSRBMap::from_raw(RawRBTree::new(C::default()))
    }
}

impl<K, V, D: Duplicates, C: Comparator<K> + Default> FromIterator<(K, V)> for OSRBMap<K, V, D, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OSRBMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, D: Duplicates, C: Comparator<K>> Extend<(K, V)> for OSRBMap<K, V, D, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, D: Duplicates, const N: usize> From<[(K, V); N]> for OSRBMap<K, V, D, Natural> {
    /// Converts a `[(K, V); N]` into an `OSRBMap`.
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map1 = OSRBTreeMap::from([(1, 2), (3, 4)]);
    /// let map2: OSRBTreeMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        let mut map = OSRBMap::with_capacity(N);
        map.extend(arr);
        map
    }
}

impl<'a, K, V, D: Duplicates, C> IntoIterator for &'a OSRBMap<K, V, D, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<K, V, D: Duplicates, C> IntoIterator for OSRBMap<K, V, D, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, V, D: Duplicates, C: Comparator<K>> Index<&K> for OSRBMap<K, V, D, C> {
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let id = self.front?;
        self.front = self.tree.successor(id);
        self.remaining -= 1;

        let node = self.tree.node(id);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let id = self.back?;
        self.back = self.tree.predecessor(id);
        self.remaining -= 1;

        let node = self.tree.node(id);
        Some((&node.key, &node.value))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
