use core::cmp::Ordering;

use super::OSRBMap;
use crate::duplicates::Duplicates;
use crate::error::Result;
use crate::position::{Direction, Position};

impl<K, V, D: Duplicates, C> OSRBMap<K, V, D, C> {
    /// Returns the position of the smallest entry, or the end if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map = OSRBTreeMap::from([(2, 'b'), (1, 'a')]);
    /// assert_eq!(map.entry_at(map.begin()), Ok((&1, &'a')));
    /// assert!(OSRBTreeMap::<i32, char>::new().begin().is_end());
    /// ```
    #[must_use]
    pub fn begin(&self) -> Position {
        self.raw.position(self.raw.first(), Direction::Forward)
    }

    /// Returns the past-the-end position.
    #[must_use]
    pub fn end(&self) -> Position {
        self.raw.end()
    }

    /// Returns a reverse position at the largest entry. Reverse positions
    /// step toward smaller keys.
    #[must_use]
    pub fn rbegin(&self) -> Position {
        self.raw.position(self.raw.last(), Direction::Backward)
    }

    /// Returns the end of a reverse walk, just before the smallest entry.
    #[must_use]
    pub fn rend(&self) -> Position {
        self.raw.rend()
    }

    /// Returns the key and value at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::EndPosition`](crate::Error::EndPosition) for an end position,
    /// and the usual validation errors for foreign or stale ones.
    pub fn entry_at(&self, position: Position) -> Result<(&K, &V)> {
        let id = self.raw.resolve_element(position)?;
        Ok(self.entry(id))
    }

    /// Returns the key at `position`.
    ///
    /// # Errors
    ///
    /// As for [`entry_at`](Self::entry_at).
    pub fn key_at(&self, position: Position) -> Result<&K> {
        self.entry_at(position).map(|(k, _)| k)
    }

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// As for [`entry_at`](Self::entry_at).
    pub fn value_at(&self, position: Position) -> Result<&V> {
        self.entry_at(position).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value at `position`.
    ///
    /// # Errors
    ///
    /// As for [`entry_at`](Self::entry_at).
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map = OSRBTreeMap::from([("a", 1)]);
    /// let a = map.find(&"a");
    /// *map.value_at_mut(a).unwrap() += 10;
    /// assert_eq!(map[&"a"], 11);
    /// ```
    pub fn value_at_mut(&mut self, position: Position) -> Result<&mut V> {
        let id = self.raw.resolve_element(position)?;
        Ok(&mut self.raw.node_mut(id).value)
    }

    /// Returns the position one step ahead of `position`.
    ///
    /// Stepping past the last element gives the end; stepping from the end
    /// wraps around to the first element of the walk.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full walk.
    pub fn next(&self, position: Position) -> Result<Position> {
        self.raw.step_position(position, true)
    }

    /// Returns the position one step behind `position`; the mirror image of
    /// [`next`](Self::next).
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    pub fn prev(&self, position: Position) -> Result<Position> {
        self.raw.step_position(position, false)
    }

    /// Jumps `offset` elements from `position` in its own direction.
    ///
    /// Landing before the first element or past the last gives the end.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position.
    ///
    /// # Complexity
    ///
    /// O(log n), independent of `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let map: OSRBTreeMap<_, _> = (0..100).map(|k| (k, k * k)).collect();
    /// let p = map.advance(map.begin(), 42).unwrap();
    /// assert_eq!(map.entry_at(p), Ok((&42, &1764)));
    /// assert!(map.advance(p, 58).unwrap().is_end());
    /// ```
    pub fn advance(&self, position: Position, offset: isize) -> Result<Position> {
        self.raw.advance(position, offset)
    }

    /// Returns how many steps separate `b` from `a`, that is
    /// `rank(a) - rank(b)`.
    ///
    /// # Errors
    ///
    /// Fails for foreign or stale positions, or when one position is
    /// reverse and the other is not.
    pub fn distance(&self, a: Position, b: Position) -> Result<isize> {
        self.raw.distance(a, b)
    }

    /// Orders two positions of the same direction by rank.
    ///
    /// # Errors
    ///
    /// As for [`distance`](Self::distance).
    pub fn compare_positions(&self, a: Position, b: Position) -> Result<Ordering> {
        self.raw.compare_positions(a, b)
    }

    /// Removes the entry at `position` and returns the position of the one
    /// that followed it in the position's direction.
    ///
    /// Removing at the end is a no-op that returns the end.
    ///
    /// # Errors
    ///
    /// Fails for a foreign or stale position; the map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use osrb_tree::OSRBTreeMap;
    ///
    /// let mut map: OSRBTreeMap<_, _> = (1..=6).map(|k| (k, ())).collect();
    /// let mut p = map.begin();
    /// while !p.is_end() {
    ///     p = if map.key_at(p).unwrap() % 2 == 0 {
    ///         map.remove_at(p).unwrap()
    ///     } else {
    ///         map.next(p).unwrap()
    ///     };
    /// }
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3, 5]);
    /// ```
    pub fn remove_at(&mut self, position: Position) -> Result<Position> {
        self.raw.remove_at(position).map(|(next, _)| next)
    }
}
