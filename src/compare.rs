//! Ordering used to arrange keys.

use core::cmp::Ordering;

/// A three-way comparison over keys.
///
/// The ordering must be a total order and must not change while keys are in
/// a tree. Trees are configured with [`Natural`] by default; any
/// `Fn(&K, &K) -> Ordering` closure works as well.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let mut set = OSRBTreeSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// set.extend([1, 3, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The key type's own [`Ord`] ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the key type's [`Ord`] ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Descending;

impl<K: ?Sized + Ord> Comparator<K> for Descending {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
