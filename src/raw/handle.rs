use core::num::NonZero;

#[cfg(test)]
type RawNodeId = u16;
#[cfg(not(test))]
type RawNodeId = u32;

/// Stable index of a node slot in the arena.
///
/// The zero bit pattern is reserved: `Option<NodeId>::None` is the null link
/// that stands in for the shared sentinel (black, size 0).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<RawNodeId>);

/// A child or parent link; `None` is the sentinel.
pub(crate) type Link = Option<NodeId>;

impl NodeId {
    pub(crate) const MAX: usize = (RawNodeId::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // `index + 1` is never zero and fits after the bound check above.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawNodeId).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
