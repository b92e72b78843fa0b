//! Detached, validated positions into a tree.

use core::num::NonZero;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(1);

/// Identity of one tree instance, used to reject positions minted elsewhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct TreeId(NonZero<usize>);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        let id = NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZero::new(id).expect("`TreeId::fresh()` - tree id counter wrapped!"))
    }
}

/// Stepping direction of a position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// A position in the sorted sequence of one tree, or its end.
///
/// Positions are plain `Copy` values: they borrow nothing, so a tree can be
/// mutated while a position is held. Every use goes back through the tree,
/// which checks that the position belongs to it and that the element it
/// names is still there; see [`Error`](crate::Error).
///
/// Forward positions come from `begin`, `find`, `lower_bound`, and the like
/// and step toward larger keys. Reverse positions come from `rbegin` and step
/// toward smaller keys; their ranks are counted from the back.
///
/// # Examples
///
/// ```
/// use osrb_tree::OSRBTreeSet;
///
/// let mut set = OSRBTreeSet::from([10, 20, 30]);
/// let twenty = set.find(&20);
/// set.insert(25);
///
/// // Still valid after an unrelated insertion.
/// assert_eq!(set.key_at(twenty), Ok(&20));
/// let next = set.next(twenty).unwrap();
/// assert_eq!(set.key_at(next), Ok(&25));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    // Slot index and the slot's generation when the position was taken;
    // `None` is the end.
    pub(crate) node: Option<(crate::raw::NodeId, u32)>,
    pub(crate) direction: Direction,
}

impl Position {
    /// Returns true if this is the end (or, for reverse positions, the
    /// before-the-beginning) position.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns true if this position steps toward smaller keys.
    #[must_use]
    pub const fn is_reverse(&self) -> bool {
        matches!(self.direction, Direction::Backward)
    }
}
