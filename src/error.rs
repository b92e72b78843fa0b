//! Errors raised by position-based operations.

use core::fmt;

/// Errors produced when a [`Position`](crate::Position) cannot be used.
///
/// Lookups of absent keys and out-of-range ranks are not errors: they yield
/// the end position or `None`.
///
/// # Examples
///
/// ```
/// use osrb_tree::{Error, OSRBTreeSet};
///
/// let mut set = OSRBTreeSet::from([1, 2, 3]);
/// let two = set.find(&2);
/// set.remove(&2);
///
/// assert_eq!(set.key_at(two), Err(Error::InvalidatedPosition));
/// assert_eq!(format!("{}", Error::InvalidatedPosition), "position refers to an element that has been removed");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The position was taken from a different tree.
    ForeignPosition,
    /// The element the position referred to has been removed.
    InvalidatedPosition,
    /// The end position has no element to access.
    EndPosition,
    /// A forward position was compared or subtracted with a reverse one.
    DirectionMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::ForeignPosition => "position does not belong to this tree",
            Self::InvalidatedPosition => "position refers to an element that has been removed",
            Self::EndPosition => "the end position does not refer to an element",
            Self::DirectionMismatch => "forward and reverse positions cannot be combined",
        };
        formatter.write_str(message)
    }
}

impl core::error::Error for Error {}

/// Result alias for position-based operations.
pub type Result<T> = core::result::Result<T, Error>;
