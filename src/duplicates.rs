//! Whether a tree keeps one element per key or a run of them.

mod sealed {
    pub trait Sealed {}
}

/// The duplicate-key policy of a map or set.
///
/// This trait is sealed; [`Unique`] and [`Multi`] are its only
/// implementations.
pub trait Duplicates: sealed::Sealed {
    /// True if equal keys may coexist.
    const ALLOWED: bool;
}

/// One element per key; inserting an existing key overwrites its value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Unique;

/// Equal keys coexist as a contiguous run kept in insertion order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Multi;

impl sealed::Sealed for Unique {}
impl sealed::Sealed for Multi {}

impl Duplicates for Unique {
    const ALLOWED: bool = false;
}

impl Duplicates for Multi {
    const ALLOWED: bool = true;
}
