//! Order-statistic red-black tree collections for Rust.
//!
//! This crate provides ordered maps and sets, each in a unique-key and a
//! multi-key flavor, that answer two extra questions in O(log n):
//!
//! - **select**: which element sits at rank *k* in sorted order
//!   ([`get_by_rank`](OSRBMap::get_by_rank),
//!   [`find_by_order`](OSRBMap::find_by_order), indexing by [`Rank`])
//! - **rank**: how many elements are smaller than a given key
//!   ([`order_of`](OSRBMap::order_of), [`rank_of`](OSRBMap::rank_of))
//!
//! | Type                 | Values | Equal keys            |
//! |----------------------|--------|-----------------------|
//! | [`OSRBTreeMap`]      | yes    | value is overwritten  |
//! | [`OSRBTreeMultiMap`] | yes    | kept, insertion order |
//! | [`OSRBTreeSet`]      | no     | ignored               |
//! | [`OSRBTreeMultiSet`] | no     | kept, insertion order |
//!
//! # Example
//!
//! ```
//! use osrb_tree::{OSRBTreeMultiSet, Rank};
//!
//! let mut set = OSRBTreeMultiSet::new();
//! for x in [10, 20, 20, 30] {
//!     set.insert(x);
//! }
//!
//! assert_eq!(set.order_of(&20), 1);
//! assert_eq!(set.order_of(&25), 3);
//! assert_eq!(set.count(&20), 2);
//! assert_eq!(set[Rank(3)], 30);
//!
//! // Positions survive unrelated edits and walk in either direction.
//! let mut p = set.rbegin();
//! set.insert(40);
//! assert_eq!(set.key_at(p), Ok(&30));
//! p = set.next(p).unwrap();
//! assert_eq!(set.key_at(p), Ok(&20));
//! ```
//!
//! # Positions
//!
//! Lookups return a [`Position`] rather than a borrowing iterator. A position
//! is a small `Copy` token that the owning collection validates on every use:
//! one taken from another collection, or naming an element that has since
//! been removed, is reported as an [`Error`] instead of causing undefined
//! behavior.
//!
//! # Implementation
//!
//! Nodes live in a generational arena and link to their parent and children
//! by index. Each node records the size of its subtree, and the insert and
//! remove rebalancing keep those sizes current through every rotation.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod duplicates;
mod error;
mod order_statistic;
mod position;
mod raw;

pub mod osrb_map;
pub mod osrb_set;

pub use compare::{Comparator, Descending, Natural};
pub use duplicates::{Duplicates, Multi, Unique};
pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use osrb_map::{OSRBMap, OSRBTreeMap, OSRBTreeMultiMap};
pub use osrb_set::{OSRBSet, OSRBTreeMultiSet, OSRBTreeSet};
pub use position::Position;
