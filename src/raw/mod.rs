mod arena;
mod cursor;
mod handle;
mod insert;
mod node;
mod rbtree;
mod remove;
mod search;

pub(crate) use handle::{Link, NodeId};
pub(crate) use insert::Inserted;
pub(crate) use rbtree::RawRBTree;
