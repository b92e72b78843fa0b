use core::cmp::Ordering;

use log::trace;

use super::handle::NodeId;
use super::node::{Color, Node, Side};
use super::rbtree::RawRBTree;
use crate::compare::Comparator;

/// Result of an insertion.
pub(crate) enum Inserted<V> {
    /// A new node was linked into the tree.
    New(NodeId),
    /// The key was already present (unique trees only); its value was
    /// overwritten and the previous one is handed back.
    Replaced(NodeId, V),
}

impl<V> Inserted<V> {
    pub(crate) fn id(&self) -> NodeId {
        match self {
            Inserted::New(id) | Inserted::Replaced(id, _) => *id,
        }
    }
}

impl<K, V, C: Comparator<K>> RawRBTree<K, V, C> {
    /// Inserts `key` with `value`.
    ///
    /// With `duplicates`, an equal key sends the descent right, so the new
    /// element lands after the existing run of equal keys. Without it, an
    /// equal key has its value overwritten and nothing else changes.
    pub(crate) fn insert(&mut self, key: K, value: V, duplicates: bool) -> Inserted<V> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            side = match self.comparator.compare(&key, &self.node(id).key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal if duplicates => Side::Right,
                Ordering::Equal => {
                    let previous = core::mem::replace(&mut self.node_mut(id).value, value);
                    return Inserted::Replaced(id, previous);
                }
            };
            parent = cursor;
            cursor = self.node(id).child(side);
        }

        let id = self.nodes.alloc(Node::new_leaf(key, value, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.node_mut(parent).set_child(side, Some(id)),
        }

        let mut ancestor = parent;
        while let Some(above) = ancestor {
            let node = self.node_mut(above);
            node.size += 1;
            ancestor = node.parent;
        }

        self.insert_fixup(id);
        Inserted::New(id)
    }

    /// Restores the red-black invariants after `z` was linked as a red leaf.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(parent) = self.node(z).parent.filter(|&parent| self.node(parent).is_red()) {
            let grandparent = self.node(parent).parent.expect("a red node is never the root");
            let parent_side = self.side_of(Some(parent), grandparent);
            let uncle = self.node(grandparent).child(parent_side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle, recoloring and climbing");
                self.set_color(Some(parent), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(grandparent), Color::Red);
                z = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.side_of(Some(z), parent) != parent_side {
                trace!("insert fixup: inner child, rotating it outward");
                z = parent;
                self.rotate(z, parent_side);
                parent = self.node(z).parent.expect("a rotated node has a parent");
            }

            trace!("insert fixup: outer child, rotating the grandparent");
            self.set_color(Some(parent), Color::Black);
            self.set_color(Some(grandparent), Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        self.set_color(self.root, Color::Black);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    use crate::compare::Natural;

    #[test]
    fn unique_insert_overwrites_without_growing() {
        let mut tree: RawRBTree<&str, i32, Natural> = RawRBTree::new(Natural);
        let first = tree.insert("a", 1, false).id();
        match tree.insert("a", 2, false) {
            Inserted::Replaced(id, previous) => {
                assert_eq!(id, first);
                assert_eq!(previous, 1);
            }
            Inserted::New(_) => panic!("unique insert of an existing key allocated a node"),
        }
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(first).value, 2);
    }

    #[test]
    fn duplicate_insert_grows_by_one() {
        let mut tree: RawRBTree<i32, (), Natural> = RawRBTree::new(Natural);
        for expected in 1..=5 {
            assert!(matches!(tree.insert(5, (), true), Inserted::New(_)));
            assert_eq!(tree.len(), expected);
        }
        tree.validate_invariants(true);
    }

    #[test]
    fn descending_and_zigzag_insertions_stay_balanced() {
        let mut tree: RawRBTree<i32, (), Natural> = RawRBTree::new(Natural);
        let keys: Vec<i32> = (0..100).rev().chain((100..200).map(|k| if k % 2 == 0 { k } else { 399 - k })).collect();
        for key in keys {
            tree.insert(key, (), false);
            tree.validate_invariants(false);
        }
        assert_eq!(tree.len(), 200);
    }
}
