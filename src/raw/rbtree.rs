use alloc::vec::Vec;

use log::debug;

use super::arena::Arena;
use super::handle::{Link, NodeId};
use super::node::{Color, Node, Side};
use crate::compare::Comparator;
use crate::position::TreeId;

/// The red-black engine backing `OSRBMap` and `OSRBSet`.
///
/// Every node carries the size of its subtree, which is what turns the
/// plain balanced tree into an order-statistic tree.
pub(crate) struct RawRBTree<K, V, C> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Root of the tree; `None` when empty.
    pub(super) root: Link,
    /// Identity used to reject positions minted by another tree.
    pub(super) id: TreeId,
    pub(super) comparator: C,
}

impl<K, V, C> RawRBTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            id: TreeId::fresh(),
            comparator,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            id: TreeId::fresh(),
            comparator,
        }
    }

    /// Returns the number of elements, read off the root's subtree size.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Releases every node. Positions taken before the clear become stale.
    pub(crate) fn clear(&mut self) {
        debug!("clearing order-statistic tree of {} elements", self.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Removes every element in sorted order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.first();
        while let Some(id) = current {
            order.push(id);
            current = self.successor(id);
        }

        let drained = order
            .into_iter()
            .map(|id| {
                let node = self.nodes.take(id);
                (node.key, node.value)
            })
            .collect();
        self.root = None;
        drained
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.get_mut(id)
    }

    // ─── Sentinel-uniform accessors ──────────────────────────────────────────

    /// Subtree size behind a link; the sentinel has size 0.
    #[inline]
    pub(crate) fn size_of(&self, link: Link) -> usize {
        link.map_or(0, |id| self.node(id).size)
    }

    /// The sentinel is black.
    #[inline]
    pub(super) fn is_red(&self, link: Link) -> bool {
        link.is_some_and(|id| self.node(id).is_red())
    }

    #[inline]
    pub(super) fn set_color(&mut self, link: Link, color: Color) {
        if let Some(id) = link {
            self.node_mut(id).color = color;
        }
    }

    /// Which child slot of `parent` holds `child`.
    #[inline]
    pub(super) fn side_of(&self, child: Link, parent: NodeId) -> Side {
        if self.node(parent).left == child { Side::Left } else { Side::Right }
    }

    #[inline]
    pub(super) fn update_size(&mut self, id: NodeId) {
        let node = self.node(id);
        let size = 1 + self.size_of(node.left) + self.size_of(node.right);
        self.node_mut(id).size = size;
    }

    // ─── Structural primitives ───────────────────────────────────────────────

    /// Points whatever referenced `old` from above (its parent, or the root
    /// slot) at `new`.
    pub(super) fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(Some(old), parent);
                self.node_mut(parent).set_child(side, new);
            }
        }
    }

    /// Puts the subtree `new` where `old` hangs. `old` keeps its own links.
    pub(super) fn transplant(&mut self, old: NodeId, new: Link) {
        let parent = self.node(old).parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Rotates `x` down toward `side`, lifting its child on the opposite side
    /// into its place. The in-order sequence is preserved; only the sizes of
    /// the two nodes involved change.
    pub(super) fn rotate(&mut self, x: NodeId, side: Side) {
        let lifted = side.opposite();
        let y = self.node(x).child(lifted).expect("rotation needs a child to lift");

        let inner = self.node(y).child(side);
        self.node_mut(x).set_child(lifted, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        self.transplant(x, Some(y));
        self.node_mut(y).set_child(side, Some(x));
        self.node_mut(x).parent = Some(y);

        let size = self.node(x).size;
        self.node_mut(y).size = size;
        self.update_size(x);
    }
}

impl<K: Clone, V: Clone, C: Comparator<K> + Clone> Clone for RawRBTree<K, V, C> {
    /// Deep copy by ordered re-insertion into a fresh structure, never a
    /// structural clone of the arena.
    fn clone(&self) -> Self {
        debug!("copying order-statistic tree of {} elements", self.len());
        let mut copy = RawRBTree::with_capacity(self.len(), self.comparator.clone());
        let mut current = self.first();
        while let Some(id) = current {
            let node = self.node(id);
            copy.insert(node.key.clone(), node.value.clone(), true);
            current = self.successor(id);
        }
        copy
    }
}
