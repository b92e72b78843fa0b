use log::trace;

use super::handle::{Link, NodeId};
use super::node::Color;
use super::rbtree::RawRBTree;

impl<K, V, C> RawRBTree<K, V, C> {
    /// Unlinks `z` from the tree and returns its key and value.
    ///
    /// When `z` has two children its in-order successor is spliced out of
    /// its own position and relinked into `z`'s place, so every other node
    /// keeps its id.
    pub(crate) fn remove_node(&mut self, z: NodeId) -> (K, V) {
        let (z_left, z_right, z_parent, z_color) = {
            let node = self.node(z);
            (node.left, node.right, node.parent, node.color)
        };

        // `x` takes the place of the node physically removed from its slot;
        // `x_parent` is tracked separately because `x` may be the sentinel.
        let (x, x_parent, removed_color) = match (z_left, z_right) {
            (None, _) => {
                self.transplant(z, z_right);
                (z_right, z_parent, z_color)
            }
            (_, None) => {
                self.transplant(z, z_left);
                (z_left, z_parent, z_color)
            }
            (Some(left), Some(right)) => {
                // Every node from `right` down to the successor loses it.
                let mut y = right;
                loop {
                    let node = self.node_mut(y);
                    node.size -= 1;
                    match node.left {
                        Some(next) => y = next,
                        None => break,
                    }
                }

                let removed_color = self.node(y).color;
                let x = self.node(y).right;
                let x_parent = if y == right {
                    Some(y)
                } else {
                    let parent = self.node(y).parent;
                    self.transplant(y, x);
                    self.node_mut(y).right = Some(right);
                    self.node_mut(right).parent = Some(y);
                    parent
                };

                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(left);
                self.node_mut(left).parent = Some(y);
                self.node_mut(y).color = z_color;
                self.update_size(y);
                (x, x_parent, removed_color)
            }
        };

        let mut ancestor = z_parent;
        while let Some(above) = ancestor {
            let node = self.node_mut(above);
            node.size -= 1;
            ancestor = node.parent;
        }

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }

        let node = self.nodes.take(z);
        (node.key, node.value)
    }

    /// Restores the red-black invariants after a black node was removed,
    /// leaving `x` (possibly the sentinel, under `parent`) one black short.
    fn remove_fixup(&mut self, mut x: Link, mut parent: Link) {
        while x != self.root && !self.is_red(x) {
            let Some(p) = parent else { break };
            let x_side = self.side_of(x, p);
            let far = x_side.opposite();
            let mut w = self.node(p).child(far).expect("a node short of black has a sibling");

            if self.node(w).is_red() {
                trace!("remove fixup: red sibling, rotating the parent");
                self.set_color(Some(w), Color::Black);
                self.set_color(Some(p), Color::Red);
                self.rotate(p, x_side);
                w = self.node(p).child(far).expect("a node short of black has a sibling");
            }

            let near_child = self.node(w).child(x_side);
            let far_child = self.node(w).child(far);

            if !self.is_red(near_child) && !self.is_red(far_child) {
                trace!("remove fixup: black sibling with black children, climbing");
                self.set_color(Some(w), Color::Red);
                x = Some(p);
                parent = self.node(p).parent;
                continue;
            }

            if !self.is_red(far_child) {
                trace!("remove fixup: near nephew red, rotating the sibling");
                self.set_color(near_child, Color::Black);
                self.set_color(Some(w), Color::Red);
                self.rotate(w, far);
                w = self.node(p).child(far).expect("a node short of black has a sibling");
            }

            trace!("remove fixup: far nephew red, rotating the parent");
            let parent_color = self.node(p).color;
            self.set_color(Some(w), parent_color);
            self.set_color(Some(p), Color::Black);
            let far_child = self.node(w).child(far);
            self.set_color(far_child, Color::Black);
            self.rotate(p, x_side);
            x = self.root;
            parent = None;
        }

        self.set_color(x, Color::Black);
    }
}
