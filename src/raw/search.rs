use core::cmp::Ordering;

use super::handle::{Link, NodeId};
use super::rbtree::RawRBTree;
use crate::compare::Comparator;

impl<K, V, C: Comparator<K>> RawRBTree<K, V, C> {
    /// Exact-match lookup.
    ///
    /// A unique tree stops on the first equal key. With `duplicates` the
    /// descent keeps going left and reports the first element of the run,
    /// although callers are only promised *some* element of it.
    pub(crate) fn find(&self, key: &K, duplicates: bool) -> Link {
        let mut cursor = self.root;
        let mut found = None;
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal if duplicates => {
                    found = Some(id);
                    node.left
                }
                Ordering::Equal => return Some(id),
            };
        }
        found
    }

    /// First element whose key is not less than `key`.
    pub(crate) fn lower_bound(&self, key: &K) -> Link {
        self.bound(|node_key| self.comparator.compare(node_key, key) == Ordering::Less)
    }

    /// First element whose key is greater than `key`.
    pub(crate) fn upper_bound(&self, key: &K) -> Link {
        self.bound(|node_key| self.comparator.compare(node_key, key) != Ordering::Greater)
    }

    /// Descends tracking the best candidate seen so far: the leftmost node
    /// for which `goes_right` is false.
    fn bound(&self, goes_right: impl Fn(&K) -> bool) -> Link {
        let mut cursor = self.root;
        let mut candidate = None;
        while let Some(id) = cursor {
            let node = self.node(id);
            if goes_right(&node.key) {
                cursor = node.right;
            } else {
                candidate = Some(id);
                cursor = node.left;
            }
        }
        candidate
    }

    /// Number of elements strictly less than `key`: the rank `key` has, or
    /// would have once inserted.
    pub(crate) fn order_of(&self, key: &K) -> usize {
        let mut cursor = self.root;
        let mut rank = 0;
        while let Some(id) = cursor {
            let node = self.node(id);
            if self.comparator.compare(&node.key, key) == Ordering::Less {
                rank += self.size_of(node.left) + 1;
                cursor = node.right;
            } else {
                cursor = node.left;
            }
        }
        rank
    }

    /// Multiplicity of `key`.
    pub(crate) fn count(&self, key: &K, duplicates: bool) -> usize {
        if duplicates {
            self.rank_of_link(self.upper_bound(key)) - self.rank_of_link(self.lower_bound(key))
        } else {
            usize::from(self.find(key, false).is_some())
        }
    }
}

impl<K, V, C> RawRBTree<K, V, C> {
    /// Rank of a node: its left subtree, plus `1 + left subtree` of every
    /// ancestor reached by climbing out of a right child.
    pub(crate) fn rank_of_node(&self, id: NodeId) -> usize {
        let mut rank = self.size_of(self.node(id).left);
        let mut child = id;
        while let Some(parent) = self.node(child).parent {
            let parent_node = self.node(parent);
            if parent_node.right == Some(child) {
                rank += 1 + self.size_of(parent_node.left);
            }
            child = parent;
        }
        rank
    }

    /// Rank of a link; the sentinel ranks past the last element.
    pub(crate) fn rank_of_link(&self, link: Link) -> usize {
        link.map_or(self.len(), |id| self.rank_of_node(id))
    }

    /// Select: the node at 0-based `rank`, or `None` when out of range.
    pub(crate) fn select(&self, mut rank: usize) -> Link {
        if rank >= self.len() {
            return None;
        }

        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            let left = self.size_of(node.left);
            match rank.cmp(&left) {
                Ordering::Less => cursor = node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => {
                    rank -= left + 1;
                    cursor = node.right;
                }
            }
        }
        debug_assert!(false, "select: subtree sizes disagree with len");
        None
    }

    /// Select with a signed index; negative indices count back from the end.
    pub(crate) fn find_by_order(&self, index: isize) -> Link {
        let rank = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        self.select(rank)
    }
}
