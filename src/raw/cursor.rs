use core::cmp::Ordering;

use super::handle::{Link, NodeId};
use super::node::Side;
use super::rbtree::RawRBTree;
use crate::error::{Error, Result};
use crate::position::{Direction, Position};

impl<K, V, C> RawRBTree<K, V, C> {
    // ─── Navigation ──────────────────────────────────────────────────────────

    /// Descends from `link` as far as possible toward `side`.
    fn extreme(&self, link: Link, side: Side) -> Link {
        let mut id = link?;
        while let Some(child) = self.node(id).child(side) {
            id = child;
        }
        Some(id)
    }

    pub(crate) fn first(&self) -> Link {
        self.extreme(self.root, Side::Left)
    }

    pub(crate) fn last(&self) -> Link {
        self.extreme(self.root, Side::Right)
    }

    /// In-order neighbour of `id` toward `side`: the extreme of the child
    /// subtree on that side if there is one, otherwise the first ancestor
    /// reached by climbing out of the other side.
    pub(crate) fn step(&self, id: NodeId, side: Side) -> Link {
        if let Some(child) = self.node(id).child(side) {
            return self.extreme(Some(child), side.opposite());
        }

        let mut child = id;
        while let Some(parent) = self.node(child).parent {
            if self.node(parent).child(side.opposite()) == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    pub(crate) fn successor(&self, id: NodeId) -> Link {
        self.step(id, Side::Right)
    }

    pub(crate) fn predecessor(&self, id: NodeId) -> Link {
        self.step(id, Side::Left)
    }

    // ─── Positions ───────────────────────────────────────────────────────────

    pub(crate) fn position(&self, link: Link, direction: Direction) -> Position {
        Position {
            tree: self.id,
            node: link.map(|id| (id, self.nodes.generation(id))),
            direction,
        }
    }

    pub(crate) fn end(&self) -> Position {
        self.position(None, Direction::Forward)
    }

    pub(crate) fn rend(&self) -> Position {
        self.position(None, Direction::Backward)
    }

    /// Checks that `position` belongs to this tree and still names a live
    /// element, and returns the link behind it.
    pub(crate) fn resolve(&self, position: Position) -> Result<Link> {
        if position.tree != self.id {
            return Err(Error::ForeignPosition);
        }
        match position.node {
            None => Ok(None),
            Some((id, generation)) if self.nodes.is_live(id, generation) => Ok(Some(id)),
            Some(_) => Err(Error::InvalidatedPosition),
        }
    }

    /// Like [`resolve`](Self::resolve), but the end position is an error.
    pub(crate) fn resolve_element(&self, position: Position) -> Result<NodeId> {
        self.resolve(position)?.ok_or(Error::EndPosition)
    }

    /// The side a position moves toward when advanced.
    fn ahead(direction: Direction) -> Side {
        match direction {
            Direction::Forward => Side::Right,
            Direction::Backward => Side::Left,
        }
    }

    /// Moves one element ahead (`forward`) or back. Stepping off either end
    /// lands on the end position; stepping from the end wraps around to the
    /// nearest extreme.
    pub(crate) fn step_position(&self, position: Position, forward: bool) -> Result<Position> {
        let link = self.resolve(position)?;
        let side = if forward {
            Self::ahead(position.direction)
        } else {
            Self::ahead(position.direction).opposite()
        };

        let target = match link {
            Some(id) => self.step(id, side),
            None => self.extreme(self.root, side.opposite()),
        };
        Ok(self.position(target, position.direction))
    }

    /// Rank of a position measured in its own direction; the end ranks at
    /// `len`.
    pub(crate) fn position_rank(&self, position: Position) -> Result<usize> {
        let link = self.resolve(position)?;
        Ok(match (link, position.direction) {
            (None, _) => self.len(),
            (Some(id), Direction::Forward) => self.rank_of_node(id),
            (Some(id), Direction::Backward) => self.len() - self.rank_of_node(id) - 1,
        })
    }

    /// The position at `rank` counted in `direction`; out of range is the end.
    pub(crate) fn position_at_rank(&self, rank: usize, direction: Direction) -> Position {
        let link = match direction {
            Direction::Forward => self.select(rank),
            Direction::Backward => rank
                .checked_add(1)
                .and_then(|count| self.len().checked_sub(count))
                .and_then(|rank| self.select(rank)),
        };
        self.position(link, direction)
    }

    /// Rank-then-select jump by `offset` elements. Landing outside the
    /// sequence yields the end.
    pub(crate) fn advance(&self, position: Position, offset: isize) -> Result<Position> {
        let rank = self.position_rank(position)?;
        let target = rank.checked_add_signed(offset).unwrap_or(usize::MAX);
        Ok(self.position_at_rank(target, position.direction))
    }

    fn check_same_direction(a: Position, b: Position) -> Result<()> {
        if a.direction == b.direction { Ok(()) } else { Err(Error::DirectionMismatch) }
    }

    /// `rank(a) - rank(b)`.
    pub(crate) fn distance(&self, a: Position, b: Position) -> Result<isize> {
        Self::check_same_direction(a, b)?;
        let (a, b) = (self.position_rank(a)?, self.position_rank(b)?);
        // Ranks never exceed the arena's id space, which fits in an isize.
        #[allow(clippy::cast_possible_wrap)]
        Ok(a as isize - b as isize)
    }

    pub(crate) fn compare_positions(&self, a: Position, b: Position) -> Result<Ordering> {
        Self::check_same_direction(a, b)?;
        Ok(self.position_rank(a)?.cmp(&self.position_rank(b)?))
    }

    /// Removes the element at `position` and returns the position of the one
    /// that followed it in the position's direction.
    pub(crate) fn remove_at(&mut self, position: Position) -> Result<(Position, Option<(K, V)>)> {
        let Some(id) = self.resolve(position)? else {
            return Ok((self.position(None, position.direction), None));
        };
        let following = self.step(id, Self::ahead(position.direction));
        let removed = self.remove_node(id);
        Ok((self.position(following, position.direction), Some(removed)))
    }
}
