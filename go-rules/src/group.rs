use std::collections::HashSet;

use crate::player::Player;
use crate::point::Point;

/// Arena index of a group within a board. Slots are tombstoned rather
/// than reused, so a stale id resolves to nothing instead of to an
/// unrelated group.
pub type GroupId = usize;

/// A maximal chain of orthogonally connected same-colored stones,
/// together with its liberties (the empty points adjacent to it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    color: Player,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl Group {
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        let stones: HashSet<Point> = stones.into_iter().collect();
        assert!(!stones.is_empty(), "group must contain at least one stone");

        Group {
            color,
            stones,
            liberties: liberties.into_iter().collect(),
        }
    }

    // -- Accessors --

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    // -- Merging --

    /// Combine two same-colored groups into one. The merged liberties are
    /// the union of both liberty sets minus every stone of the result: a
    /// point where the groups touch stops being a liberty of either.
    pub fn merged_with(&self, other: &Group) -> Group {
        assert_eq!(self.color, other.color, "cannot merge opposing groups");

        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .copied()
            .filter(|point| !stones.contains(point))
            .collect();

        Group {
            color: self.color,
            stones,
            liberties,
        }
    }

    // Only the board may touch the liberties of a live group.

    pub(crate) fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }

    pub(crate) fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(&point);
    }
}
