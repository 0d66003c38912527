use serde::{Deserialize, Serialize};
use std::fmt;

use crate::point::Point;

/// A single action on a turn: placing a stone, passing, or resigning.
/// Exactly one of the three by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn play(point: Point) -> Self {
        Move::Play(point)
    }

    pub fn pass_turn() -> Self {
        Move::Pass
    }

    pub fn resign() -> Self {
        Move::Resign
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        *self == Move::Pass
    }

    pub fn is_resign(&self) -> bool {
        *self == Move::Resign
    }

    /// The target point of a play, `None` for pass and resign.
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(point) => write!(f, "play {point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}
