use go_rules::{Board, GameState, Move, Player, Point};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Something that can pick a move for the player to move.
pub trait Agent {
    fn select_move(&mut self, game: &GameState) -> Move;
}

/// Whether `point` is a one-point eye of `color`: an empty point whose
/// on-grid neighbors are all friendly and whose diagonals are controlled
/// (three of four in the open board; every remaining one at an edge or
/// corner). Deliberately simplistic, like the bot that relies on it.
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    for neighbor in point.neighbors() {
        if board.is_on_grid(neighbor) && board.get(neighbor) != Some(color) {
            return false;
        }
    }

    let corners = [
        Point::new(point.row - 1, point.col - 1),
        Point::new(point.row - 1, point.col + 1),
        Point::new(point.row + 1, point.col - 1),
        Point::new(point.row + 1, point.col + 1),
    ];
    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for corner in corners {
        if board.is_on_grid(corner) {
            if board.get(corner) == Some(color) {
                friendly_corners += 1;
            }
        } else {
            off_board_corners += 1;
        }
    }

    if off_board_corners > 0 {
        return off_board_corners + friendly_corners == 4;
    }
    friendly_corners >= 3
}

/// Plays a uniformly random legal move, refusing only to fill its own
/// one-point eyes. Passes when nothing else remains.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic bot for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomBot {
    fn select_move(&mut self, game: &GameState) -> Move {
        let mut candidates = Vec::new();
        for row in 1..=game.board().num_rows() {
            for col in 1..=game.board().num_cols() {
                let candidate = Point::new(row, col);
                if game.is_valid_move(Move::play(candidate))
                    && !is_point_an_eye(game.board(), candidate, game.next_player())
                {
                    candidates.push(candidate);
                }
            }
        }

        match candidates.choose(&mut self.rng) {
            Some(&point) => Move::play(point),
            None => Move::pass_turn(),
        }
    }
}
