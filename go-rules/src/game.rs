use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::board::Board;
use crate::error::GoError;
use crate::moves::Move;
use crate::player::Player;

/// A complete game position: the board, whose turn it is, and the chain
/// of positions that led here.
///
/// States are frozen once built. `apply_move` returns a fresh state
/// linked to its predecessor, so the whole history stays reachable for
/// the superko check. Cloning is cheap: the board and the history are
/// behind `Arc`s.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Arc<Board>,
    next_player: Player,
    previous: Option<Arc<GameState>>,
    last_move: Option<Move>,
    situation_hash: u64,
}

impl GameState {
    /// Start a new game on an empty square board. Black moves first.
    pub fn new_game(board_size: i32) -> Self {
        Self::with_dimensions(board_size, board_size)
    }

    /// Start a new game on an empty board with the given dimensions.
    pub fn with_dimensions(num_rows: i32, num_cols: i32) -> Self {
        let board = Board::new(num_rows, num_cols);
        let situation_hash = situation_hash(Player::Black, &board);

        GameState {
            board: Arc::new(board),
            next_player: Player::Black,
            previous: None,
            last_move: None,
            situation_hash,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    /// The ko comparison key: who is to move, on what position.
    pub fn situation(&self) -> (Player, &Board) {
        (self.next_player, &self.board)
    }

    // -- Game actions --

    /// Apply a move, returning the resulting state.
    ///
    /// Legality is not re-checked here; gate untrusted moves with
    /// `is_valid_move` first. A play on an occupied or off-grid point
    /// still fails loudly with the placement error.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, GoError> {
        let board = match mv {
            Move::Play(point) => {
                let mut board = Board::clone(&self.board);
                board.place_stone(self.next_player, point)?;
                Arc::new(board)
            }
            // Passing and resigning leave the position untouched, so the
            // new state shares the parent's board.
            Move::Pass | Move::Resign => Arc::clone(&self.board),
        };

        let next_player = self.next_player.other();
        let situation_hash = situation_hash(next_player, &board);

        Ok(GameState {
            board,
            next_player,
            previous: Some(Arc::new(self.clone())),
            last_move: Some(mv),
            situation_hash,
        })
    }

    /// Whether the game has ended: a resignation, or two consecutive
    /// passes.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            None => false,
            Some(Move::Resign) => true,
            Some(Move::Pass) => self
                .previous
                .as_deref()
                .and_then(|prev| prev.last_move)
                .is_some_and(|second_last| second_last.is_pass()),
            Some(Move::Play(_)) => false,
        }
    }

    // -- Legality --

    /// Whether playing `mv` would leave the played group without
    /// liberties. Captures resolve before the check, so a play that
    /// captures its way to a liberty is not self-capture.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };

        let mut board = Board::clone(&self.board);
        if board.place_stone(player, point).is_err() {
            return false;
        }
        board
            .get_group(point)
            .is_some_and(|group| group.num_liberties() == 0)
    }

    /// Whether playing `mv` would recreate an earlier position with the
    /// same player to move. The whole history counts, not just the
    /// previous turn (positional superko).
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };

        let mut board = Board::clone(&self.board);
        if board.place_stone(player, point).is_err() {
            return false;
        }

        let next_hash = situation_hash(player.other(), &board);
        let next_situation = (player.other(), &board);

        let mut past = self.previous.as_deref();
        while let Some(state) = past {
            // Hash first; full equality confirms, so a collision can
            // never reject a legal move.
            if state.situation_hash == next_hash && state.situation() == next_situation {
                tracing::debug!("ko violation at {point}: position repeats");
                return true;
            }
            past = state.previous.as_deref();
        }
        false
    }

    /// Full legality check for the player to move. Pass and resign are
    /// always legal while the game runs.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        match mv {
            Move::Pass | Move::Resign => true,
            Move::Play(point) => {
                self.board.is_on_grid(point)
                    && self.board.get(point).is_none()
                    && !self.is_move_self_capture(self.next_player, mv)
                    && !self.does_move_violate_ko(self.next_player, mv)
            }
        }
    }
}

/// Hash of a (player to move, position) pair, the cheap first-pass
/// comparison for the superko walk.
fn situation_hash(next_player: Player, board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    next_player.hash(&mut hasher);
    hasher.write_u64(board.position_hash());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn play(game: &GameState, row: i32, col: i32) -> GameState {
        game.apply_move(Move::play(Point::new(row, col))).unwrap()
    }

    #[test]
    fn new_game_starts_black_on_empty_board() {
        let game = GameState::new_game(9);
        assert_eq!(game.next_player(), Player::Black);
        assert!(game.board().is_empty());
        assert_eq!(game.board().num_rows(), 9);
        assert_eq!(game.last_move(), None);
        assert!(game.previous().is_none());
        assert!(!game.is_over());
    }

    #[test]
    fn with_dimensions_builds_rectangular_board() {
        let game = GameState::with_dimensions(5, 7);
        assert_eq!(game.board().num_rows(), 5);
        assert_eq!(game.board().num_cols(), 7);
    }

    #[test]
    fn apply_move_alternates_players() {
        let game = GameState::new_game(5);
        let game = play(&game, 3, 3);
        assert_eq!(game.next_player(), Player::White);
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert_eq!(game.next_player(), Player::Black);
    }

    #[test]
    fn apply_play_records_stone_and_history() {
        let game = GameState::new_game(5);
        let next = play(&game, 3, 3);

        assert_eq!(next.board().get(Point::new(3, 3)), Some(Player::Black));
        assert_eq!(next.last_move(), Some(Move::play(Point::new(3, 3))));

        // The predecessor still sees the empty board.
        let previous = next.previous().unwrap();
        assert!(previous.board().is_empty());
        assert_eq!(previous.next_player(), Player::Black);
    }

    #[test]
    fn pass_shares_board_with_predecessor() {
        let game = play(&GameState::new_game(5), 3, 3);
        let passed = game.apply_move(Move::pass_turn()).unwrap();
        let resigned = game.apply_move(Move::resign()).unwrap();

        assert!(Arc::ptr_eq(&game.board, &passed.board));
        assert!(Arc::ptr_eq(&game.board, &resigned.board));
    }

    #[test]
    fn play_copies_board() {
        let game = play(&GameState::new_game(5), 3, 3);
        let next = play(&game, 4, 4);
        assert!(!Arc::ptr_eq(&game.board, &next.board));
        assert_eq!(game.board().get(Point::new(4, 4)), None);
    }

    #[test]
    fn apply_move_rejects_occupied_point() {
        let game = play(&GameState::new_game(5), 3, 3);
        let result = game.apply_move(Move::play(Point::new(3, 3)));
        assert_eq!(result.unwrap_err(), GoError::Occupied);
    }

    #[test]
    fn apply_move_rejects_off_grid_point() {
        let game = GameState::new_game(5);
        let result = game.apply_move(Move::play(Point::new(6, 1)));
        assert_eq!(result.unwrap_err(), GoError::NotOnGrid);
    }

    #[test]
    fn game_over_on_resign() {
        let game = play(&GameState::new_game(5), 3, 3);
        let game = game.apply_move(Move::resign()).unwrap();
        assert!(game.is_over());
    }

    #[test]
    fn game_over_on_two_passes() {
        let game = GameState::new_game(5);
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(!game.is_over());
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(game.is_over());
    }

    #[test]
    fn play_interrupts_pass_sequence() {
        let game = GameState::new_game(5);
        let game = game.apply_move(Move::pass_turn()).unwrap();
        let game = play(&game, 2, 2);
        assert!(!game.is_over());
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(!game.is_over());
    }

    #[test]
    fn detects_self_capture_in_corner() {
        // Black stones at (5, 2) and (4, 1) seal the corner point (5, 1).
        let game = GameState::new_game(5);
        let game = play(&game, 5, 2); // B
        let game = game.apply_move(Move::pass_turn()).unwrap(); // W
        let game = play(&game, 4, 1); // B
        assert_eq!(game.next_player(), Player::White);

        let corner = Move::play(Point::new(5, 1));
        assert!(game.is_move_self_capture(Player::White, corner));
        assert!(!game.is_valid_move(corner));
        // The probe left the real board untouched.
        assert_eq!(game.board().get(Point::new(5, 1)), None);
    }

    #[test]
    fn detects_self_capture_at_surrounded_point() {
        // Four white stones around (3, 3), none of them capturable.
        let game = GameState::new_game(5);
        let game = play(&game, 1, 1); // B elsewhere
        let game = play(&game, 2, 3); // W
        let game = play(&game, 1, 2); // B
        let game = play(&game, 4, 3); // W
        let game = play(&game, 5, 5); // B
        let game = play(&game, 3, 2); // W
        let game = play(&game, 5, 4); // B
        let game = play(&game, 3, 4); // W

        let center = Move::play(Point::new(3, 3));
        assert!(game.is_move_self_capture(Player::Black, center));
        assert!(!game.is_valid_move(center));
    }

    #[test]
    fn capturing_move_is_not_self_capture() {
        // Black (1, 1) has no liberties of its own, but it takes the
        // white group's last liberty, and captures resolve first.
        //
        //   r3:  B B .
        //   r2:  W W B
        //   r1:  . W B
        let game = GameState::new_game(5);
        let game = play(&game, 3, 1); // B
        let game = play(&game, 2, 1); // W
        let game = play(&game, 3, 2); // B
        let game = play(&game, 2, 2); // W
        let game = play(&game, 2, 3); // B
        let game = play(&game, 1, 2); // W
        let game = play(&game, 1, 3); // B
        let game = game.apply_move(Move::pass_turn()).unwrap(); // W

        let fill = Move::play(Point::new(1, 1));
        assert!(!game.is_move_self_capture(Player::Black, fill));
        assert!(game.is_valid_move(fill));

        let game = game.apply_move(fill).unwrap();
        assert_eq!(game.board().get(Point::new(2, 2)), None);
        assert_eq!(game.board().get(Point::new(1, 2)), None);
        assert_eq!(game.board().get(Point::new(1, 1)), Some(Player::Black));
        assert_eq!(
            game.board().get_group(Point::new(1, 1)).unwrap().num_liberties(),
            2
        );
    }

    #[test]
    fn immediate_ko_retake_is_rejected() {
        // Ko shape (rows 1..3, cols 1..4):
        //
        //   r3:  . B W .
        //   r2:  B W . W
        //   r1:  . B W .
        //
        // Black captures at (2, 3); White retaking at (2, 2) would repeat
        // the position Black just faced.
        let game = GameState::new_game(5);
        let game = play(&game, 1, 2); // B
        let game = play(&game, 1, 3); // W
        let game = play(&game, 2, 1); // B
        let game = play(&game, 2, 2); // W
        let game = play(&game, 3, 2); // B
        let game = play(&game, 3, 3); // W
        let game = play(&game, 5, 5); // B elsewhere
        let game = play(&game, 2, 4); // W

        let game = play(&game, 2, 3); // B captures (2, 2)
        assert_eq!(game.board().get(Point::new(2, 2)), None);

        let retake = Move::play(Point::new(2, 2));
        assert!(game.does_move_violate_ko(Player::White, retake));
        assert!(!game.is_valid_move(retake));
        // Not self-capture: the retake would capture (2, 3) first.
        assert!(!game.is_move_self_capture(Player::White, retake));
    }

    #[test]
    fn pass_and_resign_are_never_self_capture() {
        let game = GameState::new_game(5);
        assert!(!game.is_move_self_capture(Player::Black, Move::pass_turn()));
        assert!(!game.is_move_self_capture(Player::Black, Move::resign()));
    }

    #[test]
    fn is_valid_move_rejects_occupied_and_off_grid() {
        let game = play(&GameState::new_game(5), 3, 3);
        assert!(!game.is_valid_move(Move::play(Point::new(3, 3))));
        assert!(!game.is_valid_move(Move::play(Point::new(0, 3))));
        assert!(!game.is_valid_move(Move::play(Point::new(3, 6))));
        assert!(game.is_valid_move(Move::play(Point::new(1, 1))));
    }

    #[test]
    fn no_moves_are_valid_after_game_over() {
        let game = GameState::new_game(5);
        let game = game.apply_move(Move::resign()).unwrap();
        assert!(!game.is_valid_move(Move::play(Point::new(3, 3))));
        assert!(!game.is_valid_move(Move::pass_turn()));
        assert!(!game.is_valid_move(Move::resign()));
    }

    #[test]
    fn situation_pairs_player_with_position() {
        let game = play(&GameState::new_game(5), 3, 3);
        let (player, board) = game.situation();
        assert_eq!(player, Player::White);
        assert_eq!(board.get(Point::new(3, 3)), Some(Player::Black));
    }

    #[test]
    fn clone_shares_history() {
        let game = play(&GameState::new_game(5), 3, 3);
        let copy = game.clone();
        assert!(Arc::ptr_eq(&game.board, &copy.board));
        assert_eq!(copy.last_move(), game.last_move());
    }
}
