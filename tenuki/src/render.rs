use go_rules::{Board, Move, Player, Point};

use crate::coords::{COLS, coords_from_point};

fn stone_cell(stone: Option<Player>) -> &'static str {
    match stone {
        None => " . ",
        Some(Player::Black) => " x ",
        Some(Player::White) => " o ",
    }
}

/// Render the board as it is conventionally printed: highest row first,
/// column letters underneath.
pub fn board_to_string(board: &Board) -> String {
    let mut out = String::new();
    for row in (1..=board.num_rows()).rev() {
        // Single-digit row labels get a leading space so the grid lines up.
        if row <= 9 {
            out.push(' ');
        }
        out.push_str(&row.to_string());
        out.push(' ');
        for col in 1..=board.num_cols() {
            out.push_str(stone_cell(board.get(Point::new(row, col))));
        }
        out.push('\n');
    }

    out.push_str("    ");
    let letters: Vec<String> = COLS
        .chars()
        .take(board.num_cols() as usize)
        .map(|letter| letter.to_string())
        .collect();
    out.push_str(&letters.join("  "));
    out.push('\n');
    out
}

pub fn print_board(board: &Board) {
    print!("{}", board_to_string(board));
}

/// Describe a move the way it is announced at the table, e.g.
/// `Black D4` or `White passes`.
pub fn move_to_string(player: Player, mv: Move) -> String {
    let action = match mv {
        Move::Play(point) => coords_from_point(point),
        Move::Pass => "passes".to_string(),
        Move::Resign => "resigns".to_string(),
    };
    format!("{player} {action}")
}

pub fn print_move(player: Player, mv: Move) {
    println!("{}", move_to_string(player, mv));
}
