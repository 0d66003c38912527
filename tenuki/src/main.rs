//! Console Go against a random bot.
//!
//! ## Usage
//!
//! - `tenuki` - Play Black against the bot on a 9x9 board
//! - `tenuki play --size 13` - The same on another board size
//! - `tenuki demo` - Watch two bots play each other

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use go_rules::{GameState, Move, Player};
use tenuki::agent::{Agent, RandomBot};
use tenuki::coords::point_from_coords;
use tenuki::render::{board_to_string, move_to_string};

/// Console Go: a random bot and a board in your terminal
#[derive(Parser)]
#[command(name = "tenuki")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Black against the bot
    Play {
        /// Board size (points per side, 1 to 19)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(i32).range(1..=19))]
        size: i32,
    },
    /// Watch two bots play each other
    Demo {
        /// Board size (points per side, 1 to 19)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(i32).range(1..=19))]
        size: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Play { size }) => run_game(size),
        Some(Commands::Demo { size }) => run_demo(size),
        None => run_game(9),
    }
}

fn run_game(size: i32) -> Result<()> {
    let mut game = GameState::new_game(size);
    let mut bot = RandomBot::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("You are Black. Enter coordinates like D4, or pass/resign.");
    while !game.is_over() {
        println!();
        print!("{}", board_to_string(game.board()));

        let mv = if game.next_player() == Player::Black {
            match read_human_move(&mut input, &game)? {
                Some(mv) => mv,
                // Out of input; leave the game unfinished.
                None => return Ok(()),
            }
        } else {
            bot.select_move(&game)
        };

        println!("{}", move_to_string(game.next_player(), mv));
        game = game.apply_move(mv)?;
    }

    announce_result(&game);
    Ok(())
}

fn run_demo(size: i32) -> Result<()> {
    let mut game = GameState::new_game(size);
    let mut black_bot = RandomBot::new();
    let mut white_bot = RandomBot::new();

    while !game.is_over() {
        let mv = match game.next_player() {
            Player::Black => black_bot.select_move(&game),
            Player::White => white_bot.select_move(&game),
        };
        println!("{}", move_to_string(game.next_player(), mv));
        game = game.apply_move(mv)?;
    }

    announce_result(&game);
    Ok(())
}

/// Prompt until the human enters a legal move. Returns `None` at end of
/// input.
fn read_human_move(input: &mut impl BufRead, game: &GameState) -> Result<Option<Move>> {
    loop {
        print!("-- ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let entry = line.trim();
        let mv = match entry.to_ascii_lowercase().as_str() {
            "" => continue,
            "pass" => Move::pass_turn(),
            "resign" => Move::resign(),
            _ => match point_from_coords(entry) {
                Ok(point) => Move::play(point),
                Err(err) => {
                    println!("{err}; enter coordinates like D4, or pass/resign");
                    continue;
                }
            },
        };

        if game.is_valid_move(mv) {
            return Ok(Some(mv));
        }
        println!("Illegal move, try again.");
    }
}

fn announce_result(game: &GameState) {
    println!();
    print!("{}", board_to_string(game.board()));
    if game.last_move() == Some(Move::resign()) {
        // The player field alternates even on a resignation, so the
        // winner is the one now "to move".
        let winner = game.next_player();
        println!("{} resigns. {} wins.", winner.other(), winner);
    } else {
        println!("Game over: both players passed.");
    }
}
