pub mod board;
pub mod error;
pub mod game;
pub mod group;
pub mod moves;
pub mod player;
pub mod point;

pub use board::Board;
pub use error::GoError;
pub use game::GameState;
pub use group::{Group, GroupId};
pub use moves::Move;
pub use player::Player;
pub use point::Point;
