//! Core Connect Four game logic: board representation, players, and the
//! game engine that turns column choices into drop results.

mod board;
mod engine;
mod player;

pub use board::{Axis, Board, Cell, Position, COLS, CONNECT, ROWS};
pub use engine::{DropResult, GameEngine, GameStatus};
pub use player::Player;
