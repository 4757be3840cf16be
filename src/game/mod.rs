//! Core Connect Four game logic: packed bit board, column drop, four-in-a-row
//! detection, and the turn state machine.

mod board;
pub mod drop;
mod player;
mod state;
pub mod win;

pub use crate::error::MoveError;
pub use board::{BitBoard, Coord, CELLS, FULL_MASK, HEIGHT, WIDTH};
pub use player::Player;
pub use state::{GameState, MoveResult, Outcome};
pub use win::{Direction, WinCheck};
