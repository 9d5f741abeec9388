//! Core Connect Four game logic: board representation, player types, win
//! detection and the turn states a game moves through.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, BoardView, Cell, MoveError, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, TurnState};
