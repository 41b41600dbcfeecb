//! Core Connect Four game logic: board representation, player types, win
//! detection, the game state machine and the controller that drives it.

mod board;
mod controller;
pub mod detector;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use controller::{GameController, Input, Renderer, Snapshot};
pub use detector::{evaluate, find_line, Direction, GameStatus, Line};
pub use player::Player;
pub use state::GameState;

/// Move order that fills the board without either side making four.
#[cfg(test)]
pub(crate) const DRAWN_GAME: [usize; ROWS * COLS] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 5,
];
