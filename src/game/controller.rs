//! The game loop's single owner of state.
//!
//! [`GameController`] takes typed [`Input`] events one at a time, applies
//! them to its [`GameState`] and hands a [`Snapshot`] to its [`Renderer`]
//! after each one. Rejected moves are logged and absorbed here.

use log::{debug, info, warn};
use serde::Serialize;

use super::detector::{self, GameStatus, Line};
use super::{Board, GameState, Player};
use crate::error::MoveError;

/// An input event for the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    DropToken { column: usize },
    NewGame,
}

/// Read-only view of the game handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    /// The four tokens that decided the game, once it is won.
    pub winning_line: Option<Line>,
    /// Why the most recent input was ignored. Moves after the game has
    /// ended are dropped silently and leave this `None`.
    pub rejected: Option<MoveError>,
}

impl Snapshot {
    fn of(state: &GameState, rejected: Option<MoveError>) -> Self {
        let winning_line = match state.status() {
            GameStatus::Won(_) => detector::find_line(state.board()),
            _ => None,
        };
        Snapshot {
            board: *state.board(),
            turn: state.turn(),
            status: state.status(),
            winning_line,
            rejected,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::of(&GameState::initial(), None)
    }
}

/// Presentation side of the game: receives a snapshot after every input.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

pub struct GameController<R: Renderer> {
    state: GameState,
    renderer: R,
}

impl<R: Renderer> GameController<R> {
    /// Start a fresh game and draw it once.
    pub fn new(renderer: R) -> Self {
        let mut controller = GameController {
            state: GameState::initial(),
            renderer,
        };
        controller.notify(None);
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state, None)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Process one input to completion, then notify the renderer.
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::DropToken { column } => self.drop_token(column),
            Input::NewGame => self.new_game(),
        }
    }

    /// Reset to an empty board with A to move.
    pub fn new_game(&mut self) {
        self.state = GameState::initial();
        info!("new game started");
        self.notify(None);
    }

    fn drop_token(&mut self, column: usize) {
        let player = self.state.turn();
        match self.state.apply_move_mut(column) {
            Ok(row) => {
                debug!("{} dropped into column {} (row {})", player.name(), column, row);
                match self.state.status() {
                    GameStatus::Won(winner) => info!("{} wins", winner.name()),
                    GameStatus::Tie => info!("board full, game tied"),
                    GameStatus::InProgress => {}
                }
                self.notify(None);
            }
            Err(err @ MoveError::GameAlreadyOver) => {
                // Dropped silently: the finished board is drawn again as is
                debug!("ignoring move in column {}: {}", column, err);
                self.notify(None);
            }
            Err(err) => {
                warn!("rejected move by {}: {}", player.name(), err);
                self.notify(Some(err));
            }
        }
    }

    fn notify(&mut self, rejected: Option<MoveError>) {
        let snapshot = Snapshot::of(&self.state, rejected);
        self.renderer.render(&snapshot);
    }
}
