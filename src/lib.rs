//! # Connect Four
//!
//! A two-player Connect Four game on the classic 7x6 grid, played in the
//! terminal with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine, controller
//! - [`ui`] — Terminal UI and a plain-text renderer
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Logger setup for the binaries
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
