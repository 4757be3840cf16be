//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 grid. Each player's pieces live in a
//! packed 64-bit occupancy mask; wins are found by a bounds-checked scan over
//! anchor cells and directions. A terminal UI built with Ratatui drives the
//! game core through [`game::GameState::drop_piece`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: bit board, column drop, win detection, state machine
//! - [`ui`] — Terminal UI: board view and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Logger setup for the `log` facade
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
