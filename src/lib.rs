//! # Connect-N
//!
//! A terminal Connect Four generalization: any board from 5x5 to 30x30,
//! a configurable winning line length and 2 to 12 players, with undo.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, move history, session
//! - [`ui`] — Line-based terminal front end: menu, prompts, game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
