//! # Connect Four
//!
//! A two-player Connect Four game. The [`game`] engine is headless and owns
//! all rules: gravity, win and tie detection, turns, and reset. The terminal
//! front end in [`ui`] only draws the engine's state and reacts to the
//! results it returns.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, and the game engine state machine
//! - [`ui`] — Terminal UI: board view, hover preview, sound cues
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
