//! Terminal UI: renders the engine's state and feeds it column choices from
//! the keyboard and mouse. Sound cues are played after each settled move,
//! and [`terminal`] puts the shell back the way it was found.

mod app;
mod game_view;
pub mod layout;
pub mod sound;
pub mod terminal;

pub use app::App;
