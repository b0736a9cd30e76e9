//! Audio cues played after the engine has settled a move.

use std::io::{self, Write};

use tracing::debug;

use crate::config::SoundConfig;
use crate::game::DropResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    TokenDrop,
    Win,
}

impl Cue {
    /// Cue for a drop result. Ties and rejected moves are silent.
    pub fn for_result(result: &DropResult) -> Option<Cue> {
        match result {
            DropResult::Continued { .. } => Some(Cue::TokenDrop),
            DropResult::Won { .. } => Some(Cue::Win),
            DropResult::Tied { .. } | DropResult::InvalidMove(_) => None,
        }
    }
}

/// Something that can play a cue. Playback is fire-and-forget.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell. Drop cues are skipped unless `drop_cue` is set.
pub struct TerminalBell<W: Write> {
    out: W,
    drop_cue: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, drop_cue: bool) -> Self {
        TerminalBell { out, drop_cue }
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if cue == Cue::TokenDrop && !self.drop_cue {
            return;
        }
        if let Err(err) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            debug!(?cue, %err, "bell failed");
        }
    }
}

/// Cue player for the configured sound settings.
pub fn from_config(config: &SoundConfig) -> Box<dyn CuePlayer> {
    if config.enabled {
        Box::new(TerminalBell::new(io::stdout(), config.drop_cue))
    } else {
        Box::new(Silent)
    }
}
