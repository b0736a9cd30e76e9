use crate::config::{AppConfig, PlayersConfig};
use crate::error::MoveError;
use crate::game::{DropResult, GameEngine, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use super::game_view::player_label;
use super::layout::BoardLayout;
use super::sound::{Cue, CuePlayer, Silent};

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    start_column: usize,
    should_quit: bool,
    message: Option<String>,
    players: PlayersConfig,
    tick_rate: Duration,
    mouse: bool,
    board_layout: BoardLayout,
    cues: Box<dyn CuePlayer>,
}

impl App {
    pub fn new(config: &AppConfig, cues: Box<dyn CuePlayer>) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: config.ui.start_column,
            start_column: config.ui.start_column,
            should_quit: false,
            message: None,
            players: config.players.clone(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            mouse: config.ui.mouse,
            board_layout: BoardLayout::default(),
            cues,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) if self.mouse => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let col = c as usize - '1' as usize;
                self.selected_column = col;
                self.drop_token(col);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.engine.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Hovering aims at a column, a left click drops into it
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = self.board_layout.column_at(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.selected_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_token(col);
            }
            _ => {}
        }
    }

    /// Drop a token and react to the engine's verdict
    fn drop_token(&mut self, col: usize) {
        let result = self.engine.drop_token(col);

        match &result {
            DropResult::InvalidMove(err) => {
                debug!(column = col, %err, "move rejected");
                self.message = Some(match err {
                    MoveError::ColumnFull(_) => "Column is full!".to_string(),
                    MoveError::InvalidColumn(_) => "Invalid column!".to_string(),
                    MoveError::GameOver => "Game over! Press 'r' to restart.".to_string(),
                });
            }
            DropResult::Continued { .. } => {}
            DropResult::Won { player, .. } => {
                let name = player_label(&self.players, *player);
                self.message = Some(format!("{name} connects four!"));
            }
            DropResult::Tied { .. } => {
                self.message = Some("The board is full.".to_string());
            }
        }

        if let Some(cue) = Cue::for_result(&result) {
            self.cues.play(cue);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_layout = super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            &self.players,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default(), Box::new(Silent))
    }
}
