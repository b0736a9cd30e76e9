use tracing::{debug, info};

use super::board::{Board, Cell, Position, COLS, ROWS};
use super::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Win,
    Tie,
}

impl GameStatus {
    /// Win and Tie accept no further moves until reset
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }
}

/// Outcome of a single [`GameEngine::drop_token`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult {
    /// Rejected; the engine is unchanged.
    InvalidMove(MoveError),
    /// Token placed, turn passed to `current_player`.
    Continued {
        cell: Position,
        current_player: Player,
    },
    Won {
        cell: Position,
        player: Player,
        winning_cells: Vec<Position>,
    },
    Tied {
        cell: Position,
    },
}

impl DropResult {
    /// The cell that was filled, if the move was accepted
    pub fn cell(&self) -> Option<Position> {
        match self {
            DropResult::InvalidMove(_) => None,
            DropResult::Continued { cell, .. }
            | DropResult::Won { cell, .. }
            | DropResult::Tied { cell } => Some(*cell),
        }
    }
}

/// A single Connect Four game: board, player to move, and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_cells: Vec<Position>,
    move_count: usize,
}

impl GameEngine {
    /// Fresh game with Player 1 to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::Active,
            winning_cells: Vec::new(),
            move_count: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move; after a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents for rendering. Coordinates off the board read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= ROWS || col >= COLS {
            return Cell::Empty;
        }
        self.board.get(row, col)
    }

    pub fn winner(&self) -> Option<Player> {
        (self.status == GameStatus::Win).then_some(self.current_player)
    }

    /// Cells of the winning line, empty unless the game was won
    pub fn winning_cells(&self) -> &[Position] {
        &self.winning_cells
    }

    /// Tokens placed since the last reset
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that would currently accept a token
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Cell a token dropped in `column` would land in. Read-only.
    pub fn preview_column(&self, column: usize) -> Option<Position> {
        self.board
            .lowest_empty_row(column)
            .map(|row| Position::new(row, column))
    }

    /// Drop the current player's token into `column`.
    pub fn drop_token(&mut self, column: usize) -> DropResult {
        if self.status.is_terminal() {
            return DropResult::InvalidMove(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = match self.board.drop_piece(column, player.to_cell()) {
            Ok(row) => row,
            Err(err) => return DropResult::InvalidMove(err),
        };
        let cell = Position::new(row, column);
        self.move_count += 1;
        debug!(%player, %cell, moves = self.move_count, "token dropped");

        if let Some(line) = self.board.winning_line(cell) {
            info!(%player, moves = self.move_count, "game won");
            self.status = GameStatus::Win;
            self.winning_cells = line.clone();
            return DropResult::Won {
                cell,
                player,
                winning_cells: line,
            };
        }

        if self.board.is_full() {
            info!(moves = self.move_count, "game tied");
            self.status = GameStatus::Tie;
            return DropResult::Tied { cell };
        }

        self.current_player = player.other();
        DropResult::Continued {
            cell,
            current_player: self.current_player,
        }
    }

    /// Clear the board and start over with Player 1. Idempotent.
    pub fn reset(&mut self) {
        *self = GameEngine::new();
        info!("game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
