//! Screen geometry of the rendered board, shared by drawing and mouse input.

use ratatui::layout::Rect;

use crate::game::{COLS, ROWS};

/// Characters per rendered cell, e.g. `" ● "`.
pub const CELL_WIDTH: u16 = 3;
/// Left border `"  ║"` before the first cell.
pub const LEFT_MARGIN: u16 = 3;
/// Right border `" ║"` after the last cell.
pub const RIGHT_MARGIN: u16 = 2;
/// Column numbers line and top border precede the first cell row.
pub const FIRST_ROW_LINE: u16 = 2;

pub const BOARD_WIDTH: u16 = LEFT_MARGIN + CELL_WIDTH * COLS as u16 + RIGHT_MARGIN;
/// Column numbers, top border, cell rows, bottom border, selection marker.
pub const BOARD_HEIGHT: u16 = FIRST_ROW_LINE + ROWS as u16 + 2;

/// Where the board was last drawn, horizontally centred in `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    area: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        BoardLayout { area }
    }

    fn left(&self) -> u16 {
        self.area.x + self.area.width.saturating_sub(BOARD_WIDTH) / 2
    }

    /// Board column under a terminal coordinate. Any line of the board
    /// block counts, so hovering the column numbers selects too.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let height = BOARD_HEIGHT.min(self.area.height);
        if y < self.area.y || y >= self.area.y + height {
            return None;
        }

        let first_cell = self.left() + LEFT_MARGIN;
        if x < first_cell {
            return None;
        }
        let col = usize::from((x - first_cell) / CELL_WIDTH);
        (col < COLS).then_some(col)
    }
}
