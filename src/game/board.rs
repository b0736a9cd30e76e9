use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-player tokens in a line needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// A cell coordinate on the board. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Step by a signed offset, returning `None` when the result leaves the board.
    fn offset(self, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < ROWS && col < COLS).then_some(Position { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four lines a win can run along, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step towards the end a reported run starts from. The opposite
    /// end is reached by negating it.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, -1),
            Axis::Vertical => (-1, 0),
            Axis::DiagonalDown => (-1, -1),
            Axis::DiagonalUp => (-1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a token dropped into `col` would land in, scanning bottom-up.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Number of empty cells left in a column.
    pub fn empty_in_column(&self, col: usize) -> usize {
        if col >= COLS {
            return 0;
        }
        (0..ROWS)
            .filter(|&row| self.cells[row][col] == Cell::Empty)
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Maximal run of `pos`'s owner through `pos` along one axis, ordered
    /// from the `axis.step()` end to the opposite end.
    pub fn run_through(&self, pos: Position, axis: Axis) -> Vec<Position> {
        let owner = self.at(pos);
        if owner == Cell::Empty {
            return Vec::new();
        }

        let (dr, dc) = axis.step();
        let mut start = pos;
        while let Some(next) = start.offset((dr, dc)) {
            if self.at(next) != owner {
                break;
            }
            start = next;
        }

        let mut run = vec![start];
        let mut current = start;
        while let Some(next) = current.offset((-dr, -dc)) {
            if self.at(next) != owner {
                break;
            }
            run.push(next);
            current = next;
        }
        run
    }

    /// Winning line through the piece at `pos`, if any. Axes are tried in
    /// [`Axis::ALL`] order and the first qualifying one is returned.
    pub fn winning_line(&self, pos: Position) -> Option<Vec<Position>> {
        Axis::ALL
            .iter()
            .map(|&axis| self.run_through(pos, axis))
            .find(|run| run.len() >= CONNECT)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
