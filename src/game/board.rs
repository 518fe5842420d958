use std::fmt;

use crate::error::AllocationError;

/// Glyph rendered for an empty cell.
pub const EMPTY_GLYPH: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character shown for this cell in the text grid
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Piece(symbol) => symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// A `rows` x `cols` grid stored row-major in one flat vector.
/// Row 0 is the top, row `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board, failing if the grid cannot be allocated
    pub fn new(rows: usize, cols: usize) -> Result<Self, AllocationError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(AllocationError { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| AllocationError { rows, cols })?;
        cells.resize(len, Cell::Empty);

        Ok(Board { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Signed lookup used when walking lines; `None` off the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, symbol: char) -> Result<usize, DropError> {
        if col >= self.cols {
            return Err(DropError::InvalidColumn);
        }

        // Scan from the bottom for the first hole
        for row in (0..self.rows).rev() {
            let idx = self.index(row, col);
            if self.cells[idx].is_empty() {
                self.cells[idx] = Cell::Piece(symbol);
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull)
    }

    /// Clear a cell and return what was there. Only undo calls this.
    pub fn remove(&mut self, row: usize, col: usize) -> Cell {
        let idx = self.index(row, col);
        debug_assert!(!self.cells[idx].is_empty(), "removing an empty cell");
        std::mem::replace(&mut self.cells[idx], Cell::Empty)
    }

    /// Columns fill bottom-up, so an occupied top row means a full board
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Text rendering: a 1-based column header followed by one line per row.
    /// The iterator is lazy and can be cloned to restart it.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            board: self,
            next: 0,
        }
    }

    fn header_line(&self) -> String {
        let mut line = String::from("   ");
        for col in 0..self.cols {
            line.push_str(&format!("{:>3}", col + 1));
        }
        line
    }

    fn row_line(&self, row: usize) -> String {
        let mut line = format!("{:>3}", row + 1);
        for col in 0..self.cols {
            line.push_str(&format!("{:>3}", self.get(row, col).glyph()));
        }
        line
    }
}

#[derive(Debug, Clone)]
pub struct Lines<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = match self.next {
            0 => self.board.header_line(),
            n if n <= self.board.rows => self.board.row_line(n - 1),
            _ => return None,
        };
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.board.rows + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
