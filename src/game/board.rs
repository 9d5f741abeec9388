pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
    #[error("cannot place an empty cell")]
    EmptyCell,
}

/// Connect Four grid. Row 0 is the bottom of every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    pub fn is_within_bounds(&self, column: isize, row: isize) -> bool {
        self.snapshot().is_within_bounds(column, row)
    }

    /// True if the column exists and its top row is still empty
    pub fn is_column_open(&self, column: isize) -> bool {
        self.snapshot().is_column_open(column)
    }

    pub fn is_full(&self) -> bool {
        self.snapshot().is_full()
    }

    pub fn open_columns(&self) -> Vec<usize> {
        self.snapshot().open_columns()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, cell: Cell, column: isize) -> Result<usize, MoveError> {
        if cell == Cell::Empty {
            return Err(MoveError::EmptyCell);
        }
        if !self.is_within_bounds(column, 0) {
            return Err(MoveError::InvalidColumn);
        }
        if !self.is_column_open(column) {
            return Err(MoveError::ColumnFull);
        }

        let column = column as usize;
        // Find the lowest empty row in this column
        let row = (0..self.rows)
            .find(|&row| self.get(row, column) == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.columns + column] = cell;
        Ok(row)
    }

    /// Place `cell` in the lowest empty row of `column`. Returns false and
    /// leaves the board untouched when the column is out of range or full.
    pub fn apply_move(&mut self, cell: Cell, column: isize) -> bool {
        self.drop_piece(cell, column).is_ok()
    }

    pub fn snapshot(&self) -> BoardView<'_> {
        BoardView::new(&self.cells, self.rows, self.columns)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

/// Read-only view of a grid, handed to rendering, win detection and agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView<'a> {
    cells: &'a [Cell],
    rows: usize,
    columns: usize,
}

impl<'a> BoardView<'a> {
    /// Wrap a row-major slice (row 0 first). Panics if the slice does not
    /// hold exactly `rows * columns` cells.
    pub fn new(cells: &'a [Cell], rows: usize, columns: usize) -> Self {
        assert_eq!(
            cells.len(),
            rows * columns,
            "grid of {} cells does not match {}x{}",
            cells.len(),
            rows,
            columns
        );
        BoardView {
            cells,
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    pub fn is_within_bounds(&self, column: isize, row: isize) -> bool {
        column >= 0 && (column as usize) < self.columns && row >= 0 && (row as usize) < self.rows
    }

    pub fn is_column_open(&self, column: isize) -> bool {
        self.is_within_bounds(column, 0)
            && self.get(self.rows - 1, column as usize) == Cell::Empty
    }

    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.is_column_open(column as isize))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.open_columns().is_empty()
    }
}
