//! Grid coordinates and the four movement directions.

/// Cardinal direction of a single step through the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// All directions in the order the exit solver explores them.
    ///
    /// The order is part of the solver's observable behavior: it decides which path is returned
    /// when several exits are reachable.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row, col)` offset of one step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Zero-based `(row, col)` coordinate of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: usize,
    /// Column index, growing to the right.
    pub col: usize,
}

impl Position {
    /// Builds a position from its row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighboring position one step away in `direction`.
    ///
    /// Stepping above row 0 or left of column 0 has no representation and yields [`None`]. Bounds
    /// on the other two sides depend on the grid and are checked by the grid itself.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();
        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta) else {
            return None;
        };

        Some(Self { row, col })
    }
}
