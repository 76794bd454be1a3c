//! Maze grid storage and generation.
//!
//! This module contains the [`Grid`] type, which owns the cell matrix of a maze, together with the
//! random generation algorithm and the plain-text format used to write fixtures and to dump mazes
//! into the log.

use std::{fmt, str::FromStr};

use log::debug;
use rand::Rng;

use crate::{cell::Cell, direction::Position, error::GridError};

/// Smallest number of rows and columns a maze can have.
///
/// Anything smaller has no interior cell left once the border walls are placed, so there would be
/// nowhere to spawn the player.
pub const MIN_SIDE: usize = 3;

/// Cell in which every player starts, guaranteed open after generation.
pub const SPAWN: Position = Position::new(1, 1);

/// Probabilities driving the random content of interior cells.
///
/// Each interior cell draws one uniform sample `u` in `[0, 1)`. It becomes a wall when `u` falls
/// below `wall_probability`, a collectible when it falls in the next `collectible_probability`
/// slice, and an open cell otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    /// Chance of an interior cell being a wall.
    pub wall_probability: f64,
    /// Chance of an interior cell holding a collectible.
    pub collectible_probability: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            wall_probability: 0.20,
            collectible_probability: 0.05,
        }
    }
}

impl GenerationParams {
    /// Checks that both probabilities lie in `[0, 1]` and that together they do not exceed 1.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidProbability`] when the parameters do not describe a valid
    /// distribution.
    pub fn validate(&self) -> Result<(), GridError> {
        let unit = 0.0..=1.0;
        let wall = self.wall_probability;
        let collectible = self.collectible_probability;

        if unit.contains(&wall) && unit.contains(&collectible) && wall + collectible <= 1.0 {
            Ok(())
        } else {
            Err(GridError::InvalidProbability { wall, collectible })
        }
    }

    /// Maps one uniform sample to the content of an interior cell.
    fn sample(&self, sample: f64) -> Cell {
        if sample < self.wall_probability {
            Cell::Wall
        } else if sample < self.wall_probability + self.collectible_probability {
            Cell::Collectible
        } else {
            Cell::Open
        }
    }
}

/// Rectangular maze of [`Cell`]s.
///
/// The grid only describes the world. The player's position is tracked separately in
/// [`PlayerState`](crate::player::PlayerState), so the grid never has to be cleaned up after the
/// player walks away from a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Generates a random maze of `rows` by `cols` cells.
    ///
    /// Border cells are always walls and consume no randomness. Every interior cell draws exactly
    /// one sample from `rng`, in row-major order, and is assigned according to `params`. Once the
    /// whole interior is filled, [`SPAWN`] is forced open regardless of what it was assigned.
    ///
    /// # Errors
    ///
    /// - [`GridError::DegenerateSize`] when either dimension is below [`MIN_SIDE`]
    /// - [`GridError::TooLarge`] when the cell count does not fit in memory
    /// - [`GridError::InvalidProbability`] when `params` fail [`GenerationParams::validate`]
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let area = check_size(rows, cols)?;
        params.validate()?;

        let mut cells = Vec::with_capacity(area);
        for row in 0..rows {
            for col in 0..cols {
                if on_border(rows, cols, Position::new(row, col)) {
                    cells.push(Cell::Wall);
                } else {
                    cells.push(params.sample(rng.gen::<f64>()));
                }
            }
        }

        let mut grid = Self { rows, cols, cells };
        grid.set(SPAWN, Cell::Open)?;

        debug!(
            "generated {rows}x{cols} maze with {} walls and {} collectibles",
            grid.count(Cell::Wall),
            grid.count(Cell::Collectible)
        );

        Ok(grid)
    }

    /// Builds a maze whose border is solid wall and whose interior is entirely open.
    ///
    /// # Errors
    ///
    /// - [`GridError::DegenerateSize`] when either dimension is below [`MIN_SIDE`]
    /// - [`GridError::TooLarge`] when the cell count does not fit in memory
    pub fn enclosed(rows: usize, cols: usize) -> Result<Self, GridError> {
        let _ = check_size(rows, cols)?;

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .map(|pos| {
                if on_border(rows, cols, pos) {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `pos`, or [`None`] when `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Returns a mutable reference to the cell at `pos`, or [`None`] when out of bounds.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).and_then(|index| self.cells.get_mut(index))
    }

    /// Overwrites the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), GridError> {
        let slot = self.get_mut(pos).ok_or(GridError::OutOfBounds(pos))?;
        *slot = cell;

        Ok(())
    }

    /// Returns whether `pos` lies in the first or last row or column.
    ///
    /// Positions outside the grid are not border cells.
    pub const fn is_border(&self, pos: Position) -> bool {
        self.contains(pos) && on_border(self.rows, self.cols, pos)
    }

    /// Returns whether `pos` lies inside the grid.
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Counts the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&other| other == cell).count()
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Converts a position into an index into the row-major cell vector.
    const fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }
}

/// Rejects dimensions that cannot hold a bordered maze with a spawn cell, returning the cell count.
const fn check_size(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(GridError::DegenerateSize { rows, cols });
    }

    match rows.checked_mul(cols) {
        Some(area) if area <= isize::MAX.unsigned_abs() => Ok(area),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

/// Border test shared by generation and [`Grid::is_border`].
const fn on_border(rows: usize, cols: usize, pos: Position) -> bool {
    pos.row == 0 || pos.col == 0 || pos.row + 1 == rows || pos.col + 1 == cols
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.iter_rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a maze written with one line per row and one symbol per cell.
    ///
    /// The border invariant is not enforced here, which allows hand-written mazes with openings in
    /// their outer wall.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = input.lines().collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let area = check_size(rows, cols)?;

        let mut cells = Vec::with_capacity(area);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, row, col })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }
}
