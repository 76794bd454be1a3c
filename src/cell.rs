//! Cell values stored in the maze grid.
//!
//! The player is deliberately absent from this enumeration. Its position lives in
//! [`PlayerState`](crate::player::PlayerState) and is only overlaid on top of the cells when the
//! maze is drawn.

/// Symbol used to draw the player on top of the maze.
pub const PLAYER_SYMBOL: char = 'P';

/// Content of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell. Every border cell of a generated maze is a wall.
    Wall,
    /// Free cell the player can walk over.
    Open,
    /// Star worth points, turned into [`Cell::Open`] once picked up.
    Collectible,
}

impl Cell {
    /// Returns the character used to draw the cell.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Collectible => '*',
        }
    }

    /// Parses a cell back from its drawing symbol.
    ///
    /// Returns [`None`] for any character that is not one of the cell symbols. The player symbol is
    /// not a cell and is rejected as well.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open),
            '*' => Some(Self::Collectible),
            _ => None,
        }
    }

    /// Returns whether the player (or the exit solver) may enter the cell.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
