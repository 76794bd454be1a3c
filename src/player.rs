//! Player position and scoring counters.

use crate::{direction::Position, grid::SPAWN};

/// Points awarded for every collectible picked up.
pub const POINTS_PER_COLLECTIBLE: u32 = 10;

/// State of the single player walking through the maze.
///
/// The position always refers to a non-wall cell of the grid it moves in. Both counters only ever
/// grow, and they grow together: see [`movement::apply`](crate::movement::apply).
#[expect(
    clippy::module_name_repetitions,
    reason = "The type is re-exported at the crate root, where the module name is lost."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    /// Cell currently occupied by the player.
    pub position: Position,
    /// Points accumulated so far.
    pub score: u32,
    /// Number of collectibles picked up so far.
    pub collected: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Creates a player standing on the spawn cell with no points.
    pub const fn new() -> Self {
        Self {
            position: SPAWN,
            score: 0,
            collected: 0,
        }
    }

    /// Credits one collectible and its points.
    pub(crate) const fn record_collectible(&mut self) {
        self.score = self.score.saturating_add(POINTS_PER_COLLECTIBLE);
        self.collected = self.collected.saturating_add(1);
    }
}
