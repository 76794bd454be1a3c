//! Movement, collision and scoring rules.

use log::trace;

use crate::{cell::Cell, direction::Direction, grid::Grid, player::PlayerState};

/// Result of asking the player to take one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target was a wall or outside the grid. Nothing changed.
    Blocked,
    /// The player moved onto an open cell.
    Moved,
    /// The player moved onto a collectible, which was scored and cleared.
    Collected,
}

impl MoveOutcome {
    /// Returns whether the step was accepted.
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Moves the player one cell in `direction`, applying collision and scoring.
///
/// The rules are evaluated in order:
///
/// 1. A target outside the grid is rejected.
/// 2. A target holding a [`Cell::Wall`] is rejected.
/// 3. A target holding a [`Cell::Collectible`] awards its points and is cleared to
///    [`Cell::Open`].
/// 4. The player moves onto the target.
///
/// A rejected move leaves both `grid` and `player` exactly as they were. An accepted move updates
/// the score, the collected count and the position together.
pub fn apply(grid: &mut Grid, player: &mut PlayerState, direction: Direction) -> MoveOutcome {
    let Some(target) = player.position.step(direction) else {
        return MoveOutcome::Blocked;
    };
    let Some(cell) = grid.get_mut(target) else {
        return MoveOutcome::Blocked;
    };

    let outcome = match *cell {
        Cell::Wall => return MoveOutcome::Blocked,
        Cell::Collectible => {
            *cell = Cell::Open;
            player.record_collectible();
            MoveOutcome::Collected
        }
        Cell::Open => MoveOutcome::Moved,
    };
    player.position = target;

    trace!("{direction:?} to {target:?}: {outcome:?}");

    outcome
}
