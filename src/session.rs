//! One game session: a maze, its player and the victory condition.

use log::info;
use rand::Rng;

use crate::{
    cell::Cell,
    config::Difficulty,
    direction::Direction,
    error::GridError,
    grid::{GenerationParams, Grid},
    movement::{self, MoveOutcome},
    player::PlayerState,
    solver::{self, SearchTrace},
};

/// State of a game in progress.
///
/// The session owns the [`Grid`] and the [`PlayerState`] side by side. Neither knows about the
/// other; they only meet inside [`movement::apply`] and when the maze is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Label shown to the player, never interpreted.
    player_name: String,
    /// World state.
    grid: Grid,
    /// Actor state.
    player: PlayerState,
    /// Collectibles present when the maze was generated.
    total_collectibles: usize,
}

impl Session {
    /// Starts a session on a freshly generated maze sized after `difficulty`.
    ///
    /// # Errors
    ///
    /// Propagates generation errors from [`Grid::generate`]. The presets are always valid, so this
    /// only fails if they are ever changed to degenerate sizes.
    pub fn new<R: Rng + ?Sized>(
        player_name: String,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let (rows, cols) = difficulty.dimensions();
        let grid = Grid::generate(rows, cols, &GenerationParams::default(), rng)?;

        Ok(Self::from_grid(player_name, grid))
    }

    /// Starts a session on an existing maze, with the player on the spawn cell.
    pub fn from_grid(player_name: String, grid: Grid) -> Self {
        let total_collectibles = grid.count(Cell::Collectible);
        info!(
            "session for {player_name:?} started on a {}x{} maze with {total_collectibles} collectibles",
            grid.rows(),
            grid.cols()
        );

        Self {
            player_name,
            grid,
            player: PlayerState::new(),
            total_collectibles,
        }
    }

    /// Moves the player one step, see [`movement::apply`].
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        movement::apply(&mut self.grid, &mut self.player, direction)
    }

    /// Returns whether every collectible of the maze has been picked up.
    ///
    /// A maze generated without collectibles counts as complete from the start. The game loop only
    /// checks this after a move command, so such a game ends on the player's first move.
    pub fn is_complete(&self) -> bool {
        usize::try_from(self.player.collected)
            .is_ok_and(|collected| collected >= self.total_collectibles)
    }

    /// Path from the player's position to the border, if one exists.
    pub fn exit_hint(&self) -> Option<Vec<Direction>> {
        solver::find_exit(&self.grid, self.player.position)
    }

    /// Exit search from the player's position with every explored step recorded.
    pub fn trace_exit_hint(&self) -> SearchTrace {
        solver::trace_exit(&self.grid, self.player.position)
    }

    /// Name of the player.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Current maze.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player state.
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Collectibles the maze started with.
    pub const fn total_collectibles(&self) -> usize {
        self.total_collectibles
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::direction::Position;

    fn fixture() -> Session {
        let grid = "#####\n#.*.#\n#*#.#\n#####"
            .parse()
            .expect("fixture maze should parse");
        Session::from_grid("Ana".to_owned(), grid)
    }

    #[test]
    fn test_new_uses_difficulty_dimensions() {
        let mut rng = StdRng::seed_from_u64(5);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let session =
                Session::new("Ana".to_owned(), difficulty, &mut rng).expect("presets are valid");

            assert_eq!(
                (session.grid().rows(), session.grid().cols()),
                difficulty.dimensions()
            );
            assert_eq!(session.player().position, Position::new(1, 1));
            assert_eq!(
                session.total_collectibles(),
                session.grid().count(Cell::Collectible)
            );
        }
    }

    #[test]
    fn test_victory_after_collecting_everything() {
        let mut session = fixture();
        assert_eq!(session.total_collectibles(), 2);
        assert!(!session.is_complete());

        assert_eq!(session.step(Direction::Right), MoveOutcome::Collected);
        assert!(!session.is_complete());

        assert_eq!(session.step(Direction::Left), MoveOutcome::Moved);
        assert_eq!(session.step(Direction::Down), MoveOutcome::Collected);
        assert!(session.is_complete());
        assert_eq!(session.player().score, 20);
    }

    #[test]
    fn test_blocked_step_keeps_session() {
        let mut session = fixture();
        let before = session.clone();

        assert_eq!(session.step(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(session, before);
    }

    #[test]
    fn test_maze_without_collectibles_is_complete() {
        let grid = Grid::enclosed(4, 4).expect("4x4 should build");
        let session = Session::from_grid("Ana".to_owned(), grid);

        assert!(session.is_complete());
    }

    #[test]
    fn test_generated_maze_has_no_exit() {
        let mut rng = StdRng::seed_from_u64(11);
        let session =
            Session::new("Ana".to_owned(), Difficulty::Easy, &mut rng).expect("presets are valid");

        assert_eq!(session.exit_hint(), None);
        assert_eq!(session.trace_exit_hint().path, None);
    }

    #[test]
    fn test_exit_hint_follows_player() {
        let mut grid = Grid::enclosed(3, 5).expect("3x5 should build");
        let gap = Position::new(1, 4);
        grid.set(gap, Cell::Open).expect("gap is inside");
        let mut session = Session::from_grid("Ana".to_owned(), grid);

        assert_eq!(
            session.exit_hint(),
            Some(vec![Direction::Right, Direction::Right, Direction::Right])
        );

        assert_eq!(session.step(Direction::Right), MoveOutcome::Moved);
        assert_eq!(
            session.exit_hint(),
            Some(vec![Direction::Right, Direction::Right])
        );
        assert_eq!(session.player_name(), "Ana");
    }
}
