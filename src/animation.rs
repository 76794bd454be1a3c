//! Animated playback of the exit search.
//!
//! This module replays a recorded [`SearchTrace`] over the maze one step at a time, so the player
//! can watch the solver walk forward, hit dead ends and backtrack.

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use crate::{
    direction::Position,
    solver::{SearchStep, SearchTrace},
};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames in the exit search visualization. A
/// lower value results in faster animation, while a higher value slows down the animation to make
/// it easier to follow the algorithm's progress.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 40;

/// Animation state manager for the exit search visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// cells being displayed while the search is replayed.
pub(crate) struct AnimationManager {
    /// Steps recorded by the solver, replayed in order.
    pub(crate) steps: Vec<SearchStep>,
    /// Index into [`steps`](AnimationManager::steps) of the next step to play.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Cells on the search's current path.
    ///
    /// Cells are pushed when the search enters them and removed when it backtracks, so once the
    /// replay ends this holds the exit path, or nothing when there is no exit.
    pub(crate) current_path: Vec<Position>,
    /// Cells of [`current_path`](AnimationManager::current_path), for lookups while drawing.
    pub(crate) on_path: HashSet<Position>,
    /// Every cell the replay has entered so far.
    pub(crate) explored: HashSet<Position>,
    /// Whether the recorded search reached the border.
    pub(crate) found_exit: bool,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates a new animation manager with nothing to play.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            current_path: Vec::new(),
            on_path: HashSet::new(),
            explored: HashSet::new(),
            found_exit: false,
        }
    }

    /// Loads a new search and rewinds to its first step.
    pub(crate) fn load(&mut self, trace: SearchTrace) {
        self.found_exit = trace.path.is_some();
        self.steps = trace.steps;
        self.reset();
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.current_path.clear();
        self.on_path.clear();
        self.explored.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.found_exit = false;
        self.reset();
    }

    /// Whether a search is loaded, playing or finished.
    pub(crate) const fn is_active(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Whether every recorded step has been played.
    pub(crate) const fn is_finished(&self) -> bool {
        self.is_active() && self.current_index >= self.steps.len()
    }

    /// Whether `pos` is on the path currently displayed.
    pub(crate) fn is_on_path(&self, pos: Position) -> bool {
        self.on_path.contains(&pos)
    }

    /// Whether the replay has entered `pos` at some point.
    pub(crate) fn was_explored(&self, pos: Position) -> bool {
        self.explored.contains(&pos)
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// This method plays the next step once enough time has passed since the previous one. The
    /// animation holds on its last frame when it is done.
    pub(crate) fn update(&mut self) {
        if self.last_update_time.elapsed() >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }

    /// Plays the next recorded step, ignoring timing.
    pub(crate) fn advance(&mut self) {
        let Some(step) = self.steps.get(self.current_index) else {
            return;
        };

        match *step {
            SearchStep::Enter(pos) => {
                self.current_path.push(pos);
                let _ = self.on_path.insert(pos);
                let _ = self.explored.insert(pos);
            }
            SearchStep::Leave(pos) => {
                // Backtracking always leaves the most recently entered cell.
                if self.current_path.last() == Some(&pos) {
                    let _ = self.current_path.pop();
                    let _ = self.on_path.remove(&pos);
                }
            }
        }

        self.current_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::Cell, direction::Direction, grid::Grid, solver};

    fn play_to_end(manager: &mut AnimationManager) {
        while !manager.is_finished() {
            manager.advance();
        }
    }

    #[test]
    fn test_new_is_idle() {
        let manager = AnimationManager::new();

        assert!(!manager.is_active());
        assert!(!manager.is_finished());
        assert!(manager.current_path.is_empty());
    }

    #[test]
    fn test_replay_ends_on_exit_path() {
        let grid: Grid = "#####\n#...#\n#.#..\n#.###\n#####"
            .parse()
            .expect("fixture maze should parse");
        let mut manager = AnimationManager::new();
        manager.load(solver::trace_exit(&grid, Position::new(1, 1)));

        play_to_end(&mut manager);

        assert!(manager.found_exit);
        assert_eq!(
            manager.current_path,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(2, 4)
            ]
        );
        assert!(manager.was_explored(Position::new(3, 1)));
        assert!(!manager.is_on_path(Position::new(3, 1)));
    }

    #[test]
    fn test_path_lookup_follows_replay() {
        let grid: Grid = "#####\n#...#\n#.#..\n#.###\n#####"
            .parse()
            .expect("fixture maze should parse");
        let mut manager = AnimationManager::new();
        manager.load(solver::trace_exit(&grid, Position::new(1, 1)));

        while !manager.is_finished() {
            manager.advance();
            assert_eq!(manager.on_path.len(), manager.current_path.len());
            assert!(
                manager
                    .current_path
                    .iter()
                    .all(|&pos| manager.is_on_path(pos) && manager.was_explored(pos)),
                "every cell on the path is looked up as such"
            );
        }
    }

    #[test]
    fn test_replay_without_exit_clears_path() {
        let grid = Grid::enclosed(4, 5).expect("4x5 should build");
        let mut manager = AnimationManager::new();
        manager.load(solver::trace_exit(&grid, Position::new(1, 1)));

        manager.advance();
        assert_eq!(manager.current_path, vec![Position::new(1, 1)]);

        play_to_end(&mut manager);

        assert!(!manager.found_exit);
        assert!(manager.current_path.is_empty());
        assert_eq!(manager.explored.len(), 6);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut grid = Grid::enclosed(3, 3).expect("3x3 should build");
        let gap = Position::new(0, 1);
        grid.set(gap, Cell::Open).expect("gap is inside");
        let mut manager = AnimationManager::new();
        manager.load(solver::trace_exit(&grid, Position::new(1, 1)));

        play_to_end(&mut manager);
        let index = manager.current_index;
        manager.advance();

        assert_eq!(manager.current_index, index);
        assert_eq!(
            solver::find_exit(&grid, Position::new(1, 1)),
            Some(vec![Direction::Up])
        );
    }

    #[test]
    fn test_clear() {
        let grid = Grid::enclosed(4, 4).expect("4x4 should build");
        let mut manager = AnimationManager::new();
        manager.load(solver::trace_exit(&grid, Position::new(1, 1)));
        manager.advance();

        manager.clear();

        assert!(!manager.is_active());
        assert!(manager.current_path.is_empty());
        assert!(manager.on_path.is_empty());
        assert!(manager.explored.is_empty());
    }
}
