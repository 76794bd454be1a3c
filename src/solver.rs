//! Exit finding by depth-first backtracking.
//!
//! This module answers whether the player can walk from a cell to the border of the maze. The
//! search explores neighbors in the fixed order of [`Direction::ALL`] and never enters a cell
//! twice, which makes it linear in the size of the grid and fully deterministic: a given grid and
//! start cell always produce the same path, or always produce none.
//!
//! The search keeps its own work stack instead of recursing, so its depth is bounded by the heap
//! rather than by the thread's stack, but it returns exactly the path the recursive formulation
//! would.

use log::debug;

use crate::{
    cell::Cell,
    direction::{Direction, Position},
    grid::Grid,
};

/// One step of the exploration, recorded for visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// The search walked into a cell, extending the current path.
    Enter(Position),
    /// The search gave up on a cell and backtracked out of it.
    Leave(Position),
}

/// Full record of one exit search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTrace {
    /// Every cell entered and left, in order.
    pub steps: Vec<SearchStep>,
    /// Directions leading to the border, identical to what [`find_exit`] returns.
    pub path: Option<Vec<Direction>>,
}

/// Searches for a path from `start` to any passable border cell.
///
/// Returns [`None`] when no exit exists: `start` is outside the grid or a wall, or every cell
/// reachable from it is interior. A start cell that already lies on the border returns an empty
/// path, even if it has no open neighbor.
pub fn find_exit(grid: &Grid, start: Position) -> Option<Vec<Direction>> {
    search(grid, start, |_| {})
}

/// Runs the same search as [`find_exit`] while recording every step it takes.
pub fn trace_exit(grid: &Grid, start: Position) -> SearchTrace {
    let mut steps = Vec::new();
    let path = search(grid, start, |step| steps.push(step));

    debug!(
        "exit search from {start:?} took {} steps, found {:?}",
        steps.len(),
        path.as_ref().map(Vec::len)
    );

    SearchTrace { steps, path }
}

/// Pending work for one cell on the current path.
struct Frame {
    /// Cell being expanded.
    pos: Position,
    /// Index into [`Direction::ALL`] of the next neighbor to try.
    next: usize,
}

/// Interior cells already explored during one search, shared by every branch.
struct Visited {
    /// Width of the grid, used to flatten positions.
    cols: usize,
    /// One flag per cell in row-major order.
    seen: Vec<bool>,
}

impl Visited {
    /// Creates an empty set sized for `grid`.
    fn new(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            seen: vec![false; grid.area()],
        }
    }

    /// Returns whether `pos` was explored already.
    fn contains(&self, pos: Position) -> bool {
        self.seen
            .get(pos.row * self.cols + pos.col)
            .copied()
            .unwrap_or(false)
    }

    /// Marks `pos` as explored.
    fn insert(&mut self, pos: Position) {
        if let Some(flag) = self.seen.get_mut(pos.row * self.cols + pos.col) {
            *flag = true;
        }
    }
}

/// Whether the search may stand on `pos`.
fn passable(grid: &Grid, pos: Position) -> bool {
    grid.get(pos).is_some_and(Cell::is_passable)
}

/// Depth-first search reporting each step to `on_step`.
fn search<F: FnMut(SearchStep)>(
    grid: &Grid,
    start: Position,
    mut on_step: F,
) -> Option<Vec<Direction>> {
    if !passable(grid, start) {
        return None;
    }
    on_step(SearchStep::Enter(start));
    if grid.is_border(start) {
        return Some(Vec::new());
    }

    let mut visited = Visited::new(grid);
    visited.insert(start);

    let mut stack = vec![Frame {
        pos: start,
        next: 0,
    }];
    let mut path = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::ALL.get(frame.next) else {
            // Every neighbor failed: backtrack.
            on_step(SearchStep::Leave(frame.pos));
            let _ = stack.pop();
            let _ = path.pop();
            continue;
        };
        frame.next += 1;

        let Some(next) = frame.pos.step(direction) else {
            continue;
        };
        if !passable(grid, next) || visited.contains(next) {
            continue;
        }

        path.push(direction);
        on_step(SearchStep::Enter(next));
        if grid.is_border(next) {
            return Some(path);
        }

        visited.insert(next);
        stack.push(Frame { pos: next, next: 0 });
    }

    None
}
