//! A terminal maze game with an exit solver.
//!
//! The maze core is made of a handful of small, synchronous pieces:
//!
//! - [`grid`] generates and stores the maze, a matrix of [`Cell`]s whose border is always wall.
//! - [`player`] holds the player's position and score, kept apart from the grid.
//! - [`movement`] applies one step with its collision and scoring rules.
//! - [`solver`] finds a path from any cell to the maze border by depth-first backtracking.
//!
//! [`session`] ties one grid and one player together for a game, and the [`App`] drives a
//! session from a Ratatui terminal interface.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
pub mod audio;
pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
mod events;
pub mod grid;
pub mod logging;
pub mod movement;
pub mod player;
pub mod session;
pub mod solver;
mod types;
mod ui;

pub use app::App;
pub use cell::Cell;
pub use direction::{Direction, Position};
pub use grid::Grid;
pub use player::PlayerState;
