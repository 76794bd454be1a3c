//! Typed errors reported by the maze core and the audio player.

use std::path::PathBuf;

use thiserror::Error;

use crate::direction::Position;

/// Errors raised while building or editing a [`Grid`](crate::grid::Grid).
#[expect(
    clippy::module_name_repetitions,
    reason = "The error type is re-exported and used outside of this module."
)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Requested dimensions leave no interior to hold the spawn cell.
    #[error("maze must be at least 3x3, requested {rows}x{cols}")]
    DegenerateSize {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Requested dimensions hold more cells than can be addressed.
    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Generation probabilities do not describe a valid distribution.
    #[error("invalid generation probabilities: walls {wall}, collectibles {collectible}")]
    InvalidProbability {
        /// Requested wall probability.
        wall: f64,
        /// Requested collectible probability.
        collectible: f64,
    },
    /// A position lies outside the grid.
    #[error("position {0:?} is outside the maze")]
    OutOfBounds(Position),
    /// Rows of a textual maze do not share the same width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A textual maze contains a character that is not a cell symbol.
    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol {
        /// The unexpected character.
        symbol: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
    },
}

/// Errors raised while starting background music.
#[expect(
    clippy::module_name_repetitions,
    reason = "The error type is re-exported and used outside of this module."
)]
#[derive(Error, Debug)]
pub enum AudioError {
    /// The music file could not be read.
    #[error("failed to read music file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The music file is not in a supported format.
    #[error("failed to decode music file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    /// No audio output device is available.
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),
    /// The output device refused a new playback sink.
    #[error("failed to open playback sink: {0}")]
    Play(#[from] rodio::PlayError),
}
