//! Error types.
//!
//! Both kinds are caller-correctable. A failed move leaves the board
//! untouched; a failed config never produces a board.

use crate::core::{Marker, Position};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("unable to decipher the requested move: {notation:?}")]
    Undecipherable { notation: String },

    #[error("move not available: {notation:?} at {position} is already taken")]
    Occupied { notation: String, position: Position },

    #[error("marker {marker:?} does not belong to either player on this board")]
    ForeignMarker { marker: Marker },
}

/// Errors that can occur when validating a board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("target run length must be at least 1")]
    ZeroTarget,

    #[error("target run length {target} does not fit a {rows}x{cols} board")]
    TargetTooLarge {
        target: usize,
        rows: usize,
        cols: usize,
    },

    #[error("both players use the marker {0:?}")]
    DuplicateMarkers(Marker),

    #[error("players cannot use the empty marker")]
    EmptyMarker,

    #[error("grid of {rows}x{cols} needs {expected} cells (got {cells})")]
    GridSize {
        rows: usize,
        cols: usize,
        expected: usize,
        cells: usize,
    },

    #[error("seat index {0} is not 0 or 1")]
    InvalidSeat(u8),
}
