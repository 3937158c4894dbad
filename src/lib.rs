//! # mnk-rules
//!
//! Rules engine for generalized m-n-k games: an m x n board where the first
//! player to place k markers in a row (horizontally, vertically or
//! diagonally) wins. Tic-tac-toe is 3-3-3; gomoku is 15-15-5.
//!
//! ## Design Principles
//!
//! 1. **Precompute, then fold**: every run of k cells that fits the board
//!    is enumerated once at construction. Outcome queries fold that table
//!    over the current grid and keep no state of their own.
//!
//! 2. **Canonical lines**: a line's cells are always sorted by position,
//!    and the table is sorted, so enumeration order is reproducible.
//!
//! 3. **Notation at the edge**: players type `row,col` (1-based) or a
//!    label pair like `TL`. Malformed input is a `None`/`Err`, never a
//!    panic, and never touches the board.
//!
//! ## Modules
//!
//! - `core`: positions, lines, markers, players, board configuration
//! - `rules`: win-line generation and outcome evaluation
//! - `notation`: move notation codec and label tables
//! - `board`: grid storage and the `Board` that ties it together
//! - `games`: named presets (tic-tac-toe, connect 4, gomoku)
//! - `error`: move and configuration errors

pub mod core;
pub mod rules;
pub mod notation;
pub mod board;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, TargetPolicy,
    Line, LineSet, Position, PositionSet,
    Marker, Player, PlayerId, PlayerKind,
};

pub use crate::rules::{check_line, evaluate_outcome, generate_win_lines, Outcome};

pub use crate::notation::{Labels, Notation};

pub use crate::board::{Board, Grid};

pub use crate::games::{MnkGame, MnkGameBuilder};

pub use crate::error::{ConfigError, MoveError};
