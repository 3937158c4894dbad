//! Outcome evaluation.
//!
//! Outcomes are derived, never stored: every query folds the whole line
//! table over the current grid.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Line, LineSet, Marker};

/// Game status from one player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Incomplete,
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Outcome::Incomplete)
    }

    /// The matching outcome for the opponent.
    #[must_use]
    pub const fn opposite(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => other,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Win => "Win",
            Outcome::Draw => "Draw",
            Outcome::Loss => "Loss",
            Outcome::Incomplete => "Game Unfinished",
        })
    }
}

/// Check whether `marker` fills every cell of `line`.
///
/// A line whose length differs from `target` belongs to another geometry
/// and never matches. The empty marker never matches either.
#[must_use]
pub fn check_line(line: &Line, target: usize, grid: &Grid, marker: Marker) -> bool {
    if line.len() != target || marker.is_empty() {
        return false;
    }
    line.iter().all(|p| grid.get(p) == Some(marker))
}

/// Check whether `marker` fills any line of the table.
#[must_use]
pub fn has_line(lines: &LineSet, grid: &Grid, marker: Marker) -> bool {
    lines
        .iter()
        .any(|line| check_line(line, lines.target(), grid, marker))
}

/// Evaluate the game for both players.
///
/// The first player is checked first, so if both somehow held a full line
/// the first player wins. Moves never overwrite a cell, so that state is
/// unreachable in play.
///
/// ```
/// use mnk_rules::board::Grid;
/// use mnk_rules::core::Marker;
/// use mnk_rules::rules::{evaluate_outcome, generate_win_lines, Outcome};
///
/// let lines = generate_win_lines(3, 3, 3);
/// let grid = Grid::new(3, 3);
/// assert_eq!(
///     evaluate_outcome(&grid, &lines, Marker::Cross, Marker::WhiteStone),
///     (Outcome::Incomplete, Outcome::Incomplete)
/// );
/// ```
#[must_use]
pub fn evaluate_outcome(
    grid: &Grid,
    lines: &LineSet,
    first: Marker,
    second: Marker,
) -> (Outcome, Outcome) {
    if has_line(lines, grid, first) {
        return (Outcome::Win, Outcome::Loss);
    }
    if has_line(lines, grid, second) {
        return (Outcome::Loss, Outcome::Win);
    }
    if grid.is_full() {
        return (Outcome::Draw, Outcome::Draw);
    }
    (Outcome::Incomplete, Outcome::Incomplete)
}
