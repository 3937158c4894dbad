//! Board state: grid, line table, notation and player markers.
//!
//! A `Board` owns its grid exclusively. Moves mutate exactly one cell and
//! only on success; queries are recomputed from the grid on every call.
//! Callers sharing a board across threads must lock around
//! `apply_move`/`outcome`/`open_positions` as a unit.

use tracing::{debug, trace};

use super::grid::Grid;
use crate::core::{BoardConfig, LineSet, Marker, Player, Position};
use crate::error::{ConfigError, MoveError};
use crate::notation::Notation;
use crate::rules::{evaluate_outcome, generate_win_lines, Outcome};

/// An m-n-k board.
///
/// ## Example
///
/// ```
/// use mnk_rules::board::Board;
/// use mnk_rules::core::Marker;
/// use mnk_rules::rules::Outcome;
///
/// let mut board = Board::new(3, 3, 3).unwrap();
/// for mv in ["1,1", "2,2", "3,3"] {
///     board.place(Marker::Cross, mv).unwrap();
/// }
/// assert_eq!(board.outcome(), (Outcome::Win, Outcome::Loss));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,

    /// Target as requested in the configuration.
    requested_target: usize,

    grid: Grid,

    /// Every run of `target` cells that fits this board. Built once.
    lines: LineSet,

    notation: Notation,

    /// Markers of the first and second player, in that order.
    markers: [Marker; 2],
}

impl Board {
    /// Create a board with numeric notation and default markers.
    pub fn new(rows: usize, cols: usize, target: usize) -> Result<Self, ConfigError> {
        Self::from_config(&BoardConfig::new(rows, cols, target))
    }

    /// Create a board from a full configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let target = config.effective_target()?;
        let lines = generate_win_lines(config.rows, config.cols, target);

        let mut board = Self {
            rows: config.rows,
            cols: config.cols,
            requested_target: config.target,
            grid: Grid::new(config.rows, config.cols),
            lines,
            notation: Notation::numeric(config.rows, config.cols),
            markers: config.markers,
        };

        if let (Some(rows), Some(cols)) = (&config.row_labels, &config.col_labels) {
            let _ = board.set_labels(rows.clone(), cols.clone());
        }

        Ok(board)
    }

    /// Install notation labels.
    ///
    /// Lists are padded with empty labels or truncated to the board size.
    /// If either list is empty the current notation is kept and `false` is
    /// returned.
    pub fn set_labels(&mut self, row_labels: Vec<String>, col_labels: Vec<String>) -> bool {
        self.notation.set_labels(row_labels, col_labels)
    }

    // === Accessors ===

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Run length needed to win on this board.
    #[must_use]
    pub fn target(&self) -> usize {
        self.lines.target()
    }

    /// Run length originally asked for. Differs from [`Board::target`]
    /// when the request was clamped.
    #[must_use]
    pub fn requested_target(&self) -> usize {
        self.requested_target
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn win_lines(&self) -> &LineSet {
        &self.lines
    }

    #[must_use]
    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    #[must_use]
    pub fn markers(&self) -> [Marker; 2] {
        self.markers
    }

    /// Marker at a cell, or `None` if off the board.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Marker> {
        self.grid.get(Position::new(row, col))
    }

    // === Moves ===

    /// Parse a move without applying it.
    #[must_use]
    pub fn decode_move(&self, text: &str) -> Option<Position> {
        self.notation.decode(text)
    }

    /// Notation for a single position.
    #[must_use]
    pub fn encode(&self, position: Position) -> Option<String> {
        self.notation.encode(position)
    }

    /// Apply `player`'s move.
    ///
    /// On error the board is left unchanged.
    pub fn apply_move(&mut self, player: &Player, text: &str) -> Result<Position, MoveError> {
        self.place(player.marker(), text)
    }

    /// Place `marker` at the cell named by `text`.
    ///
    /// `marker` must be one of the two player markers; anything else would
    /// land on the grid without ever counting toward an outcome.
    pub fn place(&mut self, marker: Marker, text: &str) -> Result<Position, MoveError> {
        if !self.markers.contains(&marker) {
            debug!(notation = text, %marker, "rejected move: foreign marker");
            return Err(MoveError::ForeignMarker { marker });
        }

        let Some(position) = self.notation.decode(text) else {
            debug!(notation = text, "rejected move: undecipherable");
            return Err(MoveError::Undecipherable {
                notation: text.to_string(),
            });
        };

        if !self.grid.is_open(position) {
            debug!(notation = text, %position, "rejected move: cell taken");
            return Err(MoveError::Occupied {
                notation: text.to_string(),
                position,
            });
        }

        self.grid.set(position, marker);
        trace!(notation = text, %position, %marker, "move applied");
        Ok(position)
    }

    // === Queries ===

    /// Notation for every empty cell, in row-major order.
    #[must_use]
    pub fn open_positions(&self) -> Vec<String> {
        self.grid
            .open_positions()
            .filter_map(|p| self.notation.encode(p))
            .collect()
    }

    /// Current outcome for the first and second player.
    #[must_use]
    pub fn outcome(&self) -> (Outcome, Outcome) {
        let [first, second] = self.markers;
        evaluate_outcome(&self.grid, &self.lines, first, second)
    }
}
