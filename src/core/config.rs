//! Board configuration.
//!
//! A board is fixed at construction: dimensions, target run length,
//! optional notation labels and the two player markers. `BoardConfig`
//! collects these, validates them, and decides how an oversize target is
//! handled (see [`TargetPolicy`]).
//!
//! Named presets cover the common games:
//! - `tic_tac_toe`: 3x3, three in a row, rows T/C/B and columns L/C/R
//! - `connect4`: 6x7, four in a row, column labels only
//! - `gomoku`: 15x15, five in a row, numeric notation

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::marker::Marker;
use crate::error::ConfigError;

/// What to do when the target run length exceeds a board dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Use `min(target, rows, cols)` and log a warning.
    #[default]
    Clamp,
    /// Reject the configuration.
    Strict,
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use mnk_rules::core::{BoardConfig, TargetPolicy};
///
/// let config = BoardConfig::new(3, 4, 5);
/// assert_eq!(config.effective_target().unwrap(), 3);
///
/// let strict = BoardConfig::new(3, 4, 5).with_target_policy(TargetPolicy::Strict);
/// assert!(strict.effective_target().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (m).
    pub rows: usize,

    /// Number of columns (n).
    pub cols: usize,

    /// Requested run length needed to win (k).
    pub target: usize,

    /// Row labels for notation. Labels are only used when both lists are
    /// present and non-empty.
    #[serde(default)]
    pub row_labels: Option<Vec<String>>,

    /// Column labels for notation.
    #[serde(default)]
    pub col_labels: Option<Vec<String>>,

    /// Markers for the first and second player.
    #[serde(default = "default_markers")]
    pub markers: [Marker; 2],

    #[serde(default)]
    pub target_policy: TargetPolicy,
}

fn default_markers() -> [Marker; 2] {
    [Marker::Cross, Marker::WhiteStone]
}

impl BoardConfig {
    /// Create a configuration with numeric notation and default markers.
    #[must_use]
    pub fn new(rows: usize, cols: usize, target: usize) -> Self {
        Self {
            rows,
            cols,
            target,
            row_labels: None,
            col_labels: None,
            markers: default_markers(),
            target_policy: TargetPolicy::Clamp,
        }
    }

    /// Tic-tac-toe: 3x3, three in a row.
    ///
    /// Moves read as `TL` (top left) through `BR` (bottom right).
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3).with_labels(["T", "C", "B"], ["L", "C", "R"])
    }

    /// Connect 4 geometry: 6x7, four in a row.
    ///
    /// Every row label is empty, so a move is just its column number and
    /// lands on the bottom row. There is no gravity beyond that.
    #[must_use]
    pub fn connect4() -> Self {
        Self::new(6, 7, 4).with_labels([""; 6], ["1", "2", "3", "4", "5", "6", "7"])
    }

    /// Gomoku: 15x15, five in a row.
    #[must_use]
    pub fn gomoku() -> Self {
        Self::new(15, 15, 5)
    }

    /// Set notation labels.
    #[must_use]
    pub fn with_labels<R, C>(mut self, rows: R, cols: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.row_labels = Some(rows.into_iter().map(Into::into).collect());
        self.col_labels = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    /// Set the player markers.
    #[must_use]
    pub fn with_markers(mut self, first: Marker, second: Marker) -> Self {
        self.markers = [first, second];
        self
    }

    /// Set how an oversize target is handled.
    #[must_use]
    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    /// Check the configuration and return the run length actually used.
    pub fn effective_target(&self) -> Result<usize, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.target == 0 {
            return Err(ConfigError::ZeroTarget);
        }

        let [first, second] = self.markers;
        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if first == second {
            return Err(ConfigError::DuplicateMarkers(first));
        }

        let fits = self.rows.min(self.cols);
        if self.target <= fits {
            return Ok(self.target);
        }

        match self.target_policy {
            TargetPolicy::Strict => Err(ConfigError::TargetTooLarge {
                target: self.target,
                rows: self.rows,
                cols: self.cols,
            }),
            TargetPolicy::Clamp => {
                warn!(
                    requested = self.target,
                    effective = fits,
                    rows = self.rows,
                    cols = self.cols,
                    "target run length clamped to the shorter board dimension"
                );
                Ok(fits)
            }
        }
    }
}
