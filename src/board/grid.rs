//! Cell storage.

use serde::{Deserialize, Serialize};

use crate::core::{Marker, Position};
use crate::error::ConfigError;

/// Row-major `rows` x `cols` matrix of markers.
///
/// Fixed size for its whole life. Reads outside the grid return `None`
/// rather than panicking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
}

/// Unchecked wire shape of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = raw
            .rows
            .checked_mul(raw.cols)
            .filter(|&n| n == raw.cells.len());
        match expected {
            Some(_) => Ok(Self {
                rows: raw.rows,
                cols: raw.cols,
                cells: raw.cells,
            }),
            None => Err(ConfigError::GridSize {
                rows: raw.rows,
                cols: raw.cols,
                expected: raw.rows.saturating_mul(raw.cols),
                cells: raw.cells.len(),
            }),
        }
    }
}

impl Grid {
    /// Create a grid with every cell empty.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Marker::Empty; rows * cols],
        }
    }

    /// Build a grid from rows of markers.
    ///
    /// Returns `None` if the rows are ragged.
    ///
    /// ```
    /// use mnk_rules::board::Grid;
    /// use mnk_rules::core::{Marker, Position};
    ///
    /// let x = Marker::Cross;
    /// let e = Marker::Empty;
    /// let grid = Grid::from_rows(vec![vec![x, e], vec![e, x]]).unwrap();
    /// assert_eq!(grid.get(Position::new(1, 1)), Some(x));
    /// ```
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Marker>>) -> Option<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether `position` lies on the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    /// Marker at `position`, or `None` if off the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Marker> {
        self.index(position)
            .and_then(|i| self.cells.get(i).copied())
    }

    /// Overwrite the cell at `position`.
    ///
    /// Returns the previous marker, or `None` (and does nothing) if the
    /// position is off the grid.
    pub fn set(&mut self, position: Position, marker: Marker) -> Option<Marker> {
        let i = self.index(position)?;
        self.cells
            .get_mut(i)
            .map(|cell| std::mem::replace(cell, marker))
    }

    /// Check whether the cell at `position` is on the grid and empty.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.get(position) == Some(Marker::Empty)
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Iterate `(position, marker)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Marker)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| (Position::new(i / cols, i % cols), m))
    }

    /// Empty positions in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().filter(|(_, m)| m.is_empty()).map(|(p, _)| p)
    }
}
