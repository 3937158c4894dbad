//! Win-line generation.
//!
//! Every cell is tried, in row-major order, as the start of a run in four
//! directions: right, down, down-right and the anti-diagonal. A run is kept when
//! all `target` cells fit on the board. Runs are canonicalized (sorted),
//! deduplicated, and the finished table is sorted so the enumeration is
//! reproducible.

use tracing::debug;

use crate::core::{Line, LineSet, Position};

/// Orientation of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right. Walked upward from its lower end, which
    /// covers the same cells as the down-left run from its upper end.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Step between consecutive cells, as `(row delta, col delta)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    /// Check whether a run of `target` cells starting at `start` stays on a
    /// `rows` x `cols` board.
    #[must_use]
    pub fn fits(self, start: Position, rows: usize, cols: usize, target: usize) -> bool {
        if target == 0 {
            return false;
        }
        let fits_right = target <= cols && start.col <= cols - target;
        let fits_down = target <= rows && start.row <= rows - target;
        match self {
            Direction::Horizontal => fits_right,
            Direction::Vertical => fits_down,
            Direction::Diagonal => fits_down && fits_right,
            Direction::AntiDiagonal => start.row + 1 >= target && fits_right,
        }
    }
}

/// Build the line of `target` cells from `start` along `direction`.
///
/// Returns `None` if the run leaves the board.
#[must_use]
pub fn run_from(
    start: Position,
    direction: Direction,
    rows: usize,
    cols: usize,
    target: usize,
) -> Option<Line> {
    if !direction.fits(start, rows, cols, target) {
        return None;
    }
    let (dr, dc) = direction.delta();
    let cells: Option<Vec<Position>> = (0..target).map(|i| start.step(dr, dc, i)).collect();
    cells.map(Line::from_positions)
}

/// Generate every distinct win line for a board.
///
/// `target` is clamped to `min(target, rows, cols)` so a target larger
/// than a dimension still yields the lines that do fit. The table is empty
/// only for degenerate input (a zero dimension or a zero target).
///
/// ```
/// use mnk_rules::rules::generate_win_lines;
///
/// assert_eq!(generate_win_lines(3, 3, 3).len(), 8);
/// assert_eq!(generate_win_lines(6, 7, 4).len(), 69);
/// ```
#[must_use]
pub fn generate_win_lines(rows: usize, cols: usize, target: usize) -> LineSet {
    let target = target.min(rows).min(cols);
    let mut lines = LineSet::new(target);

    for row in 0..rows {
        for col in 0..cols {
            let start = Position::new(row, col);
            for direction in Direction::ALL {
                if let Some(line) = run_from(start, direction, rows, cols, target) {
                    lines.add(line);
                }
            }
        }
    }

    lines.sort();
    debug!(rows, cols, target, lines = lines.len(), "generated win lines");
    lines
}
