//! Win lines and line tables.
//!
//! A [`Line`] is one run of cells that wins the game when every cell holds
//! the same marker. A [`LineSet`] is the table of every such run for one
//! board geometry.
//!
//! Lines are kept internally sorted by [`Position`] order. Two scans that
//! find the same physical run from opposite ends therefore produce equal
//! lines, and the set can dedup by plain sequence equality.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::{Position, PositionSet, INLINE_POSITIONS};

/// A sorted run of distinct positions.
///
/// ```
/// use mnk_rules::core::{Line, Position};
///
/// let forward = Line::from_positions([Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]);
/// let reverse = Line::from_positions([Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]);
/// assert_eq!(forward, reverse);
/// assert_eq!(forward.first(), Some(Position::new(0, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct Line {
    cells: SmallVec<[Position; INLINE_POSITIONS]>,
}

impl Line {
    /// Build a line from arbitrary positions.
    ///
    /// Duplicates are dropped and the remainder is sorted.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        positions.into_iter().collect::<PositionSet>().into()
    }

    /// Number of cells in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the line has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells, in position order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Iterate the cells in position order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Lowest cell in position order.
    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Check whether the line passes through `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.binary_search(&position).is_ok()
    }
}

impl From<PositionSet> for Line {
    fn from(mut set: PositionSet) -> Self {
        set.sort();
        Self {
            cells: set.into_inner(),
        }
    }
}

impl From<Vec<Position>> for Line {
    fn from(positions: Vec<Position>) -> Self {
        Self::from_positions(positions)
    }
}

impl From<Line> for Vec<Position> {
    fn from(line: Line) -> Self {
        line.cells.into_vec()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Deduplicated table of win lines for one geometry.
///
/// Carries the target run length the lines were generated for, so a
/// line from a different geometry can be told apart at check time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    target: usize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Create an empty table for runs of `target` cells.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            lines: Vec::new(),
        }
    }

    /// Run length every line in this table is expected to have.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Insert `line` unless an equal line is already present.
    ///
    /// Equality is element-by-element over the sorted cells, so a
    /// permutation only matches once both sides are canonical. Every
    /// [`Line`] is canonical by construction.
    ///
    /// Returns `true` if the line was inserted.
    pub fn add(&mut self, line: Line) -> bool {
        if self.lines.contains(&line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Put the lines into canonical order (pairwise position comparison).
    pub fn sort(&mut self) {
        self.lines.sort_unstable();
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check whether an equal line is present.
    #[must_use]
    pub fn contains(&self, line: &Line) -> bool {
        self.lines.contains(line)
    }

    /// Iterate lines in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Lines passing through `position`.
    pub fn through(&self, position: Position) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().filter(move |line| line.contains(position))
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
