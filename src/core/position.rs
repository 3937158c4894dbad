//! Board coordinates.
//!
//! ## Position
//!
//! Zero-based `(row, col)` with a top-left origin: rows grow downward,
//! columns grow rightward. Ordered by row first, then column.
//!
//! ## PositionSet
//!
//! Small insertion-ordered collection that silently ignores duplicates.
//! Used while a candidate win line is being assembled.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of positions stored inline before a set spills to the heap.
///
/// Covers every common target (tic-tac-toe through gomoku).
pub const INLINE_POSITIONS: usize = 8;

/// A cell coordinate on the board.
///
/// No bounds are checked on construction. Coordinates produced by win-line
/// generation are always in bounds; user input goes through the notation
/// codec, which validates it.
///
/// Field order matters: the derived `Ord` compares `row` then `col`, which
/// is the canonical order used to sort lines.
///
/// ```
/// use mnk_rules::core::Position;
///
/// let a = Position::new(0, 2);
/// let b = Position::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a, Position::new(0, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `i` cells from this position along `(dr, dc)`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant.
    #[must_use]
    pub fn step(self, dr: isize, dc: isize, i: usize) -> Option<Self> {
        let i = isize::try_from(i).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(i)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(i)?)?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Insertion-ordered set of positions.
///
/// Membership is a linear scan; sets never grow past the longer board
/// dimension, so this beats hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSet {
    positions: SmallVec<[Position; INLINE_POSITIONS]>,
}

impl PositionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `position` unless an equal one is already present.
    ///
    /// Returns `true` if the position was inserted.
    pub fn add(&mut self, position: Position) -> bool {
        if self.contains(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Check whether the set holds `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Number of positions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Sort the set into canonical position order.
    pub fn sort(&mut self) {
        self.positions.sort_unstable();
    }

    pub(crate) fn into_inner(self) -> SmallVec<[Position; INLINE_POSITIONS]> {
        self.positions
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.add(position);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_position_ordering() {
        let p = Position::new(1, 1);

        assert_eq!(p.cmp(&Position::new(1, 1)), Ordering::Equal);
        assert_eq!(p.cmp(&Position::new(0, 5)), Ordering::Greater);
        assert_eq!(p.cmp(&Position::new(2, 0)), Ordering::Less);
        assert_eq!(p.cmp(&Position::new(1, 0)), Ordering::Greater);
        assert_eq!(p.cmp(&Position::new(1, 2)), Ordering::Less);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(3, 7)), "(3,7)");
    }

    #[test]
    fn test_position_step() {
        let origin = Position::new(2, 2);

        assert_eq!(origin.step(0, 1, 2), Some(Position::new(2, 4)));
        assert_eq!(origin.step(1, -1, 2), Some(Position::new(4, 0)));
        assert_eq!(origin.step(-1, 1, 1), Some(Position::new(1, 3)));
        assert_eq!(origin.step(1, -1, 3), None);
    }

    #[test]
    fn test_position_set_skips_duplicates() {
        let mut set = PositionSet::new();

        assert!(set.add(Position::new(0, 0)));
        assert!(set.add(Position::new(0, 1)));
        assert!(!set.add(Position::new(0, 0)));

        assert_eq!(set.len(), 2);
        assert!(set.contains(Position::new(0, 1)));
        assert!(!set.contains(Position::new(1, 0)));
    }

    #[test]
    fn test_position_set_sort() {
        let mut set: PositionSet = [(2, 0), (1, 1), (0, 2)]
            .into_iter()
            .map(Position::from)
            .collect();
        set.sort();

        let sorted: Vec<_> = set.iter().collect();
        assert_eq!(
            sorted,
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_position_serialization() {
        let p = Position::new(4, 2);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":4,"col":2}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
