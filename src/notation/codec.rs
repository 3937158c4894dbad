//! Move notation codec.
//!
//! Translates between the strings players type and grid positions.
//! Without labels, notation is 1-based `row,col` (`"2,1"` is row 1,
//! column 0). With labels, it is the row label followed by the column
//! label.

use tracing::debug;

use super::labels::Labels;
use crate::core::Position;

/// Notation scheme for one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notation {
    rows: usize,
    cols: usize,
    labels: Option<Labels>,
}

impl Notation {
    /// Numeric notation for a `rows` x `cols` board.
    #[must_use]
    pub fn numeric(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            labels: None,
        }
    }

    /// Install labels, padding or truncating them to the board.
    ///
    /// Does nothing if either list is empty. Returns whether labels are now
    /// installed from this call.
    pub fn set_labels(&mut self, row_labels: Vec<String>, col_labels: Vec<String>) -> bool {
        match Labels::new(row_labels, col_labels, self.rows, self.cols) {
            Some(labels) => {
                debug!(row_width = labels.row_width(), "notation labels installed");
                self.labels = Some(labels);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn labels(&self) -> Option<&Labels> {
        self.labels.as_ref()
    }

    #[must_use]
    pub fn is_labeled(&self) -> bool {
        self.labels.is_some()
    }

    /// Parse a move into a position.
    ///
    /// Returns `None` for anything malformed or off the board.
    ///
    /// ```
    /// use mnk_rules::core::Position;
    /// use mnk_rules::notation::Notation;
    ///
    /// let mut notation = Notation::numeric(3, 3);
    /// assert_eq!(notation.decode("2,1"), Some(Position::new(1, 0)));
    /// assert_eq!(notation.decode("2:1"), None);
    ///
    /// notation.set_labels(vec!["A".into(), "B".into()], vec!["1".into(), "2".into()]);
    /// assert_eq!(notation.decode("A1"), Some(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn decode(&self, text: &str) -> Option<Position> {
        match &self.labels {
            Some(labels) => decode_labeled(labels, text),
            None => self.decode_numeric(text),
        }
    }

    /// Render a position as notation.
    ///
    /// Returns `None` if the position is off the board.
    #[must_use]
    pub fn encode(&self, position: Position) -> Option<String> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        match &self.labels {
            Some(labels) => {
                let row = labels.row_label(position.row)?;
                let col = labels.col_label(position.col)?;
                Some(format!("{row}{col}"))
            }
            None => Some(format!("{},{}", position.row + 1, position.col + 1)),
        }
    }

    fn decode_numeric(&self, text: &str) -> Option<Position> {
        let mut fields = text.split(',');
        let row = parse_one_based(fields.next()?, self.rows)?;
        let col = parse_one_based(fields.next()?, self.cols)?;
        if fields.next().is_some() {
            return None;
        }
        Some(Position::new(row, col))
    }
}

fn decode_labeled(labels: &Labels, text: &str) -> Option<Position> {
    // Byte offset just past the first `row_width` characters.
    let split = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(labels.row_width())?;
    let (row, col) = text.split_at(split);
    Some(Position::new(labels.row_of(row)?, labels.col_of(col)?))
}

/// Parse a 1-based index in `1..=max` and return it 0-based.
fn parse_one_based(field: &str, max: usize) -> Option<usize> {
    let n: usize = field.parse().ok()?;
    (1..=max).contains(&n).then(|| n - 1)
}
