//! Custom row and column labels.
//!
//! Labeled notation is the row label immediately followed by the column
//! label: `TL` for top-left in tic-tac-toe. Row labels are read as a
//! fixed-width prefix, so the width is the longest row label in
//! characters. Shorter row labels are not padded; give every row a label
//! of the same width.

use rustc_hash::FxHashMap;

/// Row and column label tables with reverse lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    rows: Vec<String>,
    cols: Vec<String>,

    /// label -> index. A repeated label maps to its last index.
    row_index: FxHashMap<String, usize>,
    col_index: FxHashMap<String, usize>,

    /// Width in characters of the longest row label.
    row_width: usize,
}

impl Labels {
    /// Build label tables for a `rows` x `cols` board.
    ///
    /// Short lists are padded with empty labels and long lists are
    /// truncated. Returns `None` if either list is empty.
    ///
    /// ```
    /// use mnk_rules::notation::Labels;
    ///
    /// let labels = Labels::new(vec!["a".into()], vec!["1".into(), "2".into()], 3, 1).unwrap();
    /// assert_eq!(labels.rows(), &["a", "", ""]);
    /// assert_eq!(labels.cols(), &["1"]);
    /// ```
    #[must_use]
    pub fn new(
        mut row_labels: Vec<String>,
        mut col_labels: Vec<String>,
        rows: usize,
        cols: usize,
    ) -> Option<Self> {
        if row_labels.is_empty() || col_labels.is_empty() {
            return None;
        }
        row_labels.resize(rows, String::new());
        col_labels.resize(cols, String::new());

        let row_width = row_labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let row_index = reverse_index(&row_labels);
        let col_index = reverse_index(&col_labels);

        Some(Self {
            rows: row_labels,
            cols: col_labels,
            row_index,
            col_index,
            row_width,
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    /// Width in characters of the row-label prefix.
    #[must_use]
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Look up a row index by label.
    #[must_use]
    pub fn row_of(&self, label: &str) -> Option<usize> {
        self.row_index.get(label).copied()
    }

    /// Look up a column index by label.
    #[must_use]
    pub fn col_of(&self, label: &str) -> Option<usize> {
        self.col_index.get(label).copied()
    }

    /// Label for a row index.
    #[must_use]
    pub fn row_label(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// Label for a column index.
    #[must_use]
    pub fn col_label(&self, col: usize) -> Option<&str> {
        self.cols.get(col).map(String::as_str)
    }
}

fn reverse_index(labels: &[String]) -> FxHashMap<String, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_lists_are_ignored() {
        assert!(Labels::new(Vec::new(), Vec::new(), 2, 2).is_none());
        assert!(Labels::new(strings(&["a"]), Vec::new(), 2, 2).is_none());
    }

    #[test]
    fn test_padding() {
        let labels = Labels::new(strings(&["a", "b"]), strings(&["1"]), 3, 3).unwrap();
        assert_eq!(labels.rows(), strings(&["a", "b", ""]).as_slice());
        assert_eq!(labels.cols(), strings(&["1", "", ""]).as_slice());
    }

    #[test]
    fn test_truncation() {
        let labels = Labels::new(
            strings(&["a", "b", "c", "d", "e", "f"]),
            strings(&["0", "1", "2", "3", "4", "5"]),
            3,
            5,
        )
        .unwrap();
        assert_eq!(labels.rows(), strings(&["a", "b", "c"]).as_slice());
        assert_eq!(labels.cols(), strings(&["0", "1", "2", "3", "4"]).as_slice());
        assert_eq!(labels.col_of("5"), None);
    }

    #[test]
    fn test_row_width_counts_characters() {
        let labels = Labels::new(strings(&["é1", "é2"]), strings(&["x"]), 2, 1).unwrap();
        assert_eq!(labels.row_width(), 2);
    }

    #[test]
    fn test_repeated_label_maps_to_last_index() {
        let labels = Labels::new(strings(&["", "", ""]), strings(&["1", "2"]), 3, 2).unwrap();
        assert_eq!(labels.row_width(), 0);
        assert_eq!(labels.row_of(""), Some(2));
        assert_eq!(labels.col_of("2"), Some(1));
    }
}
