//! Win-line generation tests.
//!
//! These tests pin the line tables for small geometries and check the
//! structural guarantees every table must keep.

use mnk_rules::core::{Line, LineSet, Position};
use mnk_rules::rules::generate_win_lines;

fn line(cells: &[(usize, usize)]) -> Line {
    Line::from_positions(cells.iter().copied().map(Position::from))
}

/// Build the expected table the same way the generator finishes it.
fn table(target: usize, lines: &[&[(usize, usize)]]) -> LineSet {
    let mut set = LineSet::new(target);
    for cells in lines {
        set.add(line(cells));
    }
    set.sort();
    set
}

/// Test the known cardinalities for small boards.
#[test]
fn test_known_cardinalities() {
    let cases = [
        ((1, 1, 1), 1),
        ((2, 2, 1), 4),
        ((2, 2, 2), 6),
        ((3, 3, 3), 8),
        ((4, 3, 3), 14),
        ((6, 7, 4), 69),
        ((15, 15, 5), 572),
    ];

    for ((rows, cols, k), expected) in cases {
        assert_eq!(
            generate_win_lines(rows, cols, k).len(),
            expected,
            "{}x{} with k={}",
            rows,
            cols,
            k
        );
    }
}

/// Test the full tic-tac-toe table.
#[test]
fn test_three_by_three_table() {
    let expected = table(
        3,
        &[
            // rows
            &[(0, 0), (0, 1), (0, 2)],
            &[(1, 0), (1, 1), (1, 2)],
            &[(2, 0), (2, 1), (2, 2)],
            // cols
            &[(0, 0), (1, 0), (2, 0)],
            &[(0, 1), (1, 1), (2, 1)],
            &[(0, 2), (1, 2), (2, 2)],
            // diagonals
            &[(0, 0), (1, 1), (2, 2)],
            &[(0, 2), (1, 1), (2, 0)],
        ],
    );

    assert_eq!(generate_win_lines(3, 3, 3), expected);
}

/// Test an uneven board: 4 rows, 3 columns, three in a row.
#[test]
fn test_four_by_three_table() {
    let expected = table(
        3,
        &[
            // rows
            &[(0, 0), (0, 1), (0, 2)],
            &[(1, 0), (1, 1), (1, 2)],
            &[(2, 0), (2, 1), (2, 2)],
            &[(3, 0), (3, 1), (3, 2)],
            // cols
            &[(0, 0), (1, 0), (2, 0)],
            &[(1, 0), (2, 0), (3, 0)],
            &[(0, 1), (1, 1), (2, 1)],
            &[(1, 1), (2, 1), (3, 1)],
            &[(0, 2), (1, 2), (2, 2)],
            &[(1, 2), (2, 2), (3, 2)],
            // diagonals
            &[(0, 0), (1, 1), (2, 2)],
            &[(1, 0), (2, 1), (3, 2)],
            &[(2, 0), (1, 1), (0, 2)],
            &[(3, 0), (2, 1), (1, 2)],
        ],
    );

    assert_eq!(generate_win_lines(4, 3, 3), expected);
}

/// Test that a tall board and its wide transpose have the same line count.
#[test]
fn test_transpose_symmetry() {
    for (rows, cols, k) in [(4, 3, 3), (5, 2, 2), (7, 6, 4), (9, 4, 3)] {
        assert_eq!(
            generate_win_lines(rows, cols, k).len(),
            generate_win_lines(cols, rows, k).len()
        );
    }
}

/// Test that the table is in canonical order with canonical lines.
#[test]
fn test_table_is_canonical() {
    let lines = generate_win_lines(5, 6, 3);
    let all: Vec<&Line> = lines.iter().collect();

    for pair in all.windows(2) {
        assert!(pair[0] < pair[1], "table must be strictly increasing");
    }
    for l in &all {
        assert!(l.cells().windows(2).all(|w| w[0] < w[1]));
    }
}

/// Test that every cell of a tic-tac-toe board sits on the expected number of lines.
#[test]
fn test_lines_through_cells() {
    let lines = generate_win_lines(3, 3, 3);

    assert_eq!(lines.through(Position::new(1, 1)).count(), 4);
    assert_eq!(lines.through(Position::new(0, 0)).count(), 3);
    assert_eq!(lines.through(Position::new(0, 1)).count(), 2);
}

/// Test that an oversize target is clamped rather than producing nothing.
#[test]
fn test_oversize_target_is_clamped() {
    let lines = generate_win_lines(2, 3, 4);

    assert_eq!(lines.target(), 2);
    // 2 rows x 2 windows, 3 vertical, 2 down-right, 2 anti-diagonal
    assert_eq!(lines.len(), 11);
}
