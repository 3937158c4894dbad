//! Outcome evaluation tests.
//!
//! Fixed positions on several geometries, checked through both the free
//! evaluator and a live `Board`.

use mnk_rules::board::{Board, Grid};
use mnk_rules::core::Marker;
use mnk_rules::rules::{evaluate_outcome, generate_win_lines, Outcome};

const E: Marker = Marker::Empty;
const X: Marker = Marker::Cross;
const O: Marker = Marker::WhiteStone;

fn evaluate(target: usize, rows: Vec<Vec<Marker>>) -> (Outcome, Outcome) {
    let grid = Grid::from_rows(rows).unwrap();
    let lines = generate_win_lines(grid.rows(), grid.cols(), target);
    evaluate_outcome(&grid, &lines, X, O)
}

/// Test an empty grid is incomplete on every geometry.
#[test]
fn test_empty_grid_is_incomplete() {
    for (rows, cols, k) in [(1, 1, 1), (2, 2, 2), (3, 3, 3), (4, 3, 3), (6, 7, 4)] {
        let board = Board::new(rows, cols, k).unwrap();
        assert_eq!(
            board.outcome(),
            (Outcome::Incomplete, Outcome::Incomplete),
            "{rows}x{cols} k={k}"
        );
    }
}

/// Test each of the four directions wins.
#[test]
fn test_wins_in_each_direction() {
    // horizontal
    assert_eq!(
        evaluate(3, vec![vec![E, E, E, E], vec![E, X, X, X], vec![O, O, E, E]]),
        (Outcome::Win, Outcome::Loss)
    );
    // vertical
    assert_eq!(
        evaluate(3, vec![vec![O, X, E], vec![O, X, E], vec![O, E, X]]),
        (Outcome::Loss, Outcome::Win)
    );
    // down-right
    assert_eq!(
        evaluate(3, vec![vec![E, X, O, E], vec![E, E, X, O], vec![E, E, O, X]]),
        (Outcome::Win, Outcome::Loss)
    );
    // anti-diagonal
    assert_eq!(
        evaluate(3, vec![vec![X, E, O], vec![X, O, E], vec![O, E, X]]),
        (Outcome::Loss, Outcome::Win)
    );
}

/// Test a run shorter than the target does not win.
#[test]
fn test_short_run_does_not_win() {
    assert_eq!(
        evaluate(4, vec![vec![X, X, X, E], vec![O, O, O, E], vec![E; 4], vec![E; 4]]),
        (Outcome::Incomplete, Outcome::Incomplete)
    );
}

/// Test a full grid with no line is a draw.
#[test]
fn test_full_grid_without_line_is_draw() {
    assert_eq!(
        evaluate(3, vec![vec![O, X, O], vec![O, X, X], vec![X, O, O]]),
        (Outcome::Draw, Outcome::Draw)
    );
    assert_eq!(
        evaluate(
            4,
            vec![
                vec![X, X, O, O],
                vec![O, O, X, X],
                vec![X, X, O, O],
                vec![O, O, X, X],
            ]
        ),
        (Outcome::Draw, Outcome::Draw)
    );
}

/// Test a win on the last open cell beats the draw.
#[test]
fn test_win_on_full_grid() {
    assert_eq!(
        evaluate(3, vec![vec![X, O, X], vec![O, X, O], vec![O, X, X]]),
        (Outcome::Win, Outcome::Loss)
    );
}

/// Test a played-out game on a live board.
#[test]
fn test_board_game_to_draw() {
    let mut board = Board::new(3, 3, 3).unwrap();

    // X O X
    // X O O
    // O X X
    let moves = [
        (X, "1,1"),
        (O, "1,2"),
        (X, "1,3"),
        (O, "2,2"),
        (X, "3,2"),
        (O, "2,3"),
        (X, "2,1"),
        (O, "3,1"),
        (X, "3,3"),
    ];

    for (i, (marker, mv)) in moves.iter().enumerate() {
        assert_eq!(
            board.outcome(),
            (Outcome::Incomplete, Outcome::Incomplete),
            "before move {i}"
        );
        board.place(*marker, mv).unwrap();
    }

    assert_eq!(board.outcome(), (Outcome::Draw, Outcome::Draw));
}
