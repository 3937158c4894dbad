//! Win detection for m-n-k games.
//!
//! - `win_lines`: precomputes every run of `k` cells that fits a geometry
//! - `outcome`: checks a grid against that table for both players
//!
//! The table is built once per board and only read afterwards.

pub mod win_lines;
pub mod outcome;

pub use win_lines::{generate_win_lines, run_from, Direction};
pub use outcome::{check_line, evaluate_outcome, has_line, Outcome};
