//! Playable m-n-k games.
//!
//! Wraps a board with two players and a name:
//! - Tic-Tac-Toe: 3x3, three in a row, labeled `TL`..`BR`
//! - Connect 4: 6x7, four in a row, moves are column numbers
//! - Gomoku: 15x15, five in a row
//!
//! Any other geometry goes through `MnkGameBuilder`.

mod game;

pub use game::{MnkGame, MnkGameBuilder};
