//! Board state and cell storage.
//!
//! ## Key Types
//!
//! - `Grid`: fixed-size matrix of markers
//! - `Board`: grid plus its line table, notation and player markers

pub mod grid;
pub mod state;

pub use grid::Grid;
pub use state::Board;
