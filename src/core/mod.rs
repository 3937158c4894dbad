//! Core value types: positions, lines, markers, players, configuration.
//!
//! Everything here is plain data. Positions and lines are created once
//! while a line table is generated and never mutated afterwards.

pub mod position;
pub mod line;
pub mod marker;
pub mod player;
pub mod config;

pub use position::{Position, PositionSet};
pub use line::{Line, LineSet};
pub use marker::Marker;
pub use player::{Player, PlayerId, PlayerKind};
pub use config::{BoardConfig, TargetPolicy};
