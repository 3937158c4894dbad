//! Human-facing move notation.
//!
//! ## Key Types
//!
//! - `Notation`: decodes typed moves and encodes positions for display
//! - `Labels`: optional custom row/column label tables

pub mod labels;
pub mod codec;

pub use codec::Notation;
pub use labels::Labels;
