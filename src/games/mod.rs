//! Game presets built on the core engine.

pub mod mnk;

pub use mnk::{MnkGame, MnkGameBuilder};
