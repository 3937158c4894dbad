//! Cell markers.

use serde::{Deserialize, Serialize};

/// The token occupying a cell.
///
/// `Empty` is the only marker a fresh grid holds. Players each carry one of
/// the other variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Empty,
    /// U+1F5D9 CANCELLATION X.
    Cross,
    /// U+2B58 HEAVY CIRCLE.
    WhiteStone,
    /// U+2B24 BLACK LARGE CIRCLE.
    BlackStone,
}

impl Marker {
    /// Glyph used when the marker is drawn.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Marker::Empty => " ",
            Marker::Cross => "\u{1F5D9}",
            Marker::WhiteStone => "\u{2B58}",
            Marker::BlackStone => "\u{2B24}",
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marker::Empty)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
