//! Players and seats.
//!
//! ## PlayerId
//!
//! The seat a player occupies: first or second to move. Outcomes are
//! reported per seat.
//!
//! ## Player
//!
//! Bookkeeping about who sits in a seat: display name, whether moves come
//! from a human or the computer, and which marker they place. The win
//! detection never sees a `Player`, only its marker.

use serde::{Deserialize, Serialize};

use super::marker::Marker;
use crate::error::ConfigError;

/// Seat identifier for a two-player game.
///
/// Seat indices are 0-based: the first player is `PlayerId::FIRST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats, in turn order.
    ///
    /// ```
    /// use mnk_rules::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(seats, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PlayerId::FIRST),
            1 => Ok(PlayerId::SECOND),
            _ => Err(ConfigError::InvalidSeat(index)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(seat: PlayerId) -> u8 {
        seat.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Where a player's moves come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are read from a person.
    #[default]
    Human,
    /// The computer picks uniformly among open positions.
    ComputerRandom,
    /// The computer searches for a move.
    ComputerAi,
}

impl PlayerKind {
    #[must_use]
    pub const fn is_computer(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }
}

/// A participant in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: String,
    display_name: String,
    kind: PlayerKind,
    marker: Marker,
}

impl Player {
    /// Create a human player.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, marker: Marker) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind: PlayerKind::Human,
            marker,
        }
    }

    /// Default first player: human, crosses.
    #[must_use]
    pub fn player1() -> Self {
        Self::new("1", "Player 1", Marker::Cross)
    }

    /// Default second player: human, white stones.
    #[must_use]
    pub fn player2() -> Self {
        Self::new("2", "Player 2", Marker::WhiteStone)
    }

    /// Random computer player with white stones.
    #[must_use]
    pub fn computer1() -> Self {
        Self::new("1001", "Computer Player Player 1", Marker::WhiteStone)
            .with_kind(PlayerKind::ComputerRandom)
    }

    /// Random computer player with black stones.
    #[must_use]
    pub fn computer2() -> Self {
        Self::new("1002", "Computer Player Player 2", Marker::BlackStone)
            .with_kind(PlayerKind::ComputerRandom)
    }

    /// Set the move source.
    #[must_use]
    pub fn with_kind(mut self, kind: PlayerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
    }

    /// Mark this player as human.
    pub fn set_human(&mut self) {
        self.kind = PlayerKind::Human;
    }

    /// Mark this player as a random computer player.
    pub fn set_computer(&mut self) {
        self.kind = PlayerKind::ComputerRandom;
    }

    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 2");
    }

    #[test]
    fn test_player_id_serde_checks_seat() {
        let seat: PlayerId = serde_json::from_str("1").unwrap();
        assert_eq!(seat, PlayerId::SECOND);
        assert_eq!(seat.other(), PlayerId::FIRST);
        assert_eq!(serde_json::to_string(&PlayerId::FIRST).unwrap(), "0");

        assert!(serde_json::from_str::<PlayerId>("7").is_err());
        assert_eq!(PlayerId::try_from(2u8), Err(ConfigError::InvalidSeat(2)));
    }

    #[test]
    fn test_predefined_players() {
        let p1 = Player::player1();
        let p2 = Player::player2();

        assert_eq!(p1.marker(), Marker::Cross);
        assert_eq!(p2.marker(), Marker::WhiteStone);
        assert_eq!(p1.kind(), PlayerKind::Human);
        assert_eq!(format!("{}", p2), "Player 2");

        let c2 = Player::computer2();
        assert_eq!(c2.id(), "1002");
        assert_eq!(c2.marker(), Marker::BlackStone);
        assert!(c2.kind().is_computer());
    }

    #[test]
    fn test_switch_kind() {
        let mut p = Player::player1();
        p.set_computer();
        assert_eq!(p.kind(), PlayerKind::ComputerRandom);
        p.set_human();
        assert_eq!(p.kind(), PlayerKind::Human);
    }

    #[test]
    fn test_player_serialization() {
        let p = Player::computer1();
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
