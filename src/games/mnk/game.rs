//! Named m-n-k game.

use crate::board::Board;
use crate::core::{BoardConfig, Marker, Player, PlayerId, PlayerKind, Position, TargetPolicy};
use crate::error::{ConfigError, MoveError};
use crate::rules::Outcome;

/// Two players sharing one board.
///
/// Turn order is not enforced here; the input loop decides whose move it
/// is. Each seat's marker is fixed when the game is built.
#[derive(Clone, Debug)]
pub struct MnkGame {
    name: String,
    players: [Player; 2],
    board: Board,
}

impl MnkGame {
    /// Tic-tac-toe. The first player always gets crosses and the second
    /// white stones.
    pub fn tic_tac_toe(mut first: Player, mut second: Player) -> Result<Self, ConfigError> {
        first.set_marker(Marker::Cross);
        second.set_marker(Marker::WhiteStone);
        MnkGameBuilder::from_config(BoardConfig::tic_tac_toe())
            .name("Tic-Tac-Toe")
            .players(first, second)
            .build()
    }

    /// Connect 4 geometry with column-number notation.
    pub fn connect4(first: Player, second: Player) -> Result<Self, ConfigError> {
        MnkGameBuilder::from_config(BoardConfig::connect4())
            .name("Connect 4")
            .players(first, second)
            .build()
    }

    /// Gomoku: 15x15, five in a row.
    pub fn gomoku(first: Player, second: Player) -> Result<Self, ConfigError> {
        MnkGameBuilder::from_config(BoardConfig::gomoku())
            .name("Gomoku")
            .players(first, second)
            .build()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat.index()]
    }

    /// Switch a seat between human and computer control.
    ///
    /// Markers stay as built; the board only scores those two.
    pub fn set_player_kind(&mut self, seat: PlayerId, kind: PlayerKind) {
        self.players[seat.index()].set_kind(kind);
    }

    /// Open cells in notation, row-major.
    #[must_use]
    pub fn open_positions(&self) -> Vec<String> {
        self.board.open_positions()
    }

    /// Moves available to the player to act.
    ///
    /// Markers are never moved once placed, so this is the open cells.
    #[must_use]
    pub fn potential_moves(&self) -> Vec<String> {
        self.board.open_positions()
    }

    /// Apply a move for the player in `seat`.
    pub fn apply_move(&mut self, seat: PlayerId, text: &str) -> Result<Position, MoveError> {
        self.board.apply_move(&self.players[seat.index()], text)
    }

    /// Outcome for the first and second player.
    #[must_use]
    pub fn outcome(&self) -> (Outcome, Outcome) {
        self.board.outcome()
    }

    /// Outcome for one seat.
    #[must_use]
    pub fn outcome_for(&self, seat: PlayerId) -> Outcome {
        let (first, second) = self.outcome();
        if seat == PlayerId::FIRST {
            first
        } else {
            second
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().0.is_final()
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::both().find(|&seat| self.outcome_for(seat) == Outcome::Win)
    }
}

/// Builder for creating an `MnkGame`.
pub struct MnkGameBuilder {
    name: String,
    config: BoardConfig,
    players: [Player; 2],
}

impl MnkGameBuilder {
    /// Start from a bare `rows` x `cols` board needing `target` in a row.
    #[must_use]
    pub fn new(rows: usize, cols: usize, target: usize) -> Self {
        Self::from_config(BoardConfig::new(rows, cols, target))
    }

    /// Start from an existing board configuration.
    #[must_use]
    pub fn from_config(config: BoardConfig) -> Self {
        let name = format!("{}x{}, {} in a row", config.rows, config.cols, config.target);
        Self {
            name,
            config,
            players: [Player::player1(), Player::player2()],
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn players(mut self, first: Player, second: Player) -> Self {
        self.players = [first, second];
        self
    }

    #[must_use]
    pub fn labels<R, C>(mut self, rows: R, cols: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.config = self.config.with_labels(rows, cols);
        self
    }

    #[must_use]
    pub fn target_policy(mut self, policy: TargetPolicy) -> Self {
        self.config = self.config.with_target_policy(policy);
        self
    }

    /// Build the game. Board markers come from the players.
    pub fn build(self) -> Result<MnkGame, ConfigError> {
        let [first, second] = &self.players;
        let config = self.config.with_markers(first.marker(), second.marker());
        let board = Board::from_config(&config)?;

        Ok(MnkGame {
            name: self.name,
            players: self.players,
            board,
        })
    }
}
