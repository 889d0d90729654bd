//! Game state: both players plus the turn and lifecycle flags.
//!
//! ## Serialized shape
//!
//! `GameState` is what the session persists between invocations:
//!
//! ```json
//! {"hasBeenSetup":true,"isPlayable":true,"isPlayer1Turn":true,
//!  "player1":{"name":"Player1","board":[4,4,4,4,4,4,0]},
//!  "player2":{"name":"Player2","board":[4,4,4,4,4,4,0]}}
//! ```
//!
//! Older save files used PascalCase keys (`HasGameBeenSetup`,
//! `GameIsPlayable`, ...). Those are still accepted on load.
//!
//! ## Lifecycle
//!
//! `NotSetup -> Playable -> Terminal`. Only the end-of-game sweep moves a
//! state out of `Playable`.

use serde::{Deserialize, Serialize};

use super::board::TOTAL_SEEDS;
use super::player::{Player, Seat, PLAYER1_NAME, PLAYER2_NAME};

/// Lifecycle stage derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Never set up (e.g. a default-constructed or blank save).
    NotSetup,
    /// Moves are accepted.
    Playable,
    /// The end-of-game sweep has run. Only the winner query is meaningful.
    Terminal,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    #[serde(rename = "hasBeenSetup", alias = "HasGameBeenSetup")]
    pub has_been_setup: bool,

    #[serde(rename = "isPlayable", alias = "GameIsPlayable")]
    pub is_playable: bool,

    #[serde(rename = "isPlayer1Turn", alias = "IsPlayer1Turn")]
    pub is_player1_turn: bool,

    #[serde(alias = "Player1")]
    pub player1: Player,

    #[serde(alias = "Player2")]
    pub player2: Player,
}

impl GameState {
    /// Seeded opening position with the given names. Player 1 moves first.
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            has_been_setup: true,
            is_playable: true,
            is_player1_turn: true,
            player1: Player::new(player1_name),
            player2: Player::new(player2_name),
        }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.has_been_setup, self.is_playable) {
            (false, _) => Phase::NotSetup,
            (true, true) => Phase::Playable,
            (true, false) => Phase::Terminal,
        }
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        if self.is_player1_turn {
            Seat::Player1
        } else {
            Seat::Player2
        }
    }

    /// Hand the turn to the other seat.
    pub fn flip_turn(&mut self) {
        self.is_player1_turn = !self.is_player1_turn;
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Player1 => &mut self.player1,
            Seat::Player2 => &mut self.player2,
        }
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_seat())
    }

    /// The player waiting.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        self.player(self.current_seat().other())
    }

    /// Split borrow: `(seat's player, opponent)`.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut Player, &mut Player) {
        match seat {
            Seat::Player1 => (&mut self.player1, &mut self.player2),
            Seat::Player2 => (&mut self.player2, &mut self.player1),
        }
    }

    /// Seeds across all 14 slots.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.player1
            .board
            .total()
            .saturating_add(self.player2.board.total())
    }

    /// True when the seed count matches a real game.
    ///
    /// Used to reject hand-edited or truncated save files.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_seeds() == TOTAL_SEEDS
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PLAYER1_NAME, PLAYER2_NAME)
    }
}
