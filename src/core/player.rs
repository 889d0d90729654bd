//! Seats and players.
//!
//! ## Seat
//!
//! Kalah is strictly two-player, so seats are a closed enum rather than an
//! index. `Seat::other` gives the opponent.
//!
//! ## Player
//!
//! A display name plus the board that player owns. Names are compared
//! case-insensitively when validating who is moving.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Default name for the first seat.
pub const PLAYER1_NAME: &str = "Player1";

/// Default name for the second seat.
pub const PLAYER2_NAME: &str = "Player2";

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player1 => write!(f, "Player 1"),
            Seat::Player2 => write!(f, "Player 2"),
        }
    }
}

/// A named player and their row of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Board")]
    pub board: Board,
}

impl Player {
    /// Create a player with a freshly seeded board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
        }
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
