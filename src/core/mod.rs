//! Core board model: boards, seats, players, game state.
//!
//! Plain values only. The rules that move seeds around live in `rules`.

pub mod board;
pub mod player;
pub mod state;

pub use board::{Board, LegalMoves, PIT_COUNT, SEEDS_PER_PIT, SLOT_COUNT, STORE, TOTAL_SEEDS};
pub use player::{Player, Seat, PLAYER1_NAME, PLAYER2_NAME};
pub use state::{GameState, Phase};
