//! # mancala
//!
//! Two-player Mancala (Kalah rules) as a turn-based console game whose state
//! persists between invocations.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: the rules take a `GameState` by reference and report a
//!    `TurnOutcome`. No I/O, no globals.
//!
//! 2. **Seeds are conserved**: every transition keeps all 48 seeds on the
//!    table. Save files that break this are rejected.
//!
//! 3. **Misuse is an outcome, not an error**: wrong player, bad pit and
//!    finished games are reported to the caller with no state change.
//!
//! ## Modules
//!
//! - `core`: boards, seats, players, game state
//! - `rules`: sowing, captures, extra turns, end-of-game sweep, winner
//! - `session`: console round trip, configuration, save files
//! - `error`: store and configuration errors

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, GameState, LegalMoves, Phase, Player, Seat,
    PIT_COUNT, SEEDS_PER_PIT, STORE, TOTAL_SEEDS,
};

pub use crate::rules::{
    check_for_end_of_game, distribute, legal_moves, new_game, new_game_with_names,
    validate_and_apply_turn, winner, GameResult, SowResult, TurnOutcome,
};

pub use crate::session::{FileStore, MemoryStore, SaveFormat, Session, SessionConfig, StateStore};

pub use crate::error::{ConfigError, StoreError};
