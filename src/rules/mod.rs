//! Kalah rules engine.
//!
//! - `sowing`: the seed-distribution walk, captures, extra turns
//! - `engine`: turn validation, end-of-game sweep, winner
//!
//! The engine never does I/O. It takes a `GameState` by reference and
//! reports what happened as a `TurnOutcome`.

pub mod engine;
pub mod sowing;

pub use engine::{
    check_for_end_of_game, legal_moves, new_game, new_game_with_names, parse_pit_selection,
    validate_and_apply_turn, winner, GameResult, TurnOutcome,
};
pub use sowing::{distribute, sow, Side, Slot, SowResult};
