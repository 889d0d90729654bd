//! Sowing: distributing a pit's seeds around the board.
//!
//! ## Path
//!
//! Seeds travel counter-clockwise from the mover's point of view:
//!
//! ```text
//! mover pits (after the chosen one) -> mover store
//!   -> opponent pits 0..=5 -> (opponent store skipped)
//!   -> mover pits 0..=5 -> mover store -> ...
//! ```
//!
//! The walk is a `Slot` cursor advanced by `Slot::next`. Each step deposits
//! one seed, except a capture, which sends the last seed and the mirrored
//! opponent pit straight to the mover's store.
//!
//! ## Endings
//!
//! - Last seed in the mover's store: extra turn, the turn does not pass.
//! - Last seed anywhere else: the turn passes.

use crate::core::{Board, GameState, PIT_COUNT, STORE};

/// Which row a slot belongs to, relative to the player sowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Mover,
    Opponent,
}

/// Position on the sowing path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub side: Side,
    /// 0..=5 for pits, `STORE` for the mover's store.
    pub index: usize,
}

impl Slot {
    #[must_use]
    pub const fn mover(index: usize) -> Self {
        Self { side: Side::Mover, index }
    }

    #[must_use]
    pub const fn opponent(index: usize) -> Self {
        Self { side: Side::Opponent, index }
    }

    /// True for the mover's store.
    #[must_use]
    pub fn is_mover_store(self) -> bool {
        self.side == Side::Mover && self.index == STORE
    }

    /// The next slot that can receive a seed.
    ///
    /// Never returns the opponent's store.
    #[must_use]
    pub fn next(self) -> Self {
        match (self.side, self.index) {
            (Side::Mover, STORE) => Slot::opponent(0),
            (Side::Opponent, i) if i + 1 == PIT_COUNT => Slot::mover(0),
            (side, i) => Slot { side, index: i + 1 },
        }
    }
}

/// What a single sowing did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SowResult {
    /// Where the last seed went.
    pub last: Slot,
    /// Last seed landed in the mover's store.
    pub extra_turn: bool,
    /// Seeds taken from the opponent by a capture (the capturing seed itself
    /// is not counted).
    pub captured: u32,
}

/// Sow `pit_index` (0-based) from `mover` onto both boards.
///
/// Does not touch turn order. Seeds are conserved: every seed leaving the
/// chosen pit ends up in exactly one slot of `mover` or `opponent`.
pub fn sow(mover: &mut Board, opponent: &mut Board, pit_index: usize) -> SowResult {
    debug_assert!(pit_index < PIT_COUNT, "pit index out of range: {pit_index}");

    let mut hand = mover.take_pit(pit_index);
    let mut slot = Slot::mover(pit_index);
    let mut captured = 0;

    while hand > 0 {
        slot = slot.next();
        match slot.side {
            Side::Mover if slot.index == STORE => {
                mover[STORE] += 1;
                hand -= 1;
            }
            Side::Mover => {
                let mirror = PIT_COUNT - 1 - slot.index;
                if mover[slot.index] == 0 && hand == 1 && opponent[mirror] > 0 {
                    captured = opponent.take_pit(mirror);
                    mover[STORE] += hand + captured;
                    hand = 0;
                } else {
                    mover[slot.index] += 1;
                    hand -= 1;
                }
            }
            Side::Opponent => {
                opponent[slot.index] += 1;
                hand -= 1;
            }
        }
    }

    SowResult {
        last: slot,
        extra_turn: slot.is_mover_store(),
        captured,
    }
}

/// Sow `pit_index` (0-based) for the player to move and pass the turn unless
/// the last seed reached that player's store.
pub fn distribute(state: &mut GameState, pit_index: usize) -> SowResult {
    let seat = state.current_seat();
    let (mover, opponent) = state.pair_mut(seat);
    let result = sow(&mut mover.board, &mut opponent.board, pit_index);

    if !result.extra_turn {
        state.flip_turn();
    }

    tracing::debug!(
        seat = %seat,
        pit = pit_index + 1,
        extra_turn = result.extra_turn,
        captured = result.captured,
        "sowed"
    );

    result
}
