//! One player's row of the Kalah board.
//!
//! ## Layout
//!
//! A `Board` holds seven slots:
//! - `0..6`: pits, sown left to right
//! - `6`: the store, which only ever grows
//!
//! Pits are addressed 0-based internally. Player-facing pit numbers are
//! 1-based (`1..=6`), which is what `legal_moves` reports.
//!
//! ## Example
//!
//! ```
//! use mancala::core::{Board, SEEDS_PER_PIT};
//!
//! let board = Board::new();
//! assert_eq!(board.pit(0), SEEDS_PER_PIT);
//! assert_eq!(board.store(), 0);
//! assert_eq!(board.legal_moves().as_slice(), &[1, 2, 3, 4, 5, 6]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Number of pits per player.
pub const PIT_COUNT: usize = 6;

/// Index of the store slot.
pub const STORE: usize = 6;

/// Slots per board (pits + store).
pub const SLOT_COUNT: usize = PIT_COUNT + 1;

/// Seeds placed in every pit at the start of a game.
pub const SEEDS_PER_PIT: u32 = 4;

/// Seeds on the table for the whole game (both players).
pub const TOTAL_SEEDS: u32 = 2 * PIT_COUNT as u32 * SEEDS_PER_PIT;

/// 1-based pit numbers that currently hold seeds.
///
/// Never longer than six, so it stays inline.
pub type LegalMoves = SmallVec<[u8; PIT_COUNT]>;

/// A player's seven slots: six pits followed by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([u32; SLOT_COUNT]);

impl Board {
    /// Opening position: every pit seeded, empty store.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [SEEDS_PER_PIT; SLOT_COUNT];
        cells[STORE] = 0;
        Self(cells)
    }

    /// Build a board from raw slot values (pits then store).
    #[must_use]
    pub const fn from_cells(cells: [u32; SLOT_COUNT]) -> Self {
        Self(cells)
    }

    /// Raw slot values.
    #[must_use]
    pub const fn cells(&self) -> &[u32; SLOT_COUNT] {
        &self.0
    }

    /// Seeds in a pit (0-based index).
    #[must_use]
    pub fn pit(&self, index: usize) -> u32 {
        debug_assert!(index < PIT_COUNT, "pit index out of range: {index}");
        self.0[index]
    }

    /// Seeds in the store.
    #[must_use]
    pub const fn store(&self) -> u32 {
        self.0[STORE]
    }

    /// The six pit values.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.0[..PIT_COUNT]
    }

    /// Seeds still in play on this side (store excluded).
    #[must_use]
    pub fn seeds_in_pits(&self) -> u32 {
        saturating_sum(self.pits())
    }

    /// Seeds on this side, store included.
    ///
    /// Saturates at `u32::MAX`, so cells loaded from a bad save can never
    /// wrap around to a plausible count.
    #[must_use]
    pub fn total(&self) -> u32 {
        saturating_sum(&self.0)
    }

    /// 1-based numbers of the pits that can be played.
    ///
    /// Empty when every pit is empty, which is what ends the game.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        self.pits()
            .iter()
            .enumerate()
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(i, _)| (i + 1) as u8)
            .collect()
    }

    /// True when no pit holds a seed.
    #[must_use]
    pub fn has_no_moves(&self) -> bool {
        self.pits().iter().all(|&seeds| seeds == 0)
    }

    /// Empty the pit and return what it held.
    pub fn take_pit(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.0[index])
    }

    /// Move every pit's seeds into the store. Returns the amount moved.
    pub fn sweep_into_store(&mut self) -> u32 {
        let swept: u32 = (0..PIT_COUNT).map(|i| self.take_pit(i)).sum();
        self.0[STORE] += swept;
        swept
    }
}

fn saturating_sum(cells: &[u32]) -> u32 {
    cells.iter().fold(0, |acc, &seeds| acc.saturating_add(seeds))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.0[slot]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, slot: usize) -> &mut Self::Output {
        &mut self.0[slot]
    }
}
