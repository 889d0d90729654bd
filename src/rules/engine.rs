//! Kalah rules: turn validation, end-of-game sweep, winner.
//!
//! Everything here is a pure state transition on a `GameState` the caller
//! owns. Misuse (wrong player, bad pit, finished game) is reported as a
//! `TurnOutcome`, never as a panic or an error.

use super::sowing::distribute;
use crate::core::{Board, GameState, LegalMoves, Seat, PIT_COUNT, PLAYER1_NAME, PLAYER2_NAME};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Higher store wins.
    Winner(Seat),
    /// Equal stores.
    Tie,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// What happened to a turn request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move made, turn passed to the opponent.
    Applied,
    /// Move made, last seed in the mover's store: same player again.
    ExtraTurnApplied,
    /// Named player is not the one to move. State untouched.
    WrongPlayer,
    /// Selection unparsable, out of range, or an empty pit. Carries the pits
    /// that would have been accepted. State untouched.
    IllegalMove(LegalMoves),
    /// The game had already ended before this request. State untouched.
    GameAlreadyOver,
    /// The end-of-game check fired on this request. The sweep has been
    /// applied and the state is now terminal.
    GameJustEnded(GameResult),
}

impl TurnOutcome {
    /// True if seeds were sown.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, TurnOutcome::Applied | TurnOutcome::ExtraTurnApplied)
    }
}

/// Fresh game with the default player names.
#[must_use]
pub fn new_game() -> GameState {
    new_game_with_names(PLAYER1_NAME, PLAYER2_NAME)
}

/// Fresh game with custom player names.
pub fn new_game_with_names(player1: impl Into<String>, player2: impl Into<String>) -> GameState {
    let state = GameState::new(player1, player2);
    tracing::info!(
        player1 = %state.player1.name,
        player2 = %state.player2.name,
        "new game"
    );
    state
}

/// 1-based pit numbers that can be played from `board`.
#[must_use]
pub fn legal_moves(board: &Board) -> LegalMoves {
    board.legal_moves()
}

/// Parse a pit selector typed by a player.
///
/// Accepts a signed 16-bit integer with optional surrounding whitespace.
/// Range and emptiness are checked separately against the legal moves.
#[must_use]
pub fn parse_pit_selection(input: &str) -> Option<i16> {
    input.trim().parse::<i16>().ok()
}

/// End-of-game check, run before every move attempt.
///
/// If Player 1 has no seeds in any pit, Player 2's pits are swept into
/// Player 2's store; otherwise if Player 2 has none, Player 1's pits are swept
/// into Player 1's store. Either way the game becomes unplayable.
///
/// Player 1 is checked first. Returns whether the game is still playable.
pub fn check_for_end_of_game(state: &mut GameState) -> bool {
    let empty_side = if state.player1.board.has_no_moves() {
        Some(Seat::Player1)
    } else if state.player2.board.has_no_moves() {
        Some(Seat::Player2)
    } else {
        None
    };

    let Some(empty) = empty_side else {
        return true;
    };

    let sweeper = empty.other();
    let swept = state.player_mut(sweeper).board.sweep_into_store();
    state.is_playable = false;

    tracing::info!(
        empty = %empty,
        sweeper = %sweeper,
        swept,
        player1_store = state.player1.board.store(),
        player2_store = state.player2.board.store(),
        "game over"
    );

    false
}

/// Compare stores. Only meaningful once the game is terminal.
#[must_use]
pub fn winner(state: &GameState) -> GameResult {
    let p1 = state.player1.board.store();
    let p2 = state.player2.board.store();

    match p1.cmp(&p2) {
        std::cmp::Ordering::Greater => GameResult::Winner(Seat::Player1),
        std::cmp::Ordering::Less => GameResult::Winner(Seat::Player2),
        std::cmp::Ordering::Equal => GameResult::Tie,
    }
}

/// Validate a move request and apply it.
///
/// Order of checks:
/// 1. finished game -> `GameAlreadyOver`
/// 2. end-of-game sweep -> `GameJustEnded`
/// 3. `player_name` must name the mover (case-insensitive) -> `WrongPlayer`
/// 4. `pit_selection` must be a legal 1-based pit -> `IllegalMove`
///
/// Only a fully valid request mutates the boards.
pub fn validate_and_apply_turn(
    state: &mut GameState,
    player_name: &str,
    pit_selection: &str,
) -> TurnOutcome {
    if !state.is_playable {
        return TurnOutcome::GameAlreadyOver;
    }

    if !check_for_end_of_game(state) {
        return TurnOutcome::GameJustEnded(winner(state));
    }

    let mover = state.current_player();
    if !mover.is_named(player_name) {
        tracing::debug!(expected = %mover.name, got = player_name, "wrong player");
        return TurnOutcome::WrongPlayer;
    }

    let legal = legal_moves(&mover.board);
    let pit = match parse_pit_selection(pit_selection) {
        Some(pit) if (1..=PIT_COUNT as i16).contains(&pit) && legal.contains(&(pit as u8)) => pit,
        _ => {
            tracing::debug!(selection = pit_selection, ?legal, "illegal move");
            return TurnOutcome::IllegalMove(legal);
        }
    };

    let result = distribute(state, pit as usize - 1);
    if result.extra_turn {
        TurnOutcome::ExtraTurnApplied
    } else {
        TurnOutcome::Applied
    }
}
