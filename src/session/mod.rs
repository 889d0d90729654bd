//! Console session around the rules engine.
//!
//! Each call to `Session::handle` is one round trip: load the saved game (or
//! start a new one), apply the requested move, describe the result, save.
//! The engine itself never sees I/O.
//!
//! - `config`: TOML configuration (`SessionConfig`)
//! - `store`: persistence (`StateStore`, `FileStore`, `MemoryStore`)
//! - `render`: feedback text

pub mod config;
pub mod render;
pub mod store;

pub use config::SessionConfig;
pub use store::{FileStore, MemoryStore, SaveFormat, StateStore};

use crate::core::{GameState, Phase};
use crate::rules::{check_for_end_of_game, new_game_with_names, validate_and_apply_turn, winner, TurnOutcome};

/// Greeting shown when a new game is set up.
pub const WELCOME: &str = "Welcome to Mancala!";

/// Reply when someone moves out of turn.
pub const NOT_YOUR_TURN: &str = "It's not your turn!";

/// Split an input line into `(player name, pit selection)`.
///
/// Splits on the first space. Missing parts come back empty.
#[must_use]
pub fn parse_command(line: &str) -> (&str, &str) {
    let line = line.trim_end_matches(['\r', '\n']);
    line.split_once(' ').unwrap_or((line, ""))
}

/// One player-facing game session.
pub struct Session {
    config: SessionConfig,
    store: Box<dyn StateStore>,
}

impl Session {
    pub fn new(config: SessionConfig, store: Box<dyn StateStore>) -> Self {
        Self { config, store }
    }

    /// Session with the store the configuration asks for.
    pub fn from_config(config: SessionConfig) -> Self {
        let store = config.store();
        Self::new(config, store)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle a raw input line such as `"Player1 3"`.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let (username, input) = parse_command(line);
        self.handle(username, input)
    }

    /// Play one request and return the feedback lines.
    ///
    /// Blank `username` and `input` just show the board (and run the
    /// end-of-game check).
    pub fn handle(&mut self, username: &str, input: &str) -> Vec<String> {
        let mut feedback = Vec::new();

        let mut state = match self.load() {
            Some(state) => state,
            None => {
                feedback.push(WELCOME.to_string());
                new_game_with_names(&self.config.player1_name, &self.config.player2_name)
            }
        };

        if username.trim().is_empty() && input.trim().is_empty() {
            if !check_for_end_of_game(&mut state) {
                feedback.extend(render::result_lines(&state, winner(&state)));
            }
        } else {
            apply_request(&mut state, username, input, &mut feedback);
        }

        if state.is_playable {
            feedback.push(render::turn_prompt(&state));
            feedback.extend(render::board_lines(&state));
        }

        if let Err(e) = self.store.save(&state) {
            tracing::warn!(error = %e, "failed to save game");
        }

        feedback
    }

    /// Saved game if it is still in progress.
    fn load(&mut self) -> Option<GameState> {
        match self.store.load() {
            Ok(Some(state)) if state.phase() == Phase::Playable => Some(state),
            Ok(Some(state)) => {
                tracing::debug!(phase = ?state.phase(), "discarding saved game");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable save, starting a new game");
                None
            }
        }
    }
}

fn apply_request(state: &mut GameState, username: &str, input: &str, feedback: &mut Vec<String>) {
    match validate_and_apply_turn(state, username, input) {
        TurnOutcome::Applied => {}
        TurnOutcome::ExtraTurnApplied => {
            feedback.push(format!("{} gets another turn!", state.current_player().name));
        }
        TurnOutcome::WrongPlayer => feedback.push(NOT_YOUR_TURN.to_string()),
        TurnOutcome::IllegalMove(legal) => {
            feedback.push(format!("Invalid move. Choose from: {}", render::pit_list(&legal)));
        }
        TurnOutcome::GameJustEnded(result) => {
            feedback.extend(render::result_lines(state, result));
            return;
        }
        TurnOutcome::GameAlreadyOver => {
            feedback.extend(render::result_lines(state, winner(state)));
            return;
        }
    }

    // Announce a game that this move just finished instead of prompting
    // a player who has nothing left to sow.
    if !check_for_end_of_game(state) {
        feedback.extend(render::result_lines(state, winner(state)));
    }
}
