//! Session integration tests.
//!
//! Each `Session` built over the same save file stands in for a separate
//! invocation of the game, so these cover persistence between runs.

use std::path::Path;

use mancala::core::{Board, GameState};
use mancala::error::StoreError;
use mancala::rules::new_game;
use mancala::session::{
    FileStore, MemoryStore, SaveFormat, Session, SessionConfig, StateStore, NOT_YOUR_TURN, WELCOME,
};

fn file_config(path: &Path, format: SaveFormat) -> SessionConfig {
    SessionConfig {
        save_path: path.to_path_buf(),
        save_format: format,
        ..SessionConfig::default()
    }
}

/// A fresh session per request, like running the binary once per move.
fn invoke(config: &SessionConfig, line: &str) -> Vec<String> {
    Session::from_config(config.clone()).handle_line(line)
}

// =============================================================================
// Persistence between invocations
// =============================================================================

#[test]
fn test_game_continues_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("save.json"), SaveFormat::Json);

    let first = invoke(&config, "");
    assert_eq!(first[0], WELCOME);

    let second = invoke(&config, "Player1 1");
    assert_ne!(second[0], WELCOME);
    assert_eq!(second[0], "Player2 it is your turn.");

    let third = invoke(&config, "Player1 2");
    assert_eq!(third[0], NOT_YOUR_TURN);

    let saved = FileStore::new(&config.save_path, SaveFormat::Json)
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(saved.player1.board.cells(), &[0, 5, 5, 5, 5, 4, 0]);
    assert!(!saved.is_player1_turn);
}

#[test]
fn test_bincode_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("save.bin"), SaveFormat::Bincode);

    invoke(&config, "Player1 3");
    let feedback = invoke(&config, "Player1 1");
    assert_eq!(feedback[0], "Player2 it is your turn.");

    let saved = FileStore::new(&config.save_path, SaveFormat::Bincode)
        .load()
        .unwrap()
        .unwrap();
    assert_eq!(saved.player1.board.store(), 1);
}

#[test]
fn test_corrupt_save_starts_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{\"hasBeenSetup\": tru").unwrap();

    let feedback = invoke(&file_config(&path, SaveFormat::Json), "");
    assert_eq!(feedback[0], WELCOME);

    // The broken file has been replaced by the new game.
    let saved = FileStore::new(&path, SaveFormat::Json).load().unwrap().unwrap();
    assert_eq!(saved, new_game());
}

#[test]
fn test_tampered_seed_count_starts_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut state = new_game();
    state.player1.board = Board::from_cells([9, 9, 9, 9, 9, 9, 0]);
    std::fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

    let feedback = invoke(&file_config(&path, SaveFormat::Json), "");
    assert_eq!(feedback[0], WELCOME);
}

#[test]
fn test_overflowing_seed_count_starts_new_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let mut state = new_game();
    // Wraps to 48 under unchecked u32 addition.
    state.player1.board = Board::from_cells([u32::MAX, 49, 0, 0, 0, 0, 0]);
    state.player2.board = Board::from_cells([0; 7]);
    std::fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(matches!(
        SaveFormat::Json.decode(&bytes),
        Err(StoreError::Corrupt(_))
    ));

    let feedback = invoke(&file_config(&path, SaveFormat::Json), "");
    assert_eq!(feedback[0], WELCOME);
    assert_eq!(feedback[1], "Player1 it is your turn.");

    let saved = FileStore::new(&path, SaveFormat::Json).load().unwrap().unwrap();
    assert_eq!(saved, new_game());
}

#[test]
fn test_legacy_save_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(
        &path,
        r#"{"HasGameBeenSetup":true,"GameIsPlayable":true,"IsPlayer1Turn":false,
            "Player1":{"Name":"Player1","Board":[0,5,5,5,5,4,0]},
            "Player2":{"Name":"Player2","Board":[4,4,4,4,4,4,0]}}"#,
    )
    .unwrap();

    let feedback = invoke(&file_config(&path, SaveFormat::Json), "Player2 6");
    assert_ne!(feedback[0], WELCOME);
    assert_eq!(feedback[0], "Player1 it is your turn.");
}

// =============================================================================
// End of game
// =============================================================================

fn nearly_finished() -> GameState {
    // Player 1's last seed goes into the store; Player 1 is then out of
    // seeds and Player 2 sweeps 6 into a store of 20.
    let mut state = new_game();
    state.player1.board = Board::from_cells([0, 0, 0, 0, 0, 1, 21]);
    state.player2.board = Board::from_cells([1, 1, 1, 1, 1, 1, 20]);
    state
}

#[test]
fn test_winner_announced_and_next_run_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("save.json"), SaveFormat::Json);
    FileStore::new(&config.save_path, SaveFormat::Json)
        .save(&nearly_finished())
        .unwrap();

    let feedback = invoke(&config, "Player1 6");
    assert_eq!(
        feedback,
        vec![
            "Player1 gets another turn!",
            "Player2 wins!",
            "Player1 had 22 and Player2 had 26",
        ]
    );

    let saved = FileStore::new(&config.save_path, SaveFormat::Json)
        .load()
        .unwrap()
        .unwrap();
    assert!(!saved.is_playable);

    let next = invoke(&config, "");
    assert_eq!(next[0], WELCOME);
    assert_eq!(next[1], "Player1 it is your turn.");
}

#[test]
fn test_blank_request_ends_dead_game() {
    let mut state = new_game();
    state.player1.board = Board::from_cells([0, 0, 0, 0, 0, 0, 24]);
    state.player2.board = Board::from_cells([0, 0, 0, 0, 0, 4, 20]);

    let mut session = Session::new(SessionConfig::default(), Box::new(MemoryStore::with_state(state)));
    let feedback = session.handle("", "");

    assert_eq!(feedback, vec!["It's a tie!", "Player1 had 24 and Player2 had 24"]);
}

// =============================================================================
// Interactive-only mode
// =============================================================================

#[test]
fn test_interactive_only_keeps_game_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let config = SessionConfig {
        persist: false,
        ..file_config(&path, SaveFormat::Json)
    };

    let mut session = Session::from_config(config);
    session.handle("", "");
    let feedback = session.handle_line("Player1 1");

    assert_eq!(feedback[0], "Player2 it is your turn.");
    assert!(!path.exists());
}

#[test]
fn test_custom_player_names() {
    let config = SessionConfig {
        persist: false,
        player1_name: "Ada".to_string(),
        player2_name: "Grace".to_string(),
        ..SessionConfig::default()
    };
    let mut session = Session::from_config(config);

    assert_eq!(session.handle("", "")[1], "Ada it is your turn.");
    assert_eq!(session.handle_line("Player1 1")[0], NOT_YOUR_TURN);
    assert_eq!(session.handle_line("ada 1")[0], "Grace it is your turn.");
}
