//! Plain-text feedback lines.
//!
//! The board is drawn from the mover's side of the table: the opponent's row
//! runs right to left on top (store first), the mover's row left to right
//! underneath (store last). Empty slots are blank. Each row carries a blank
//! placeholder under/over the other player's store so the columns line up.
//!
//! ```text
//! [ ],[4],[4],[4],[4],[4],[4],[ ]
//! [ ],[4],[4],[4],[4],[4],[4],[ ]
//! ```

use crate::core::{Board, GameState, Seat, STORE};
use crate::rules::GameResult;

fn cell(seeds: u32) -> String {
    if seeds > 0 {
        format!("[{seeds}]")
    } else {
        "[ ]".to_string()
    }
}

fn placeholder(store: u32) -> String {
    format!("[{}]", " ".repeat(store.to_string().len()))
}

/// Opponent row, reversed, followed by a placeholder over the mover's store.
fn top_row(opponent: &Board, mover: &Board) -> String {
    let mut cells: Vec<String> = (0..=STORE).rev().map(|i| cell(opponent[i])).collect();
    cells.push(placeholder(mover.store()));
    cells.join(",")
}

/// Placeholder under the opponent's store, followed by the mover's row.
fn bottom_row(opponent: &Board, mover: &Board) -> String {
    let mut cells = vec![placeholder(opponent.store())];
    cells.extend((0..=STORE).map(|i| cell(mover[i])));
    cells.join(",")
}

/// The two board lines, seen from the player to move.
#[must_use]
pub fn board_lines(state: &GameState) -> [String; 2] {
    let mover = &state.current_player().board;
    let opponent = &state.opponent().board;
    [top_row(opponent, mover), bottom_row(opponent, mover)]
}

/// Prompt naming the player to move.
#[must_use]
pub fn turn_prompt(state: &GameState) -> String {
    format!("{} it is your turn.", state.current_player().name)
}

/// Announcement for a finished game.
#[must_use]
pub fn result_lines(state: &GameState, result: GameResult) -> Vec<String> {
    let headline = match result {
        GameResult::Winner(seat) => format!("{} wins!", state.player(seat).name),
        GameResult::Tie => "It's a tie!".to_string(),
    };
    let p1 = state.player(Seat::Player1);
    let p2 = state.player(Seat::Player2);

    vec![
        headline,
        format!(
            "{} had {} and {} had {}",
            p1.name,
            p1.board.store(),
            p2.name,
            p2.board.store()
        ),
    ]
}

/// Legal pits as a comma list, e.g. `1,3,6`.
#[must_use]
pub fn pit_list(pits: &[u8]) -> String {
    pits.iter().map(u8::to_string).collect::<Vec<_>>().join(",")
}
