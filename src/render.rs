//! Text rendering of the grid and game state
//!
//! Rendering only reads the game; nothing here validates or mutates it.

use crate::game::{Board, GameOutcome, GameState};
use std::fmt::Write;

/// Glyph shown for an empty cell
pub const EMPTY_GLYPH: char = '.';

/// Render the grid with the top row first and a column index footer.
///
/// ```text
/// |.|.|.|.|.|.|.|
/// |R|B|.|.|.|.|.|
///  0 1 2 3 4 5 6
/// ```
pub fn render_grid(board: &Board) -> String {
    let mut out = String::with_capacity((board.rows() + 1) * (board.cols() * 2 + 2));
    for row in board.rows_top_down() {
        out.push('|');
        for cell in row {
            out.push(cell.map_or(EMPTY_GLYPH, |token| token.glyph()));
            out.push('|');
        }
        out.push('\n');
    }
    for col in 0..board.cols() {
        out.push(' ');
        out.push_str(&col.to_string());
    }
    out.push('\n');
    out
}

/// Render a status header, the grid and the outcome if the game is over
pub fn render_game(game: &GameState) -> String {
    let mut out = String::new();

    let moves = game
        .moves_dropped()
        .map_or_else(|_| "-".to_string(), |m| m.to_string());
    let last = game
        .last_drop()
        .map_or_else(|_| "-".to_string(), |(row, col)| format!("({}, {})", row, col));
    let _ = writeln!(
        out,
        "Phase: {}  Moves: {}  Last drop: {}",
        game.phase(),
        moves,
        last
    );

    let players: Vec<String> = (0..2)
        .map(|player| match game.player_token(player) {
            Ok(token) => format!("Player {}: {} ({})", player, token, token.glyph()),
            Err(_) => format!("Player {}: -", player),
        })
        .collect();
    let _ = writeln!(out, "{}", players.join("  "));

    out.push_str(&render_grid(game.board()));

    match game.outcome() {
        Some(GameOutcome::Winner(player)) => {
            let token = game
                .player_token(player)
                .map(|t| t.to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "Winner: player {} ({})", player, token);
        }
        Some(GameOutcome::Draw) => out.push_str("Draw\n"),
        None => {}
    }
    out
}
