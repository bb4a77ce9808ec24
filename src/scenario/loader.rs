//! Load a parsed scenario into a `GameState`
//!
//! Every occupied cell is replayed through the regular drop path, bottom row
//! first, so the loaded game satisfies the same invariants as a played one.

use crate::game::{GameState, Phase};
use crate::scenario::{CellDefinition, ScenarioFile};
use crate::{C4Error, Result};

/// Build a game from a scenario.
///
/// Engine errors (bad dimensions, duplicate tokens) propagate unchanged. A
/// token described above an empty cell, or a last drop that is not the top
/// token of its column, is a `ParseError`.
pub fn load_scenario_into_game(scenario: &ScenarioFile) -> Result<GameState> {
    let mut game = GameState::new(scenario.rows, scenario.cols)?;
    game.assign_tokens(scenario.tokens[0], scenario.tokens[1])?;

    let Some(grid) = &scenario.grid else {
        return Ok(game);
    };

    for (index, cell) in grid.cells.iter().enumerate() {
        let CellDefinition::Player(player) = *cell else {
            continue;
        };
        let (row, col) = (index / scenario.cols, index % scenario.cols);
        let (landed, _) = game.place_token(player, col)?;
        if landed != row {
            return Err(C4Error::ParseError(format!(
                "Token at ({}, {}) has an empty cell below it",
                row, col
            )));
        }
    }

    if game.phase() != Phase::Playable {
        return Err(C4Error::ParseError(
            "Grid section has no tokens; omit it for a game that has not started".to_string(),
        ));
    }

    let (row, col) = grid.last_drop;
    if !game.is_in_bounds(row, col) {
        return Err(C4Error::ParseError(format!(
            "Last drop ({}, {}) is outside the grid",
            row, col
        )));
    }
    let occupied = game.token_at(row, col)?.is_some();
    let covered = row + 1 < game.rows() && game.token_at(row + 1, col)?.is_some();
    if !occupied || covered {
        return Err(C4Error::ParseError(format!(
            "Last drop ({}, {}) is not the top token of column {}",
            row, col, col
        )));
    }

    game.set_last_drop(row, col);
    game.settle();
    Ok(game)
}
