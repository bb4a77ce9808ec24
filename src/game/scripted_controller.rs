//! Scripted player controller for testing and replays
//!
//! This controller plays a predetermined list of columns and stops
//! (returns `None`) once the list is used up.

use crate::game::controller::{GameStateView, PlayerController};
use crate::{C4Error, Result};

/// A controller that follows a fixed sequence of columns
#[derive(Debug, Clone)]
pub struct ScriptedController {
    player: usize,
    columns: Vec<usize>,
    current_step: usize,
}

impl ScriptedController {
    pub fn new(player: usize, columns: Vec<usize>) -> Self {
        ScriptedController {
            player,
            columns,
            current_step: 0,
        }
    }

    /// Build a controller from a space or comma separated list, e.g. "3 3 4"
    /// or "3,3,4"
    pub fn from_script(player: usize, script: &str) -> Result<Self> {
        Ok(Self::new(player, parse_script(script)?))
    }

    /// Columns not yet played
    pub fn remaining(&self) -> &[usize] {
        &self.columns[self.current_step..]
    }
}

/// Parse a column script
pub fn parse_script(script: &str) -> Result<Vec<usize>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| C4Error::ParseError(format!("Invalid column in script: {}", s)))
        })
        .collect()
}

impl PlayerController for ScriptedController {
    fn player(&self) -> usize {
        self.player
    }

    fn choose_column(&mut self, _view: &GameStateView) -> Option<usize> {
        let column = self.columns.get(self.current_step).copied()?;
        self.current_step += 1;
        Some(column)
    }
}
