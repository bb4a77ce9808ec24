//! Scenario file support
//!
//! A scenario (`.c4` file) describes a game by its dimensions, the two
//! player tokens and optionally a full grid plus the last drop, so a game
//! can be started from any position.

pub mod format;
pub mod loader;

pub use format::{CellDefinition, GridDefinition, ScenarioFile, EMPTY_SENTINEL};
pub use loader::load_scenario_into_game;

use crate::Result;

impl ScenarioFile {
    /// Load a scenario file from disk
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a string
    pub fn parse(contents: &str) -> Result<Self> {
        format::parse_scenario(contents)
    }
}
