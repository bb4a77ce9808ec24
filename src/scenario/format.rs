//! Scenario file parser
//!
//! A scenario is a whitespace separated list of words, with `#` starting a
//! comment that runs to the end of the line:
//!
//! ```text
//! rows cols token0 token1 [cell * (rows * cols) last_drop_row last_drop_col]
//! ```
//!
//! Cells are listed row by row starting at the bottom row. `0` and `1` are
//! player indices, `3` marks an empty cell.

use crate::core::{Token, PLAYER_COUNT};
use crate::{C4Error, Result};
use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, multispace1},
    combinator::{all_consuming, value},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// Cell value marking an empty cell
pub const EMPTY_SENTINEL: usize = 3;

/// Words before the optional grid section
const HEADER_WORDS: usize = 4;

/// A parsed scenario file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioFile {
    pub rows: usize,
    pub cols: usize,
    /// Tokens for player 0 and player 1
    pub tokens: [Token; PLAYER_COUNT],
    /// Grid contents; `None` for a game that has not started
    pub grid: Option<GridDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDefinition {
    /// Row-major, bottom row first
    pub cells: Vec<CellDefinition>,
    pub last_drop: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDefinition {
    Empty,
    Player(usize),
}

impl CellDefinition {
    pub fn parse(word: &str) -> Result<Self> {
        match word.parse::<usize>() {
            Ok(EMPTY_SENTINEL) => Ok(CellDefinition::Empty),
            Ok(player) if player < PLAYER_COUNT => Ok(CellDefinition::Player(player)),
            _ => Err(C4Error::ParseError(format!(
                "Invalid cell value '{}' (expected 0, 1 or {})",
                word, EMPTY_SENTINEL
            ))),
        }
    }
}

impl GridDefinition {
    /// Cell at `(row, col)` for a grid with `cols` columns
    pub fn cell(&self, cols: usize, row: usize, col: usize) -> Option<CellDefinition> {
        self.cells.get(row * cols + col).copied()
    }
}

/// Parse a complete scenario from string contents
pub fn parse_scenario(contents: &str) -> Result<ScenarioFile> {
    let words = split_words(contents)?;
    if words.len() < HEADER_WORDS {
        return Err(C4Error::ParseError(format!(
            "Scenario needs at least {} values (rows cols token0 token1), found {}",
            HEADER_WORDS,
            words.len()
        )));
    }

    let rows = parse_number(words[0], "row count")?;
    let cols = parse_number(words[1], "column count")?;
    let tokens = [words[2].parse::<Token>()?, words[3].parse::<Token>()?];

    let rest = &words[HEADER_WORDS..];
    if rest.is_empty() {
        return Ok(ScenarioFile {
            rows,
            cols,
            tokens,
            grid: None,
        });
    }

    let cell_count = rows.checked_mul(cols).ok_or_else(|| {
        C4Error::ParseError(format!("Grid size {}x{} is too large", rows, cols))
    })?;
    let expected = cell_count.checked_add(2).unwrap_or(usize::MAX);
    if rest.len() != expected {
        return Err(C4Error::ParseError(format!(
            "Expected {} cells and a last drop for a {}x{} grid ({} values), found {} values",
            cell_count,
            rows,
            cols,
            expected,
            rest.len()
        )));
    }

    let cells = rest[..cell_count]
        .iter()
        .map(|word| CellDefinition::parse(word))
        .collect::<Result<Vec<_>>>()?;
    let last_drop = (
        parse_number(rest[cell_count], "last drop row")?,
        parse_number(rest[cell_count + 1], "last drop column")?,
    );

    Ok(ScenarioFile {
        rows,
        cols,
        tokens,
        grid: Some(GridDefinition { cells, last_drop }),
    })
}

fn parse_number(word: &str, what: &str) -> Result<usize> {
    word.parse::<usize>()
        .map_err(|_| C4Error::ParseError(format!("Invalid {} '{}'", what, word)))
}

/// Split the contents into words, dropping whitespace and comments
fn split_words(contents: &str) -> Result<Vec<&str>> {
    all_consuming(words)(contents)
        .map(|(_, words)| words)
        .map_err(|e| C4Error::ParseError(format!("Malformed scenario: {}", e)))
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(char('#'), take_till(|c| c == '\n')))(input)
}

fn ignored(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment))))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == '#')(input)
}

fn words(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(ignored, many0(terminated(word, ignored)))(input)
}
