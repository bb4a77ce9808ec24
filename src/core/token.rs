//! Player tokens (colours) and their display glyphs

use crate::{C4Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A token colour. Each player owns exactly one colour for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Magenta,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::Red,
        Token::Blue,
        Token::Green,
        Token::Yellow,
        Token::Purple,
        Token::Orange,
        Token::Cyan,
        Token::Magenta,
    ];

    /// Upper-case name, as written in scenario files
    pub fn name(&self) -> &'static str {
        match self {
            Token::Red => "RED",
            Token::Blue => "BLUE",
            Token::Green => "GREEN",
            Token::Yellow => "YELLOW",
            Token::Purple => "PURPLE",
            Token::Orange => "ORANGE",
            Token::Cyan => "CYAN",
            Token::Magenta => "MAGENTA",
        }
    }

    /// Single-character glyph used when rendering the grid
    pub fn glyph(&self) -> char {
        match self {
            Token::Red => 'R',
            Token::Blue => 'B',
            Token::Green => 'G',
            Token::Yellow => 'Y',
            Token::Purple => 'P',
            Token::Orange => 'O',
            Token::Cyan => 'C',
            Token::Magenta => 'M',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Token {
    type Err = C4Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| C4Error::ParseError(format!("Unknown token name: {}", s)))
    }
}
