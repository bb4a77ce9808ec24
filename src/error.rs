//! Error types for connect-four-rs

use crate::game::Phase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum C4Error {
    #[error("Unsupported dimensions {rows}x{cols}: need 6 <= rows <= 9 and 7 <= cols <= 9")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of bounds: {}", describe_position(.row, .col))]
    OutOfBounds { row: Option<usize>, col: usize },

    #[error("Wrong phase: cannot {operation} while the game is {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("Column {0} is full")]
    ColumnFull(usize),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn describe_position(row: &Option<usize>, col: &usize) -> String {
    match row {
        Some(row) => format!("cell ({row}, {col})"),
        None => format!("column {col}"),
    }
}

impl From<serde_json::Error> for C4Error {
    fn from(err: serde_json::Error) -> Self {
        C4Error::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, C4Error>;
