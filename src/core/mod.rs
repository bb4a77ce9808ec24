//! Core game types

pub mod player;
pub mod token;

pub use player::{check_player, opponent, PLAYER_COUNT};
pub use token::Token;
