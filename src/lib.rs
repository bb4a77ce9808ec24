//! Connect Four engine
//!
//! A two-player engine for dropping tokens into a fixed-size grid, with
//! phase tracking and a four-in-a-row detector run after every drop.

pub mod core;
pub mod error;
pub mod game;
pub mod render;
pub mod scenario;

pub use error::{C4Error, Result};
