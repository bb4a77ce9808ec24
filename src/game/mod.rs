//! Grid, move engine and game loop

pub mod board;
pub mod controller;
pub mod detector;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod phase;
pub mod scripted_controller;
pub mod state;

pub use board::Board;
pub use controller::{GameStateView, PlayerController};
pub use detector::has_connect_four_through;
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputFormat, OutputMode};
pub use phase::Phase;
pub use scripted_controller::ScriptedController;
pub use state::{GameOutcome, GameState, OpenColumns};
