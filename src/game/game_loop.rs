//! Game loop implementation
//!
//! Alternates turns between two player controllers until the game is over
//! or a controller stops supplying moves.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating the per-move format! allocations. The arguments are still
/// borrowed so callers do not see unused-variable warnings.
macro_rules! log_if_verbose {
    ($self:expr, $category:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self
                .logger
                .event(VerbosityLevel::Normal, $category, &format!($fmt $(, $arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = (&$self, &$category $(, &$arg)*);
        }
    };
}

use crate::core::{check_player, opponent, PLAYER_COUNT};
use crate::game::controller::{GameStateView, PlayerController};
use crate::game::logger::GameLogger;
use crate::game::{GameOutcome, GameState};
use crate::render::render_grid;
use crate::{C4Error, Result};
use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - every move (default)
    #[default]
    Normal = 2,
    /// Verbose - every move plus the grid after it
    Verbose = 3,
}

/// Result of running a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winner of the game (None if draw or abandoned)
    pub winner: Option<usize>,
    /// Tokens on the grid when the loop stopped
    pub moves_dropped: usize,
    pub end_reason: GameEndReason,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// The player's last drop completed a connect-four
    ConnectFour(usize),
    /// The grid filled up
    Draw,
    /// The player stopped supplying moves
    Abandoned(usize),
}

/// Default number of consecutive rejected drops tolerated per turn
pub const DEFAULT_MAX_REJECTIONS: u32 = 3;

pub struct GameLoop<'a> {
    pub game: &'a mut GameState,
    logger: GameLogger,
    max_rejections: u32,
    first_player: usize,
}

impl<'a> GameLoop<'a> {
    pub fn new(game: &'a mut GameState) -> Self {
        GameLoop {
            game,
            logger: GameLogger::new(),
            max_rejections: DEFAULT_MAX_REJECTIONS,
            first_player: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.logger.set_verbosity(verbosity);
        self
    }

    /// Replace the logger (e.g. one set up for capture or JSON output)
    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Consecutive rejected drops allowed before the error is returned
    pub fn with_max_rejections(mut self, max_rejections: u32) -> Self {
        self.max_rejections = max_rejections.max(1);
        self
    }

    /// Player that moves first in a game with no drops yet
    pub fn with_first_player(mut self, player: usize) -> Self {
        self.first_player = player;
        self
    }

    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    /// Run the game to completion.
    ///
    /// `controller0` moves for player 0 and `controller1` for player 1. A
    /// rejected column (full or out of bounds) is reported to the controller
    /// and the same player is asked again.
    pub fn run_game(
        &mut self,
        controller0: &mut dyn PlayerController,
        controller1: &mut dyn PlayerController,
    ) -> Result<GameResult> {
        let mut current = self.setup_game(controller0, controller1)?;
        let mut rejections = 0;

        loop {
            let controller: &mut dyn PlayerController = if current == 0 {
                &mut *controller0
            } else {
                &mut *controller1
            };

            let choice = {
                let view = GameStateView::new(self.game, current);
                controller.choose_column(&view)
            };

            let Some(col) = choice else {
                let result = self.finish(GameEndReason::Abandoned(current));
                self.notify_game_end(controller0, controller1, None);
                return Ok(result);
            };

            match self.game.drop_token(current, col) {
                Ok(()) => {
                    rejections = 0;
                    self.log_move(current, col);
                }
                Err(e @ (C4Error::ColumnFull(_) | C4Error::OutOfBounds { .. })) => {
                    rejections += 1;
                    self.logger.event(
                        VerbosityLevel::Normal,
                        "rejected",
                        &format!("Player {} cannot drop into column {}: {}", current, col, e),
                    );
                    let view = GameStateView::new(self.game, current);
                    controller.on_move_rejected(&view, &e);
                    if rejections >= self.max_rejections {
                        return Err(e);
                    }
                    continue;
                }
                Err(e) => return Err(e),
            }

            if let Some(outcome) = self.game.outcome() {
                let reason = match outcome {
                    GameOutcome::Winner(player) => GameEndReason::ConnectFour(player),
                    GameOutcome::Draw => GameEndReason::Draw,
                };
                let result = self.finish(reason);
                self.notify_game_end(controller0, controller1, result.winner);
                return Ok(result);
            }

            current = opponent(current);
        }
    }

    /// Check controllers and phase; returns the player to move first
    fn setup_game(
        &self,
        controller0: &dyn PlayerController,
        controller1: &dyn PlayerController,
    ) -> Result<usize> {
        if controller0.player() != 0 || controller1.player() != 1 {
            return Err(C4Error::InvalidArgument(format!(
                "controllers must be for players 0 and 1, got {} and {}",
                controller0.player(),
                controller1.player()
            )));
        }
        let first_player = check_player(self.first_player)?;
        if !self.game.phase().can_drop() {
            return Err(C4Error::WrongPhase {
                operation: "run a game",
                phase: self.game.phase(),
            });
        }

        // A game resumed mid-play continues with the player who did not
        // make the last drop
        let resumed_by = self
            .game
            .last_drop()
            .ok()
            .and_then(|(row, col)| self.game.token_at(row, col).ok().flatten())
            .and_then(|token| self.game.player_of(token))
            .map(opponent);
        let first = resumed_by.unwrap_or(first_player);

        self.logger.event(
            VerbosityLevel::Normal,
            "start",
            &format!(
                "{}x{} game, player {} to move",
                self.game.rows(),
                self.game.cols(),
                first
            ),
        );
        Ok(first)
    }

    fn log_move(&self, player: usize, col: usize) {
        if let (Ok(token), Ok((row, _))) = (self.game.player_token(player), self.game.last_drop()) {
            log_if_verbose!(
                self,
                "move",
                "Player {} ({}) drops into column {}, lands on row {}",
                player,
                token,
                col,
                row
            );
        }
        if self.logger.is_enabled(VerbosityLevel::Verbose) {
            self.logger.event(
                VerbosityLevel::Verbose,
                "grid",
                &render_grid(self.game.board()),
            );
        }
    }

    fn finish(&self, end_reason: GameEndReason) -> GameResult {
        let winner = match end_reason {
            GameEndReason::ConnectFour(player) => Some(player),
            _ => None,
        };
        let message = match end_reason {
            GameEndReason::ConnectFour(player) => {
                let token = self
                    .game
                    .player_token(player)
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                format!("Player {} ({}) wins with a connect-four", player, token)
            }
            GameEndReason::Draw => "Draw: the grid is full".to_string(),
            GameEndReason::Abandoned(player) => format!("Player {} abandoned the game", player),
        };
        self.logger
            .event(VerbosityLevel::Minimal, "outcome", &message);

        GameResult {
            winner,
            moves_dropped: self.game.moves_dropped().unwrap_or(0),
            end_reason,
        }
    }

    fn notify_game_end(
        &self,
        controller0: &mut dyn PlayerController,
        controller1: &mut dyn PlayerController,
        winner: Option<usize>,
    ) {
        let controllers: [&mut dyn PlayerController; PLAYER_COUNT] = [controller0, controller1];
        for (player, controller) in controllers.into_iter().enumerate() {
            let view = GameStateView::new(self.game, player);
            controller.on_game_end(&view, winner == Some(player));
        }
    }
}
