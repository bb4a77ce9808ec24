//! Game state and the move engine
//!
//! `GameState` is mutated only through [`GameState::assign_tokens`] and
//! [`GameState::drop_token`]. Both validate every precondition before
//! touching anything, so a call that returns an error leaves the state
//! exactly as it was.

use super::board::{Board, MAX_COLS};
use super::detector::{has_connect_four_through, RUN_LENGTH};
use super::phase::Phase;
use crate::core::{check_player, Token, PLAYER_COUNT};
use crate::{C4Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player whose drop completed a connect-four
    Winner(usize),
    /// The grid filled up without a connect-four
    Draw,
}

/// Columns that can still take a token
pub type OpenColumns = SmallVec<[usize; MAX_COLS]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Option<Token>; PLAYER_COUNT],
    moves_dropped: usize,
    last_drop: Option<(usize, usize)>,
    phase: Phase,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a game with an empty `rows` x `cols` grid.
    ///
    /// Supported sizes are `6 <= rows <= 9` and `7 <= cols <= 9`; anything
    /// else fails with `InvalidDimensions`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            players: [None; PLAYER_COUNT],
            moves_dropped: 0,
            last_drop: None,
            phase: Phase::New,
            outcome: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the grid
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        self.board.is_in_bounds(row, col)
    }

    /// Token at a position, `None` for an empty cell
    pub fn token_at(&self, row: usize, col: usize) -> Result<Option<Token>> {
        self.board.get(row, col)
    }

    /// Assign the tokens for player 0 and player 1 and move to `Ready`
    pub fn assign_tokens(&mut self, token0: Token, token1: Token) -> Result<()> {
        if token0 == token1 {
            return Err(C4Error::InvalidArgument(format!(
                "both players cannot use the same token ({})",
                token0
            )));
        }
        if !self.phase.can_assign_tokens() {
            return Err(C4Error::WrongPhase {
                operation: "assign tokens",
                phase: self.phase,
            });
        }
        self.players = [Some(token0), Some(token1)];
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Token assigned to a player
    pub fn player_token(&self, player: usize) -> Result<Token> {
        let player = check_player(player)?;
        self.players[player].ok_or(C4Error::WrongPhase {
            operation: "read player tokens",
            phase: self.phase,
        })
    }

    /// Player that owns a token, if either does
    pub fn player_of(&self, token: Token) -> Option<usize> {
        self.players.iter().position(|&t| t == Some(token))
    }

    /// Number of tokens dropped so far; only meaningful once play started
    pub fn moves_dropped(&self) -> Result<usize> {
        self.require_played("count dropped tokens")?;
        Ok(self.moves_dropped)
    }

    /// `(row, col)` of the most recent drop
    pub fn last_drop(&self) -> Result<(usize, usize)> {
        self.require_played("read the last drop")?;
        self.last_drop.ok_or(C4Error::WrongPhase {
            operation: "read the last drop",
            phase: self.phase,
        })
    }

    /// Result of the game once it is `Over`
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<usize> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Columns still accepting tokens; empty unless a drop is legal
    pub fn open_columns(&self) -> OpenColumns {
        if !self.phase.can_drop() {
            return OpenColumns::new();
        }
        (0..self.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Did the most recent drop complete a connect-four?
    ///
    /// Read-only: the phase is changed by [`GameState::drop_token`], not here.
    pub fn is_last_drop_connect_four(&self) -> Result<bool> {
        let (row, col) = self.last_drop()?;
        Ok(has_connect_four_through(&self.board, row, col))
    }

    /// Drop `player`'s token into column `col`.
    ///
    /// Errors: `OutOfBounds` for a bad column, `InvalidArgument` for a bad
    /// player, `WrongPhase` before tokens are assigned or once the game is
    /// over, `ColumnFull` when the column has no open cell.
    pub fn drop_token(&mut self, player: usize, col: usize) -> Result<()> {
        self.place_token(player, col)?;
        self.settle();
        Ok(())
    }

    /// Validate and place a token without settling the phase.
    ///
    /// Returns the landing cell. Shared by [`GameState::drop_token`] and the
    /// scenario loader, which settles once after replaying a whole grid.
    pub(crate) fn place_token(&mut self, player: usize, col: usize) -> Result<(usize, usize)> {
        if col >= self.cols() {
            return Err(C4Error::OutOfBounds { row: None, col });
        }
        let player = check_player(player)?;
        if !self.phase.can_drop() {
            return Err(C4Error::WrongPhase {
                operation: "drop a token",
                phase: self.phase,
            });
        }
        let token = self.player_token(player)?;
        let row = self.landing_row(col)?;

        self.phase = Phase::Playable;
        self.board.place(row, col, token);
        self.last_drop = Some((row, col));
        self.moves_dropped += 1;
        Ok((row, col))
    }

    /// Overwrite the last-drop coordinates. Only the scenario loader uses
    /// this, and it checks the cell first.
    pub(crate) fn set_last_drop(&mut self, row: usize, col: usize) {
        self.last_drop = Some((row, col));
    }

    /// End the game if the last drop connected four or the grid is full
    pub(crate) fn settle(&mut self) {
        if self.phase != Phase::Playable {
            return;
        }
        let Some((row, col)) = self.last_drop else {
            return;
        };

        if self.moves_dropped >= RUN_LENGTH as usize && has_connect_four_through(&self.board, row, col)
        {
            let winner = self.board.cell(row, col).and_then(|token| self.player_of(token));
            if let Some(player) = winner {
                self.phase = Phase::Over;
                self.outcome = Some(GameOutcome::Winner(player));
                return;
            }
        }
        if self.moves_dropped == self.board.capacity() {
            self.phase = Phase::Over;
            self.outcome = Some(GameOutcome::Draw);
        }
    }

    /// Row a token dropped into `col` lands on.
    ///
    /// When `col` is the column of the previous drop, the token lands right
    /// above it; otherwise the column is scanned up from row 0.
    fn landing_row(&self, col: usize) -> Result<usize> {
        if let Some((last_row, last_col)) = self.last_drop {
            if last_col == col {
                let row = last_row + 1;
                if row >= self.rows() {
                    return Err(C4Error::ColumnFull(col));
                }
                if self.board.cell(row, col).is_none() {
                    return Ok(row);
                }
            }
        }
        self.board
            .lowest_open_row(col)
            .ok_or(C4Error::ColumnFull(col))
    }

    fn require_played(&self, operation: &'static str) -> Result<()> {
        if self.phase.is_played() {
            Ok(())
        } else {
            Err(C4Error::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}
