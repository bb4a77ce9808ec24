//! Player controller trait and game state view
//!
//! The game loop asks a controller for a column whenever its player is to
//! move. Controllers only see a read-only [`GameStateView`] of the game.

use crate::core::Token;
use crate::game::{Board, GameState, OpenColumns, Phase};
use crate::C4Error;

/// Read-only view of game state for controllers
pub struct GameStateView<'a> {
    game: &'a GameState,
    player: usize,
}

impl<'a> GameStateView<'a> {
    /// Create a view of the game from a player's perspective
    pub fn new(game: &'a GameState, player: usize) -> Self {
        GameStateView { game, player }
    }

    /// The player this view is for
    pub fn player(&self) -> usize {
        self.player
    }

    pub fn rows(&self) -> usize {
        self.game.rows()
    }

    pub fn cols(&self) -> usize {
        self.game.cols()
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Token at a position; `None` for empty or out-of-bounds cells
    pub fn token_at(&self, row: usize, col: usize) -> Option<Token> {
        self.game.token_at(row, col).ok().flatten()
    }

    /// This player's token
    pub fn own_token(&self) -> Option<Token> {
        self.game.player_token(self.player).ok()
    }

    pub fn open_columns(&self) -> OpenColumns {
        self.game.open_columns()
    }

    /// Tokens dropped so far (0 before the first drop)
    pub fn moves_dropped(&self) -> usize {
        self.game.moves_dropped().unwrap_or(0)
    }

    pub fn last_drop(&self) -> Option<(usize, usize)> {
        self.game.last_drop().ok()
    }
}

/// Player controller trait
///
/// Implement this to plug a new kind of player into the game loop.
pub trait PlayerController {
    /// The player index (0 or 1) this controller moves for
    fn player(&self) -> usize;

    /// Choose a column to drop into, or `None` to stop playing
    fn choose_column(&mut self, view: &GameStateView) -> Option<usize>;

    /// Called when the engine rejected the last chosen column
    fn on_move_rejected(&mut self, _view: &GameStateView, _error: &C4Error) {}

    /// Called when the game ends
    fn on_game_end(&mut self, _view: &GameStateView, _won: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_before_play() {
        let mut game = GameState::new(6, 7).unwrap();
        game.assign_tokens(Token::Red, Token::Yellow).unwrap();
        let view = GameStateView::new(&game, 1);

        assert_eq!(view.player(), 1);
        assert_eq!(view.own_token(), Some(Token::Yellow));
        assert_eq!(view.moves_dropped(), 0);
        assert_eq!(view.last_drop(), None);
        assert_eq!(view.open_columns().len(), 7);
    }

    #[test]
    fn test_view_reads_cells() {
        let mut game = GameState::new(6, 7).unwrap();
        game.assign_tokens(Token::Red, Token::Yellow).unwrap();
        game.drop_token(0, 4).unwrap();
        let view = GameStateView::new(&game, 0);

        assert_eq!(view.token_at(0, 4), Some(Token::Red));
        assert_eq!(view.token_at(1, 4), None);
        assert_eq!(view.token_at(40, 40), None);
        assert_eq!(view.last_drop(), Some((0, 4)));
        assert_eq!(view.phase(), Phase::Playable);
    }
}
