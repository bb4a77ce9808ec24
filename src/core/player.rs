//! Player indices
//!
//! Players are addressed by plain indices: `0` for the first player and `1`
//! for the second. Anything else is rejected with `InvalidArgument`.

use crate::{C4Error, Result};

/// Number of players in a game
pub const PLAYER_COUNT: usize = 2;

/// Validate a player index, returning it unchanged if it names a player
pub fn check_player(player: usize) -> Result<usize> {
    if player < PLAYER_COUNT {
        Ok(player)
    } else {
        Err(C4Error::InvalidArgument(format!(
            "player must be 0 or 1, got {}",
            player
        )))
    }
}

/// The other player
pub fn opponent(player: usize) -> usize {
    1 - (player % PLAYER_COUNT)
}
