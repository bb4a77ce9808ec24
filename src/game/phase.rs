//! Game lifecycle phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a game
///
/// `New` → `Ready` once tokens are assigned, `Ready` → `Playable` on the
/// first drop, and `Playable` → `Over` when a drop connects four or fills
/// the grid. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    #[default]
    New,
    Ready,
    Playable,
    Over,
}

impl Phase {
    /// Can player tokens be assigned in this phase?
    pub fn can_assign_tokens(&self) -> bool {
        matches!(self, Phase::New)
    }

    /// Can a token be dropped in this phase?
    pub fn can_drop(&self) -> bool {
        matches!(self, Phase::Ready | Phase::Playable)
    }

    /// Has at least one token been dropped?
    pub fn is_played(&self) -> bool {
        matches!(self, Phase::Playable | Phase::Over)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Over)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::New => write!(f, "NEW"),
            Phase::Ready => write!(f, "READY"),
            Phase::Playable => write!(f, "PLAYABLE"),
            Phase::Over => write!(f, "OVER"),
        }
    }
}
