//! Player identity records.

use crate::strategy::Difficulty;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Seat a player occupies, in registration order.
///
/// AI players branch their opening play on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ordinal {
    /// Registered first; moves first.
    #[display("1")]
    First,
    /// Registered second.
    #[display("2")]
    Second,
}

impl Ordinal {
    /// Ordinal for a zero-based seat index.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Ordinal::First),
            1 => Some(Ordinal::Second),
            _ => None,
        }
    }

    /// Seat number, 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Ordinal::First => 1,
            Ordinal::Second => 2,
        }
    }
}

/// How a player chooses moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PlayerKind {
    /// Moves typed or clicked by a person.
    #[display("manual")]
    Manual,
    /// Moves chosen by an AI tier.
    #[display("{_0} AI")]
    Ai(Difficulty),
}

/// A registered player. Immutable once the game hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat, used for strategy branching.
    ordinal: Ordinal,
    /// Mark placed on the grid; unique within a game.
    mark: Mark,
    /// Display name.
    name: String,
    /// Strategy kind the player was registered with.
    kind: PlayerKind,
}

impl Player {
    /// Creates a player record. Games assign the ordinal on registration.
    pub fn new(ordinal: Ordinal, mark: Mark, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            ordinal,
            mark,
            name: name.into(),
            kind,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
