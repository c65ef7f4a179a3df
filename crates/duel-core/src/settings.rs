use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::player::{Player, PlayerSlot, Players};

/// How daring the forfeits served during a session are.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Light and playful.
    #[default]
    Easy,
    /// Moderate.
    Medium,
    /// Intense.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, from mildest to most daring.
    pub fn all() -> &'static [Self] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// Parse a difficulty level (case-insensitive).
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(CoreError::UnknownDifficulty(other.to_string())),
        }
    }

    /// Parse a difficulty level, falling back to [`Difficulty::Easy`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Difficulty of the forfeits served.
    pub difficulty: Difficulty,
    /// The two players.
    pub players: Players,
}

impl SessionSettings {
    /// Create settings from a difficulty and two players.
    pub fn new(difficulty: Difficulty, player1: Player, player2: Player) -> Self {
        Self {
            difficulty,
            players: Players::new(player1, player2),
        }
    }

    /// The player sitting in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.players.get(slot)
    }
}

/// Running match wins across all mini-games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Wins by player 1.
    pub player1: u32,
    /// Wins by player 2.
    pub player2: u32,
}

impl Scores {
    /// Record a win for `slot`. Returns the new total for that player.
    pub fn award(&mut self, slot: PlayerSlot) -> u32 {
        let score = match slot {
            PlayerSlot::Player1 => &mut self.player1,
            PlayerSlot::Player2 => &mut self.player2,
        };
        *score += 1;
        *score
    }

    /// The score of `slot`.
    pub fn get(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::Player1 => self.player1,
            PlayerSlot::Player2 => self.player2,
        }
    }
}
