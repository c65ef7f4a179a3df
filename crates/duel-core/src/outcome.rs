use serde::{Deserialize, Serialize};

use crate::player::{Gender, PlayerSlot};
use crate::settings::SessionSettings;

/// Who won a round, as reported by a rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    /// Player 1 won.
    Player1,
    /// Player 2 won.
    Player2,
    /// Nobody won.
    Draw,
}

impl RoundWinner {
    /// The winning seat, if the round was not a draw.
    pub fn slot(self) -> Option<PlayerSlot> {
        match self {
            Self::Player1 => Some(PlayerSlot::Player1),
            Self::Player2 => Some(PlayerSlot::Player2),
            Self::Draw => None,
        }
    }

    /// The losing seat, if the round was not a draw.
    pub fn loser(self) -> Option<PlayerSlot> {
        self.slot().map(PlayerSlot::other)
    }
}

impl From<PlayerSlot> for RoundWinner {
    fn from(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::Player1 => Self::Player1,
            PlayerSlot::Player2 => Self::Player2,
        }
    }
}

impl std::fmt::Display for RoundWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player1 => write!(f, "player1"),
            Self::Player2 => write!(f, "player2"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// The result of a finished round, consumed once by the session coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    /// Who won.
    pub winner: RoundWinner,
    /// The loser's gender, absent on a draw.
    pub loser_gender: Option<Gender>,
}

impl RoundOutcome {
    /// Attach the loser's gender from the session's player roster.
    pub fn resolve(winner: RoundWinner, settings: &SessionSettings) -> Self {
        Self {
            winner,
            loser_gender: winner
                .loser()
                .map(|slot| settings.player(slot).gender()),
        }
    }

    /// The losing seat, if the round was not a draw.
    pub fn loser(&self) -> Option<PlayerSlot> {
        self.winner.loser()
    }

    /// Whether the round ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.winner == RoundWinner::Draw
    }
}
