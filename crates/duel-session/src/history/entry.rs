//! History entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use duel_core::{Difficulty, Gender, PlayerSlot, RoundWinner};
use duel_games::GameKind;

/// A single entry in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A mini-game was chosen or restarted.
    GameStarted {
        /// The game.
        game: GameKind,
        /// When it started.
        timestamp: DateTime<Utc>,
    },
    /// A mini-game reached a terminal state.
    RoundEnded {
        /// The game.
        game: GameKind,
        /// Who won, or a draw.
        winner: RoundWinner,
        /// When it ended.
        timestamp: DateTime<Utc>,
    },
    /// A forfeit was assigned to the loser.
    ForfeitServed {
        /// Task key.
        task: String,
        /// Who must perform it.
        loser: PlayerSlot,
        /// Whether it replaced a skipped forfeit.
        rerolled: bool,
        /// When assigned.
        timestamp: DateTime<Utc>,
    },
    /// The loser finished the forfeit.
    ForfeitCompleted {
        /// Task key.
        task: String,
        /// Who performed it.
        loser: PlayerSlot,
        /// When completed.
        timestamp: DateTime<Utc>,
    },
    /// Every task in a partition had been served and the record was cleared.
    PoolExhausted {
        /// Partition difficulty.
        difficulty: Difficulty,
        /// Partition gender.
        gender: Gender,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
}

impl HistoryEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::GameStarted { timestamp, .. }
            | Self::RoundEnded { timestamp, .. }
            | Self::ForfeitServed { timestamp, .. }
            | Self::ForfeitCompleted { timestamp, .. }
            | Self::PoolExhausted { timestamp, .. } => *timestamp,
        }
    }
}
