//! Parity dice duel: call even or odd, roll a d6, first to three wins.
//!
//! Players alternate turns. On their turn a player calls a parity, then the
//! die is rolled. If the roll matches the call the player scores a point.
//! The turn passes to the other player whether or not the call was right,
//! so only the caller can score on any given roll.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use duel_core::PlayerSlot;

/// Score needed to win the match.
pub const WINNING_SCORE: u8 = 3;

/// Number of faces on the duel die.
pub const DIE_FACES: u8 = 6;

/// Roll the duel die: uniform over 1-6.
pub fn roll_die(rng: &mut StdRng) -> u8 {
    rng.random_range(1..=DIE_FACES)
}

/// An even/odd call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// 2, 4 or 6.
    Even,
    /// 1, 3 or 5.
    Odd,
}

impl Parity {
    /// The parity of a roll.
    pub fn of(roll: u8) -> Self {
        if roll % 2 == 0 { Self::Even } else { Self::Odd }
    }

    /// Whether `roll` has this parity.
    pub fn matches(self, roll: u8) -> bool {
        Self::of(roll) == self
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Even => write!(f, "EVEN"),
            Self::Odd => write!(f, "ODD"),
        }
    }
}

/// A single resolved roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRound {
    /// Who called.
    pub player: PlayerSlot,
    /// What they called.
    pub choice: Parity,
    /// The face rolled (1-6).
    pub roll: u8,
    /// Whether the call was right.
    pub won: bool,
}

impl std::fmt::Display for DuelRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rolled {} ({}), {} called {}",
            self.roll,
            Parity::of(self.roll),
            self.player,
            self.choice
        )
    }
}

/// What the duel is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelPhase {
    /// `player` has to call even or odd.
    AwaitingChoice(PlayerSlot),
    /// A call is in; the die can be rolled.
    Rolling {
        /// Who called.
        player: PlayerSlot,
        /// What they called.
        choice: Parity,
    },
    /// The match is over.
    MatchWon(PlayerSlot),
}

/// Scores, turn, and pending call of a dice duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelState {
    player1_score: u8,
    player2_score: u8,
    current_player: PlayerSlot,
    pending_choice: Option<Parity>,
    last_round: Option<DuelRound>,
    winner: Option<PlayerSlot>,
}

impl Default for DuelState {
    fn default() -> Self {
        Self::new()
    }
}

impl DuelState {
    /// A fresh match: 0-0, player 1 to call.
    pub fn new() -> Self {
        Self {
            player1_score: 0,
            player2_score: 0,
            current_player: PlayerSlot::Player1,
            pending_choice: None,
            last_round: None,
            winner: None,
        }
    }

    /// The score of `slot`.
    pub fn score(&self, slot: PlayerSlot) -> u8 {
        match slot {
            PlayerSlot::Player1 => self.player1_score,
            PlayerSlot::Player2 => self.player2_score,
        }
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> PlayerSlot {
        self.current_player
    }

    /// The call waiting for a roll.
    pub fn pending_choice(&self) -> Option<Parity> {
        self.pending_choice
    }

    /// The most recently resolved roll.
    pub fn last_round(&self) -> Option<DuelRound> {
        self.last_round
    }

    /// The match winner, once someone reaches [`WINNING_SCORE`].
    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }

    /// The current phase.
    pub fn phase(&self) -> DuelPhase {
        match (self.winner, self.pending_choice) {
            (Some(winner), _) => DuelPhase::MatchWon(winner),
            (None, Some(choice)) => DuelPhase::Rolling {
                player: self.current_player,
                choice,
            },
            (None, None) => DuelPhase::AwaitingChoice(self.current_player),
        }
    }

    /// Record the current player's call. Returns false if no call is expected.
    pub fn submit_choice(&mut self, choice: Parity) -> bool {
        if !matches!(self.phase(), DuelPhase::AwaitingChoice(_)) {
            debug!(%choice, "choice ignored: not awaiting a call");
            return false;
        }
        self.pending_choice = Some(choice);
        true
    }

    /// Resolve a die roll against the pending call.
    ///
    /// Returns `None` (and changes nothing) when no call is pending, the
    /// match is over, or `roll` is not a face of the die.
    pub fn resolve_roll(&mut self, roll: u8) -> Option<DuelRound> {
        if !(1..=DIE_FACES).contains(&roll) {
            debug!(roll, "roll ignored: not a die face");
            return None;
        }
        let DuelPhase::Rolling { player, choice } = self.phase() else {
            debug!(roll, "roll ignored: no pending call");
            return None;
        };

        let won = choice.matches(roll);
        if won {
            let score = match player {
                PlayerSlot::Player1 => &mut self.player1_score,
                PlayerSlot::Player2 => &mut self.player2_score,
            };
            *score += 1;
            if *score >= WINNING_SCORE {
                self.winner = Some(player);
            }
        }

        let round = DuelRound {
            player,
            choice,
            roll,
            won,
        };
        self.current_player = player.other();
        self.pending_choice = None;
        self.last_round = Some(round);
        Some(round)
    }

    /// Back to 0-0 with player 1 to call.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
