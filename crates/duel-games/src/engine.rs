//! A common capability over the two mini-games.
//!
//! Both rule engines implement [`GameEngine`]; [`Game`] is the tagged union
//! the session coordinator holds and dispatches actions through. Actions that
//! belong to the other game are ignored.

use serde::{Deserialize, Serialize};

use duel_core::RoundWinner;

use crate::board::BoardState;
use crate::duel::{DuelState, Parity};

/// Which mini-game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Three-in-a-row on a 3x3 grid.
    #[serde(rename = "tic-tac-toe")]
    Board,
    /// Even/odd dice duel, first to three.
    #[serde(rename = "dice-roll")]
    Duel,
}

impl GameKind {
    /// Both games, in menu order.
    pub fn all() -> &'static [Self] {
        &[Self::Board, Self::Duel]
    }

    /// Parse a game id such as `"tic-tac-toe"` or `"dice"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tic-tac-toe" | "tictactoe" | "board" => Some(Self::Board),
            "dice-roll" | "dice" | "duel" => Some(Self::Duel),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board => write!(f, "Tic Tac Toe"),
            Self::Duel => write!(f, "Dice Duel"),
        }
    }
}

/// A player input addressed to the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Claim a board cell for the mark whose turn it is.
    Move(usize),
    /// Call even or odd in the dice duel.
    Choose(Parity),
    /// Resolve the duel with a rolled face.
    Roll(u8),
}

/// What an action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The action was not valid in the current state; nothing changed.
    Ignored,
    /// The game advanced and is still in progress.
    Continued,
    /// The game reached a terminal state.
    Finished(RoundWinner),
}

/// The operations every mini-game supports.
pub trait GameEngine {
    /// Apply a player input.
    fn apply_action(&mut self, action: GameAction) -> Transition;

    /// The result of the game, once it is over.
    fn current_outcome(&self) -> Option<RoundWinner>;

    /// Start the game over. Never touches session state.
    fn reset(&mut self);
}

impl GameEngine for BoardState {
    fn apply_action(&mut self, action: GameAction) -> Transition {
        let GameAction::Move(index) = action else {
            return Transition::Ignored;
        };
        let next = self.play(index);
        if next == *self {
            return Transition::Ignored;
        }
        *self = next;
        match self.status().winner() {
            Some(winner) => Transition::Finished(winner),
            None => Transition::Continued,
        }
    }

    fn current_outcome(&self) -> Option<RoundWinner> {
        self.status().winner()
    }

    fn reset(&mut self) {
        *self = BoardState::new();
    }
}

impl GameEngine for DuelState {
    fn apply_action(&mut self, action: GameAction) -> Transition {
        match action {
            GameAction::Choose(choice) => {
                if self.submit_choice(choice) {
                    Transition::Continued
                } else {
                    Transition::Ignored
                }
            }
            GameAction::Roll(face) => match self.resolve_roll(face) {
                None => Transition::Ignored,
                Some(_) => match self.winner() {
                    Some(winner) => Transition::Finished(winner.into()),
                    None => Transition::Continued,
                },
            },
            GameAction::Move(_) => Transition::Ignored,
        }
    }

    fn current_outcome(&self) -> Option<RoundWinner> {
        self.winner().map(RoundWinner::from)
    }

    fn reset(&mut self) {
        DuelState::reset(self);
    }
}

/// The active mini-game and its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Game {
    /// Board game state.
    Board(BoardState),
    /// Dice duel state.
    Duel(DuelState),
}

impl Game {
    /// A fresh game of `kind`.
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::Board => Self::Board(BoardState::new()),
            GameKind::Duel => Self::Duel(DuelState::new()),
        }
    }

    /// Which game this is.
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Board(_) => GameKind::Board,
            Self::Duel(_) => GameKind::Duel,
        }
    }

    /// The board state, if this is the board game.
    pub fn as_board(&self) -> Option<&BoardState> {
        match self {
            Self::Board(b) => Some(b),
            Self::Duel(_) => None,
        }
    }

    /// The duel state, if this is the dice duel.
    pub fn as_duel(&self) -> Option<&DuelState> {
        match self {
            Self::Duel(d) => Some(d),
            Self::Board(_) => None,
        }
    }

    /// Whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.current_outcome().is_some()
    }
}

impl GameEngine for Game {
    fn apply_action(&mut self, action: GameAction) -> Transition {
        match self {
            Self::Board(b) => b.apply_action(action),
            Self::Duel(d) => d.apply_action(action),
        }
    }

    fn current_outcome(&self) -> Option<RoundWinner> {
        match self {
            Self::Board(b) => b.current_outcome(),
            Self::Duel(d) => d.current_outcome(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Board(b) => GameEngine::reset(b),
            Self::Duel(d) => GameEngine::reset(d),
        }
    }
}
