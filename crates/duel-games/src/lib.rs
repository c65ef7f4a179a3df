//! Rule engines for the Love Duel mini-games.
//!
//! Provides the three-in-a-row board game, the even/odd dice duel, the
//! spinning-die animation that precedes a duel roll, and the [`GameEngine`]
//! capability with the [`Game`] tagged union the session dispatches through.
//! Every engine is deterministic given its inputs; randomness comes in as a
//! seeded `StdRng` or as an explicit die face.

pub mod board;
pub mod duel;
pub mod engine;
pub mod rolling;

pub use board::{BoardState, BoardStatus, Mark, WINNING_LINES};
pub use duel::{DuelPhase, DuelRound, DuelState, Parity, WINNING_SCORE, roll_die};
pub use engine::{Game, GameAction, GameEngine, GameKind, Transition};
pub use rolling::{RollAnimation, RollFrame};
