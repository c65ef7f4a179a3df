//! Core types for Love Duel: players, session settings, forfeit activities,
//! and round outcomes.
//!
//! This crate holds the data model shared by the rule engines, the forfeit
//! selector and the session coordinator. It has no behavior beyond
//! validation and small lookups, and every type round-trips through JSON.

/// Forfeit activities and the forfeit assigned to a losing player.
pub mod activity;
/// Error types used throughout the crate.
pub mod error;
/// Round winners and outcomes produced by the rule engines.
pub mod outcome;
/// Players, genders and player slots.
pub mod player;
/// Difficulty, session settings and running scores.
pub mod settings;

/// Re-export activity types.
pub use activity::{Activity, Forfeit};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export outcome types.
pub use outcome::{RoundOutcome, RoundWinner};
/// Re-export player types.
pub use player::{Gender, Player, PlayerSlot, Players};
/// Re-export settings types.
pub use settings::{Difficulty, Scores, SessionSettings};
