//! Forfeit content and non-repeating selection for Love Duel.
//!
//! Provides the built-in catalog partitioned by difficulty and gender, a
//! validated [`ContentPool`] that can also be loaded from JSON, the
//! session-scoped [`ExclusionSet`] of served tasks, and the
//! [`ForfeitSelector`] with its reroll and completion policies.

pub mod catalog;
pub mod error;
pub mod exclusion;
pub mod pool;
pub mod selector;

pub use error::{ForfeitError, ForfeitResult};
pub use exclusion::ExclusionSet;
pub use pool::ContentPool;
pub use selector::{ForfeitSelector, Selection};
