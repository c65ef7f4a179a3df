//! Session lifecycle for Love Duel.
//!
//! Ties the rule engines and the forfeit selector together behind a single
//! [`SessionCoordinator`] that the presentation layer drives with
//! [`SessionAction`]s. State is persisted through an injected
//! [`KeyValueStore`]; [`navigation`] decides where to send the user when a
//! record a screen needs is missing.

pub mod config;
pub mod countdown;
pub mod error;
pub mod history;
pub mod navigation;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use countdown::{Countdown, CountdownTick};
pub use error::{SessionError, SessionResult};
pub use history::{History, HistoryEntry};
pub use navigation::Screen;
pub use session::{Dispatch, SessionAction, SessionCoordinator, SessionSnapshot};
pub use storage::{KeyValueStore, MemoryStore};
