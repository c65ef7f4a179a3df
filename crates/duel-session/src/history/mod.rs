//! Timestamped record of what happened in a session.

pub mod entry;
pub mod log;

pub use entry::HistoryEntry;
pub use log::History;
