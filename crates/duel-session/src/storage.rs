//! Key-value storage port and the records persisted through it.
//!
//! The session never talks to a concrete store. Hosts inject anything that
//! implements [`KeyValueStore`]; values are JSON strings. [`MemoryStore`] is
//! the in-process implementation used by tests and embedders.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use duel_core::{Difficulty, Forfeit, Players, Scores, SessionSettings};
use duel_forfeit::ExclusionSet;
use duel_games::GameKind;

use crate::countdown::Countdown;
use crate::error::{SessionError, SessionResult};

/// The two players entered at session start.
pub const PLAYER_DATA: &str = "playerData";
/// Session settings plus running scores and the active game.
pub const GAME_SETTINGS: &str = "gameSettings";
/// The forfeit currently assigned to a loser.
pub const CURRENT_FORFEIT: &str = "currentPunishment";
/// Task keys served so far in the session.
pub const USED_TASKS: &str = "usedTasks";
/// Reroll flag and countdown of the pending forfeit.
pub const FORFEIT_STATE: &str = "punishmentState";

/// A string key-value store.
pub trait KeyValueStore {
    /// The value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove `key`.
    fn clear(&mut self, key: &str);
}

/// An in-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The `gameSettings` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettingsRecord {
    /// Session difficulty.
    pub difficulty: Difficulty,
    /// The two players.
    pub players: Players,
    /// The mini-game in progress, if any.
    pub current_game: Option<GameKind>,
    /// Running match wins.
    pub scores: Scores,
}

impl GameSettingsRecord {
    /// The immutable part of the record.
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            difficulty: self.difficulty,
            players: self.players.clone(),
        }
    }
}

/// The `punishmentState` record, kept alongside `currentPunishment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForfeitStateRecord {
    /// Whether the pending forfeit has already been swapped.
    pub reroll_used: bool,
    /// The pending forfeit's countdown.
    pub countdown: Countdown,
}

/// Read and decode `key`. Absent and malformed values both yield `None`.
pub fn read<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

/// Encode `value` and store it under `key`.
pub fn write<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &'static str,
    value: &T,
) -> SessionResult<()> {
    let json =
        serde_json::to_string(value).map_err(|source| SessionError::Serialize { key, source })?;
    store.set(key, json);
    Ok(())
}

/// Whether `key` holds a value that decodes as the record it names.
/// Unknown keys only need to be present.
pub fn is_readable(store: &impl KeyValueStore, key: &str) -> bool {
    match key {
        PLAYER_DATA => read::<Players>(store, key).is_some(),
        GAME_SETTINGS => read::<GameSettingsRecord>(store, key).is_some(),
        CURRENT_FORFEIT => read::<Forfeit>(store, key).is_some(),
        USED_TASKS => read::<ExclusionSet>(store, key).is_some(),
        FORFEIT_STATE => read::<ForfeitStateRecord>(store, key).is_some(),
        _ => store.get(key).is_some(),
    }
}
