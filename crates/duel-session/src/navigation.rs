//! Screen prerequisites and redirects.
//!
//! Each screen needs certain persisted records. When one is missing or
//! malformed the host is sent back to the nearest earlier screen that
//! produces it, which may in turn redirect further back.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SessionError, SessionResult};
use crate::storage::{
    CURRENT_FORFEIT, GAME_SETTINGS, KeyValueStore, PLAYER_DATA, USED_TASKS, is_readable, read,
};

/// A screen of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Enter player names and genders.
    PlayerEntry,
    /// Pick the session difficulty.
    Difficulty,
    /// Pick a mini-game.
    GameSelect,
    /// The board game.
    BoardGame,
    /// The dice duel.
    DiceDuel,
    /// The forfeit and its countdown.
    Forfeit,
}

impl Screen {
    /// Storage keys this screen reads.
    pub fn requires(self) -> &'static [&'static str] {
        match self {
            Self::PlayerEntry => &[],
            Self::Difficulty => &[PLAYER_DATA],
            Self::GameSelect | Self::BoardGame | Self::DiceDuel => &[GAME_SETTINGS],
            Self::Forfeit => &[GAME_SETTINGS, CURRENT_FORFEIT],
        }
    }

    /// The screen that writes `key`.
    pub fn producer_of(key: &str) -> Self {
        match key {
            GAME_SETTINGS => Self::Difficulty,
            CURRENT_FORFEIT => Self::GameSelect,
            USED_TASKS => Self::Forfeit,
            _ => Self::PlayerEntry,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerEntry => write!(f, "player entry"),
            Self::Difficulty => write!(f, "difficulty selection"),
            Self::GameSelect => write!(f, "game selection"),
            Self::BoardGame => write!(f, "tic tac toe"),
            Self::DiceDuel => write!(f, "dice duel"),
            Self::Forfeit => write!(f, "forfeit"),
        }
    }
}

/// The screen to actually show when `target` is requested.
pub fn resolve(target: Screen, store: &impl KeyValueStore) -> Screen {
    let mut screen = target;
    while let Some(missing) = screen
        .requires()
        .iter()
        .find(|key| !is_readable(store, key))
    {
        let redirect = Screen::producer_of(missing);
        debug!(%screen, key = *missing, %redirect, "prerequisite missing, redirecting");
        screen = redirect;
    }
    screen
}

/// Read a record a screen depends on, or report where to go to produce it.
pub fn require<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &'static str,
) -> SessionResult<T> {
    read(store, key).ok_or(SessionError::MissingPrerequisite {
        key,
        redirect: Screen::producer_of(key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const PLAYERS: &str = r#"{"player1":{"name":"Alex","gender":"male"},"player2":{"name":"Sam","gender":"female"}}"#;

    fn settings_json() -> String {
        format!(
            r#"{{"difficulty":"easy","players":{PLAYERS},"currentGame":null,"scores":{{"player1":0,"player2":0}}}}"#
        )
    }

    #[test]
    fn empty_store_goes_to_player_entry() {
        let store = MemoryStore::new();
        for &screen in &[
            Screen::Difficulty,
            Screen::GameSelect,
            Screen::BoardGame,
            Screen::DiceDuel,
            Screen::Forfeit,
        ] {
            assert_eq!(resolve(screen, &store), Screen::PlayerEntry);
        }
    }

    #[test]
    fn players_only_goes_to_difficulty() {
        let mut store = MemoryStore::new();
        store.set(PLAYER_DATA, PLAYERS.to_string());
        assert_eq!(resolve(Screen::Difficulty, &store), Screen::Difficulty);
        assert_eq!(resolve(Screen::BoardGame, &store), Screen::Difficulty);
    }

    #[test]
    fn forfeit_without_assignment_goes_to_game_select() {
        let mut store = MemoryStore::new();
        store.set(PLAYER_DATA, PLAYERS.to_string());
        store.set(GAME_SETTINGS, settings_json());
        assert_eq!(resolve(Screen::DiceDuel, &store), Screen::DiceDuel);
        assert_eq!(resolve(Screen::Forfeit, &store), Screen::GameSelect);
    }

    #[test]
    fn malformed_settings_redirect() {
        let mut store = MemoryStore::new();
        store.set(PLAYER_DATA, PLAYERS.to_string());
        store.set(GAME_SETTINGS, "[]".to_string());
        assert_eq!(resolve(Screen::GameSelect, &store), Screen::Difficulty);
    }

    #[test]
    fn require_reports_redirect() {
        let store = MemoryStore::new();
        let err = require::<crate::storage::GameSettingsRecord>(&store, GAME_SETTINGS).unwrap_err();
        assert!(matches!(
            err,
            SessionError::MissingPrerequisite {
                key: GAME_SETTINGS,
                redirect: Screen::Difficulty
            }
        ));
    }
}
