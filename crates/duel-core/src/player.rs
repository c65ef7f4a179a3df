use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A player's gender, used to pick the forfeit catalog partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male player.
    Male,
    /// Female player.
    Female,
}

impl Gender {
    /// Both genders, in catalog order.
    pub fn all() -> &'static [Self] {
        &[Self::Male, Self::Female]
    }

    /// Parse a gender from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    /// The first player. Always moves first.
    Player1,
    /// The second player.
    Player2,
}

impl PlayerSlot {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player1 => write!(f, "player1"),
            Self::Player2 => write!(f, "player2"),
        }
    }
}

/// A named participant. Immutable once the session has started.
///
/// Deserialization goes through [`Player::new`], so stored records with a
/// blank name are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    name: String,
    gender: Gender,
}

#[derive(Deserialize)]
struct PlayerRecord {
    name: String,
    gender: Gender,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = CoreError;

    fn try_from(record: PlayerRecord) -> CoreResult<Self> {
        Self::new(record.name, record.gender)
    }
}

impl Player {
    /// Create a player, trimming the name. Empty names are rejected.
    pub fn new(name: impl Into<String>, gender: Gender) -> CoreResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self { name, gender })
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// The pair of players entered at session start (the `playerData` record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    /// Player in the first seat.
    pub player1: Player,
    /// Player in the second seat.
    pub player2: Player,
}

impl Players {
    /// Pair two players.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self { player1, player2 }
    }

    /// The player sitting in `slot`.
    pub fn get(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_is_trimmed() {
        let p = Player::new("  Alex ", Gender::Male).unwrap();
        assert_eq!(p.name(), "Alex");
        assert_eq!(p.gender(), Gender::Male);
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            Player::new("   ", Gender::Female),
            Err(CoreError::EmptyName)
        ));
    }

    #[test]
    fn slot_other() {
        assert_eq!(PlayerSlot::Player1.other(), PlayerSlot::Player2);
        assert_eq!(PlayerSlot::Player2.other(), PlayerSlot::Player1);
    }

    #[test]
    fn gender_parse() {
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse(" f "), Some(Gender::Female));
        assert_eq!(Gender::parse("other"), None);
    }

    #[test]
    fn players_lookup() {
        let players = Players::new(
            Player::new("Alex", Gender::Male).unwrap(),
            Player::new("Sam", Gender::Female).unwrap(),
        );
        assert_eq!(players.get(PlayerSlot::Player1).name(), "Alex");
        assert_eq!(players.get(PlayerSlot::Player2).name(), "Sam");
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let p = Player::new("Sam", Gender::Female).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"name":"Sam","gender":"female"}"#);
        let slot = serde_json::to_string(&PlayerSlot::Player2).unwrap();
        assert_eq!(slot, r#""player2""#);
    }

    #[test]
    fn deserialize_validates_name() {
        let p: Player = serde_json::from_str(r#"{"name":"  Kai ","gender":"male"}"#).unwrap();
        assert_eq!(p.name(), "Kai");
        for blank in ["", "   "] {
            let json = format!(r#"{{"name":"{blank}","gender":"female"}}"#);
            assert!(serde_json::from_str::<Player>(&json).is_err(), "{json}");
        }
    }
}
