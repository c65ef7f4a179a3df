//! History storage and export.

use serde::{Deserialize, Serialize};

use duel_core::{RoundWinner, SessionSettings};

use super::entry::HistoryEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export as plain text, naming players from `settings`.
    pub fn export_text(&self, settings: &SessionSettings) -> String {
        let name = |slot| settings.player(slot).name().to_string();
        let mut out = format!(
            "Love Duel: {} vs {} ({})\n\n",
            settings.players.player1.name(),
            settings.players.player2.name(),
            settings.difficulty
        );
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            let line = match entry {
                HistoryEntry::GameStarted { game, .. } => format!("Started {game}"),
                HistoryEntry::RoundEnded { game, winner, .. } => match winner.slot() {
                    Some(slot) => format!("{} won {game}", name(slot)),
                    None => format!("{game} ended in a draw"),
                },
                HistoryEntry::ForfeitServed {
                    task,
                    loser,
                    rerolled,
                    ..
                } => {
                    let verb = if *rerolled { "skipped to" } else { "drew" };
                    format!("{} {verb} forfeit: {task}", name(*loser))
                }
                HistoryEntry::ForfeitCompleted { task, loser, .. } => {
                    format!("{} completed: {task}", name(*loser))
                }
                HistoryEntry::PoolExhausted {
                    difficulty, gender, ..
                } => format!("All {difficulty} {gender} forfeits served, starting over"),
            };
            out.push_str(&format!("[{time}] {line}\n"));
        }
        out
    }

    /// Rounds won per player, counting only decisive rounds.
    pub fn wins(&self) -> (usize, usize) {
        self.entries.iter().fold((0, 0), |(p1, p2), e| match e {
            HistoryEntry::RoundEnded {
                winner: RoundWinner::Player1,
                ..
            } => (p1 + 1, p2),
            HistoryEntry::RoundEnded {
                winner: RoundWinner::Player2,
                ..
            } => (p1, p2 + 1),
            _ => (p1, p2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use duel_core::{Difficulty, Gender, Player, PlayerSlot};
    use duel_games::GameKind;

    fn settings() -> SessionSettings {
        SessionSettings::new(
            Difficulty::Easy,
            Player::new("Alex", Gender::Male).unwrap(),
            Player::new("Sam", Gender::Female).unwrap(),
        )
    }

    fn at(secs: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 20, 0, secs).unwrap()
    }

    #[test]
    fn empty_history() {
        let h = History::new();
        assert!(h.is_empty());
        assert_eq!(h.wins(), (0, 0));
        assert!(h.export_text(&settings()).starts_with("Love Duel: Alex vs Sam (easy)"));
    }

    #[test]
    fn export_names_players() {
        let mut h = History::new();
        h.append(HistoryEntry::GameStarted {
            game: GameKind::Board,
            timestamp: at(0),
        });
        h.append(HistoryEntry::RoundEnded {
            game: GameKind::Board,
            winner: RoundWinner::Player1,
            timestamp: at(5),
        });
        h.append(HistoryEntry::ForfeitServed {
            task: "Serenade".to_string(),
            loser: PlayerSlot::Player2,
            rerolled: false,
            timestamp: at(6),
        });
        h.append(HistoryEntry::ForfeitCompleted {
            task: "Serenade".to_string(),
            loser: PlayerSlot::Player2,
            timestamp: at(9),
        });

        let text = h.export_text(&settings());
        assert!(text.contains("[20:00:05] Alex won Tic Tac Toe"));
        assert!(text.contains("Sam drew forfeit: Serenade"));
        assert!(text.contains("[20:00:09] Sam completed: Serenade"));
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn draws_do_not_count_as_wins() {
        let mut h = History::new();
        for winner in [RoundWinner::Draw, RoundWinner::Player2, RoundWinner::Player2] {
            h.append(HistoryEntry::RoundEnded {
                game: GameKind::Duel,
                winner,
                timestamp: at(0),
            });
        }
        assert_eq!(h.wins(), (0, 2));
        assert!(h.export_text(&settings()).contains("Dice Duel ended in a draw"));
    }
}
