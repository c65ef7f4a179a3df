use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::player::PlayerSlot;

/// A forfeit activity from the content pool. The `task` is its unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Short title, unique within its pool partition.
    pub task: String,
    /// What the losing player has to do.
    pub description: String,
    /// How long the countdown runs for this activity.
    pub duration_seconds: u32,
}

impl Activity {
    /// Create an activity. The task must be non-empty and the duration positive.
    pub fn new(
        task: impl Into<String>,
        description: impl Into<String>,
        duration_seconds: u32,
    ) -> CoreResult<Self> {
        let task = task.into();
        if task.trim().is_empty() {
            return Err(CoreError::EmptyTask);
        }
        if duration_seconds == 0 {
            return Err(CoreError::ZeroDuration(task));
        }
        Ok(Self {
            task,
            description: description.into(),
            duration_seconds,
        })
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}s)", self.task, self.duration_seconds)
    }
}

/// An activity assigned to the player who lost a round
/// (the `currentPunishment` record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forfeit {
    /// The activity to perform.
    #[serde(flatten)]
    pub activity: Activity,
    /// Who has to perform it.
    pub loser: PlayerSlot,
}

impl Forfeit {
    /// Tag an activity with the losing player.
    pub fn new(activity: Activity, loser: PlayerSlot) -> Self {
        Self { activity, loser }
    }

    /// The task key of the assigned activity.
    pub fn task(&self) -> &str {
        &self.activity.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_rejected() {
        assert!(matches!(
            Activity::new("Sing", "Sing a song", 0),
            Err(CoreError::ZeroDuration(task)) if task == "Sing"
        ));
    }

    #[test]
    fn empty_task_rejected() {
        assert!(matches!(
            Activity::new(" ", "nothing", 30),
            Err(CoreError::EmptyTask)
        ));
    }

    #[test]
    fn display() {
        let a = Activity::new("Sing", "Sing a song", 45).unwrap();
        assert_eq!(a.to_string(), "Sing (45s)");
    }

    #[test]
    fn forfeit_serializes_flat() {
        let f = Forfeit::new(
            Activity::new("Sing", "Sing a song", 45).unwrap(),
            PlayerSlot::Player2,
        );
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value["task"], "Sing");
        assert_eq!(value["durationSeconds"], 45);
        assert_eq!(value["loser"], "player2");

        let back: Forfeit = serde_json::from_value(value).unwrap();
        assert_eq!(back, f);
        assert_eq!(back.task(), "Sing");
    }
}
