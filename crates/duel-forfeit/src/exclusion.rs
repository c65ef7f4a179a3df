//! Session-scoped record of forfeits already served.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use duel_core::Activity;

/// Task keys served so far in a session (the `usedTasks` record).
///
/// Grows monotonically until explicitly cleared. Serializes as a JSON array
/// of task strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    tasks: BTreeSet<String>,
}

impl ExclusionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a served task. Returns false if it was already present.
    pub fn insert(&mut self, task: impl Into<String>) -> bool {
        self.tasks.insert(task.into())
    }

    /// Whether `task` has been served.
    pub fn contains(&self, task: &str) -> bool {
        self.tasks.contains(task)
    }

    /// Whether `activity` has been served.
    pub fn excludes(&self, activity: &Activity) -> bool {
        self.contains(&activity.task)
    }

    /// Forget every served task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Number of served tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing has been served yet.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Served task keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(Into::into).collect(),
        }
    }
}
