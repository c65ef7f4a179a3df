//! The forfeit content pool, partitioned by (difficulty, gender).
//!
//! Every partition is non-empty and its task keys are unique. The built-in
//! catalog is always available; a custom catalog can be loaded from JSON:
//!
//! ```text
//! {
//!   "easy":   { "male": [ { "task": "...", "description": "...", "durationSeconds": 60 } ],
//!               "female": [ ... ] },
//!   "medium": { ... },
//!   "hard":   { ... }
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use duel_core::{Activity, Difficulty, Gender};

use crate::catalog;
use crate::error::{ForfeitError, ForfeitResult};

type CatalogDocument = BTreeMap<Difficulty, BTreeMap<Gender, Vec<Activity>>>;

/// A fixed catalog of forfeit activities.
#[derive(Debug, Clone)]
pub struct ContentPool {
    partitions: HashMap<(Difficulty, Gender), Vec<Activity>>,
}

impl Default for ContentPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentPool {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let mut partitions = HashMap::new();
        for &difficulty in Difficulty::all() {
            for &gender in Gender::all() {
                let activities = catalog::table(difficulty, gender)
                    .iter()
                    .map(|&(task, description, secs)| Activity {
                        task: task.to_string(),
                        description: description.to_string(),
                        duration_seconds: secs,
                    })
                    .collect();
                partitions.insert((difficulty, gender), activities);
            }
        }
        Self { partitions }
    }

    /// Load a catalog from a JSON document.
    ///
    /// All six partitions must be present and non-empty, task keys must be
    /// unique within a partition, and durations must be positive.
    pub fn from_json(json: &str) -> ForfeitResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        let mut partitions = HashMap::new();
        for &difficulty in Difficulty::all() {
            for &gender in Gender::all() {
                let activities = doc
                    .get(&difficulty)
                    .and_then(|by_gender| by_gender.get(&gender))
                    .cloned()
                    .unwrap_or_default();
                partitions.insert((difficulty, gender), activities);
            }
        }
        Self::from_partitions(partitions)
    }

    /// Build a pool from explicit partitions, validating every entry.
    pub fn from_partitions(
        partitions: HashMap<(Difficulty, Gender), Vec<Activity>>,
    ) -> ForfeitResult<Self> {
        for &difficulty in Difficulty::all() {
            for &gender in Gender::all() {
                let activities = partitions
                    .get(&(difficulty, gender))
                    .filter(|a| !a.is_empty())
                    .ok_or(ForfeitError::EmptyPool { difficulty, gender })?;

                let mut seen = HashSet::new();
                for a in activities {
                    Activity::new(a.task.clone(), a.description.clone(), a.duration_seconds)?;
                    if !seen.insert(a.task.as_str()) {
                        return Err(ForfeitError::DuplicateTask {
                            task: a.task.clone(),
                            difficulty,
                            gender,
                        });
                    }
                }
            }
        }
        Ok(Self { partitions })
    }

    /// The candidates for a partition.
    pub fn candidates(&self, difficulty: Difficulty, gender: Gender) -> &[Activity] {
        self.partitions
            .get(&(difficulty, gender))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of activities across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Whether the pool holds no activities at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
