//! Non-repeating forfeit selection.
//!
//! [`ForfeitSelector::select`] draws uniformly from the candidates of a
//! partition that have not been served yet. When every candidate has been
//! served the exclusion set is cleared and the draw falls back to the full
//! partition. Selection never records the chosen task itself; the caller
//! does that on reroll or completion.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use duel_core::{Activity, Difficulty, Gender};

use crate::error::{ForfeitError, ForfeitResult};
use crate::exclusion::ExclusionSet;
use crate::pool::ContentPool;

/// The outcome of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The chosen activity.
    pub activity: Activity,
    /// Whether every candidate had been served, forcing the exclusion set
    /// to be cleared before the draw.
    pub pool_exhausted: bool,
}

/// Picks forfeit activities from a content pool.
#[derive(Debug, Clone, Copy)]
pub struct ForfeitSelector<'a> {
    pool: &'a ContentPool,
}

impl<'a> ForfeitSelector<'a> {
    /// A selector over `pool`.
    pub fn new(pool: &'a ContentPool) -> Self {
        Self { pool }
    }

    /// Draw an activity for a loser of `gender` at `difficulty`.
    pub fn select(
        &self,
        difficulty: Difficulty,
        gender: Gender,
        exclusion: &mut ExclusionSet,
        rng: &mut StdRng,
    ) -> ForfeitResult<Selection> {
        let candidates = self.pool.candidates(difficulty, gender);
        if candidates.is_empty() {
            return Err(ForfeitError::EmptyPool { difficulty, gender });
        }

        let available: Vec<&Activity> = candidates
            .iter()
            .filter(|a| !exclusion.excludes(a))
            .collect();

        if available.is_empty() {
            info!(
                %difficulty,
                %gender,
                served = exclusion.len(),
                "forfeit pool exhausted, clearing served tasks"
            );
            exclusion.clear();
            let activity = candidates[rng.random_range(0..candidates.len())].clone();
            return Ok(Selection {
                activity,
                pool_exhausted: true,
            });
        }

        let activity = available[rng.random_range(0..available.len())].clone();
        debug!(task = %activity.task, remaining = available.len(), "forfeit selected");
        Ok(Selection {
            activity,
            pool_exhausted: false,
        })
    }

    /// Replace `current` with a fresh draw for the same loser.
    ///
    /// `current` is recorded as served first, so the replacement differs from
    /// it unless that exhausts the partition.
    pub fn reroll(
        &self,
        current: &Activity,
        difficulty: Difficulty,
        gender: Gender,
        exclusion: &mut ExclusionSet,
        rng: &mut StdRng,
    ) -> ForfeitResult<Selection> {
        exclusion.insert(current.task.clone());
        self.select(difficulty, gender, exclusion, rng)
    }

    /// Record `served` as done so it is not drawn again this session.
    pub fn complete(served: &Activity, exclusion: &mut ExclusionSet) {
        exclusion.insert(served.task.clone());
    }
}
