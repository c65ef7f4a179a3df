//! Property and scenario tests for forfeit selection.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use duel_core::{Difficulty, Gender};
use duel_forfeit::{ContentPool, ExclusionSet, ForfeitSelector};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard)
    ]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

#[test]
fn full_easy_male_exclusion_resets() {
    let pool = ContentPool::builtin();
    let selector = ForfeitSelector::new(&pool);
    let mut served: ExclusionSet = pool
        .candidates(Difficulty::Easy, Gender::Male)
        .iter()
        .map(|a| a.task.clone())
        .collect();

    let s = selector
        .select(
            Difficulty::Easy,
            Gender::Male,
            &mut served,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

    assert!(s.pool_exhausted);
    assert!(served.is_empty());
    assert!(
        pool.candidates(Difficulty::Easy, Gender::Male)
            .iter()
            .any(|a| a.task == s.activity.task)
    );
}

proptest! {
    #[test]
    fn selection_respects_exclusion(
        seed in any::<u64>(),
        d in difficulty(),
        g in gender(),
        mask in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let pool = ContentPool::builtin();
        let selector = ForfeitSelector::new(&pool);
        let candidates = pool.candidates(d, g);
        let mut served: ExclusionSet = candidates
            .iter()
            .zip(mask.iter().cycle())
            .filter(|(_, excluded)| **excluded)
            .map(|(a, _)| a.task.clone())
            .collect();
        let before = served.clone();
        let available = candidates.iter().filter(|a| !before.excludes(a)).count();

        let s = selector
            .select(d, g, &mut served, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert!(candidates.contains(&s.activity));
        if available == 0 {
            prop_assert!(s.pool_exhausted);
            prop_assert!(served.is_empty());
        } else {
            prop_assert!(!s.pool_exhausted);
            prop_assert!(!before.excludes(&s.activity));
            prop_assert_eq!(served, before);
        }
    }

    #[test]
    fn serving_every_task_visits_each_once(seed in any::<u64>(), d in difficulty(), g in gender()) {
        let pool = ContentPool::builtin();
        let selector = ForfeitSelector::new(&pool);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut served = ExclusionSet::new();
        let size = pool.candidates(d, g).len();

        for _ in 0..size {
            let s = selector.select(d, g, &mut served, &mut rng).unwrap();
            prop_assert!(!s.pool_exhausted);
            prop_assert!(served.insert(s.activity.task.clone()));
        }
        prop_assert_eq!(served.len(), size);
    }
}
