//! End-to-end session scenarios driven through `dispatch`.

use duel_core::{Difficulty, Gender, Player, PlayerSlot, RoundWinner, SessionSettings};
use duel_forfeit::ContentPool;
use duel_games::{GameKind, Parity};
use duel_session::navigation::{self, Screen};
use duel_session::storage::{CURRENT_FORFEIT, FORFEIT_STATE, GAME_SETTINGS, USED_TASKS};
use duel_session::{
    Dispatch, KeyValueStore, MemoryStore, SessionAction, SessionConfig, SessionCoordinator,
    SessionError,
};
use proptest::prelude::*;

fn settings(difficulty: Difficulty) -> SessionSettings {
    SessionSettings::new(
        difficulty,
        Player::new("Robin", Gender::Female).unwrap(),
        Player::new("Kai", Gender::Male).unwrap(),
    )
}

fn start(seed: u64) -> SessionCoordinator<MemoryStore> {
    SessionCoordinator::start(
        settings(Difficulty::Easy),
        SessionConfig::default().with_seed(seed),
        MemoryStore::new(),
        ContentPool::builtin(),
    )
    .unwrap()
}

/// Player 2 takes the left column while player 1 scatters.
fn player2_wins_board(s: &mut SessionCoordinator<MemoryStore>) {
    s.dispatch(SessionAction::SelectGame(GameKind::Board))
        .unwrap();
    for cell in [1, 0, 2, 3, 4] {
        s.dispatch(SessionAction::Move(cell)).unwrap();
    }
    let last = s.dispatch(SessionAction::Move(6)).unwrap();
    assert!(matches!(
        last,
        Dispatch::RoundEnded(o) if o.winner == RoundWinner::Player2
    ));
}

#[test]
fn exclusion_survives_new_games() {
    let mut s = start(3);
    player2_wins_board(&mut s);
    let first = s.current_forfeit().unwrap().clone();
    assert_eq!(first.loser, PlayerSlot::Player1);
    s.dispatch(SessionAction::Complete).unwrap();

    player2_wins_board(&mut s);
    let second = s.current_forfeit().unwrap().clone();
    assert_ne!(first.activity.task, second.activity.task);
    assert!(s.exclusion().contains(&first.activity.task));
    assert_eq!(s.scores().player2, 2);
}

#[test]
fn loser_gender_picks_partition() {
    let mut s = start(9);
    player2_wins_board(&mut s);
    let forfeit = s.current_forfeit().unwrap();
    assert!(
        ContentPool::builtin()
            .candidates(Difficulty::Easy, Gender::Female)
            .contains(&forfeit.activity)
    );
}

#[test]
fn whole_partition_served_then_starts_over() {
    let mut s = start(21);
    let size = ContentPool::builtin()
        .candidates(Difficulty::Easy, Gender::Female)
        .len();

    let mut seen = Vec::new();
    for _ in 0..size {
        player2_wins_board(&mut s);
        let task = s.current_forfeit().unwrap().activity.task.clone();
        assert!(!seen.contains(&task), "{task} served twice");
        seen.push(task);
        s.dispatch(SessionAction::Complete).unwrap();
    }
    assert_eq!(s.exclusion().len(), size);

    player2_wins_board(&mut s);
    assert!(s.exclusion().is_empty());
    let text = s.history().export_text(s.settings());
    assert!(text.contains("All easy female forfeits served"));
}

#[test]
fn resume_restores_pending_forfeit() {
    let mut s = start(5);
    player2_wins_board(&mut s);
    let pending = s.current_forfeit().unwrap().clone();
    let scores = s.scores();
    let store = s.into_store();

    assert_eq!(
        navigation::resolve(Screen::Forfeit, &store),
        Screen::Forfeit
    );

    let mut resumed =
        SessionCoordinator::resume(store, ContentPool::builtin(), SessionConfig::default())
            .unwrap();
    assert_eq!(resumed.current_forfeit(), Some(&pending));
    assert_eq!(resumed.scores(), scores);
    assert_eq!(resumed.game().map(|g| g.kind()), Some(GameKind::Board));
    assert_eq!(
        resumed.countdown().remaining(),
        pending.activity.duration_seconds
    );

    resumed.dispatch(SessionAction::Complete).unwrap();
    assert!(resumed.exclusion().contains(pending.task()));
    assert_eq!(
        navigation::resolve(Screen::Forfeit, resumed.store()),
        Screen::GameSelect
    );
}

#[test]
fn used_reroll_stays_used_after_resume() {
    let mut s = start(5);
    player2_wins_board(&mut s);
    assert_eq!(s.dispatch(SessionAction::Reroll).unwrap(), Dispatch::Applied);
    let pending = s.current_forfeit().unwrap().clone();

    let mut resumed = SessionCoordinator::resume(
        s.into_store(),
        ContentPool::builtin(),
        SessionConfig::default(),
    )
    .unwrap();
    assert!(!resumed.reroll_available());
    assert_eq!(
        resumed.dispatch(SessionAction::Reroll).unwrap(),
        Dispatch::Ignored
    );
    assert_eq!(resumed.current_forfeit(), Some(&pending));
    assert_eq!(resumed.exclusion().len(), 1);
}

#[test]
fn started_countdown_survives_resume() {
    let mut s = start(8);
    player2_wins_board(&mut s);
    s.dispatch(SessionAction::StartTimer).unwrap();
    s.dispatch(SessionAction::Tick).unwrap();
    s.dispatch(SessionAction::StopTimer).unwrap();
    let remaining = s.countdown().remaining();

    let mut resumed = SessionCoordinator::resume(
        s.into_store(),
        ContentPool::builtin(),
        SessionConfig::default(),
    )
    .unwrap();
    assert_eq!(resumed.countdown().remaining(), remaining);
    assert!(resumed.countdown().has_started());
    assert_eq!(
        resumed.dispatch(SessionAction::Reroll).unwrap(),
        Dispatch::Ignored
    );

    resumed.dispatch(SessionAction::Complete).unwrap();
    assert!(resumed.store().get(FORFEIT_STATE).is_none());
}

#[test]
fn resume_rejects_blank_player_names() {
    for name in ["", "   "] {
        let mut store = MemoryStore::new();
        store.set(
            GAME_SETTINGS,
            format!(
                r#"{{"difficulty":"easy","players":{{"player1":{{"name":"{name}","gender":"male"}},"player2":{{"name":"Kai","gender":"male"}}}},"currentGame":null,"scores":{{"player1":0,"player2":0}}}}"#
            ),
        );
        let result =
            SessionCoordinator::resume(store, ContentPool::builtin(), SessionConfig::default());
        assert!(
            matches!(
                result,
                Err(SessionError::MissingPrerequisite {
                    key: GAME_SETTINGS,
                    redirect: Screen::Difficulty
                })
            ),
            "name {name:?} was accepted"
        );
    }
}

#[test]
fn resume_without_settings_redirects() {
    let mut store = MemoryStore::new();
    store.set(USED_TASKS, r#"["Poem"]"#.to_string());
    let err = match SessionCoordinator::resume(
        store,
        ContentPool::builtin(),
        SessionConfig::default(),
    ) {
        Ok(_) => panic!("resume should fail without settings"),
        Err(e) => e,
    };
    assert!(matches!(
        err,
        SessionError::MissingPrerequisite {
            key: GAME_SETTINGS,
            redirect: Screen::Difficulty
        }
    ));
}

#[test]
fn stored_records_use_wire_shapes() {
    let mut s = start(1);
    player2_wins_board(&mut s);
    let store = s.store();

    let forfeit: serde_json::Value =
        serde_json::from_str(&store.get(CURRENT_FORFEIT).unwrap()).unwrap();
    assert!(forfeit["task"].is_string());
    assert!(forfeit["durationSeconds"].is_u64());
    assert_eq!(forfeit["loser"], "player1");

    let settings: serde_json::Value =
        serde_json::from_str(&store.get(GAME_SETTINGS).unwrap()).unwrap();
    assert_eq!(settings["currentGame"], "tic-tac-toe");
    assert_eq!(settings["scores"]["player2"], 1);
}

#[test]
fn rerolled_task_is_excluded_next_round() {
    let mut s = start(17);
    player2_wins_board(&mut s);
    let skipped = s.current_forfeit().unwrap().activity.task.clone();
    s.dispatch(SessionAction::Reroll).unwrap();
    assert_eq!(s.dispatch(SessionAction::Reroll).unwrap(), Dispatch::Ignored);
    s.dispatch(SessionAction::PlayAgain).unwrap();

    assert!(s.exclusion().contains(&skipped));
    assert_eq!(s.exclusion().len(), 2);
    assert_eq!(s.game().map(|g| g.kind()), Some(GameKind::Board));
}

proptest! {
    #[test]
    fn reroll_accepted_at_most_once_per_round(seed in any::<u64>(), attempts in 1usize..6) {
        let mut s = start(seed);
        s.dispatch(SessionAction::SelectGame(GameKind::Duel)).unwrap();
        let mut guard = 0;
        while s.current_forfeit().is_none() {
            guard += 1;
            prop_assert!(guard < 1_000);
            s.dispatch(SessionAction::Choose(Parity::Odd)).unwrap();
            s.dispatch(SessionAction::Roll).unwrap();
        }

        let accepted = (0..attempts)
            .filter(|_| s.dispatch(SessionAction::Reroll).unwrap() == Dispatch::Applied)
            .count();
        prop_assert_eq!(accepted, 1);
    }

    #[test]
    fn session_scores_track_decisive_rounds(seed in any::<u64>(), rounds in 1usize..5) {
        let mut s = start(seed);
        for _ in 0..rounds {
            s.dispatch(SessionAction::SelectGame(GameKind::Duel)).unwrap();
            while s.current_forfeit().is_none() {
                s.dispatch(SessionAction::Choose(Parity::Even)).unwrap();
                s.dispatch(SessionAction::Roll).unwrap();
            }
            s.dispatch(SessionAction::Complete).unwrap();
        }
        let (p1, p2) = s.history().wins();
        prop_assert_eq!(p1 + p2, rounds);
        prop_assert_eq!(s.scores().player1 as usize, p1);
        prop_assert_eq!(s.scores().player2 as usize, p2);
    }
}
