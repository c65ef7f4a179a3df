//! The Love Duel session coordinator.
//!
//! `SessionCoordinator` owns the settings, running scores, the active
//! mini-game and the pending forfeit. Every user input or timer tick comes
//! in as a [`SessionAction`]; the coordinator routes it to the active engine
//! and, when a round ends with a loser, draws a forfeit for them. Every state
//! change is written through the injected [`KeyValueStore`].

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use duel_core::{Forfeit, PlayerSlot, RoundOutcome, RoundWinner, Scores, SessionSettings};
use duel_forfeit::{ContentPool, ExclusionSet, ForfeitSelector, Selection};
use duel_games::{
    DuelPhase, Game, GameAction, GameEngine, GameKind, Parity, RollAnimation, Transition,
};

use crate::config::SessionConfig;
use crate::countdown::{Countdown, CountdownTick};
use crate::error::SessionResult;
use crate::history::{History, HistoryEntry};
use crate::navigation::require;
use crate::storage::{
    self, CURRENT_FORFEIT, FORFEIT_STATE, ForfeitStateRecord, GAME_SETTINGS, GameSettingsRecord,
    KeyValueStore, PLAYER_DATA, USED_TASKS,
};

/// An input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Start a mini-game.
    SelectGame(GameKind),
    /// Place the next mark on a board cell.
    Move(usize),
    /// Call even or odd in the dice duel.
    Choose(Parity),
    /// Roll the die for the pending call.
    Roll,
    /// Start the active mini-game over.
    ResetGame,
    /// Swap the pending forfeit for another, once per round.
    Reroll,
    /// Start the forfeit countdown.
    StartTimer,
    /// Pause the forfeit countdown.
    StopTimer,
    /// One countdown interval elapsed.
    Tick,
    /// The forfeit is done; go back to game selection.
    Complete,
    /// The forfeit is done; play the same mini-game again. Counts as a
    /// completion, so the served task is recorded before the restart.
    PlayAgain,
}

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The action was not valid in the current state; nothing changed.
    Ignored,
    /// State changed.
    Applied,
    /// The active mini-game ended.
    RoundEnded(RoundOutcome),
}

/// A serializable view of the session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Players and difficulty.
    pub settings: SessionSettings,
    /// Running match wins.
    pub scores: Scores,
    /// The active mini-game and its state.
    pub game: Option<Game>,
    /// The forfeit waiting to be performed.
    pub forfeit: Option<Forfeit>,
    /// Whether the pending forfeit may still be swapped.
    pub reroll_available: bool,
    /// The forfeit countdown.
    pub countdown: Countdown,
    /// Tasks served so far.
    pub served: usize,
    /// The most recent round result.
    pub last_outcome: Option<RoundOutcome>,
}

/// A running Love Duel session.
pub struct SessionCoordinator<S: KeyValueStore> {
    settings: SessionSettings,
    config: SessionConfig,
    store: S,
    pool: ContentPool,
    exclusion: ExclusionSet,
    game: Option<Game>,
    scores: Scores,
    forfeit: Option<Forfeit>,
    reroll_used: bool,
    countdown: Countdown,
    last_outcome: Option<RoundOutcome>,
    history: History,
    rng: StdRng,
}

impl<S: KeyValueStore> SessionCoordinator<S> {
    /// Start a fresh session with an empty exclusion set.
    #[instrument(skip_all, fields(difficulty = %settings.difficulty, seed = config.seed))]
    pub fn start(
        settings: SessionSettings,
        config: SessionConfig,
        store: S,
        pool: ContentPool,
    ) -> SessionResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        let mut session = Self {
            settings,
            config,
            store,
            pool,
            exclusion: ExclusionSet::new(),
            game: None,
            scores: Scores::default(),
            forfeit: None,
            reroll_used: false,
            countdown: Countdown::default(),
            last_outcome: None,
            history: History::new(),
            rng,
        };
        storage::write(&mut session.store, PLAYER_DATA, &session.settings.players)?;
        session.persist_settings()?;
        session.persist_forfeit()?;
        session.persist_exclusion()?;
        info!(
            player1 = session.settings.players.player1.name(),
            player2 = session.settings.players.player2.name(),
            "session started"
        );
        Ok(session)
    }

    /// Rebuild a session from what `store` holds.
    ///
    /// `gameSettings` is required. Served tasks and a pending forfeit are
    /// restored when present, together with its reroll flag and countdown.
    /// A forfeit without a matching state record gets a fresh countdown.
    #[instrument(skip_all, fields(seed = config.seed))]
    pub fn resume(store: S, pool: ContentPool, config: SessionConfig) -> SessionResult<Self> {
        let record: GameSettingsRecord = require(&store, GAME_SETTINGS)?;
        let exclusion: ExclusionSet = storage::read(&store, USED_TASKS).unwrap_or_default();
        let forfeit: Option<Forfeit> = storage::read(&store, CURRENT_FORFEIT);
        let state: Option<ForfeitStateRecord> = storage::read(&store, FORFEIT_STATE);
        let (reroll_used, countdown) = match (&forfeit, state) {
            (Some(f), Some(state))
                if state.countdown.duration() == f.activity.duration_seconds =>
            {
                (state.reroll_used, state.countdown)
            }
            (Some(f), _) => (false, Countdown::new(f.activity.duration_seconds)),
            (None, _) => (false, Countdown::default()),
        };

        info!(
            served = exclusion.len(),
            pending_forfeit = forfeit.is_some(),
            reroll_used,
            "session resumed"
        );
        Ok(Self {
            settings: record.settings(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            store,
            pool,
            exclusion,
            game: record.current_game.map(Game::new),
            scores: record.scores,
            forfeit,
            reroll_used,
            countdown,
            last_outcome: None,
            history: History::new(),
        })
    }

    /// Apply one action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: SessionAction) -> SessionResult<Dispatch> {
        let result = match action {
            SessionAction::SelectGame(kind) => self.select_game(kind)?,
            SessionAction::Move(cell) => self.play(GameAction::Move(cell))?,
            SessionAction::Choose(parity) => self.play(GameAction::Choose(parity))?,
            SessionAction::Roll => self.roll()?,
            SessionAction::ResetGame => self.reset_game(),
            SessionAction::Reroll => self.reroll()?,
            SessionAction::StartTimer => {
                applied_if(self.forfeit.is_some() && self.countdown.start())
            }
            SessionAction::StopTimer => applied_if(self.countdown.stop()),
            SessionAction::Tick => match self.countdown.tick() {
                CountdownTick::Idle => Dispatch::Ignored,
                CountdownTick::Running(_) => Dispatch::Applied,
                CountdownTick::Finished => {
                    info!("forfeit countdown finished");
                    Dispatch::Applied
                }
            },
            SessionAction::Complete => self.complete(false)?,
            SessionAction::PlayAgain => self.complete(true)?,
        };
        if result == Dispatch::Ignored {
            debug!("action ignored");
        } else if matches!(
            action,
            SessionAction::StartTimer | SessionAction::StopTimer | SessionAction::Tick
        ) {
            self.persist_forfeit_state()?;
        }
        Ok(result)
    }

    /// A serializable view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            settings: self.settings.clone(),
            scores: self.scores,
            game: self.game.clone(),
            forfeit: self.forfeit.clone(),
            reroll_available: self.reroll_available(),
            countdown: self.countdown,
            served: self.exclusion.len(),
            last_outcome: self.last_outcome,
        }
    }

    /// Players and difficulty.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Running match wins.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// The active mini-game.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// The forfeit waiting to be performed.
    pub fn current_forfeit(&self) -> Option<&Forfeit> {
        self.forfeit.as_ref()
    }

    /// Tasks served so far.
    pub fn exclusion(&self) -> &ExclusionSet {
        &self.exclusion
    }

    /// The forfeit countdown.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// The session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether the pending forfeit may still be swapped. Only before the
    /// countdown has been started.
    pub fn reroll_available(&self) -> bool {
        self.forfeit.is_some() && !self.reroll_used && !self.countdown.has_started()
    }

    fn select_game(&mut self, kind: GameKind) -> SessionResult<Dispatch> {
        if self.forfeit.is_some() {
            return Ok(Dispatch::Ignored);
        }
        self.game = Some(Game::new(kind));
        self.last_outcome = None;
        self.history.append(HistoryEntry::GameStarted {
            game: kind,
            timestamp: Utc::now(),
        });
        self.persist_settings()?;
        info!(game = %kind, "game selected");
        Ok(Dispatch::Applied)
    }

    fn roll(&mut self) -> SessionResult<Dispatch> {
        let rolling = matches!(
            self.game.as_ref().and_then(Game::as_duel).map(|d| d.phase()),
            Some(DuelPhase::Rolling { .. })
        );
        if !rolling || self.forfeit.is_some() {
            return Ok(Dispatch::Ignored);
        }
        let face = RollAnimation::new(self.config.roll_ticks).run(&mut self.rng);
        debug!(face, "die settled");
        self.play(GameAction::Roll(face))
    }

    fn play(&mut self, action: GameAction) -> SessionResult<Dispatch> {
        if self.forfeit.is_some() {
            return Ok(Dispatch::Ignored);
        }
        let Some(game) = self.game.as_mut() else {
            return Ok(Dispatch::Ignored);
        };
        match game.apply_action(action) {
            Transition::Ignored => Ok(Dispatch::Ignored),
            Transition::Continued => Ok(Dispatch::Applied),
            Transition::Finished(winner) => self.finish_round(winner),
        }
    }

    fn reset_game(&mut self) -> Dispatch {
        if self.forfeit.is_some() {
            return Dispatch::Ignored;
        }
        let Some(game) = self.game.as_mut() else {
            return Dispatch::Ignored;
        };
        game.reset();
        self.last_outcome = None;
        Dispatch::Applied
    }

    fn finish_round(&mut self, winner: RoundWinner) -> SessionResult<Dispatch> {
        let outcome = RoundOutcome::resolve(winner, &self.settings);
        let game = self.game.as_ref().map(Game::kind);
        if let Some(game) = game {
            self.history.append(HistoryEntry::RoundEnded {
                game,
                winner,
                timestamp: Utc::now(),
            });
        }
        self.last_outcome = Some(outcome);
        info!(%winner, "round ended");

        if let (Some(slot), Some(loser)) = (winner.slot(), outcome.loser()) {
            self.scores.award(slot);
            let selection = self.draw_for(loser, None)?;
            self.assign(selection, loser, false)?;
        }
        self.persist_settings()?;
        Ok(Dispatch::RoundEnded(outcome))
    }

    fn reroll(&mut self) -> SessionResult<Dispatch> {
        if !self.reroll_available() {
            return Ok(Dispatch::Ignored);
        }
        let Some(current) = self.forfeit.clone() else {
            return Ok(Dispatch::Ignored);
        };
        let selection = self.draw_for(current.loser, Some(&current))?;
        info!(
            skipped = current.task(),
            task = %selection.activity.task,
            "forfeit rerolled"
        );
        self.reroll_used = true;
        self.assign(selection, current.loser, true)?;
        Ok(Dispatch::Applied)
    }

    fn draw_for(
        &mut self,
        loser: PlayerSlot,
        replacing: Option<&Forfeit>,
    ) -> SessionResult<Selection> {
        let difficulty = self.settings.difficulty;
        let gender = self.settings.player(loser).gender();
        let selector = ForfeitSelector::new(&self.pool);
        let selection = match replacing {
            Some(current) => selector.reroll(
                &current.activity,
                difficulty,
                gender,
                &mut self.exclusion,
                &mut self.rng,
            )?,
            None => selector.select(difficulty, gender, &mut self.exclusion, &mut self.rng)?,
        };
        if selection.pool_exhausted {
            self.history.append(HistoryEntry::PoolExhausted {
                difficulty,
                gender,
                timestamp: Utc::now(),
            });
        }
        Ok(selection)
    }

    fn assign(
        &mut self,
        selection: Selection,
        loser: PlayerSlot,
        rerolled: bool,
    ) -> SessionResult<()> {
        if !rerolled {
            self.reroll_used = false;
        }
        self.countdown.reset(selection.activity.duration_seconds);
        self.history.append(HistoryEntry::ForfeitServed {
            task: selection.activity.task.clone(),
            loser,
            rerolled,
            timestamp: Utc::now(),
        });
        info!(task = %selection.activity.task, %loser, "forfeit assigned");
        self.forfeit = Some(Forfeit::new(selection.activity, loser));
        self.persist_forfeit()?;
        self.persist_exclusion()
    }

    fn complete(&mut self, play_again: bool) -> SessionResult<Dispatch> {
        let Some(served) = self.forfeit.take() else {
            return Ok(Dispatch::Ignored);
        };
        ForfeitSelector::complete(&served.activity, &mut self.exclusion);
        self.history.append(HistoryEntry::ForfeitCompleted {
            task: served.task().to_string(),
            loser: served.loser,
            timestamp: Utc::now(),
        });
        self.countdown = Countdown::default();
        self.reroll_used = false;
        self.last_outcome = None;
        info!(task = served.task(), play_again, "forfeit completed");

        let next = if play_again {
            self.game.as_ref().map(Game::kind)
        } else {
            None
        };
        self.game = next.map(Game::new);
        if let Some(kind) = next {
            self.history.append(HistoryEntry::GameStarted {
                game: kind,
                timestamp: Utc::now(),
            });
        }

        self.persist_forfeit()?;
        self.persist_exclusion()?;
        self.persist_settings()?;
        Ok(Dispatch::Applied)
    }

    fn persist_settings(&mut self) -> SessionResult<()> {
        let record = GameSettingsRecord {
            difficulty: self.settings.difficulty,
            players: self.settings.players.clone(),
            current_game: self.game.as_ref().map(Game::kind),
            scores: self.scores,
        };
        storage::write(&mut self.store, GAME_SETTINGS, &record)
    }

    fn persist_forfeit(&mut self) -> SessionResult<()> {
        match &self.forfeit {
            Some(forfeit) => storage::write(&mut self.store, CURRENT_FORFEIT, forfeit)?,
            None => self.store.clear(CURRENT_FORFEIT),
        }
        self.persist_forfeit_state()
    }

    fn persist_forfeit_state(&mut self) -> SessionResult<()> {
        if self.forfeit.is_none() {
            self.store.clear(FORFEIT_STATE);
            return Ok(());
        }
        let state = ForfeitStateRecord {
            reroll_used: self.reroll_used,
            countdown: self.countdown,
        };
        storage::write(&mut self.store, FORFEIT_STATE, &state)
    }

    fn persist_exclusion(&mut self) -> SessionResult<()> {
        storage::write(&mut self.store, USED_TASKS, &self.exclusion)
    }
}

fn applied_if(changed: bool) -> Dispatch {
    if changed {
        Dispatch::Applied
    } else {
        Dispatch::Ignored
    }
}
