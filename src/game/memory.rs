//! Match resolution state machine.
//!
//! `MemoryGame` owns everything a session needs: the card pool, the pair
//! selector, the command log, the score, the event bus and the external
//! collaborators. All round and score mutation happens here.
//!
//! ## Round Cycle
//!
//! ```text
//! Idle --select--> AwaitingPartner --select other--> Resolving
//!   ^                                                    |
//!   +--------- tick() past match_check_delay ------------+
//! ```
//!
//! Selections are admitted only while the session is `Playing` and no
//! resolution is in flight. The resolution itself is a timer on the game
//! clock, which only moves through [`MemoryGame::tick`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{CardCatalog, CardEntity, CardPool, PairSelector, SelectionStrategy};
use crate::commands::{Command, CommandLog, DEFAULT_HISTORY};
use crate::core::{
    CardHandle, Difficulty, GameConfig, GameError, GameRng, GridConfig, MatchPhase,
    SessionState, Timer,
};
use crate::events::{EventBus, GameEvent};
use crate::save::{MemoryScoreStore, ScoreStore, StoreError};
use crate::scoring::{ScoreState, ScoringPolicy};
use crate::view::{CardAnimator, NullAnimator};

use super::layout::{grid_positions, Position};

/// Why a selection was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Session is not `Playing`.
    NotPlaying,
    /// A pair is being resolved.
    Resolving,
    /// Handle or index does not name a card of this round.
    UnknownCard,
    /// The card is already the held first selection.
    AlreadySelected,
    /// The card is face up, matched or not interactable.
    NotSelectable,
}

/// Result of a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Card revealed and held as the first of a pair.
    First(CardHandle),
    /// Card revealed as the partner; resolution scheduled.
    Second(CardHandle),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl Selection {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }
}

/// Outcome of a resolved pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Matched {
        first: CardHandle,
        second: CardHandle,
        /// Points this match added.
        points: u64,
    },
    Mismatched {
        first: CardHandle,
        second: CardHandle,
    },
}

#[derive(Clone, Copy, Debug)]
struct PendingMatch {
    first: CardHandle,
    second: CardHandle,
}

/// Cards and selection state of the running round.
#[derive(Clone, Debug)]
struct Round {
    grid: GridConfig,
    cards: Vec<CardHandle>,
    phase: MatchPhase,
}

/// A single-player memory game session.
pub struct MemoryGame {
    config: GameConfig,
    selector: PairSelector,
    pool: CardPool,
    rng: GameRng,
    commands: CommandLog,
    scoring: ScoringPolicy,
    score: ScoreState,
    session: SessionState,
    round: Option<Round>,
    timer: Timer<PendingMatch>,
    clock: Duration,
    events: EventBus,
    animator: Box<dyn CardAnimator>,
    store: Box<dyn ScoreStore>,
}

impl MemoryGame {
    /// Game with default collaborators and seed 0.
    pub fn new(config: GameConfig, catalog: CardCatalog) -> Result<Self, GameError> {
        MemoryGameBuilder::new(config, catalog).build()
    }

    /// Start builder.
    pub fn builder(config: GameConfig, catalog: CardCatalog) -> MemoryGameBuilder {
        MemoryGameBuilder::new(config, catalog)
    }

    // === Session control ===

    /// Tear down any round and deal a fresh one.
    ///
    /// Configuration problems (unknown or odd grid, unusable catalog) fail
    /// before anything changes. Capacity problems fail after the previous
    /// round has been torn down, leaving no cards in play.
    pub fn start_game(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        let grid = self.config.grid(difficulty)?.clone();
        let pair_count = grid.pair_count();
        self.selector.check(pair_count, usize::MAX)?;

        self.cleanup();

        let faces = self
            .selector
            .deal(pair_count, self.pool.capacity(), &mut self.rng)
            .inspect_err(|err| warn!(%difficulty, %err, "round not started"))?;

        let requested = faces.len();
        let mut cards = Vec::with_capacity(requested);
        for face in faces {
            match self.pool.acquire(face) {
                Some(handle) => cards.push(handle),
                None => {
                    let acquired = cards.len();
                    for handle in cards {
                        self.pool.release(handle);
                    }
                    warn!(%difficulty, requested, acquired, "card pool exhausted");
                    return Err(GameError::PoolExhausted {
                        requested,
                        acquired,
                    });
                }
            }
        }

        info!(%difficulty, cards = cards.len(), "game started");
        self.round = Some(Round {
            grid,
            cards,
            phase: MatchPhase::Idle,
        });
        self.set_state(SessionState::Playing);
        self.events.emit(&GameEvent::GameStarted(difficulty));
        Ok(())
    }

    /// Suspend input. Returns `false` unless the game was playing.
    ///
    /// A resolution already in flight still completes.
    pub fn pause(&mut self) -> bool {
        if self.session != SessionState::Playing {
            return false;
        }
        self.set_state(SessionState::Paused);
        self.events.emit(&GameEvent::GamePaused);
        true
    }

    /// Resume a paused game. Returns `false` unless the game was paused.
    pub fn resume(&mut self) -> bool {
        if self.session != SessionState::Paused {
            return false;
        }
        self.set_state(SessionState::Playing);
        self.events.emit(&GameEvent::GameResumed);
        true
    }

    /// End the round and go back to the menu.
    ///
    /// Cancels any pending resolution, returns every card to the pool and
    /// zeroes score and combo.
    pub fn cleanup(&mut self) {
        if let Some(round) = self.round.take() {
            if let MatchPhase::Resolving { timer, .. } = round.phase {
                if self.timer.cancel(timer) {
                    debug!(token = timer.raw(), "pending resolution cancelled");
                }
            }
            for handle in round.cards {
                if self.pool.release(handle) {
                    self.animator.released(handle);
                }
            }
        }
        self.pool.release_all();
        self.commands.clear();

        self.score = ScoreState::default();
        self.events.emit(&GameEvent::ScoreChanged(0));
        self.events.emit(&GameEvent::ComboChanged(0));
        self.set_state(SessionState::MainMenu);
    }

    // === Input ===

    /// Handle a player picking a card.
    pub fn select_card(&mut self, handle: CardHandle) -> Selection {
        if !self.session.accepts_input() {
            return Selection::Ignored(IgnoreReason::NotPlaying);
        }
        let phase = match &self.round {
            Some(round) => round.phase,
            None => return Selection::Ignored(IgnoreReason::NotPlaying),
        };

        match phase {
            MatchPhase::Resolving { .. } => return Selection::Ignored(IgnoreReason::Resolving),
            MatchPhase::AwaitingPartner { first } if first == handle => {
                return Selection::Ignored(IgnoreReason::AlreadySelected);
            }
            _ => {}
        }

        match self.pool.get(handle) {
            None => return Selection::Ignored(IgnoreReason::UnknownCard),
            Some(card) if !card.is_selectable() => {
                return Selection::Ignored(IgnoreReason::NotSelectable);
            }
            Some(_) => {}
        }

        self.commands.execute(
            Command::flip(handle, true),
            &mut self.pool,
            self.animator.as_mut(),
        );
        self.events.emit(&GameEvent::CardSelected(handle));

        match phase {
            MatchPhase::AwaitingPartner { first } => {
                let delay = self.config.match_check_delay();
                let timer = self.timer.schedule(
                    self.clock,
                    delay,
                    PendingMatch {
                        first,
                        second: handle,
                    },
                );
                self.set_phase(MatchPhase::Resolving {
                    first,
                    second: handle,
                    timer,
                });
                debug!(%first, second = %handle, ?delay, "pair selected, resolving");
                Selection::Second(handle)
            }
            _ => {
                self.set_phase(MatchPhase::AwaitingPartner { first: handle });
                debug!(card = %handle, "first card selected");
                Selection::First(handle)
            }
        }
    }

    /// Select the card at a layout position of the current round.
    pub fn select_at(&mut self, index: usize) -> Selection {
        match self.card_handle(index) {
            Some(handle) => self.select_card(handle),
            None => Selection::Ignored(IgnoreReason::UnknownCard),
        }
    }

    /// Turn the held first selection back over.
    ///
    /// Only possible while waiting for a partner; returns `false` otherwise.
    pub fn undo_last(&mut self) -> bool {
        if !self.session.accepts_input() {
            return false;
        }
        let Some(first) = self.phase().and_then(|p| match p {
            MatchPhase::AwaitingPartner { first } => Some(first),
            _ => None,
        }) else {
            return false;
        };
        if self.commands.last() != Some(&Command::flip(first, true)) {
            return false;
        }

        self.commands.undo_last(&mut self.pool, self.animator.as_mut());
        self.set_phase(MatchPhase::Idle);
        debug!(card = %first, "selection undone");
        true
    }

    // === Time ===

    /// Advance the game clock and run a resolution that came due.
    pub fn tick(&mut self, dt: Duration) -> Option<Resolution> {
        self.clock = self.clock.saturating_add(dt);
        let pending = self.timer.poll(self.clock)?;
        Some(self.resolve(pending))
    }

    fn resolve(&mut self, pending: PendingMatch) -> Resolution {
        let PendingMatch { first, second } = pending;
        let is_match = match (self.pool.get(first), self.pool.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        let previous = self.score.score;
        let resolution = if is_match {
            self.commands.execute(
                Command::matched(first, second),
                &mut self.pool,
                self.animator.as_mut(),
            );
            self.apply_score(true);
            self.events.emit(&GameEvent::CardsMatched(first, second));
            Resolution::Matched {
                first,
                second,
                points: self.score.score - previous,
            }
        } else {
            for handle in [first, second] {
                self.commands.execute(
                    Command::flip(handle, false),
                    &mut self.pool,
                    self.animator.as_mut(),
                );
            }
            self.apply_score(false);
            self.events.emit(&GameEvent::CardsMismatched(first, second));
            Resolution::Mismatched { first, second }
        };
        debug!(?resolution, score = self.score.score, combo = self.score.combo, "pair resolved");

        self.set_phase(MatchPhase::Idle);
        self.check_completion();
        resolution
    }

    fn apply_score(&mut self, is_match: bool) {
        self.score = self.scoring.apply_outcome(self.score, is_match, self.clock);
        self.events.emit(&GameEvent::ScoreChanged(self.score.score));
        self.events.emit(&GameEvent::ComboChanged(self.score.combo));
    }

    fn check_completion(&mut self) {
        let all_matched = match &self.round {
            Some(round) => round
                .cards
                .iter()
                .all(|h| self.pool.get(*h).is_some_and(CardEntity::is_matched)),
            None => false,
        };
        if !all_matched || self.session == SessionState::GameOver {
            return;
        }

        let final_score = self.score.score;
        self.set_state(SessionState::GameOver);
        self.events.emit(&GameEvent::GameOver { final_score });
        if let Err(err) = self.store.update_scores(final_score) {
            warn!(%err, final_score, "failed to save scores");
        }
        info!(final_score, "game over");
    }

    // === Persistence ===

    #[must_use]
    pub fn high_score(&self) -> u64 {
        self.store.high_score()
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.store.total_score()
    }

    /// Wipe the persisted counters.
    pub fn reset_scores(&mut self) -> Result<(), StoreError> {
        self.store.reset_scores()
    }

    // === Observation ===

    /// Event bus for subscribing presentation components.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Selection phase, `None` when no round exists.
    #[must_use]
    pub fn phase(&self) -> Option<MatchPhase> {
        self.round.as_ref().map(|r| r.phase)
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.phase().is_some_and(|p| p.awaiting_resolution())
    }

    #[must_use]
    pub fn first_selection(&self) -> Option<CardHandle> {
        self.phase().and_then(|p| p.first_selection())
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score.score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.score.combo
    }

    #[must_use]
    pub fn score_state(&self) -> ScoreState {
        self.score
    }

    /// Current game clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Clock time the pending resolution fires at.
    #[must_use]
    pub fn resolution_due(&self) -> Option<Duration> {
        self.timer.due_at()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|r| r.grid.difficulty)
    }

    /// Grid of the running round.
    #[must_use]
    pub fn grid(&self) -> Option<&GridConfig> {
        self.round.as_ref().map(|r| &r.grid)
    }

    /// Cards of the running round in layout order.
    #[must_use]
    pub fn cards(&self) -> &[CardHandle] {
        self.round.as_ref().map_or(&[], |r| r.cards.as_slice())
    }

    #[must_use]
    pub fn card_handle(&self, index: usize) -> Option<CardHandle> {
        self.cards().get(index).copied()
    }

    #[must_use]
    pub fn card(&self, handle: CardHandle) -> Option<&CardEntity> {
        self.pool.get(handle)
    }

    /// World position of every card of the running round.
    #[must_use]
    pub fn layout(&self) -> Vec<Position> {
        self.grid().map(grid_positions).unwrap_or_default()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    #[must_use]
    pub fn command_log(&self) -> &CommandLog {
        &self.commands
    }

    fn set_state(&mut self, state: SessionState) {
        debug!(from = %self.session, to = %state, "session state");
        self.session = state;
        self.events.emit(&GameEvent::StateChanged(state));
    }

    fn set_phase(&mut self, phase: MatchPhase) {
        if let Some(round) = self.round.as_mut() {
            round.phase = phase;
        }
    }
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("session", &self.session)
            .field("phase", &self.phase())
            .field("score", &self.score)
            .field("clock", &self.clock)
            .field("cards", &self.cards().len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`MemoryGame`].
pub struct MemoryGameBuilder {
    config: GameConfig,
    catalog: CardCatalog,
    strategy: SelectionStrategy,
    seed: u64,
    history: usize,
    animator: Box<dyn CardAnimator>,
    store: Box<dyn ScoreStore>,
}

impl MemoryGameBuilder {
    pub fn new(config: GameConfig, catalog: CardCatalog) -> Self {
        Self {
            config,
            catalog,
            strategy: SelectionStrategy::default(),
            seed: 0,
            history: DEFAULT_HISTORY,
            animator: Box::new(NullAnimator),
            store: Box::new(MemoryScoreStore::new()),
        }
    }

    /// RNG seed for dealing.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Command history depth.
    pub fn history(mut self, capacity: usize) -> Self {
        self.history = capacity;
        self
    }

    pub fn animator(mut self, animator: impl CardAnimator + 'static) -> Self {
        self.animator = Box::new(animator);
        self
    }

    pub fn score_store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Validate the config and assemble the game in the main menu.
    pub fn build(self) -> Result<MemoryGame, GameError> {
        self.config.validate()?;

        Ok(MemoryGame {
            pool: CardPool::new(self.config.pool_capacity),
            scoring: ScoringPolicy::from_config(&self.config),
            selector: PairSelector::new(self.catalog, self.strategy),
            rng: GameRng::new(self.seed),
            commands: CommandLog::with_capacity(self.history),
            score: ScoreState::default(),
            session: SessionState::MainMenu,
            round: None,
            timer: Timer::new(),
            clock: Duration::ZERO,
            events: EventBus::new(),
            animator: self.animator,
            store: self.store,
            config: self.config,
        })
    }
}
