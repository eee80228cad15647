//! HUD model.
//!
//! `HudModel` is what a score panel or menu would bind to: it mirrors the
//! game's score, combo and session state purely from notifications, plus the
//! difficulty the player has picked in the menu.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::{Difficulty, GridConfig, SessionState};
use crate::events::{EventBus, GameEvent, SubscriptionId};

/// Display state derived from game events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HudModel {
    score: u64,
    combo: u32,
    state: SessionState,
    difficulty: Option<Difficulty>,
    high_score: u64,
    total_score: u64,
    last_final_score: Option<u64>,
}

impl HudModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a shared model to a bus.
    ///
    /// The bus holds only a weak reference, so dropping the model stops
    /// updates; detach with the returned id.
    pub fn attach(model: &Rc<RefCell<HudModel>>, bus: &mut EventBus) -> SubscriptionId {
        let weak: Weak<RefCell<HudModel>> = Rc::downgrade(model);
        bus.subscribe(move |event| {
            if let Some(model) = weak.upgrade() {
                model.borrow_mut().apply(event);
            }
        })
    }

    /// Fold one event into the model.
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ScoreChanged(score) => self.score = score,
            GameEvent::ComboChanged(combo) => self.combo = combo,
            GameEvent::StateChanged(state) => self.state = state,
            GameEvent::GameStarted(difficulty) => {
                self.difficulty = Some(difficulty);
                self.last_final_score = None;
            }
            GameEvent::GameOver { final_score } => {
                self.last_final_score = Some(final_score);
                self.high_score = self.high_score.max(final_score);
                self.total_score = self.total_score.saturating_add(final_score);
            }
            _ => {}
        }
    }

    /// Remember the menu choice.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
    }

    /// Seed the persisted counters shown in the menu. Later game overs are
    /// folded in from events.
    pub fn set_totals(&mut self, high_score: u64, total_score: u64) {
        self.high_score = high_score;
        self.total_score = total_score;
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Final score of the last finished round.
    #[must_use]
    pub fn last_final_score(&self) -> Option<u64> {
        self.last_final_score
    }
}

/// Menu label for a grid, e.g. `"Easy (3x4)"`.
#[must_use]
pub fn difficulty_description(grid: &GridConfig) -> String {
    format!("{} ({}x{})", grid.difficulty, grid.rows, grid.columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_tracks_values() {
        let mut hud = HudModel::new();
        hud.apply(&GameEvent::GameStarted(Difficulty::Hard));
        hud.apply(&GameEvent::StateChanged(SessionState::Playing));
        hud.apply(&GameEvent::ScoreChanged(150));
        hud.apply(&GameEvent::ComboChanged(2));

        assert_eq!(hud.difficulty(), Some(Difficulty::Hard));
        assert_eq!(hud.state(), SessionState::Playing);
        assert_eq!(hud.score(), 150);
        assert_eq!(hud.combo(), 2);

        hud.apply(&GameEvent::GameOver { final_score: 150 });
        assert_eq!(hud.last_final_score(), Some(150));
    }

    #[test]
    fn test_game_over_updates_totals() {
        let mut hud = HudModel::new();
        hud.set_totals(300, 500);

        hud.apply(&GameEvent::GameOver { final_score: 200 });
        assert_eq!((hud.high_score(), hud.total_score()), (300, 700));

        hud.apply(&GameEvent::GameOver { final_score: 450 });
        assert_eq!((hud.high_score(), hud.total_score()), (450, 1150));
    }

    #[test]
    fn test_attach_and_detach() {
        let hud = Rc::new(RefCell::new(HudModel::new()));
        let mut bus = EventBus::new();

        let id = HudModel::attach(&hud, &mut bus);
        bus.emit(&GameEvent::ScoreChanged(10));
        assert_eq!(hud.borrow().score(), 10);

        assert!(bus.unsubscribe(id));
        bus.emit(&GameEvent::ScoreChanged(20));
        assert_eq!(hud.borrow().score(), 10);
    }

    #[test]
    fn test_dropped_model_is_ignored() {
        let hud = Rc::new(RefCell::new(HudModel::new()));
        let mut bus = EventBus::new();
        HudModel::attach(&hud, &mut bus);
        drop(hud);

        bus.emit(&GameEvent::ScoreChanged(10));
    }

    #[test]
    fn test_difficulty_description() {
        let grid = GridConfig::new(Difficulty::Easy, 3, 4);
        assert_eq!(difficulty_description(&grid), "Easy (3x4)");
    }
}
