//! Scoring policy.
//!
//! Scoring is a pure function of the previous [`ScoreState`], the outcome of
//! a resolution and the current game time. A match inside the combo window
//! extends the streak and each step pays
//! `floor(base_score * combo_multiplier ^ (combo - 1))`; a mismatch breaks
//! the streak.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::scoring::{ScoreState, ScoringPolicy};
//!
//! let policy = ScoringPolicy::new(100, 1.5, Duration::from_secs(5));
//!
//! let s = policy.apply_outcome(ScoreState::default(), true, Duration::from_secs(1));
//! let s = policy.apply_outcome(s, true, Duration::from_secs(3));
//! assert_eq!((s.score, s.combo), (250, 2));
//!
//! let s = policy.apply_outcome(s, false, Duration::from_secs(4));
//! assert_eq!((s.score, s.combo), (250, 0));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Running score of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub combo: u32,
    /// Game time of the last match. `None` before the first one.
    pub last_match: Option<Duration>,
}

/// Maps match outcomes to score changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    base_score: u32,
    combo_multiplier: f64,
    max_combo_time: Duration,
}

impl ScoringPolicy {
    #[must_use]
    pub fn new(base_score: u32, combo_multiplier: f32, max_combo_time: Duration) -> Self {
        Self {
            base_score,
            combo_multiplier: f64::from(combo_multiplier),
            max_combo_time,
        }
    }

    /// Policy with the tunables of a game config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.base_score,
            config.combo_multiplier,
            config.max_combo_time(),
        )
    }

    /// Points paid for a match at `combo` (1-based).
    #[must_use]
    pub fn points_for(&self, combo: u32) -> u64 {
        let exponent = i32::try_from(combo.saturating_sub(1)).unwrap_or(i32::MAX);
        let points = f64::from(self.base_score) * self.combo_multiplier.powi(exponent);
        // Float-to-int `as` saturates, so huge streaks cap at u64::MAX.
        points.floor() as u64
    }

    /// Score state after a resolution at game time `now`.
    #[must_use]
    pub fn apply_outcome(&self, state: ScoreState, is_match: bool, now: Duration) -> ScoreState {
        if !is_match {
            return ScoreState { combo: 0, ..state };
        }

        let in_window = state
            .last_match
            .is_some_and(|last| now.saturating_sub(last) <= self.max_combo_time);
        let combo = if in_window {
            state.combo.saturating_add(1)
        } else {
            1
        };

        ScoreState {
            score: state.score.saturating_add(self.points_for(combo)),
            combo,
            last_match: Some(now),
        }
    }

    #[must_use]
    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    #[must_use]
    pub fn max_combo_time(&self) -> Duration {
        self.max_combo_time
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
