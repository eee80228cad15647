//! Session and round state.
//!
//! ## SessionState
//!
//! The top-level mode of the game. Only `Playing` admits card selections.
//!
//! ## MatchPhase
//!
//! Where the current round is in the select/resolve cycle:
//! `Idle -> AwaitingPartner -> Resolving -> Idle`.

use serde::{Deserialize, Serialize};

use super::entity::CardHandle;
use super::timer::TimerToken;

/// Top-level game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No round running.
    #[default]
    MainMenu,
    /// Round running, selections accepted.
    Playing,
    /// Round suspended, selections ignored.
    Paused,
    /// Every card of the round is matched.
    GameOver,
}

impl SessionState {
    /// Does this state let selections through?
    #[must_use]
    pub fn accepts_input(self) -> bool {
        self == SessionState::Playing
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::MainMenu => "MainMenu",
            SessionState::Playing => "Playing",
            SessionState::Paused => "Paused",
            SessionState::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// Selection phase of the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Nothing selected.
    #[default]
    Idle,
    /// One card revealed, waiting for its partner.
    AwaitingPartner { first: CardHandle },
    /// Two cards revealed, decision scheduled.
    Resolving {
        first: CardHandle,
        second: CardHandle,
        timer: TimerToken,
    },
}

impl MatchPhase {
    /// The held first selection, if any.
    #[must_use]
    pub fn first_selection(&self) -> Option<CardHandle> {
        match *self {
            MatchPhase::Idle => None,
            MatchPhase::AwaitingPartner { first } | MatchPhase::Resolving { first, .. } => {
                Some(first)
            }
        }
    }

    /// Is a resolution in flight?
    #[must_use]
    pub fn awaiting_resolution(&self) -> bool {
        matches!(self, MatchPhase::Resolving { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_playing_accepts_input() {
        assert!(SessionState::Playing.accepts_input());
        assert!(!SessionState::Paused.accepts_input());
        assert!(!SessionState::MainMenu.accepts_input());
        assert!(!SessionState::GameOver.accepts_input());
    }

    #[test]
    fn test_phase_accessors() {
        let a = CardHandle::new(0, 0);
        let b = CardHandle::new(1, 0);

        assert_eq!(MatchPhase::Idle.first_selection(), None);
        assert!(!MatchPhase::Idle.awaiting_resolution());

        let waiting = MatchPhase::AwaitingPartner { first: a };
        assert_eq!(waiting.first_selection(), Some(a));
        assert!(!waiting.awaiting_resolution());

        let mut timer = crate::core::Timer::new();
        let token = timer.schedule(std::time::Duration::ZERO, std::time::Duration::ZERO, ());
        let resolving = MatchPhase::Resolving {
            first: a,
            second: b,
            timer: token,
        };
        assert_eq!(resolving.first_selection(), Some(a));
        assert!(resolving.awaiting_resolution());
    }
}
