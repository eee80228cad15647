//! Game notifications.

use serde::{Deserialize, Serialize};

use crate::core::{CardHandle, Difficulty, SessionState};

/// Something that happened in the game, for presentation and audio.
///
/// Notifications are one-way: listeners observe, they never answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The session moved to a new state.
    StateChanged(SessionState),
    /// A round began.
    GameStarted(Difficulty),
    GamePaused,
    GameResumed,
    /// Every card of the round is matched.
    GameOver { final_score: u64 },
    /// A player selection was accepted and the card turned face up.
    CardSelected(CardHandle),
    CardsMatched(CardHandle, CardHandle),
    CardsMismatched(CardHandle, CardHandle),
    ScoreChanged(u64),
    ComboChanged(u32),
}

impl GameEvent {
    /// Kind of this event, for filtering.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::StateChanged(_) => EventKind::StateChanged,
            GameEvent::GameStarted(_) => EventKind::GameStarted,
            GameEvent::GamePaused => EventKind::GamePaused,
            GameEvent::GameResumed => EventKind::GameResumed,
            GameEvent::GameOver { .. } => EventKind::GameOver,
            GameEvent::CardSelected(_) => EventKind::CardSelected,
            GameEvent::CardsMatched(..) => EventKind::CardsMatched,
            GameEvent::CardsMismatched(..) => EventKind::CardsMismatched,
            GameEvent::ScoreChanged(_) => EventKind::ScoreChanged,
            GameEvent::ComboChanged(_) => EventKind::ComboChanged,
        }
    }
}

/// Payload-free discriminant of [`GameEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    StateChanged,
    GameStarted,
    GamePaused,
    GameResumed,
    GameOver,
    CardSelected,
    CardsMatched,
    CardsMismatched,
    ScoreChanged,
    ComboChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let a = CardHandle::new(0, 0);
        assert_eq!(GameEvent::CardsMatched(a, a).kind(), EventKind::CardsMatched);
        assert_eq!(GameEvent::GameOver { final_score: 5 }.kind(), EventKind::GameOver);
        assert_eq!(GameEvent::ComboChanged(2).kind(), EventKind::ComboChanged);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CardsMismatched(CardHandle::new(1, 0), CardHandle::new(2, 0));
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
