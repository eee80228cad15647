//! Event bus.
//!
//! The bus owns its listeners. Subscribing hands back a [`SubscriptionId`];
//! that same id is what removes the listener, so a component can always
//! detach exactly what it attached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::event::{EventKind, GameEvent};

/// Handle for removing a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Listener = Box<dyn FnMut(&GameEvent)>;

struct Subscription {
    id: SubscriptionId,
    /// `None` listens to everything.
    filter: Option<EventKind>,
    listener: Listener,
}

/// Fan-out of game notifications to registered listeners.
///
/// Listeners run synchronously in registration order.
///
/// ## Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use memory_match::events::{EventBus, EventKind, GameEvent};
///
/// let mut bus = EventBus::new();
/// let scores = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&scores);
/// let id = bus.subscribe_to(EventKind::ScoreChanged, move |event| {
///     if let GameEvent::ScoreChanged(score) = event {
///         sink.borrow_mut().push(*score);
///     }
/// });
///
/// bus.emit(&GameEvent::ScoreChanged(100));
/// bus.emit(&GameEvent::ComboChanged(1));
/// assert!(bus.unsubscribe(id));
/// bus.emit(&GameEvent::ScoreChanged(250));
///
/// assert_eq!(*scores.borrow(), vec![100]);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u32,
}

impl EventBus {
    /// Create a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to every event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.insert(None, Box::new(listener))
    }

    /// Listen to one kind of event.
    pub fn subscribe_to(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        self.insert(Some(kind), Box::new(listener))
    }

    /// Remove a listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver an event to every interested listener.
    pub fn emit(&mut self, event: &GameEvent) {
        debug!(?event, listeners = self.subscriptions.len(), "emit");
        for sub in &mut self.subscriptions {
            if sub.filter.is_none_or(|kind| kind == event.kind()) {
                (sub.listener)(event);
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    fn insert(&mut self, filter: Option<EventKind>, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            filter,
            listener,
        });
        id
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.subscriptions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
