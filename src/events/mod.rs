//! Notification system for presentation components.
//!
//! The game core announces what happened through [`GameEvent`]s on an
//! [`EventBus`] it owns. HUDs, audio and analytics subscribe; the core never
//! reads anything back from them.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: A notification with its payload
//! - [`EventKind`]: Payload-free discriminant for filtered subscriptions
//! - [`EventBus`]: Listener registry and fan-out
//! - [`SubscriptionId`]: Handle for unsubscribing

mod bus;
mod event;

pub use bus::{EventBus, SubscriptionId};
pub use event::{EventKind, GameEvent};
