//! Card handle system.
//!
//! Every card instance on the table lives in a slot of the [`CardPool`]
//! arena and is addressed by a `CardHandle`.
//!
//! ## Handle Layout
//!
//! A handle is a slot index plus the slot's generation at the time the card
//! was acquired:
//! - `index`: position of the slot in the pool arena
//! - `generation`: bumped every time the slot is released
//!
//! A handle kept after its card was released is *stale*: it still names the
//! slot but with an old generation, so it never resolves to whatever card
//! occupies the slot next.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::CardHandle;
//!
//! let handle = CardHandle::new(3, 0);
//! assert_eq!(handle.index(), 3);
//! assert_eq!(handle.generation(), 0);
//!
//! // Same slot, later occupant
//! let reused = CardHandle::new(3, 1);
//! assert_ne!(handle, reused);
//! ```
//!
//! [`CardPool`]: crate::cards::CardPool

use serde::{Deserialize, Serialize};

/// Generation-checked reference to a pooled card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardHandle {
    index: u32,
    generation: u32,
}

impl CardHandle {
    /// Create a handle from a slot index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the pool arena.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Slot index as a `usize`, for indexing the arena.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}v{})", self.index, self.generation)
    }
}
