//! Fixed-capacity card pool.
//!
//! The pool owns every `CardEntity` the game will ever use. Slots are
//! allocated once at construction and recycled through an index free-list,
//! so acquire and release are O(1) and never allocate.
//!
//! ```
//! use memory_match::cards::{CardIdentity, CardPool};
//!
//! let mut pool = CardPool::new(2);
//! let a = pool.acquire(CardIdentity::new("a")).unwrap();
//! let b = pool.acquire(CardIdentity::new("b")).unwrap();
//!
//! // Full: not an error, just no card
//! assert!(pool.acquire(CardIdentity::new("c")).is_none());
//!
//! assert!(pool.release(a));
//! assert!(pool.get(a).is_none()); // stale handle
//! assert!(pool.get(b).is_some());
//! ```

use crate::core::CardHandle;

use super::identity::CardIdentity;
use super::instance::CardEntity;

#[derive(Clone, Debug)]
struct Slot {
    card: CardEntity,
    generation: u32,
    active: bool,
}

/// Arena of reusable card entities.
#[derive(Clone, Debug)]
pub struct CardPool {
    slots: Vec<Slot>,
    /// Inactive slot indices; the next acquire pops from the end.
    free: Vec<u32>,
}

impl CardPool {
    /// Create a pool with `capacity` inactive slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let blank = CardIdentity::new("");
        let slots = (0..capacity)
            .map(|_| {
                let mut card = CardEntity::new(blank.clone());
                card.make_inert();
                Slot {
                    card,
                    generation: 0,
                    active: false,
                }
            })
            .collect();
        // Reverse so slot 0 is handed out first.
        let free = (0..capacity as u32).rev().collect();
        Self { slots, free }
    }

    /// Take an inactive slot and deal `identity` into it.
    ///
    /// Returns `None` when every slot is in use.
    pub fn acquire(&mut self, identity: CardIdentity) -> Option<CardHandle> {
        let index = self.free.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.active = true;
        slot.card.reset(identity);
        Some(CardHandle::new(index, slot.generation))
    }

    /// Return a card to the pool.
    ///
    /// The card is hidden and made inert. Returns `false` for a stale or
    /// already released handle.
    pub fn release(&mut self, handle: CardHandle) -> bool {
        match self.live_slot_mut(handle) {
            Some(slot) => {
                slot.active = false;
                slot.generation = slot.generation.wrapping_add(1);
                slot.card.make_inert();
                self.free.push(handle.index());
                true
            }
            None => false,
        }
    }

    /// Return every active card. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let mut released = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.active {
                slot.active = false;
                slot.generation = slot.generation.wrapping_add(1);
                slot.card.make_inert();
                self.free.push(index as u32);
                released += 1;
            }
        }
        released
    }

    /// Look up a live card.
    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&CardEntity> {
        self.slots
            .get(handle.slot())
            .filter(|s| s.active && s.generation == handle.generation())
            .map(|s| &s.card)
    }

    /// Look up a live card mutably.
    pub fn get_mut(&mut self, handle: CardHandle) -> Option<&mut CardEntity> {
        self.live_slot_mut(handle).map(|s| &mut s.card)
    }

    /// Does `handle` name a card that is still in play?
    #[must_use]
    pub fn is_active(&self, handle: CardHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Total slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently handed out.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots still free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    fn live_slot_mut(&mut self, handle: CardHandle) -> Option<&mut Slot> {
        self.slots
            .get_mut(handle.slot())
            .filter(|s| s.active && s.generation == handle.generation())
    }
}

impl Default for CardPool {
    fn default() -> Self {
        Self::new(100)
    }
}
