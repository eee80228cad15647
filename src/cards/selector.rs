//! Pair selection.
//!
//! The selector turns a catalog and a pair count into the shuffled face
//! sequence for one round. Every chosen face appears exactly twice per pair
//! it was chosen for, and the whole sequence is Fisher-Yates shuffled so pair
//! members are not adjacent by construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameRng};

use super::catalog::CardCatalog;
use super::identity::CardIdentity;

/// How faces are chosen before duplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// One of each catalog face in order, then uniform random faces (with
    /// repetition) for any remaining pairs. Works with any non-empty catalog.
    #[default]
    CycleThenFill,
    /// Uniform sample of distinct faces. Needs at least `pair_count` faces.
    SampleWithoutReplacement,
}

/// Deals card faces for a round.
#[derive(Clone, Debug)]
pub struct PairSelector {
    catalog: CardCatalog,
    strategy: SelectionStrategy,
}

impl PairSelector {
    /// Create a selector over a catalog.
    #[must_use]
    pub fn new(catalog: CardCatalog, strategy: SelectionStrategy) -> Self {
        Self { catalog, strategy }
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Check that a deal of `pair_count` pairs can succeed.
    ///
    /// `deal` performs the same checks; this lets callers fail before
    /// touching any state.
    pub fn check(&self, pair_count: usize, capacity: usize) -> Result<(), GameError> {
        if self.catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if pair_count.saturating_mul(2) > capacity {
            return Err(GameError::PairCountExceedsCapacity {
                pairs: pair_count,
                capacity,
            });
        }
        if self.strategy == SelectionStrategy::SampleWithoutReplacement
            && pair_count > self.catalog.len()
        {
            return Err(GameError::CatalogTooSmall {
                requested: pair_count,
                available: self.catalog.len(),
            });
        }
        Ok(())
    }

    /// Produce `2 * pair_count` shuffled faces.
    ///
    /// Fails when the catalog is empty, when the cards would not fit in a pool
    /// of `capacity`, or when sampling needs more faces than the catalog has.
    pub fn deal(
        &self,
        pair_count: usize,
        capacity: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<CardIdentity>, GameError> {
        self.check(pair_count, capacity)?;

        let faces = match self.strategy {
            SelectionStrategy::CycleThenFill => self.cycle_then_fill(pair_count, rng),
            SelectionStrategy::SampleWithoutReplacement => rng
                .sample(self.catalog.as_slice(), pair_count)
                .into_iter()
                .cloned()
                .collect(),
        };

        let mut deal: Vec<CardIdentity> = faces
            .into_iter()
            .flat_map(|face| [face.clone(), face])
            .collect();
        rng.shuffle(&mut deal);

        debug!(pairs = pair_count, strategy = ?self.strategy, "dealt card faces");
        Ok(deal)
    }

    fn cycle_then_fill(&self, pair_count: usize, rng: &mut GameRng) -> Vec<CardIdentity> {
        let catalog = self.catalog.as_slice();
        let mut faces: Vec<CardIdentity> = catalog.iter().take(pair_count).cloned().collect();
        while faces.len() < pair_count {
            let pick = rng.gen_range_usize(0..catalog.len());
            faces.push(catalog[pick].clone());
        }
        faces
    }
}
