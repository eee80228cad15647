//! Card system: identities, catalog, entities, pool, and pair selection.
//!
//! ## Key Types
//!
//! - `CardIdentity`: The face two cards share to form a pair
//! - `CardCatalog`: Distinct faces a round is dealt from
//! - `CardEntity`: Runtime card state (hidden/revealed/matched)
//! - `CardPool`: Fixed-capacity arena of reusable entities
//! - `PairSelector`: Chooses and shuffles the faces for a round

pub mod catalog;
pub mod identity;
pub mod instance;
pub mod pool;
pub mod selector;

pub use catalog::CardCatalog;
pub use identity::CardIdentity;
pub use instance::{CardEntity, Visibility};
pub use pool::CardPool;
pub use selector::{PairSelector, SelectionStrategy};
