//! Card system: definitions, the catalog, and runtime instances.
//!
//! - `CardDefinition`: immutable card data (kind, stats, effect declarations)
//! - `CardCatalog`: the read-only registry every entry point receives
//! - `BoardCreature` / `AttachedStatus`: mutable in-play state

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardKind, Rarity, StatusTag};
pub use instance::{AttachedStatus, BoardCreature};
