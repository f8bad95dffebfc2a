//! Engine error type.
//!
//! Errors surface from construction paths (catalog loading, deck building,
//! match creation). During effect resolution they are caught by the queue
//! drain and turned into `GameEvent::EffectSkipped` diagnostics instead of
//! aborting the match.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::EntityId;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("no card named {0:?} in the catalog")]
    UnknownCardName(String),

    #[error("card {id} is registered twice ({name:?})")]
    DuplicateCard { id: CardId, name: String },

    #[error("invalid definition for {name:?}: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("failed to parse card catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),

    #[error("failed to parse match config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid match config: {0}")]
    InvalidConfig(String),

    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    #[error("target {0} does not exist")]
    UnknownTarget(EntityId),
}
