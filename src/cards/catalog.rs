//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is built once, then only read. Every engine entry point
//! receives it explicitly; there is no global registry.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::error::EngineError;

const STARTER_SET: &str = include_str!("../../data/starter_cards.json");

/// Immutable registry of card definitions.
///
/// ## Example
///
/// ```
/// use menagerie::cards::{CardCatalog, CardDefinition, CardId};
///
/// let catalog = CardCatalog::from_definitions([
///     CardDefinition::animal(CardId::new(1), "Lion", 4, 3),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Lion");
/// assert_eq!(catalog.by_name("Lion").unwrap().id, CardId::new(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    names: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Build a catalog, validating each definition.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, EngineError> {
        let mut catalog = Self::default();
        for def in definitions {
            validate(&def)?;
            if catalog.cards.contains_key(&def.id) || catalog.names.contains_key(&def.name) {
                return Err(EngineError::DuplicateCard {
                    id: def.id,
                    name: def.name,
                });
            }
            catalog.names.insert(def.name.clone(), def.id);
            catalog.cards.insert(def.id, def);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let definitions: Vec<CardDefinition> =
            serde_json::from_str(json).map_err(EngineError::CatalogParse)?;
        Self::from_definitions(definitions)
    }

    /// The bundled starter set.
    pub fn starter() -> Result<Self, EngineError> {
        Self::from_json(STARTER_SET)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, as an error when missing.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, EngineError> {
        self.get(id).ok_or(EngineError::UnknownCard(id))
    }

    /// Get a card definition by exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.names.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut defs: Vec<_> = self.cards.values().collect();
        defs.sort_by_key(|d| d.id);
        defs.into_iter()
    }

    /// Find cards of one kind, in id order.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.kind == kind)
    }

    /// Build a deck list from card names.
    pub fn deck_from_names(&self, names: &[&str]) -> Result<Vec<CardId>, EngineError> {
        names
            .iter()
            .map(|name| {
                self.by_name(name)
                    .map(|def| def.id)
                    .ok_or_else(|| EngineError::UnknownCardName(name.to_string()))
            })
            .collect()
    }
}

fn validate(def: &CardDefinition) -> Result<(), EngineError> {
    let invalid = |reason: &str| EngineError::InvalidDefinition {
        name: def.name.clone(),
        reason: reason.to_string(),
    };

    match def.kind {
        CardKind::Animal => match (def.atk, def.hp) {
            (Some(atk), Some(hp)) if atk >= 0 && hp > 0 => Ok(()),
            (Some(_), Some(_)) => Err(invalid("animals need atk >= 0 and hp > 0")),
            _ => Err(invalid("animals need base atk and hp")),
        },
        CardKind::Status if def.tag.is_none() => Err(invalid("statuses need a category tag")),
        _ if def.atk.is_some() || def.hp.is_some() => Err(invalid("only animals carry atk/hp")),
        _ => Ok(()),
    }
}
