//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its kind,
//! rarity, base stats and the ordered effect declarations that the resolver
//! interprets. Runtime state (damage taken, attached statuses) lives on
//! `BoardCreature`.

use serde::{Deserialize, Serialize};

use crate::effects::{ActionKind, EffectDeclaration, Trigger};

/// Unique identifier for a card definition.
///
/// Identifies the printed card ("Lion"), not a copy of it in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Occupies a board slot and attacks.
    Animal,
    /// One-shot effect, discarded after resolving.
    Action,
    /// Persistent modifier attached to a creature or player.
    Status,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Animal => "animal",
            CardKind::Action => "action",
            CardKind::Status => "status",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Category tag carried by status cards.
///
/// Immunities can name either a specific status or one of these tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    /// Host cannot attack.
    PreventAttack,
    /// Host attacks even through `PreventAttack` statuses.
    ForceAttack,
    /// Raises ATK or HP.
    Buff,
    /// Lowers ATK or HP.
    Debuff,
    /// Deals damage to the host every turn.
    DamageOverTime,
    /// Blocks the host player's draws.
    PreventDraw,
    /// Prevents the next damage to the host, then is discarded.
    ///
    /// Declared only; damage is not intercepted yet (see DESIGN.md).
    Shield,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use menagerie::cards::{CardDefinition, CardId, CardKind};
/// use menagerie::effects::{ActionKind, EffectDeclaration, Trigger};
///
/// let turtle = CardDefinition::animal(CardId::new(1), "Turtle", 1, 6)
///     .with_effect(EffectDeclaration::new(Trigger::Static, ActionKind::PreventAttack));
///
/// assert_eq!(turtle.kind, CardKind::Animal);
/// assert!(turtle.cannot_attack());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    #[serde(default)]
    pub rarity: Rarity,
    /// Base attack (animals only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i64>,
    /// Base health (animals only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i64>,
    /// Category tag (statuses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<StatusTag>,
    /// Effect declarations in resolution order.
    #[serde(default)]
    pub effects: Vec<EffectDeclaration>,
}

impl CardDefinition {
    /// Create a definition with no stats and no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            rarity: Rarity::default(),
            atk: None,
            hp: None,
            tag: None,
            effects: Vec::new(),
        }
    }

    /// Create an animal definition with base stats.
    #[must_use]
    pub fn animal(id: CardId, name: impl Into<String>, atk: i64, hp: i64) -> Self {
        let mut def = Self::new(id, name, CardKind::Animal);
        def.atk = Some(atk);
        def.hp = Some(hp);
        def
    }

    /// Create an action definition.
    #[must_use]
    pub fn action(id: CardId, name: impl Into<String>) -> Self {
        Self::new(id, name, CardKind::Action)
    }

    /// Create a status definition with its category tag.
    #[must_use]
    pub fn status(id: CardId, name: impl Into<String>, tag: StatusTag) -> Self {
        let mut def = Self::new(id, name, CardKind::Status);
        def.tag = Some(tag);
        def
    }

    /// Set rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Append an effect declaration (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectDeclaration) -> Self {
        self.effects.push(effect);
        self
    }

    /// Base ATK, 0 for non-animals.
    #[must_use]
    pub fn base_atk(&self) -> i64 {
        self.atk.unwrap_or(0)
    }

    /// Base HP, 0 for non-animals.
    #[must_use]
    pub fn base_hp(&self) -> i64 {
        self.hp.unwrap_or(0)
    }

    /// Effects declared for a trigger point, in declaration order.
    pub fn effects_for(&self, trigger: Trigger) -> impl Iterator<Item = &EffectDeclaration> {
        self.effects.iter().filter(move |e| e.trigger == trigger)
    }

    /// Does this card carry a static, card-intrinsic "cannot attack"?
    #[must_use]
    pub fn cannot_attack(&self) -> bool {
        self.effects_for(Trigger::Static)
            .any(|e| matches!(e.action, ActionKind::PreventAttack))
    }

    /// Is this card immune to the given status?
    ///
    /// Immunity is declared statically, either by exact status name or by
    /// category tag.
    #[must_use]
    pub fn is_immune_to(&self, status: &CardDefinition) -> bool {
        self.effects_for(Trigger::Static)
            .filter(|e| matches!(e.action, ActionKind::Immune))
            .filter_map(|e| e.filter.as_ref())
            .any(|filter| {
                filter.status_name.as_deref() == Some(status.name.as_str())
                    || (filter.status_tag.is_some() && filter.status_tag == status.tag)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectFilter;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_animal_builder() {
        let lion = CardDefinition::animal(CardId::new(1), "Lion", 4, 3).with_rarity(Rarity::Rare);

        assert_eq!(lion.kind, CardKind::Animal);
        assert_eq!(lion.base_atk(), 4);
        assert_eq!(lion.base_hp(), 3);
        assert_eq!(lion.rarity, Rarity::Rare);
        assert!(!lion.cannot_attack());
    }

    #[test]
    fn test_immunity_by_name_and_tag() {
        let sleep = CardDefinition::status(CardId::new(10), "Sleep", StatusTag::PreventAttack);
        let web = CardDefinition::status(CardId::new(11), "Web", StatusTag::PreventAttack);
        let poison = CardDefinition::status(CardId::new(12), "Poison", StatusTag::DamageOverTime);

        let owl = CardDefinition::animal(CardId::new(1), "Owl", 2, 2).with_effect(
            EffectDeclaration::new(Trigger::Static, ActionKind::Immune)
                .with_filter(EffectFilter::status_named("Sleep")),
        );
        assert!(owl.is_immune_to(&sleep));
        assert!(!owl.is_immune_to(&web));

        let snake = CardDefinition::animal(CardId::new(2), "Snake", 2, 2).with_effect(
            EffectDeclaration::new(Trigger::Static, ActionKind::Immune)
                .with_filter(EffectFilter::status_tagged(StatusTag::DamageOverTime)),
        );
        assert!(snake.is_immune_to(&poison));
        assert!(!snake.is_immune_to(&sleep));
    }

    #[test]
    fn test_effects_for_preserves_order() {
        let card = CardDefinition::action(CardId::new(5), "Storm")
            .with_effect(EffectDeclaration::new(Trigger::OnPlay, ActionKind::DealDamage { amount: 1 }))
            .with_effect(EffectDeclaration::new(Trigger::OnPlay, ActionKind::DrawCards { count: 1 }));

        let actions: Vec<_> = card.effects_for(Trigger::OnPlay).map(|e| &e.action).collect();
        assert_eq!(
            actions,
            vec![&ActionKind::DealDamage { amount: 1 }, &ActionKind::DrawCards { count: 1 }]
        );
    }

    #[test]
    fn test_definition_json() {
        let json = r#"{
            "id": 3,
            "name": "Bee",
            "kind": "animal",
            "atk": 1,
            "hp": 1,
            "effects": [
                {"trigger": "on_death", "action": {"type": "deal_damage", "amount": 1}, "target": "opponent"}
            ]
        }"#;
        let bee: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(bee.rarity, Rarity::Common);
        assert_eq!(bee.effects_for(Trigger::OnDeath).count(), 1);
    }
}
