//! Effect declarations.
//!
//! A card's abilities are an ordered list of `EffectDeclaration`s: a trigger
//! point, a closed `ActionKind`, and optional targeting, filter and duration.
//! The declarations are pure data (loadable from JSON); the resolver gives
//! them meaning.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardId, CardKind, StatusTag};

/// Event point at which a declaration fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// When the card is played from hand.
    OnPlay,
    /// After the creature deals its attack damage.
    OnAttack,
    /// When the creature itself is destroyed.
    OnDeath,
    /// When any other creature is destroyed.
    OnAnimalDeath,
    /// During the owner's draw phase, after the draw.
    OnTurnStart,
    /// During the owner's end phase.
    OnTurnEnd,
    /// Always on while the card is in play (or attached).
    Static,
}

/// The closed set of things an effect can do.
///
/// Payload values live on the variant that uses them; timing lives on the
/// declaration (`duration`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Damage a creature's HP or a player's life.
    DealDamage { amount: i64 },
    /// Target player draws cards.
    DrawCards { count: u32 },
    /// Destroy target creatures outright.
    Destroy,
    /// Permanent ATK change on a creature; while attached as a static status,
    /// an ATK delta on the host.
    ModifyAtk { amount: i64 },
    /// Change a creature's current and max HP.
    ModifyHp { amount: i64 },
    /// Restore a creature's HP, capped at max HP.
    Heal { amount: i64 },
    /// Gain (positive) or lose (negative) life.
    ModifyLife { amount: i64 },
    /// Attach a status. `None` attaches the card being played; `Some` grants
    /// a token copy of the named status definition.
    AttachStatus {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<CardId>,
    },
    /// Static: host cannot attack. One-shot: target frozen for `duration`
    /// turns.
    PreventAttack,
    /// Target player skips their next draw.
    PreventDraw,
    /// Static on a status: host attacks despite `PreventAttack` statuses.
    ForceAttack,
    /// Static: immunity to statuses matching the declaration's filter.
    Immune,
    /// Acting player may play additional animals this turn.
    ExtraAnimalPlay { count: u32 },
    /// Target player discards their hand (optionally filtered by kind).
    DiscardHand,
}

impl ActionKind {
    /// Target used when a declaration omits one.
    #[must_use]
    pub fn default_target(&self) -> TargetSelector {
        match self {
            ActionKind::DrawCards { .. }
            | ActionKind::ModifyLife { .. }
            | ActionKind::PreventDraw
            | ActionKind::ExtraAnimalPlay { .. }
            | ActionKind::DiscardHand => TargetSelector::SelfPlayer,
            _ => TargetSelector::Any,
        }
    }
}

/// How a declaration picks its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSelector {
    /// The target id supplied with the play (creature or player).
    Any,
    /// The acting player.
    #[serde(rename = "self")]
    SelfPlayer,
    /// The acting player's opponent.
    Opponent,
    /// Both players.
    Player,
    /// The creature the effect comes from.
    SelfAnimal,
    /// The creature or player a status is attached to.
    Host,
    /// Every creature on both boards.
    AllAnimals,
    /// Every creature on the acting player's board.
    FriendlyAnimals,
    /// Every creature on the opponent's board.
    EnemyAnimals,
    /// One creature from either board, chosen at resolution time.
    RandomAnimal,
    /// One creature from the opponent's board, chosen at resolution time.
    RandomEnemyAnimal,
}

/// Narrows candidate targets or discarded cards.
///
/// All present fields must match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_tag: Option<StatusTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_atk: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_atk: Option<i64>,
}

impl EffectFilter {
    /// Filter on an exact status name.
    #[must_use]
    pub fn status_named(name: impl Into<String>) -> Self {
        Self {
            status_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Filter on a status category tag.
    #[must_use]
    pub fn status_tagged(tag: StatusTag) -> Self {
        Self {
            status_tag: Some(tag),
            ..Self::default()
        }
    }

    /// Filter on a card kind.
    #[must_use]
    pub fn of_kind(kind: CardKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Filter on current ATK at most `max`.
    #[must_use]
    pub fn atk_at_most(max: i64) -> Self {
        Self {
            max_atk: Some(max),
            ..Self::default()
        }
    }

    /// Filter on current ATK at least `min`.
    #[must_use]
    pub fn atk_at_least(min: i64) -> Self {
        Self {
            min_atk: Some(min),
            ..Self::default()
        }
    }

    /// Does a card in hand match the kind constraint?
    #[must_use]
    pub fn matches_card(&self, card: &CardDefinition) -> bool {
        self.kind.is_none_or(|kind| kind == card.kind)
    }

    /// Does a creature with the given current ATK and attached status
    /// definitions match?
    #[must_use]
    pub fn matches_creature<'a>(
        &self,
        atk: i64,
        mut statuses: impl Iterator<Item = &'a CardDefinition>,
    ) -> bool {
        if self.kind.is_some_and(|kind| kind != CardKind::Animal) {
            return false;
        }
        if self.min_atk.is_some_and(|min| atk < min) || self.max_atk.is_some_and(|max| atk > max) {
            return false;
        }
        if self.status_name.is_none() && self.status_tag.is_none() {
            return true;
        }
        statuses.any(|status| {
            self.status_name.as_deref().is_none_or(|name| name == status.name)
                && self.status_tag.is_none_or(|tag| status.tag == Some(tag))
        })
    }
}

/// One declared effect on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectDeclaration {
    pub trigger: Trigger,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<EffectFilter>,
    /// Turns a status or freeze lasts. `None` is permanent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl EffectDeclaration {
    #[must_use]
    pub fn new(trigger: Trigger, action: ActionKind) -> Self {
        Self {
            trigger,
            action,
            target: None,
            filter: None,
            duration: None,
        }
    }

    /// Set the target selector (builder pattern).
    #[must_use]
    pub fn targeting(mut self, target: TargetSelector) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the filter (builder pattern).
    #[must_use]
    pub fn with_filter(mut self, filter: EffectFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn lasting(mut self, turns: u32) -> Self {
        self.duration = Some(turns);
        self
    }

    /// The declared selector, or the action's default.
    #[must_use]
    pub fn target_selector(&self) -> TargetSelector {
        self.target.unwrap_or_else(|| self.action.default_target())
    }
}
