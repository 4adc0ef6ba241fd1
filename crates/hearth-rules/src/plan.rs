//! Recovery plans: everything a rest will change, computed up front.
//!
//! A plan is built from a snapshot without touching the host. The commit
//! phase in [`crate::rest`] turns it into host writes.

use serde::{Deserialize, Serialize};

use hearth_core::{ConditionSlug, ItemId};

/// Actor-level fields to write in one batch. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorUpdate {
    /// New current hit points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    /// New stamina points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina: Option<i32>,
    /// New stamina-variant wound damage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_taken: Option<i32>,
    /// New resolve points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<i32>,
    /// New focus points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<i32>,
    /// New infused reagents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infused_reagents: Option<i32>,
}

impl ActorUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.hp.is_none()
            && self.stamina.is_none()
            && self.damage_taken.is_none()
            && self.resolve.is_none()
            && self.focus.is_none()
            && self.infused_reagents.is_none()
    }
}

/// A single field change on an embedded item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ItemChange {
    /// Set remaining uses (wand charges, innate spell uses).
    Uses {
        /// New remaining uses.
        value: i32,
    },
    /// Set remaining frequency uses.
    Frequency {
        /// New remaining uses.
        value: i32,
    },
    /// Set remaining slots of a rank in a spontaneous entry.
    SlotValue {
        /// Spell rank.
        rank: u8,
        /// New remaining slots.
        value: i32,
    },
    /// Un-expend a prepared spell.
    PreparedRestored {
        /// Spell rank.
        rank: u8,
        /// Index within the rank's prepared list.
        index: usize,
    },
}

/// All field changes for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// The item to change.
    pub id: ItemId,
    /// Changes to apply, in order.
    pub changes: Vec<ItemChange>,
}

/// Append a change, merging into an existing update for the same item.
pub(crate) fn push_change(updates: &mut Vec<ItemUpdate>, id: ItemId, change: ItemChange) {
    match updates.iter_mut().find(|u| u.id == id) {
        Some(update) => update.changes.push(change),
        None => updates.push(ItemUpdate {
            id,
            changes: vec![change],
        }),
    }
}

/// What a rest does to one recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionChange {
    /// Absent, or left as it was.
    Unchanged,
    /// Severity lowered by one.
    Reduced,
    /// Gone entirely.
    Removed,
}

/// A condition decrement to send to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionOp {
    /// Which condition.
    pub slug: ConditionSlug,
    /// Remove regardless of severity.
    pub force_remove: bool,
}

/// One line of the rest summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Statement {
    /// Hit points regained.
    HitPointsRestored(i32),
    /// Infused reagents refilled.
    InfusedReagents,
    /// Frequency-limited actions and feats reset.
    Frequencies,
    /// Stamina points refilled.
    StaminaPoints,
    /// New maximum hit points under the stamina variant.
    MaxHitPointsCeiling(i32),
    /// Resolve points refilled.
    Resolve,
    /// Temporary items removed.
    TemporaryItems,
    /// Focus points refilled.
    FocusPoints,
    /// Spell slots refreshed.
    SpellSlots,
    /// Wand charges restored.
    WandCharges,
    /// A condition's severity dropped.
    ConditionReduced(ConditionSlug),
    /// A condition ended.
    ConditionRemoved(ConditionSlug),
}

/// Everything one character's rest will change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPlan {
    /// Actor-level field writes.
    pub actor: ActorUpdate,
    /// Item field writes, one entry per item.
    pub items: Vec<ItemUpdate>,
    /// Temporary items to delete.
    pub deletions: Vec<ItemId>,
    /// Condition decrements, applied before any field write.
    pub condition_ops: Vec<ConditionOp>,
    /// The outcome for each recoverable condition, in evaluation order.
    pub condition_changes: Vec<(ConditionSlug, ConditionChange)>,
    /// Summary lines in display order.
    pub statements: Vec<Statement>,
}

impl RecoveryPlan {
    /// Returns true if the plan changes nothing and says nothing.
    pub fn is_empty(&self) -> bool {
        self.actor.is_empty()
            && self.items.is_empty()
            && self.deletions.is_empty()
            && self.condition_ops.is_empty()
            && self.statements.is_empty()
    }

    /// The recorded outcome for a condition.
    pub fn condition_change(&self, slug: &ConditionSlug) -> ConditionChange {
        self.condition_changes
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, c)| *c)
            .unwrap_or(ConditionChange::Unchanged)
    }

    /// The pending changes for one item.
    pub fn item_changes(&self, id: ItemId) -> &[ItemChange] {
        self.items
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.changes.as_slice())
            .unwrap_or(&[])
    }
}
