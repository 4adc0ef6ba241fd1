//! Character snapshots.
//!
//! A [`CharacterSnapshot`] is a read-only copy of the parts of an actor
//! the rest rules look at. Optional pools (stamina, resolve, focus,
//! infused reagents) are `None` when the host does not track them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, ConditionSlug};
use crate::id::{ActorId, ItemId};
use crate::item::{CastingMode, Item, ItemData, SpellSlot};
use crate::pool::Pool;

/// The kind of an actor document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A player character; the only kind that rests.
    #[default]
    Character,
    /// A non-player creature.
    Npc,
    /// A familiar.
    Familiar,
    /// Any other actor type.
    Other(String),
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Npc => write!(f, "npc"),
            Self::Familiar => write!(f, "familiar"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

fn default_multiplier() -> i32 {
    1
}

/// Hit points and the values that shape overnight recovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Current hit points.
    pub value: i32,
    /// Maximum hit points.
    pub max: i32,
    /// Multiplier applied to the base recovery amount.
    #[serde(default = "default_multiplier")]
    pub recovery_multiplier: i32,
    /// Flat bonus added to the recovery amount.
    #[serde(default)]
    pub recovery_addend: i32,
    /// Stamina points (stamina variant only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina: Option<Pool>,
    /// Wound damage tracked by the stamina variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_taken: Option<i32>,
}

impl HitPoints {
    /// Hit points with default recovery modifiers and no stamina data.
    pub fn new(value: i32, max: i32) -> Self {
        Self {
            value,
            max,
            recovery_multiplier: 1,
            recovery_addend: 0,
            stamina: None,
            damage_taken: None,
        }
    }

    /// How many hit points are missing (never negative).
    pub fn lost(&self) -> i32 {
        self.max.saturating_sub(self.value).max(0)
    }
}

/// Resource pools outside hit points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resources {
    /// Focus points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<Pool>,
    /// Resolve points (stamina variant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Pool>,
    /// Infused reagents for alchemical crafting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infused_reagents: Option<Pool>,
}

/// A read-only view of one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    /// Host identifier.
    #[serde(default)]
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Actor type.
    #[serde(default)]
    pub kind: ActorKind,
    /// Character level.
    pub level: i32,
    /// Constitution modifier.
    #[serde(default)]
    pub con_modifier: i32,
    /// Hit points.
    pub hit_points: HitPoints,
    /// Other resource pools.
    #[serde(default)]
    pub resources: Resources,
    /// Active conditions.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Embedded items.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CharacterSnapshot {
    /// A character with the given stats and nothing else.
    pub fn new(name: impl Into<String>, level: i32, con_modifier: i32, hp: HitPoints) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind: ActorKind::Character,
            level,
            con_modifier,
            hit_points: hp,
            resources: Resources::default(),
            conditions: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Look up an active condition by slug.
    pub fn condition(&self, slug: &ConditionSlug) -> Option<&Condition> {
        self.conditions.iter().find(|c| &c.slug == slug)
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Physical items carried by the character.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.is_physical())
    }

    /// Actions and feats that carry a usage frequency.
    pub fn items_with_frequency(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.frequency().is_some())
    }

    /// Spellcasting entries with their mode and slots.
    pub fn spellcasting_entries(&self) -> impl Iterator<Item = (&Item, CastingMode, &[SpellSlot])> {
        self.items.iter().filter_map(|i| match &i.data {
            ItemData::SpellcastingEntry { mode, slots } => Some((i, *mode, slots.as_slice())),
            _ => None,
        })
    }

    /// Spells belonging to the given entry.
    pub fn spells_in(&self, entry: ItemId) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |i| matches!(&i.data, ItemData::Spell { entry: e, .. } if *e == entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{Frequency, FrequencyPeriod};
    use crate::item::ConsumableCategory;

    fn sample() -> CharacterSnapshot {
        let mut c = CharacterSnapshot::new("Amiri", 3, 2, HitPoints::new(20, 45));
        c.conditions.push(Condition::valued(ConditionSlug::Drained, 1));
        c.items.push(Item::new("Rope", ItemData::Equipment));
        c.items.push(Item::new(
            "Wand of Mending",
            ItemData::Consumable {
                category: ConsumableCategory::Wand,
                uses: Pool::with_value(0, 1),
            },
        ));
        c.items.push(Item::new(
            "Rage",
            ItemData::Action {
                frequency: Some(Frequency::new(1, FrequencyPeriod::Round)),
            },
        ));
        c
    }

    #[test]
    fn hp_lost() {
        assert_eq!(HitPoints::new(20, 45).lost(), 25);
        assert_eq!(HitPoints::new(50, 45).lost(), 0);
    }

    #[test]
    fn condition_lookup() {
        let c = sample();
        assert_eq!(
            c.condition(&ConditionSlug::Drained).and_then(|c| c.value),
            Some(1)
        );
        assert!(c.condition(&ConditionSlug::Doomed).is_none());
    }

    #[test]
    fn item_views() {
        let c = sample();
        assert_eq!(c.inventory().count(), 2);
        assert_eq!(c.items_with_frequency().count(), 1);
        assert_eq!(c.spellcasting_entries().count(), 0);
    }

    #[test]
    fn spells_grouped_by_entry() {
        let mut c = sample();
        let entry = Item::new(
            "Arcane Prepared",
            ItemData::SpellcastingEntry {
                mode: CastingMode::Prepared,
                slots: Vec::new(),
            },
        );
        let entry_id = entry.id;
        c.items.push(entry);
        c.items.push(Item::new(
            "Magic Missile",
            ItemData::Spell {
                entry: entry_id,
                uses: None,
            },
        ));
        c.items.push(Item::new(
            "Stray Spell",
            ItemData::Spell {
                entry: ItemId::new(),
                uses: None,
            },
        ));
        assert_eq!(c.spells_in(entry_id).count(), 1);
        assert_eq!(c.spellcasting_entries().count(), 1);
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{
            "name": "Ezren",
            "level": 2,
            "hit_points": { "value": 10, "max": 18 }
        }"#;
        let c: CharacterSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(c.kind, ActorKind::Character);
        assert_eq!(c.con_modifier, 0);
        assert_eq!(c.hit_points.recovery_multiplier, 1);
        assert_eq!(c.hit_points.recovery_addend, 0);
        assert!(c.resources.focus.is_none());
        assert!(c.items.is_empty());
    }
}
