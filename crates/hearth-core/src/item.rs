//! Items embedded in a character: inventory, abilities, spells, and
//! spellcasting entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;
use crate::id::ItemId;
use crate::pool::Pool;

/// An item owned by a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Host identifier of the item.
    #[serde(default)]
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Temporary items (conjured, borrowed, ...) vanish overnight.
    #[serde(default)]
    pub temporary: bool,
    /// Type-specific data.
    #[serde(flatten)]
    pub data: ItemData,
}

impl Item {
    /// Create an item with a fresh id.
    pub fn new(name: impl Into<String>, data: ItemData) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            temporary: false,
            data,
        }
    }

    /// Mark the item as temporary.
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Physical items make up the inventory.
    pub fn is_physical(&self) -> bool {
        matches!(
            self.data,
            ItemData::Consumable { .. } | ItemData::Equipment
        )
    }

    /// The usage frequency of an action or feat, if it has one.
    pub fn frequency(&self) -> Option<&Frequency> {
        match &self.data {
            ItemData::Action { frequency } | ItemData::Feat { frequency } => frequency.as_ref(),
            _ => None,
        }
    }
}

/// Type-specific item data, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemData {
    /// A consumable with charges or doses.
    Consumable {
        /// What kind of consumable this is.
        category: ConsumableCategory,
        /// Remaining and maximum uses.
        uses: Pool,
    },
    /// Any other physical gear.
    Equipment,
    /// An action the character can take.
    Action {
        /// Usage limit, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frequency: Option<Frequency>,
    },
    /// A feat.
    Feat {
        /// Usage limit, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frequency: Option<Frequency>,
    },
    /// A spell known, prepared, or granted through an entry.
    Spell {
        /// The spellcasting entry the spell belongs to.
        entry: ItemId,
        /// Per-day uses for innate spells.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uses: Option<Pool>,
    },
    /// A spellcasting entry holding slots.
    SpellcastingEntry {
        /// How spells are cast from this entry.
        mode: CastingMode,
        /// Slots by rank.
        #[serde(default)]
        slots: Vec<SpellSlot>,
    },
}

/// The category of a consumable item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumableCategory {
    /// A wand, recharged by resting.
    Wand,
    /// A scroll.
    Scroll,
    /// A potion.
    Potion,
    /// An elixir.
    Elixir,
    /// Ammunition.
    Ammo,
    /// Anything else.
    Other(String),
}

impl fmt::Display for ConsumableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wand => write!(f, "wand"),
            Self::Scroll => write!(f, "scroll"),
            Self::Potion => write!(f, "potion"),
            Self::Elixir => write!(f, "elixir"),
            Self::Ammo => write!(f, "ammo"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// How spells are cast from an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingMode {
    /// Spells prepared into slots each day.
    Prepared,
    /// Slots spent freely on a repertoire.
    Spontaneous,
    /// Spells granted with their own daily uses.
    Innate,
    /// Spells paid for with focus points.
    Focus,
    /// Rituals; nothing to recharge.
    Ritual,
}

/// The slots of one spell rank in an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    /// Spell rank (0 for cantrips).
    pub rank: u8,
    /// Remaining and maximum slots (spontaneous casting).
    #[serde(default)]
    pub pool: Pool,
    /// Spells prepared into this rank (prepared casting).
    #[serde(default)]
    pub prepared: Vec<PreparedSpell>,
}

/// A spell prepared into a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedSpell {
    /// The spell item.
    pub spell: ItemId,
    /// Whether the slot has been cast today.
    #[serde(default)]
    pub expended: bool,
}
