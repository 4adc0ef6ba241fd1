//! Daily spellcasting recharge: focus points, slots, and innate uses.

use hearth_core::{CastingMode, CharacterSnapshot, ItemData};

use crate::plan::{ItemChange, ItemUpdate, push_change};

/// What the spellcasting subsystem proposes after a night's rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellcastingRecharge {
    /// New focus point value, if the pool was not full.
    pub focus: Option<i32>,
    /// Slot and spell updates.
    pub item_updates: Vec<ItemUpdate>,
}

/// Compute the spellcasting recharge for a character.
///
/// Spontaneous entries regain every slot, prepared entries un-expend
/// their prepared spells, and innate spells regain their daily uses.
/// Focus and ritual entries hold nothing to recharge.
pub fn recharge(snapshot: &CharacterSnapshot) -> SpellcastingRecharge {
    let focus = snapshot
        .resources
        .focus
        .filter(|pool| !pool.is_full())
        .map(|pool| pool.max);

    let mut item_updates = Vec::new();
    for (entry, mode, slots) in snapshot.spellcasting_entries() {
        match mode {
            CastingMode::Spontaneous => {
                for slot in slots.iter().filter(|s| !s.pool.is_full()) {
                    push_change(
                        &mut item_updates,
                        entry.id,
                        ItemChange::SlotValue {
                            rank: slot.rank,
                            value: slot.pool.max,
                        },
                    );
                }
            }
            CastingMode::Prepared => {
                for slot in slots {
                    for (index, prepared) in slot.prepared.iter().enumerate() {
                        if prepared.expended {
                            push_change(
                                &mut item_updates,
                                entry.id,
                                ItemChange::PreparedRestored {
                                    rank: slot.rank,
                                    index,
                                },
                            );
                        }
                    }
                }
            }
            CastingMode::Innate => {
                for spell in snapshot.spells_in(entry.id) {
                    let ItemData::Spell {
                        uses: Some(uses), ..
                    } = &spell.data
                    else {
                        continue;
                    };
                    if !uses.is_full() {
                        push_change(
                            &mut item_updates,
                            spell.id,
                            ItemChange::Uses { value: uses.max },
                        );
                    }
                }
            }
            CastingMode::Focus | CastingMode::Ritual => {}
        }
    }

    SpellcastingRecharge {
        focus,
        item_updates,
    }
}
