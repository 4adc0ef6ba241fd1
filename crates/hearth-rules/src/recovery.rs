//! The nightly recovery rule engine.
//!
//! [`compute_recovery_plan`] reads a snapshot and returns a complete
//! [`RecoveryPlan`]. Nothing is written here; the plan is committed by
//! [`crate::rest`].

use hearth_core::{CharacterSnapshot, ConsumableCategory, ItemData};
use tracing::debug;

use crate::conditions::resolve_conditions;
use crate::config::RestConfig;
use crate::frequency::frequency_recharges;
use crate::plan::{ConditionChange, ItemChange, RecoveryPlan, Statement, push_change};
use crate::spellcasting;
use crate::stamina::stamina_recovery;

/// Hit points a character regains overnight:
/// `max(con, 1) * level * multiplier + addend`.
pub fn recovery_amount(snapshot: &CharacterSnapshot) -> i32 {
    let hp = &snapshot.hit_points;
    snapshot
        .con_modifier
        .max(1)
        .saturating_mul(snapshot.level)
        .saturating_mul(hp.recovery_multiplier)
        .saturating_add(hp.recovery_addend)
}

/// Compute everything a night's rest changes for one character.
///
/// The statements come out in a fixed display order: hit points,
/// reagents, frequencies, stamina variant, temporary items, focus, spell
/// slots, wands, reduced conditions, removed conditions.
pub fn compute_recovery_plan(snapshot: &CharacterSnapshot, config: &RestConfig) -> RecoveryPlan {
    let mut plan = RecoveryPlan::default();
    let hp = &snapshot.hit_points;

    // Hit points
    let amount = recovery_amount(snapshot);
    let restored = hp.lost().min(amount);
    let mut planned_hp = hp.value;
    let mut hp_statement = None;
    if restored > 0 {
        planned_hp += restored;
        hp_statement = Some(Statement::HitPointsRestored(restored));
    }

    // Conditions
    let conditions = resolve_conditions(snapshot, planned_hp);
    plan.condition_ops = conditions.ops.clone();

    // Wands
    let mut wands_recharged = false;
    for item in snapshot.inventory().filter(|i| !i.temporary) {
        let ItemData::Consumable {
            category: ConsumableCategory::Wand,
            uses,
        } = &item.data
        else {
            continue;
        };
        if !uses.is_full() {
            push_change(&mut plan.items, item.id, ItemChange::Uses { value: uses.max });
            wands_recharged = true;
        }
    }

    // Infused reagents
    let mut reagents_statement = None;
    if let Some(reagents) = snapshot.resources.infused_reagents.filter(|p| !p.is_full()) {
        plan.actor.infused_reagents = Some(reagents.max);
        reagents_statement = Some(Statement::InfusedReagents);
    }

    // Spellcasting
    let spells = spellcasting::recharge(snapshot);
    let spell_slots_recharged = !spells.item_updates.is_empty();
    for update in spells.item_updates {
        for change in update.changes {
            push_change(&mut plan.items, update.id, change);
        }
    }
    plan.actor.focus = spells.focus;

    // Frequencies
    let frequencies = frequency_recharges(snapshot);
    let frequencies_restored = !frequencies.is_empty();
    for update in frequencies {
        for change in update.changes {
            push_change(&mut plan.items, update.id, change);
        }
    }

    // Stamina variant
    let mut stamina_statements = Vec::new();
    if config.stamina_variant {
        let stamina = stamina_recovery(snapshot, amount);
        if let Some(value) = stamina.stamina {
            plan.actor.stamina = Some(value);
            stamina_statements.push(Statement::StaminaPoints);
        }
        if let (Some(damage), Some(ceiling)) = (stamina.damage_taken, stamina.hp_ceiling) {
            plan.actor.damage_taken = Some(damage);
            stamina_statements.push(Statement::MaxHitPointsCeiling(ceiling));
            planned_hp = planned_hp.min(ceiling);
        }
        if let Some(value) = stamina.resolve {
            plan.actor.resolve = Some(value);
            stamina_statements.push(Statement::Resolve);
        }
    }

    if planned_hp != hp.value {
        plan.actor.hp = Some(planned_hp);
    }

    // Temporary items
    plan.deletions = snapshot
        .inventory()
        .filter(|i| i.temporary)
        .map(|i| i.id)
        .collect();

    let statements = &mut plan.statements;
    statements.extend(hp_statement);
    statements.extend(reagents_statement);
    if frequencies_restored {
        statements.push(Statement::Frequencies);
    }
    statements.extend(stamina_statements);
    if !plan.deletions.is_empty() {
        statements.push(Statement::TemporaryItems);
    }
    if plan.actor.focus.is_some() {
        statements.push(Statement::FocusPoints);
    }
    if spell_slots_recharged {
        statements.push(Statement::SpellSlots);
    }
    if wands_recharged {
        statements.push(Statement::WandCharges);
    }
    statements.extend(
        conditions
            .with_change(ConditionChange::Reduced)
            .cloned()
            .map(Statement::ConditionReduced),
    );
    statements.extend(
        conditions
            .with_change(ConditionChange::Removed)
            .cloned()
            .map(Statement::ConditionRemoved),
    );

    plan.condition_changes = conditions.changes;

    debug!(
        actor = %snapshot.name,
        recovery = amount,
        items = plan.items.len(),
        deletions = plan.deletions.len(),
        statements = plan.statements.len(),
        "computed recovery plan"
    );

    plan
}
