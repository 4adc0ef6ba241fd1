//! Stamina variant recovery.
//!
//! Under the stamina variant, hit points split into stamina points and a
//! wound tracker (damage taken). Resting refills stamina and resolve and
//! heals wounds at four times the normal recovery rate. While wounds
//! remain, maximum hit points are capped at `max - damage_taken / 2`.

use hearth_core::CharacterSnapshot;

/// Stamina-variant values a rest proposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaminaRecovery {
    /// New stamina points, if the pool was not full.
    pub stamina: Option<i32>,
    /// New damage taken, if there was any to heal.
    pub damage_taken: Option<i32>,
    /// Hit point ceiling implied by the remaining damage.
    pub hp_ceiling: Option<i32>,
    /// New resolve points, if the pool was not full.
    pub resolve: Option<i32>,
}

/// Maximum hit points allowed while `damage_taken` wounds remain.
///
/// Equal to `floor(max_hp - damage_taken / 2)`; saturates instead of
/// overflowing.
pub fn hp_ceiling(max_hp: i32, damage_taken: i32) -> i32 {
    let half_up = damage_taken.saturating_add(1).div_euclid(2);
    max_hp.saturating_sub(half_up)
}

/// Compute stamina-variant recovery. Absent pools count as empty.
pub fn stamina_recovery(snapshot: &CharacterSnapshot, recovery_amount: i32) -> StaminaRecovery {
    let hp = &snapshot.hit_points;
    let mut out = StaminaRecovery::default();

    let stamina = hp.stamina.unwrap_or_default();
    if !stamina.is_full() {
        out.stamina = Some(stamina.max);
    }

    let damage = hp.damage_taken.unwrap_or(0);
    if damage > 0 {
        let healed = recovery_amount.max(0).saturating_mul(4);
        let remaining = (damage - healed).max(0);
        out.damage_taken = Some(remaining);
        out.hp_ceiling = Some(hp_ceiling(hp.max, remaining));
    }

    let resolve = snapshot.resources.resolve.unwrap_or_default();
    if !resolve.is_full() {
        out.resolve = Some(resolve.max);
    }

    out
}
