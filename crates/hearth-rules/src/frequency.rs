//! Frequency-limited actions and feats.
//!
//! A night's rest resets any frequency whose period is a turn, a round,
//! a day, or a fixed span of at most eight hours.

use chrono::TimeDelta;
use hearth_core::{CharacterSnapshot, FrequencyPeriod};

use crate::plan::{ItemChange, ItemUpdate, push_change};

/// Longest fixed period a night's rest outlasts.
pub const REST_DURATION_HOURS: i64 = 8;

/// Returns true if resting resets a frequency with this period.
pub fn is_recharged_by_rest(period: &FrequencyPeriod) -> bool {
    period
        .span()
        .is_none_or(|span| span <= TimeDelta::hours(REST_DURATION_HOURS))
}

/// Item updates resetting every spent frequency the rest covers.
pub fn frequency_recharges(snapshot: &CharacterSnapshot) -> Vec<ItemUpdate> {
    let mut updates = Vec::new();
    for item in snapshot.items_with_frequency() {
        let Some(frequency) = item.frequency() else {
            continue;
        };
        if frequency.is_spent() && is_recharged_by_rest(&frequency.per) {
            push_change(
                &mut updates,
                item.id,
                ItemChange::Frequency {
                    value: frequency.max,
                },
            );
        }
    }
    updates
}
