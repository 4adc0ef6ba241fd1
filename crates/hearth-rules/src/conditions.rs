//! Overnight condition resolution.
//!
//! - fatigued: removed outright.
//! - doomed, drained: severity drops by one, removed at zero.
//! - wounded: removed only when the character ends up at full hit
//!   points; never reduced.

use hearth_core::{CharacterSnapshot, ConditionSlug};

use crate::plan::{ConditionChange, ConditionOp};

/// Condition outcomes and the host operations that realise them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionResolution {
    /// One record per recoverable condition, in evaluation order.
    pub changes: Vec<(ConditionSlug, ConditionChange)>,
    /// Decrements to send to the host.
    pub ops: Vec<ConditionOp>,
}

impl ConditionResolution {
    fn record(&mut self, slug: ConditionSlug, change: ConditionChange, force_remove: bool) {
        if change != ConditionChange::Unchanged {
            self.ops.push(ConditionOp {
                slug: slug.clone(),
                force_remove,
            });
        }
        self.changes.push((slug, change));
    }

    /// Slugs with the given outcome, in evaluation order.
    pub fn with_change(&self, change: ConditionChange) -> impl Iterator<Item = &ConditionSlug> {
        self.changes
            .iter()
            .filter(move |(_, c)| *c == change)
            .map(|(s, _)| s)
    }
}

/// Work out what resting does to each recoverable condition.
///
/// `hp_after_recovery` is the character's hit points once overnight
/// healing is applied; it decides whether wounded goes away.
pub fn resolve_conditions(snapshot: &CharacterSnapshot, hp_after_recovery: i32) -> ConditionResolution {
    let mut resolution = ConditionResolution::default();

    let fatigued = if snapshot.condition(&ConditionSlug::Fatigued).is_some() {
        ConditionChange::Removed
    } else {
        ConditionChange::Unchanged
    };
    resolution.record(ConditionSlug::Fatigued, fatigued, true);

    for slug in [ConditionSlug::Doomed, ConditionSlug::Drained] {
        let change = match snapshot.condition(&slug) {
            Some(condition) => {
                let remaining = condition.value.unwrap_or(1).saturating_sub(1);
                if remaining == 0 {
                    ConditionChange::Removed
                } else {
                    ConditionChange::Reduced
                }
            }
            None => ConditionChange::Unchanged,
        };
        resolution.record(slug, change, false);
    }

    let healed = hp_after_recovery == snapshot.hit_points.max;
    let wounded = if snapshot.condition(&ConditionSlug::Wounded).is_some() && healed {
        ConditionChange::Removed
    } else {
        ConditionChange::Unchanged
    };
    resolution.record(ConditionSlug::Wounded, wounded, true);

    resolution
}
