//! Sanity checks over snapshot data.
//!
//! Hosts hand over whatever their documents contain. None of these
//! findings stop a rest: the rules treat odd or absent pools as empty.
//! The checks exist so a caller can surface suspicious data.

use crate::character::CharacterSnapshot;
use crate::item::ItemData;
use crate::pool::Pool;

/// A suspicious value found in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The character the issue was found on.
    pub actor: String,
    /// A human-readable description of the issue.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning: {}: {}", self.actor, self.message)
    }
}

/// Check a snapshot for values the rules will quietly work around.
pub fn validate_snapshot(snapshot: &CharacterSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut push = |message: String| {
        issues.push(ValidationIssue {
            actor: snapshot.name.clone(),
            message,
        });
    };

    if snapshot.level < 1 {
        push(format!("level {} recovers no hit points", snapshot.level));
    }

    let hp = &snapshot.hit_points;
    if hp.max < 0 {
        push(format!("maximum hit points are negative ({})", hp.max));
    }
    if hp.value > hp.max {
        push(format!(
            "current hit points ({}) exceed maximum ({})",
            hp.value, hp.max
        ));
    }
    if hp.recovery_multiplier < 0 {
        push(format!(
            "negative recovery multiplier ({})",
            hp.recovery_multiplier
        ));
    }
    if hp.damage_taken.is_some_and(|d| d < 0) {
        push(format!(
            "negative damage taken ({})",
            hp.damage_taken.unwrap_or_default()
        ));
    }

    let pools: [(&str, Option<Pool>); 4] = [
        ("stamina", hp.stamina),
        ("focus", snapshot.resources.focus),
        ("resolve", snapshot.resources.resolve),
        ("infused reagents", snapshot.resources.infused_reagents),
    ];
    for (name, pool) in pools {
        if let Some(pool) = pool.filter(|p| p.max < 0) {
            push(format!("{name} pool has a negative maximum ({})", pool.max));
        }
    }

    for item in &snapshot.items {
        match &item.data {
            ItemData::Spell { entry, .. } => {
                let known = snapshot
                    .item(*entry)
                    .is_some_and(|e| matches!(e.data, ItemData::SpellcastingEntry { .. }));
                if !known {
                    push(format!(
                        "spell '{}' references unknown spellcasting entry {entry}",
                        item.name
                    ));
                }
            }
            ItemData::Consumable { uses, .. } if uses.max < 0 => {
                push(format!("'{}' has a negative use maximum", item.name));
            }
            _ => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::HitPoints;
    use crate::id::ItemId;
    use crate::item::Item;

    #[test]
    fn clean_snapshot_has_no_issues() {
        let c = CharacterSnapshot::new("Seoni", 1, 1, HitPoints::new(10, 16));
        assert!(validate_snapshot(&c).is_empty());
    }

    #[test]
    fn reports_level_zero_and_overflowing_hp() {
        let c = CharacterSnapshot::new("Lem", 0, 1, HitPoints::new(30, 16));
        let issues = validate_snapshot(&c);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("level 0"));
        assert!(issues[1].to_string().starts_with("warning: Lem:"));
    }

    #[test]
    fn reports_orphan_spell() {
        let mut c = CharacterSnapshot::new("Seoni", 1, 1, HitPoints::new(10, 16));
        c.items.push(Item::new(
            "Fireball",
            ItemData::Spell {
                entry: ItemId::new(),
                uses: None,
            },
        ));
        let issues = validate_snapshot(&c);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Fireball"));
    }

    #[test]
    fn reports_negative_pool() {
        let mut c = CharacterSnapshot::new("Kyra", 2, 1, HitPoints::new(10, 16));
        c.resources.focus = Some(Pool { value: 0, max: -1 });
        assert_eq!(validate_snapshot(&c).len(), 1);
    }
}
