//! Property tests for overnight recovery.

use hearth_core::{
    CharacterSnapshot, Condition, ConditionSlug, ConsumableCategory, HitPoints, Item, ItemData,
    Pool,
};
use hearth_rules::{
    ConditionChange, MemoryHost, RestConfig, RestForTheNight, RestOptions, Statement,
    compute_recovery_plan, recovery_amount,
};
use proptest::prelude::*;

fn snapshot(level: i32, con: i32, max: i32, lost: i32) -> CharacterSnapshot {
    CharacterSnapshot::new("Seoni", level, con, HitPoints::new(max - lost, max))
}

proptest! {
    #[test]
    fn full_hp_writes_no_hp(level in 1..20i32, con in -5..8i32, max in 1..300i32) {
        let plan = compute_recovery_plan(&snapshot(level, con, max, 0), &RestConfig::default());
        prop_assert_eq!(plan.actor.hp, None);
        prop_assert!(!plan
            .statements
            .iter()
            .any(|s| matches!(s, Statement::HitPointsRestored(_))));
    }

    #[test]
    fn healing_never_exceeds_loss(
        level in 1..20i32,
        con in -5..8i32,
        max in 1..300i32,
        lost_pct in 0..=100i32,
    ) {
        let lost = max * lost_pct / 100;
        let c = snapshot(level, con, max, lost);
        let plan = compute_recovery_plan(&c, &RestConfig::default());
        let hp = plan.actor.hp.unwrap_or(c.hit_points.value);
        prop_assert!(hp <= max);
        prop_assert!(hp >= c.hit_points.value);
        prop_assert_eq!(hp - c.hit_points.value, lost.min(recovery_amount(&c)));
    }

    #[test]
    fn recovery_grows_with_level_and_con(level in 1..20i32, con in -5..8i32) {
        let c = snapshot(level, con, 100, 50);
        let amount = recovery_amount(&c);
        prop_assert!(amount >= level);
        prop_assert!(recovery_amount(&snapshot(level + 1, con, 100, 50)) >= amount);
        prop_assert!(recovery_amount(&snapshot(level, con + 1, 100, 50)) >= amount);
    }

    #[test]
    fn doomed_and_drained_step_down(doomed in 1..5u32, drained in 1..5u32) {
        let mut c = snapshot(3, 1, 30, 0);
        c.conditions.push(Condition::valued("doomed", doomed));
        c.conditions.push(Condition::valued("drained", drained));
        let plan = compute_recovery_plan(&c, &RestConfig::default());

        for (slug, value) in [(ConditionSlug::Doomed, doomed), (ConditionSlug::Drained, drained)] {
            let expected = if value == 1 {
                ConditionChange::Removed
            } else {
                ConditionChange::Reduced
            };
            prop_assert_eq!(plan.condition_change(&slug), expected);
        }
        prop_assert!(plan.condition_ops.iter().all(|op| !op.force_remove));
    }

    #[test]
    fn wounded_is_removed_or_kept(value in 1..4u32, lost in 0..40i32) {
        let mut c = snapshot(2, 1, 40, lost);
        c.conditions.push(Condition::valued("wounded", value));
        let plan = compute_recovery_plan(&c, &RestConfig::default());
        let change = plan.condition_change(&ConditionSlug::Wounded);
        prop_assert_ne!(change, ConditionChange::Reduced);
        let healed = lost <= recovery_amount(&c);
        prop_assert_eq!(change == ConditionChange::Removed, healed);
    }

    #[test]
    fn temporary_items_are_only_deleted(charges in 0..5i32, temporary in any::<bool>()) {
        let mut c = snapshot(2, 1, 20, 5);
        let mut wand = Item::new(
            "Wand of Light",
            ItemData::Consumable {
                category: ConsumableCategory::Wand,
                uses: Pool::with_value(charges, 5),
            },
        );
        wand.temporary = temporary;
        let id = wand.id;
        c.items.push(wand);
        let plan = compute_recovery_plan(&c, &RestConfig::default());

        prop_assert_eq!(plan.deletions.contains(&id), temporary);
        if temporary {
            prop_assert!(plan.item_changes(id).is_empty());
        }
    }

    #[test]
    fn stamina_fields_need_the_variant(stamina in 0..20i32, damage in 0..30i32) {
        let mut c = snapshot(4, 2, 40, 10);
        c.hit_points.stamina = Some(Pool::with_value(stamina, 20));
        c.hit_points.damage_taken = Some(damage);
        c.resources.resolve = Some(Pool::with_value(0, 2));

        let plan = compute_recovery_plan(&c, &RestConfig::default());
        prop_assert_eq!(plan.actor.stamina, None);
        prop_assert_eq!(plan.actor.damage_taken, None);
        prop_assert_eq!(plan.actor.resolve, None);

        let plan = compute_recovery_plan(&c, &RestConfig::default().with_stamina_variant(true));
        prop_assert_eq!(plan.actor.resolve, Some(2));
        if let Some(hp) = plan.actor.hp {
            prop_assert!(hp <= 40);
        }
    }

    #[test]
    fn resting_twice_changes_nothing_more(
        level in 1..10i32,
        con in -2..5i32,
        lost in 0..60i32,
        fatigued in any::<bool>(),
    ) {
        let mut c = snapshot(level, con, 60, lost);
        if fatigued {
            c.conditions.push(Condition::new("fatigued"));
        }
        // Enough nights to heal fully.
        let mut host = MemoryHost::new([c.clone()]);
        let rest = RestForTheNight::english(RestConfig::default());
        for _ in 0..60 {
            let current = host.actors()[0].clone();
            rest.run(&mut host, &[current], RestOptions::skip_dialog()).unwrap();
        }
        let rested = host.actors()[0].clone();
        prop_assert_eq!(rested.hit_points.value, 60);
        prop_assert!(compute_recovery_plan(&rested, &RestConfig::default()).is_empty());
    }
}
