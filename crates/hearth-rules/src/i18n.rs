//! Localization of rest messages.
//!
//! Hosts resolve message keys with interpolated parameters. [`Catalog`]
//! is a simple key-to-template table with English text built in; a host
//! can override entries from a JSON object.

use std::collections::HashMap;

use hearth_core::ConditionSlug;

use crate::error::RulesResult;

/// Message keys used by the rest engine.
pub mod keys {
    /// Title of the confirmation prompt.
    pub const LABEL: &str = "Hearth.Rest.Label";
    /// Body of the confirmation prompt. Params: `actors`.
    pub const PROMPT: &str = "Hearth.Rest.Prompt";
    /// Notification when no character was selected.
    pub const NO_CHARACTERS: &str = "Hearth.Rest.NoCharacters";
    /// Chat headline. Params: `actor`.
    pub const AWAKENS: &str = "Hearth.Rest.Message.Awakens";
    /// Params: `hit_points`.
    pub const HIT_POINTS: &str = "Hearth.Rest.Message.HitPoints";
    /// Exactly one hit point restored.
    pub const HIT_POINTS_SINGLE: &str = "Hearth.Rest.Message.HitPointsSingle";
    /// Infused reagents refilled.
    pub const INFUSED_REAGENTS: &str = "Hearth.Rest.Message.InfusedReagents";
    /// Frequencies reset.
    pub const FREQUENCIES: &str = "Hearth.Rest.Message.Frequencies";
    /// Stamina refilled.
    pub const STAMINA_POINTS: &str = "Hearth.Rest.Message.StaminaPoints";
    /// Params: `hit_points`.
    pub const MAX_HIT_POINTS: &str = "Hearth.Rest.Message.MaxHitPoints";
    /// Resolve refilled.
    pub const RESOLVE: &str = "Hearth.Rest.Message.Resolve";
    /// Temporary items removed.
    pub const TEMPORARY_ITEMS: &str = "Hearth.Rest.Message.TemporaryItems";
    /// Focus points refilled.
    pub const FOCUS_POINTS: &str = "Hearth.Rest.Message.FocusPoints";
    /// Spell slots refreshed.
    pub const SPELL_SLOTS: &str = "Hearth.Rest.Message.SpellSlots";
    /// Wand charges restored.
    pub const WAND_CHARGES: &str = "Hearth.Rest.Message.WandCharges";
    /// Params: `condition`.
    pub const CONDITION_REDUCED: &str = "Hearth.Rest.Message.ConditionReduced";
    /// Params: `condition`.
    pub const CONDITION_REMOVED: &str = "Hearth.Rest.Message.ConditionRemoved";
    /// Prefix for condition display names, followed by the slug.
    pub const CONDITION_PREFIX: &str = "Hearth.Condition.";
}

const ENGLISH: &[(&str, &str)] = &[
    (keys::LABEL, "Rest for the Night"),
    (
        keys::PROMPT,
        "All selected characters ({actors}) will rest for the night. Continue?",
    ),
    (
        keys::NO_CHARACTERS,
        "Select at least one player character to rest for the night.",
    ),
    (keys::AWAKENS, "{actor} awakens well-rested."),
    (keys::HIT_POINTS, "Restored {hit_points} Hit Points."),
    (keys::HIT_POINTS_SINGLE, "Restored 1 Hit Point."),
    (keys::INFUSED_REAGENTS, "Infused reagents replenished."),
    (keys::FREQUENCIES, "Action and feat frequencies restored."),
    (keys::STAMINA_POINTS, "Stamina Points restored."),
    (keys::MAX_HIT_POINTS, "Maximum Hit Points are now {hit_points}."),
    (keys::RESOLVE, "Resolve Points restored."),
    (keys::TEMPORARY_ITEMS, "Temporary items removed."),
    (keys::FOCUS_POINTS, "Focus Points restored."),
    (keys::SPELL_SLOTS, "Spell slots and prepared spells restored."),
    (keys::WAND_CHARGES, "Wand charges restored."),
    (keys::CONDITION_REDUCED, "{condition} condition reduced."),
    (keys::CONDITION_REMOVED, "{condition} condition removed."),
    ("Hearth.Condition.doomed", "Doomed"),
    ("Hearth.Condition.drained", "Drained"),
    ("Hearth.Condition.fatigued", "Fatigued"),
    ("Hearth.Condition.wounded", "Wounded"),
];

/// Resolves message keys into display strings.
pub trait Localize {
    /// Look up `key` and substitute `{name}` placeholders from `params`.
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// A key-to-template message catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// An empty catalog; every key resolves to itself.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in English catalog.
    pub fn english() -> Self {
        let mut catalog = Self::empty();
        for (key, template) in ENGLISH {
            catalog.insert(*key, *template);
        }
        catalog
    }

    /// Add or replace a template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Override entries from a flat JSON object of key to template.
    pub fn extend_from_json(&mut self, json: &str) -> RulesResult<()> {
        let overrides: HashMap<String, String> = serde_json::from_str(json)?;
        self.entries.extend(overrides);
        Ok(())
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Localize for Catalog {
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.entries.get(key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

/// Replace each `{name}` in `template` with its parameter value.
/// Placeholders without a matching parameter are left as written.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// The display name of a condition.
pub fn condition_label(slug: &ConditionSlug, localizer: &dyn Localize) -> String {
    let key = format!("{}{}", keys::CONDITION_PREFIX, slug.as_str());
    let label = localizer.localize(&key, &[]);
    if label == key {
        slug.as_str().to_string()
    } else {
        label
    }
}
