//! The "Rest for the Night" entry point.
//!
//! For each eligible character, strictly one at a time: compute the
//! plan, commit it through the host, notify hooks, and compose the
//! summary message. All messages are created in one batch at the end.

use tracing::{debug, info, warn};

use hearth_core::{ActorId, ActorKind, CharacterSnapshot, ItemId, validate_snapshot};

use crate::chat::{ChatMessage, ChatMessageData, compose_message};
use crate::config::{RestConfig, RestOptions};
use crate::error::RulesResult;
use crate::hooks::Hooks;
use crate::host::{DocumentStore, Host, HostResult};
use crate::i18n::{Catalog, Localize, keys};
use crate::plan::{RecoveryPlan, Statement};
use crate::recovery::compute_recovery_plan;

/// The outcome of committing one plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Temporary items the host actually deleted.
    pub deleted: Vec<ItemId>,
}

/// Write a plan through the host.
///
/// Condition decrements go first, then actor fields, item fields, and
/// deletions, each as one batch and each skipped when empty. A failure
/// stops the commit; earlier writes stay applied.
pub fn commit<S: DocumentStore + ?Sized>(
    store: &mut S,
    actor: ActorId,
    plan: &RecoveryPlan,
) -> HostResult<CommitReport> {
    for op in &plan.condition_ops {
        store.decrease_condition(actor, &op.slug, op.force_remove)?;
    }

    if plan.actor.is_empty() {
        debug!(%actor, "no actor fields to write");
    } else {
        store.update_actor(actor, &plan.actor)?;
    }

    if !plan.items.is_empty() {
        store.update_items(actor, &plan.items)?;
    }

    let deleted = if plan.deletions.is_empty() {
        Vec::new()
    } else {
        store.delete_items(actor, &plan.deletions)?
    };

    Ok(CommitReport { deleted })
}

/// Rests a party for the night.
pub struct RestForTheNight<L: Localize = Catalog> {
    config: RestConfig,
    localizer: L,
    hooks: Hooks,
}

impl RestForTheNight<Catalog> {
    /// A rest using the built-in English catalog.
    pub fn english(config: RestConfig) -> Self {
        Self::new(config, Catalog::english())
    }
}

impl<L: Localize> RestForTheNight<L> {
    /// A rest with the given configuration and localizer.
    pub fn new(config: RestConfig, localizer: L) -> Self {
        Self {
            config,
            localizer,
            hooks: Hooks::new(),
        }
    }

    /// The hook list, for registering observers.
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// Rest the selected actors.
    ///
    /// Only player characters rest. With none selected an error
    /// notification is shown and nothing happens. Unless
    /// `options.skip_dialog` is set the user is asked first; declining
    /// returns an empty list. Host write failures propagate.
    pub fn run<H: Host>(
        &self,
        host: &mut H,
        actors: &[CharacterSnapshot],
        options: RestOptions,
    ) -> RulesResult<Vec<ChatMessage>> {
        let characters: Vec<&CharacterSnapshot> = actors
            .iter()
            .filter(|a| a.kind == ActorKind::Character)
            .collect();

        if characters.is_empty() {
            warn!(selected = actors.len(), "no player characters selected");
            host.error(&self.localizer.localize(keys::NO_CHARACTERS, &[]));
            return Ok(Vec::new());
        }

        if !options.skip_dialog {
            let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
            let names = names.join(", ");
            let title = self.localizer.localize(keys::LABEL, &[]);
            let prompt = self
                .localizer
                .localize(keys::PROMPT, &[("actors", names.as_str())]);
            if !host.confirm(&title, &prompt) {
                info!("rest declined");
                return Ok(Vec::new());
            }
        }

        let mut messages = Vec::with_capacity(characters.len());
        for character in characters {
            messages.push(self.rest_one(host, character)?);
        }

        let created = host.create_messages(messages)?;
        info!(messages = created.len(), "party rested for the night");
        Ok(created)
    }

    fn rest_one<H: Host>(
        &self,
        host: &mut H,
        character: &CharacterSnapshot,
    ) -> RulesResult<ChatMessageData> {
        for issue in validate_snapshot(character) {
            warn!("{issue}");
        }

        let plan = compute_recovery_plan(character, &self.config);
        let report = commit(host, character.id, &plan)?;

        let statements: Vec<Statement> = plan
            .statements
            .into_iter()
            .filter(|s| *s != Statement::TemporaryItems || !report.deleted.is_empty())
            .collect();

        let rested = host.actor(character.id)?;
        self.hooks.call_all(&rested);

        debug!(actor = %character.name, lines = statements.len(), "composed rest summary");
        Ok(compose_message(
            &rested,
            &statements,
            &self.localizer,
            &self.config.author,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, MemoryHost};
    use hearth_core::{HitPoints, Item, ItemData};

    fn character(value: i32, max: i32) -> CharacterSnapshot {
        CharacterSnapshot::new("Harsk", 4, 1, HitPoints::new(value, max))
    }

    #[test]
    fn commit_skips_empty_batches() {
        let c = character(30, 30);
        let mut host = MemoryHost::new([c.clone()]);
        let report = commit(&mut host, c.id, &RecoveryPlan::default()).unwrap();
        assert!(report.deleted.is_empty());
        assert!(host.calls().is_empty());
    }

    #[test]
    fn commit_orders_writes() {
        let mut c = character(10, 30);
        c.conditions.push(hearth_core::Condition::new("fatigued"));
        c.items.push(Item::new("Torch", ItemData::Equipment).temporary());
        let plan = compute_recovery_plan(&c, &RestConfig::default());
        let mut host = MemoryHost::new([c.clone()]);
        commit(&mut host, c.id, &plan).unwrap();
        let kinds: Vec<&str> = host
            .calls()
            .iter()
            .map(|call| match call {
                HostCall::DecreaseCondition { .. } => "condition",
                HostCall::UpdateActor { .. } => "actor",
                HostCall::UpdateItems { .. } => "items",
                HostCall::DeleteItems { .. } => "delete",
                HostCall::CreateMessages { .. } => "chat",
            })
            .collect();
        assert_eq!(kinds, vec!["condition", "actor", "delete"]);
    }

    #[test]
    fn temp_item_line_dropped_when_nothing_deleted() {
        let mut c = character(30, 30);
        c.items.push(Item::new("Torch", ItemData::Equipment).temporary());
        // The host no longer has the torch.
        let mut stored = c.clone();
        stored.items.clear();
        let mut host = MemoryHost::new([stored]);
        let rest = RestForTheNight::english(RestConfig::default());
        let messages = rest.run(&mut host, &[c], RestOptions::skip_dialog()).unwrap();
        assert_eq!(messages[0].data.content, "Harsk awakens well-rested.\n<ul></ul>");
    }
}
