//! An in-memory host.
//!
//! `MemoryHost` keeps actors in a `Vec`, applies writes for real, and
//! records every successful call. It backs the CLI and the tests. A
//! write category can be made to fail to exercise error propagation.

use uuid::Uuid;

use hearth_core::{ActorId, CharacterSnapshot, ConditionSlug, Item, ItemData, ItemId, Pool};

use super::{ChatLog, DocumentStore, HostError, HostResult, Notifications, Prompt};
use crate::chat::{ChatMessage, ChatMessageData};
use crate::plan::{ActorUpdate, ItemChange, ItemUpdate};

/// A category of host write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// Condition decrements.
    Condition,
    /// Actor field updates.
    Actor,
    /// Embedded item updates.
    Items,
    /// Embedded item deletions.
    Delete,
    /// Chat message creation.
    Chat,
}

/// A successful write recorded by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// A condition was decreased.
    DecreaseCondition {
        /// Target actor.
        actor: ActorId,
        /// Condition slug.
        slug: ConditionSlug,
        /// Whether removal was forced.
        force_remove: bool,
    },
    /// Actor fields were written.
    UpdateActor {
        /// Target actor.
        actor: ActorId,
        /// Fields written.
        update: ActorUpdate,
    },
    /// Item fields were written.
    UpdateItems {
        /// Target actor.
        actor: ActorId,
        /// Updates written.
        updates: Vec<ItemUpdate>,
    },
    /// Items were deleted.
    DeleteItems {
        /// Target actor.
        actor: ActorId,
        /// Items deleted.
        ids: Vec<ItemId>,
    },
    /// Chat messages were created.
    CreateMessages {
        /// Number of messages.
        count: usize,
    },
}

type ConfirmFn = Box<dyn FnMut(&str, &str) -> bool>;

/// A host that lives entirely in memory.
pub struct MemoryHost {
    actors: Vec<CharacterSnapshot>,
    messages: Vec<ChatMessage>,
    notifications: Vec<String>,
    prompts: Vec<String>,
    calls: Vec<HostCall>,
    confirm: ConfirmFn,
    fail_on: Option<WriteKind>,
}

impl MemoryHost {
    /// A host holding the given actors. Prompts are answered "yes".
    pub fn new(actors: impl IntoIterator<Item = CharacterSnapshot>) -> Self {
        Self {
            actors: actors.into_iter().collect(),
            messages: Vec::new(),
            notifications: Vec::new(),
            prompts: Vec::new(),
            calls: Vec::new(),
            confirm: Box::new(|_, _| true),
            fail_on: None,
        }
    }

    /// Answer prompts with the given function.
    pub fn with_confirm(mut self, confirm: impl FnMut(&str, &str) -> bool + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    /// Answer every prompt with "no".
    pub fn declining(self) -> Self {
        self.with_confirm(|_, _| false)
    }

    /// Make every write of this kind fail.
    pub fn fail_on(mut self, kind: WriteKind) -> Self {
        self.fail_on = Some(kind);
        self
    }

    /// All stored actors.
    pub fn actors(&self) -> &[CharacterSnapshot] {
        &self.actors
    }

    /// Consume the host and return the stored actors.
    pub fn into_actors(self) -> Vec<CharacterSnapshot> {
        self.actors
    }

    /// Chat messages created so far.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Error notifications shown so far.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Prompt bodies shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Successful writes, in order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    fn check(&self, kind: WriteKind) -> HostResult<()> {
        if self.fail_on == Some(kind) {
            return Err(HostError::WriteRejected(format!("{kind:?} writes are failing")));
        }
        Ok(())
    }

    fn actor_mut(&mut self, id: ActorId) -> HostResult<&mut CharacterSnapshot> {
        self.actors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(HostError::ActorNotFound(id))
    }
}

/// Set a pool's value, creating the pool at that value if absent.
fn set_pool(pool: &mut Option<Pool>, value: i32) {
    pool.get_or_insert_with(|| Pool::new(value)).value = value;
}

fn apply_change(item: &mut Item, change: &ItemChange) -> HostResult<()> {
    match (change, &mut item.data) {
        (ItemChange::Uses { value }, ItemData::Consumable { uses, .. })
        | (ItemChange::Uses { value }, ItemData::Spell { uses: Some(uses), .. }) => {
            uses.value = *value;
        }
        (
            ItemChange::Frequency { value },
            ItemData::Action {
                frequency: Some(frequency),
            }
            | ItemData::Feat {
                frequency: Some(frequency),
            },
        ) => {
            frequency.value = *value;
        }
        (ItemChange::SlotValue { rank, value }, ItemData::SpellcastingEntry { slots, .. }) => {
            let slot = slots
                .iter_mut()
                .find(|s| s.rank == *rank)
                .ok_or_else(|| HostError::WriteRejected(format!("no rank {rank} slots")))?;
            slot.pool.value = *value;
        }
        (
            ItemChange::PreparedRestored { rank, index },
            ItemData::SpellcastingEntry { slots, .. },
        ) => {
            let prepared = slots
                .iter_mut()
                .find(|s| s.rank == *rank)
                .and_then(|s| s.prepared.get_mut(*index))
                .ok_or_else(|| {
                    HostError::WriteRejected(format!("no prepared spell at rank {rank} #{index}"))
                })?;
            prepared.expended = false;
        }
        _ => {
            return Err(HostError::WriteRejected(format!(
                "{change:?} does not apply to '{}'",
                item.name
            )));
        }
    }
    Ok(())
}

impl DocumentStore for MemoryHost {
    fn actor(&self, id: ActorId) -> HostResult<CharacterSnapshot> {
        self.actors
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(HostError::ActorNotFound(id))
    }

    fn decrease_condition(
        &mut self,
        actor: ActorId,
        slug: &ConditionSlug,
        force_remove: bool,
    ) -> HostResult<()> {
        self.check(WriteKind::Condition)?;
        let target = self.actor_mut(actor)?;
        if let Some(index) = target.conditions.iter().position(|c| &c.slug == slug) {
            let stepped = match target.conditions[index].value {
                Some(v) if v > 1 && !force_remove => Some(v - 1),
                _ => None,
            };
            match stepped {
                Some(v) => target.conditions[index].value = Some(v),
                None => {
                    target.conditions.remove(index);
                }
            }
        }
        self.calls.push(HostCall::DecreaseCondition {
            actor,
            slug: slug.clone(),
            force_remove,
        });
        Ok(())
    }

    fn update_actor(&mut self, actor: ActorId, update: &ActorUpdate) -> HostResult<()> {
        self.check(WriteKind::Actor)?;
        let target = self.actor_mut(actor)?;
        if let Some(v) = update.hp {
            target.hit_points.value = v;
        }
        if let Some(v) = update.stamina {
            set_pool(&mut target.hit_points.stamina, v);
        }
        if let Some(v) = update.damage_taken {
            target.hit_points.damage_taken = Some(v);
        }
        if let Some(v) = update.resolve {
            set_pool(&mut target.resources.resolve, v);
        }
        if let Some(v) = update.focus {
            set_pool(&mut target.resources.focus, v);
        }
        if let Some(v) = update.infused_reagents {
            set_pool(&mut target.resources.infused_reagents, v);
        }
        self.calls.push(HostCall::UpdateActor {
            actor,
            update: update.clone(),
        });
        Ok(())
    }

    fn update_items(&mut self, actor: ActorId, updates: &[ItemUpdate]) -> HostResult<()> {
        self.check(WriteKind::Items)?;
        let target = self.actor_mut(actor)?;
        // Apply to a copy so a bad update leaves the actor untouched.
        let mut items = target.items.clone();
        for update in updates {
            let item = items
                .iter_mut()
                .find(|i| i.id == update.id)
                .ok_or(HostError::ItemNotFound(update.id))?;
            for change in &update.changes {
                apply_change(item, change)?;
            }
        }
        target.items = items;
        self.calls.push(HostCall::UpdateItems {
            actor,
            updates: updates.to_vec(),
        });
        Ok(())
    }

    fn delete_items(&mut self, actor: ActorId, ids: &[ItemId]) -> HostResult<Vec<ItemId>> {
        self.check(WriteKind::Delete)?;
        let target = self.actor_mut(actor)?;
        let deleted: Vec<ItemId> = target
            .items
            .iter()
            .filter(|i| ids.contains(&i.id))
            .map(|i| i.id)
            .collect();
        target.items.retain(|i| !ids.contains(&i.id));
        self.calls.push(HostCall::DeleteItems {
            actor,
            ids: deleted.clone(),
        });
        Ok(deleted)
    }
}

impl ChatLog for MemoryHost {
    fn create_messages(&mut self, messages: Vec<ChatMessageData>) -> HostResult<Vec<ChatMessage>> {
        self.check(WriteKind::Chat)?;
        let created: Vec<ChatMessage> = messages
            .into_iter()
            .map(|data| ChatMessage {
                id: Uuid::new_v4(),
                data,
            })
            .collect();
        self.messages.extend(created.iter().cloned());
        self.calls.push(HostCall::CreateMessages {
            count: created.len(),
        });
        Ok(created)
    }
}

impl Prompt for MemoryHost {
    fn confirm(&mut self, title: &str, content: &str) -> bool {
        self.prompts.push(content.to_string());
        (self.confirm)(title, content)
    }
}

impl Notifications for MemoryHost {
    fn error(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
