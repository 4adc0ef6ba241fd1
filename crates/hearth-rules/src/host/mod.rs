//! Host collaborator interfaces.
//!
//! The host application owns the documents, the chat log, dialogs, and
//! notifications. The rest engine talks to it only through these traits.
//! Every write is all-or-nothing per call from the engine's point of
//! view.

pub mod memory;

pub use memory::{HostCall, MemoryHost, WriteKind};

use hearth_core::{ActorId, CharacterSnapshot, ConditionSlug, ItemId};

use crate::chat::{ChatMessage, ChatMessageData};
use crate::plan::{ActorUpdate, ItemUpdate};

/// Errors a host reports for failed reads and writes.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The actor does not exist.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// An embedded item does not exist on the actor.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The host refused or failed to persist a write.
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Convenience result type for host calls.
pub type HostResult<T> = Result<T, HostError>;

/// Actor and embedded item documents.
pub trait DocumentStore {
    /// Read the current state of an actor.
    fn actor(&self, id: ActorId) -> HostResult<CharacterSnapshot>;

    /// Lower a condition by one step, or remove it when `force_remove`.
    fn decrease_condition(
        &mut self,
        actor: ActorId,
        slug: &ConditionSlug,
        force_remove: bool,
    ) -> HostResult<()>;

    /// Write actor-level fields in one batch.
    fn update_actor(&mut self, actor: ActorId, update: &ActorUpdate) -> HostResult<()>;

    /// Write embedded item fields in one batch.
    fn update_items(&mut self, actor: ActorId, updates: &[ItemUpdate]) -> HostResult<()>;

    /// Delete embedded items in one batch. Returns the ids actually deleted.
    fn delete_items(&mut self, actor: ActorId, ids: &[ItemId]) -> HostResult<Vec<ItemId>>;
}

/// The chat log.
pub trait ChatLog {
    /// Create messages in one batch and return them as stored.
    fn create_messages(&mut self, messages: Vec<ChatMessageData>) -> HostResult<Vec<ChatMessage>>;
}

/// Yes/no confirmation dialogs.
pub trait Prompt {
    /// Ask the user; `true` means go ahead.
    fn confirm(&mut self, title: &str, content: &str) -> bool;
}

/// User-facing notifications.
pub trait Notifications {
    /// Show an error notification.
    fn error(&mut self, message: &str);
}

/// Everything the rest engine needs from a host.
pub trait Host: DocumentStore + ChatLog + Prompt + Notifications {}

impl<T> Host for T where T: DocumentStore + ChatLog + Prompt + Notifications {}
