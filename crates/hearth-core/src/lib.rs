//! Core types for Hearth: the read-only character snapshot a host hands
//! to the rest engine.
//!
//! The host application owns the live documents. This crate only models
//! the values the recovery rules read: hit points, resource pools,
//! conditions, inventory, and frequency-limited abilities. Everything is
//! serde-serializable so a snapshot can be built programmatically or
//! loaded from JSON.

/// Character snapshots and their lookup helpers.
pub mod character;
/// Recoverable and other conditions.
pub mod condition;
/// Error types used throughout the crate.
pub mod error;
/// Usage frequencies for limited actions and feats.
pub mod frequency;
/// Actor and item identifiers.
pub mod id;
/// Inventory items, abilities, spells, and spellcasting entries.
pub mod item;
/// Clamped numeric resource pools.
pub mod pool;
/// Non-fatal sanity checks over snapshot data.
pub mod validate;

/// Re-export character types.
pub use character::{ActorKind, CharacterSnapshot, HitPoints, Resources};
/// Re-export condition types.
pub use condition::{Condition, ConditionSlug};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export frequency types.
pub use frequency::{Frequency, FrequencyPeriod};
/// Re-export identifiers.
pub use id::{ActorId, ItemId};
/// Re-export item types.
pub use item::{CastingMode, ConsumableCategory, Item, ItemData, PreparedSpell, SpellSlot};
/// Re-export the pool type.
pub use pool::Pool;
/// Re-export validation entry points.
pub use validate::{ValidationIssue, validate_snapshot};
