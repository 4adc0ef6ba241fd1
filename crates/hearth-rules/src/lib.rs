//! Rest-for-the-night rules for Hearth.
//!
//! Turns a [`CharacterSnapshot`](hearth_core::CharacterSnapshot) into a
//! [`RecoveryPlan`]: hit points regained, conditions eased, wands, spell
//! slots and focus recharged, frequency-limited abilities reset, and
//! temporary items queued for removal. [`RestForTheNight`] commits plans
//! through the host collaborator traits in [`host`] and composes one
//! chat message per character. The [`highlight`] module marks critical
//! check results on rendered chat cards.

pub mod chat;
pub mod conditions;
pub mod config;
pub mod dice;
pub mod error;
pub mod frequency;
pub mod highlight;
pub mod hooks;
pub mod host;
pub mod i18n;
pub mod plan;
pub mod recovery;
pub mod rest;
pub mod spellcasting;
pub mod stamina;

pub use chat::{ChatMessage, ChatMessageData, Speaker, compose_message};
pub use config::{RestConfig, RestOptions};
pub use dice::{DieResult, DieTerm, Roll, RollKind};
pub use error::{RulesError, RulesResult};
pub use highlight::{ChatCard, Highlight, highlight_check_roll};
pub use hooks::{Hooks, RestObserver};
pub use host::{ChatLog, DocumentStore, Host, HostError, HostResult, MemoryHost, Notifications, Prompt};
pub use i18n::{Catalog, Localize};
pub use plan::{ActorUpdate, ConditionChange, ConditionOp, ItemChange, ItemUpdate, RecoveryPlan, Statement};
pub use recovery::{compute_recovery_plan, recovery_amount};
pub use rest::RestForTheNight;
