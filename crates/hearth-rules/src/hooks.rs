//! Extension hooks fired after each character finishes resting.
//!
//! Observers are notified fire-and-forget: nothing they do feeds back
//! into the rest.

use hearth_core::CharacterSnapshot;
use tracing::debug;

/// Something that wants to know when a character has rested.
pub trait RestObserver {
    /// Called with the character as stored after the rest was committed.
    fn on_rest(&self, actor: &CharacterSnapshot);
}

impl<F> RestObserver for F
where
    F: Fn(&CharacterSnapshot),
{
    fn on_rest(&self, actor: &CharacterSnapshot) {
        self(actor)
    }
}

/// A list of registered rest observers.
#[derive(Default)]
pub struct Hooks {
    observers: Vec<Box<dyn RestObserver>>,
}

impl Hooks {
    /// An empty hook list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: impl RestObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer in registration order.
    pub fn call_all(&self, actor: &CharacterSnapshot) {
        debug!(actor = %actor.name, observers = self.observers.len(), "rest hook");
        for observer in &self.observers {
            observer.on_rest(actor);
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("observers", &self.observers.len())
            .finish()
    }
}
