//! Resource pools (hit points, stamina, focus, wand charges, etc.).
//!
//! A pool is a clamped value between zero and a maximum. Hosts may store
//! values outside that range; the pool keeps what it was given and the
//! rules only compare against `max`.

use serde::{Deserialize, Serialize};

/// A numeric resource with a current value and a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pool {
    /// Current value.
    pub value: i32,
    /// Maximum value.
    pub max: i32,
}

impl Pool {
    /// Create a pool starting at its maximum value.
    pub fn new(max: i32) -> Self {
        Self { value: max, max }
    }

    /// Create a pool with a starting value clamped to `0..=max`.
    pub fn with_value(value: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            value: value.clamp(0, max),
            max,
        }
    }

    /// Returns true if the pool is at or above its maximum.
    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.value, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_full() {
        let p = Pool::new(3);
        assert_eq!(p.value, 3);
        assert!(p.is_full());
    }

    #[test]
    fn with_value_clamps() {
        assert_eq!(Pool::with_value(10, 4).value, 4);
        assert_eq!(Pool::with_value(-2, 4).value, 0);
        assert_eq!(Pool::with_value(1, -5).max, 0);
    }

    #[test]
    fn partial_pool_is_not_full() {
        assert!(!Pool::with_value(1, 3).is_full());
    }

    #[test]
    fn default_is_empty_and_full() {
        // An absent pool reads as 0/0, which counts as complete.
        let p = Pool::default();
        assert!(p.is_full());
    }

    #[test]
    fn display() {
        assert_eq!(Pool::with_value(2, 5).to_string(), "2/5");
    }
}
