//! Dice as they appear on rendered chat cards.
//!
//! A roll is made of dice terms; each term is a number of identical dice
//! with their individual results. Results dropped by keep/drop modifiers
//! stay on the term but are marked inactive. Card data comes from the
//! host as-is, so totals are checked and come back `None` on overflow.

use serde::{Deserialize, Serialize};

/// The result of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The face rolled.
    pub value: u32,
    /// False when a keep/drop modifier discarded this result.
    #[serde(default = "active_default")]
    pub active: bool,
}

fn active_default() -> bool {
    true
}

impl DieResult {
    /// An active result.
    pub fn new(value: u32) -> Self {
        Self {
            value,
            active: true,
        }
    }

    /// A discarded result.
    pub fn discarded(value: u32) -> Self {
        Self {
            value,
            active: false,
        }
    }
}

/// A group of identical dice, e.g. `3d6`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieTerm {
    /// Faces on each die.
    pub faces: u32,
    /// How many dice the term rolls.
    pub number: u32,
    /// Every result rolled, including discarded ones.
    #[serde(default)]
    pub results: Vec<DieResult>,
}

impl DieTerm {
    /// A term of `d{faces}` dice with the given active results.
    pub fn new(faces: u32, values: &[u32]) -> Self {
        Self {
            faces,
            number: u32::try_from(values.len()).unwrap_or(u32::MAX),
            results: values.iter().map(|&v| DieResult::new(v)).collect(),
        }
    }

    /// Returns true for `{number}d{faces}`.
    pub fn is(&self, number: u32, faces: u32) -> bool {
        self.number == number && self.faces == faces
    }

    /// Sum of the active results.
    pub fn active_total(&self) -> Option<u32> {
        self.results
            .iter()
            .filter(|r| r.active)
            .try_fold(0u32, |sum, r| sum.checked_add(r.value))
    }

    /// Highest possible total: every die on its top face.
    pub fn max_total(&self) -> Option<u32> {
        self.number.checked_mul(self.faces)
    }

    /// Lowest possible total: every die showing 1.
    pub fn min_total(&self) -> u32 {
        self.number
    }
}

impl std::fmt::Display for DieTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .results
            .iter()
            .map(|r| {
                if r.active {
                    r.value.to_string()
                } else {
                    format!("({})", r.value)
                }
            })
            .collect();
        write!(f, "{}d{} [{}]", self.number, self.faces, values.join(", "))
    }
}

/// What a roll was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind {
    /// A check against a DC (skill, save, attack, ...).
    Check,
    /// A damage roll.
    Damage,
    /// Anything else.
    Other,
}

/// A roll shown on a chat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// What the roll was for.
    pub kind: RollKind,
    /// Dice terms in formula order.
    pub terms: Vec<DieTerm>,
    /// The displayed total, modifiers included.
    pub total: i32,
}
