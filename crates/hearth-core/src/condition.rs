//! Conditions (status effects) applied to a character.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The slug identifying a condition.
///
/// The four recoverable conditions get their own variants; anything else
/// the host reports is carried through as `Other` and ignored by the rest
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionSlug {
    /// Closer to death; lowers the dying threshold.
    Doomed,
    /// Lost blood or life force; reduces maximum hit points.
    Drained,
    /// Tired; penalties to AC and saves.
    Fatigued,
    /// Recovering from dying.
    Wounded,
    /// Any condition without a rest policy.
    Other(String),
}

impl ConditionSlug {
    /// Returns the slug string the host uses for this condition.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Doomed => "doomed",
            Self::Drained => "drained",
            Self::Fatigued => "fatigued",
            Self::Wounded => "wounded",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ConditionSlug {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "doomed" => Self::Doomed,
            "drained" => Self::Drained,
            "fatigued" => Self::Fatigued,
            "wounded" => Self::Wounded,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ConditionSlug {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ConditionSlug> for String {
    fn from(slug: ConditionSlug) -> Self {
        slug.as_str().to_string()
    }
}

impl fmt::Display for ConditionSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition currently applied to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Which condition this is.
    pub slug: ConditionSlug,
    /// Severity for valued conditions (doomed 2, drained 1, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

impl Condition {
    /// A condition without a severity value.
    pub fn new(slug: impl Into<ConditionSlug>) -> Self {
        Self {
            slug: slug.into(),
            value: None,
        }
    }

    /// A valued condition at the given severity.
    pub fn valued(slug: impl Into<ConditionSlug>, value: u32) -> Self {
        Self {
            slug: slug.into(),
            value: Some(value),
        }
    }
}
