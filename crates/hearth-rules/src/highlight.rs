//! Critical success/failure highlighting on check cards.
//!
//! Looks at the first roll on a chat card. If it is a check whose first
//! dice term is `1d20` or `3d6`, an all-max result marks the total as a
//! success and an all-ones result marks it as a failure.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dice::{Roll, RollKind};

/// CSS class for a natural maximum.
pub const SUCCESS_CLASS: &str = "success";
/// CSS class for a natural minimum.
pub const FAILURE_CLASS: &str = "failure";

/// The annotation applied to a card's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Every die on its top face.
    Success,
    /// Every die showing 1.
    Failure,
}

impl Highlight {
    /// The CSS class this highlight adds.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_CLASS,
            Self::Failure => FAILURE_CLASS,
        }
    }
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}

/// A rendered chat card, reduced to what highlighting looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCard {
    /// The viewing user rolled this.
    #[serde(default)]
    pub author_is_viewer: bool,
    /// The roller chose to show the roll breakdown.
    #[serde(default)]
    pub show_breakdown: bool,
    /// Rolls on the message, in order.
    #[serde(default)]
    pub rolls: Vec<Roll>,
    /// The card shows a reroll indicator.
    #[serde(default)]
    pub has_reroll_indicator: bool,
    /// CSS classes on the displayed total.
    #[serde(default)]
    pub total_classes: BTreeSet<String>,
}

/// Decide the highlight for a card without touching it.
pub fn classify(card: &ChatCard) -> Option<Highlight> {
    let roll = card.rolls.first()?;
    if roll.kind != RollKind::Check {
        return None;
    }
    if !(card.author_is_viewer || card.show_breakdown) || card.has_reroll_indicator {
        return None;
    }

    let term = roll.terms.first()?;
    if !(term.is(1, 20) || term.is(3, 6)) {
        return None;
    }

    let total = term.active_total()?;
    if total == term.max_total()? {
        Some(Highlight::Success)
    } else if total == term.min_total() {
        Some(Highlight::Failure)
    } else {
        None
    }
}

/// Annotate a card's total with its highlight class, if any.
///
/// Applying this more than once leaves the same class set.
pub fn highlight_check_roll(card: &mut ChatCard) -> Option<Highlight> {
    let highlight = classify(card)?;
    card.total_classes.insert(highlight.class().to_string());
    Some(highlight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DieResult, DieTerm};

    fn card(kind: RollKind, terms: Vec<DieTerm>) -> ChatCard {
        ChatCard {
            author_is_viewer: true,
            rolls: vec![Roll {
                kind,
                terms,
                total: 0,
            }],
            ..ChatCard::default()
        }
    }

    #[test]
    fn natural_twenty_is_success() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[20])]);
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Success));
        assert!(c.total_classes.contains("success"));
    }

    #[test]
    fn natural_one_is_failure() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[1])]);
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Failure));
        assert!(c.total_classes.contains("failure"));
    }

    #[test]
    fn middle_results_are_plain() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[12])]);
        assert_eq!(highlight_check_roll(&mut c), None);
        assert!(c.total_classes.is_empty());
    }

    #[test]
    fn three_d6_extremes() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(6, &[6, 6, 6])]);
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Success));
        let mut c = card(RollKind::Check, vec![DieTerm::new(6, &[1, 1, 1])]);
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Failure));
        let mut c = card(RollKind::Check, vec![DieTerm::new(6, &[6, 6])]);
        assert_eq!(highlight_check_roll(&mut c), None);
    }

    #[test]
    fn discarded_results_do_not_count() {
        let term = DieTerm {
            faces: 20,
            number: 1,
            results: vec![DieResult::discarded(20), DieResult::new(1)],
        };
        let mut c = card(RollKind::Check, vec![term]);
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Failure));
    }

    #[test]
    fn only_first_term_and_first_roll_matter() {
        let mut c = card(
            RollKind::Check,
            vec![DieTerm::new(8, &[8]), DieTerm::new(20, &[20])],
        );
        assert_eq!(highlight_check_roll(&mut c), None);

        let mut c = card(RollKind::Damage, vec![DieTerm::new(20, &[20])]);
        c.rolls.push(Roll {
            kind: RollKind::Check,
            terms: vec![DieTerm::new(20, &[20])],
            total: 20,
        });
        assert_eq!(highlight_check_roll(&mut c), None);
    }

    #[test]
    fn visibility_and_rerolls_gate_highlighting() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[20])]);
        c.author_is_viewer = false;
        assert_eq!(highlight_check_roll(&mut c), None);
        c.show_breakdown = true;
        assert_eq!(highlight_check_roll(&mut c), Some(Highlight::Success));

        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[20])]);
        c.has_reroll_indicator = true;
        assert_eq!(highlight_check_roll(&mut c), None);
    }

    #[test]
    fn overflowing_results_are_not_highlighted() {
        let term = DieTerm {
            faces: 20,
            number: 1,
            results: vec![DieResult::new(u32::MAX), DieResult::new(1)],
        };
        let mut c = card(RollKind::Check, vec![term]);
        assert_eq!(highlight_check_roll(&mut c), None);
        assert!(c.total_classes.is_empty());
    }

    #[test]
    fn idempotent() {
        let mut c = card(RollKind::Check, vec![DieTerm::new(20, &[20])]);
        highlight_check_roll(&mut c);
        let once = c.clone();
        highlight_check_roll(&mut c);
        assert_eq!(c, once);
        assert_eq!(c.total_classes.len(), 1);
    }

    #[test]
    fn empty_card() {
        let mut c = ChatCard::default();
        assert_eq!(highlight_check_roll(&mut c), None);
    }
}
