//! Chat message composition for rest summaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hearth_core::{ActorId, CharacterSnapshot};

use crate::i18n::{Localize, condition_label, keys};
use crate::plan::Statement;

/// Who a chat message is spoken as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    /// The speaking actor.
    pub actor: ActorId,
    /// Display name of the speaker.
    pub alias: String,
}

/// A chat message to be created by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageData {
    /// The posting user.
    pub author: String,
    /// Rendered HTML content.
    pub content: String,
    /// Speaker identity.
    pub speaker: Speaker,
}

/// A chat message created by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Host identifier of the message.
    pub id: Uuid,
    /// What was posted.
    #[serde(flatten)]
    pub data: ChatMessageData,
}

/// Render one statement into display text.
pub fn render_statement(statement: &Statement, localizer: &dyn Localize) -> String {
    match statement {
        Statement::HitPointsRestored(1) => localizer.localize(keys::HIT_POINTS_SINGLE, &[]),
        Statement::HitPointsRestored(n) => {
            let n = n.to_string();
            localizer.localize(keys::HIT_POINTS, &[("hit_points", n.as_str())])
        }
        Statement::InfusedReagents => localizer.localize(keys::INFUSED_REAGENTS, &[]),
        Statement::Frequencies => localizer.localize(keys::FREQUENCIES, &[]),
        Statement::StaminaPoints => localizer.localize(keys::STAMINA_POINTS, &[]),
        Statement::MaxHitPointsCeiling(n) => {
            let n = n.to_string();
            localizer.localize(keys::MAX_HIT_POINTS, &[("hit_points", n.as_str())])
        }
        Statement::Resolve => localizer.localize(keys::RESOLVE, &[]),
        Statement::TemporaryItems => localizer.localize(keys::TEMPORARY_ITEMS, &[]),
        Statement::FocusPoints => localizer.localize(keys::FOCUS_POINTS, &[]),
        Statement::SpellSlots => localizer.localize(keys::SPELL_SLOTS, &[]),
        Statement::WandCharges => localizer.localize(keys::WAND_CHARGES, &[]),
        Statement::ConditionReduced(slug) => {
            let label = condition_label(slug, localizer);
            localizer.localize(keys::CONDITION_REDUCED, &[("condition", label.as_str())])
        }
        Statement::ConditionRemoved(slug) => {
            let label = condition_label(slug, localizer);
            localizer.localize(keys::CONDITION_REMOVED, &[("condition", label.as_str())])
        }
    }
}

/// Build the "awakens" chat message for one character.
///
/// The content is the localized headline followed by an HTML list with
/// one entry per statement.
pub fn compose_message(
    actor: &CharacterSnapshot,
    statements: &[Statement],
    localizer: &dyn Localize,
    author: &str,
) -> ChatMessageData {
    let headline = localizer.localize(keys::AWAKENS, &[("actor", actor.name.as_str())]);
    let mut list = String::from("<ul>");
    for statement in statements {
        list.push_str("<li>");
        list.push_str(&escape_html(&render_statement(statement, localizer)));
        list.push_str("</li>");
    }
    list.push_str("</ul>");

    ChatMessageData {
        author: author.to_string(),
        content: format!("{}\n{list}", escape_html(&headline)),
        speaker: Speaker {
            actor: actor.id,
            alias: actor.name.clone(),
        },
    }
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip the list markup from composed content, one line per entry.
pub fn plain_text(content: &str) -> String {
    content
        .replace("<ul>", "\n")
        .replace("</li>", "\n")
        .replace("<li>", "  - ")
        .replace("</ul>", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
