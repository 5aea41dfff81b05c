//! Card-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::types::NoteField;

/// Information about a card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID.
    pub card_id: i64,
    /// The note ID this card was generated from.
    #[serde(default, alias = "nid")]
    pub note_id: i64,
    /// The deck this card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// The card's question side (HTML).
    #[serde(default)]
    pub question: String,
    /// The card's answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Field values from the note.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// The card type (0 = new, 1 = learning, 2 = review, 3 = relearning).
    #[serde(default, rename = "type")]
    pub card_type: i32,
    /// The queue the card is in (-1 = suspended, 0 = new, 1 = learning,
    /// 2 = review, ...).
    #[serde(default)]
    pub queue: i32,
    /// Due position/date; meaning depends on the card type.
    #[serde(default)]
    pub due: i64,
    /// Current interval in days.
    #[serde(default)]
    pub interval: i64,
    /// Ease factor (as integer, e.g. 2500 = 250%).
    #[serde(default, alias = "factor")]
    pub ease_factor: i64,
    /// Number of reviews.
    #[serde(default)]
    pub reps: i64,
    /// Number of lapses.
    #[serde(default)]
    pub lapses: i64,
    /// Last modification timestamp.
    #[serde(default, alias = "mod")]
    pub mod_time: i64,
}

/// Modification time information for a card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModTime {
    /// The card ID.
    pub card_id: i64,
    /// Modification timestamp (seconds since epoch).
    #[serde(rename = "mod")]
    pub mod_time: i64,
}

/// Answer ease for reviewing cards.
///
/// Serializes as the numeric ease AnkiConnect expects (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Mark the card as failed (Again).
    Again = 1,
    /// Mark the card as hard.
    Hard = 2,
    /// Mark the card as good.
    Good = 3,
    /// Mark the card as easy.
    Easy = 4,
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Answer for a card review.
#[derive(Debug, Clone, Serialize)]
pub struct CardAnswer {
    /// The card ID to answer.
    pub card_id: i64,
    /// The ease rating.
    pub ease: Ease,
}

impl CardAnswer {
    /// Create a new card answer.
    pub fn new(card_id: i64, ease: Ease) -> Self {
        Self { card_id, ease }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ease_serializes_as_a_number() {
        let answer = CardAnswer::new(1498938915662, Ease::Good);
        assert_eq!(
            serde_json::to_value(&answer).unwrap(),
            json!({ "card_id": 1498938915662_i64, "ease": 3 })
        );
    }
}
