//! Deck-related types.

use serde::{Deserialize, Serialize};

/// Statistics for a deck.
///
/// The deck ID is the key of the map returned by
/// [`DeckActions::stats()`](crate::actions::DeckActions::stats), not a field
/// here. AnkiConnect has shipped both key spellings for these counts, hence
/// the aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckStats {
    /// The deck name.
    pub name: String,
    /// Number of new cards.
    #[serde(default, alias = "newCount", alias = "new_count")]
    pub new_count: i64,
    /// Number of cards in learning.
    #[serde(default, alias = "learnCount", alias = "learn_count")]
    pub learn_count: i64,
    /// Number of cards due for review.
    #[serde(default, alias = "reviewCount", alias = "review_count")]
    pub review_count: i64,
    /// Total number of cards in the deck.
    #[serde(default, alias = "totalInDeck", alias = "total_in_deck")]
    pub total_in_deck: i64,
}

/// Study options for a deck.
///
/// Deserializes from the wire's camel keys; serializes under underscore
/// names so the client's casing seam produces the wire form on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DeckConfig {
    /// The config ID.
    pub id: i64,
    /// The config name.
    pub name: String,
    /// Maximum seconds to record for a single answer.
    #[serde(default)]
    pub max_taken: i64,
    /// Whether to replay question audio when showing the answer.
    #[serde(default)]
    pub replayq: bool,
    /// Whether to play audio automatically.
    #[serde(default)]
    pub autoplay: bool,
    /// Timer display setting.
    #[serde(default)]
    pub timer: i64,
    /// New card settings.
    pub new: NewCardConfig,
    /// Review settings.
    pub rev: ReviewConfig,
    /// Lapse settings.
    pub lapse: LapseConfig,
}

/// Configuration for new cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct NewCardConfig {
    /// Learning steps in minutes.
    #[serde(default)]
    pub delays: Vec<f64>,
    /// Order of new cards (0 = random, 1 = due).
    #[serde(default)]
    pub order: i64,
    /// Initial ease factor (as integer, e.g. 2500 = 250%).
    #[serde(default)]
    pub initial_factor: i64,
    /// Graduating and easy intervals in days.
    #[serde(default)]
    pub ints: Vec<i64>,
    /// Maximum new cards per day.
    #[serde(default)]
    pub per_day: i64,
}

/// Configuration for reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ReviewConfig {
    /// Maximum reviews per day.
    #[serde(default)]
    pub per_day: i64,
    /// Easy bonus multiplier.
    #[serde(default)]
    pub ease4: f64,
    /// Interval fuzz factor.
    #[serde(default)]
    pub fuzz: f64,
    /// Maximum interval in days.
    #[serde(default)]
    pub max_ivl: i64,
    /// Whether to bury related reviews.
    #[serde(default)]
    pub bury: bool,
    /// Hard interval multiplier.
    #[serde(default)]
    pub hard_factor: f64,
}

/// Configuration for lapses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct LapseConfig {
    /// Relearning steps in minutes.
    #[serde(default)]
    pub delays: Vec<f64>,
    /// Leech threshold.
    #[serde(default)]
    pub leech_fails: i64,
    /// Leech action (0 = suspend, 1 = tag only).
    #[serde(default)]
    pub leech_action: i64,
    /// Minimum interval after lapse.
    #[serde(default)]
    pub min_int: i64,
    /// New interval multiplier after lapse.
    #[serde(default)]
    pub mult: f64,
}
