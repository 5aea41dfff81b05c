//! Card-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconn::AnkiClient;
//!
//! # async fn example() -> ankiconn::Result<()> {
//! let client = AnkiClient::new();
//!
//! let due = client.cards().find("deck:Japanese is:due").await?;
//! client.cards().suspend(&due).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CardAnswer, CardInfo, CardModTime};

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

#[derive(Serialize)]
struct CardParams {
    card: i64,
}

#[derive(Serialize)]
struct AnswersParams<'a> {
    answers: &'a [CardAnswer],
}

#[derive(Serialize)]
struct SetEaseFactorsParams<'a> {
    cards: &'a [i64],
    ease_factors: &'a [i64],
}

#[derive(Serialize)]
struct SetDueDateParams<'a> {
    cards: &'a [i64],
    days: &'a str,
}

#[derive(Serialize)]
struct SetSpecificValueParams<'a> {
    card: i64,
    keys: &'a [&'a str],
    new_values: &'a [&'a str],
}

impl<'a> CardActions<'a> {
    /// Find cards matching an Anki search query and return their IDs.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("find_cards", QueryParams { query }).await
    }

    /// Get detailed information about cards.
    pub async fn info(&self, cards: &[i64]) -> Result<Vec<CardInfo>> {
        self.client.invoke("cards_info", CardsParams { cards }).await
    }

    /// Get modification times for cards.
    pub async fn mod_time(&self, cards: &[i64]) -> Result<Vec<CardModTime>> {
        self.client.invoke("cards_mod_time", CardsParams { cards }).await
    }

    /// Map cards to the notes they were generated from.
    ///
    /// The result is deduplicated: sibling cards contribute one note ID.
    pub async fn to_notes(&self, cards: &[i64]) -> Result<Vec<i64>> {
        self.client.invoke("cards_to_notes", CardsParams { cards }).await
    }

    /// Suspend cards so they no longer come up for review. Returns true if
    /// at least one card was affected.
    pub async fn suspend(&self, cards: &[i64]) -> Result<bool> {
        self.client.invoke("suspend", CardsParams { cards }).await
    }

    /// Unsuspend cards. Returns true if at least one card was affected.
    pub async fn unsuspend(&self, cards: &[i64]) -> Result<bool> {
        self.client.invoke("unsuspend", CardsParams { cards }).await
    }

    /// Check whether a single card is suspended.
    pub async fn is_suspended(&self, card: i64) -> Result<bool> {
        self.client.invoke("suspended", CardParams { card }).await
    }

    /// Check suspension for several cards; null entries are cards that do
    /// not exist.
    pub async fn are_suspended(&self, cards: &[i64]) -> Result<Vec<Option<bool>>> {
        self.client.invoke("are_suspended", CardsParams { cards }).await
    }

    /// Check whether each card is due.
    pub async fn are_due(&self, cards: &[i64]) -> Result<Vec<bool>> {
        self.client.invoke("are_due", CardsParams { cards }).await
    }

    /// Get each card's current interval in days (negative values are
    /// seconds, for learning cards).
    pub async fn intervals(&self, cards: &[i64]) -> Result<Vec<i64>> {
        self.client.invoke("get_intervals", CardsParams { cards }).await
    }

    /// Reset cards to new, clearing all learning progress.
    pub async fn forget(&self, cards: &[i64]) -> Result<()> {
        self.client.invoke_void("forget_cards", CardsParams { cards }).await
    }

    /// Make cards relearning.
    pub async fn relearn(&self, cards: &[i64]) -> Result<()> {
        self.client.invoke_void("relearn_cards", CardsParams { cards }).await
    }

    /// Answer cards as if reviewed. Returns one flag per answer.
    pub async fn answer(&self, answers: &[CardAnswer]) -> Result<Vec<bool>> {
        self.client.invoke("answer_cards", AnswersParams { answers }).await
    }

    /// Get each card's ease factor (e.g. 2500 = 250%).
    pub async fn ease_factors(&self, cards: &[i64]) -> Result<Vec<i64>> {
        self.client.invoke("get_ease_factors", CardsParams { cards }).await
    }

    /// Set ease factors for cards. Returns one flag per card.
    pub async fn set_ease_factors(&self, cards: &[i64], ease_factors: &[i64]) -> Result<Vec<bool>> {
        self.client
            .invoke("set_ease_factors", SetEaseFactorsParams { cards, ease_factors })
            .await
    }

    /// Set the due date for cards.
    ///
    /// `days` follows the Anki "set due date" syntax: `"0"` for today,
    /// `"1"` for tomorrow, `"1-7"` for a random range, `"0!"` to also reset
    /// the interval.
    pub async fn set_due_date(&self, cards: &[i64], days: &str) -> Result<bool> {
        self.client.invoke("set_due_date", SetDueDateParams { cards, days }).await
    }

    /// Set raw card properties by column name.
    ///
    /// Dangerous for scheduling-related keys; prefer the dedicated actions
    /// where one exists.
    pub async fn set_specific_value(
        &self,
        card: i64,
        keys: &[&str],
        new_values: &[&str],
    ) -> Result<Vec<bool>> {
        self.client
            .invoke(
                "set_specific_value_of_card",
                SetSpecificValueParams { card, keys, new_values },
            )
            .await
    }
}
