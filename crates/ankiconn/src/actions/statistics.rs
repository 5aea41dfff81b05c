//! Review history and collection statistics actions.

use serde::Serialize;
use serde_json::Value;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to statistics-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::statistics()`].
#[derive(Debug)]
pub struct StatisticsActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct WholeCollectionParams {
    whole_collection: bool,
}

#[derive(Serialize)]
struct CardReviewsParams<'a> {
    deck: &'a str,
    start_id: i64,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

#[derive(Serialize)]
struct DeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
struct InsertReviewsParams<'a> {
    reviews: &'a [ReviewRow],
}

/// One row of review history, in the column order of Anki's `revlog` table:
/// review time (ms), card ID, usn, ease, new interval, previous interval,
/// new factor, review duration (ms), review kind.
pub type ReviewRow = [i64; 9];

impl<'a> StatisticsActions<'a> {
    /// Number of cards reviewed today.
    pub async fn cards_reviewed_today(&self) -> Result<i64> {
        self.client.invoke_without_params("get_num_cards_reviewed_today").await
    }

    /// Per-day review counts, newest first, as `(day, count)` pairs.
    pub async fn cards_reviewed_by_day(&self) -> Result<Vec<(String, i64)>> {
        self.client.invoke_without_params("get_num_cards_reviewed_by_day").await
    }

    /// The collection statistics report as HTML.
    pub async fn collection_stats_html(&self, whole_collection: bool) -> Result<String> {
        self.client
            .invoke("get_collection_stats_html", WholeCollectionParams { whole_collection })
            .await
    }

    /// Review history for a deck, starting at a review ID.
    ///
    /// Rows are `[review_time, card_id, usn, ease, interval, previous
    /// interval, factor, duration, kind]`.
    pub async fn card_reviews(&self, deck: &str, start_id: i64) -> Result<Vec<ReviewRow>> {
        self.client.invoke("card_reviews", CardReviewsParams { deck, start_id }).await
    }

    /// Review history per card, keyed by card ID.
    pub async fn reviews_of_cards(&self, cards: &[i64]) -> Result<Value> {
        self.client.invoke("get_reviews_of_cards", CardsParams { cards }).await
    }

    /// The most recent review ID for a deck, or 0 if it has none.
    pub async fn latest_review_id(&self, deck: &str) -> Result<i64> {
        self.client.invoke("get_latest_review_id", DeckParams { deck }).await
    }

    /// Insert review history rows into the collection.
    pub async fn insert_reviews(&self, reviews: &[ReviewRow]) -> Result<()> {
        self.client.invoke_void("insert_reviews", InsertReviewsParams { reviews }).await
    }
}
