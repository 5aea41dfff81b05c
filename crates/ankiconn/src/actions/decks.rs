//! Deck-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconn::AnkiClient;
//!
//! # async fn example() -> ankiconn::Result<()> {
//! let client = AnkiClient::new();
//!
//! let decks = client.decks().names().await?;
//! println!("Decks: {:?}", decks);
//!
//! let deck_id = client.decks().create("My New Deck").await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{DeckConfig, DeckStats};

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct DeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

#[derive(Serialize)]
struct ChangeDeckParams<'a> {
    cards: &'a [i64],
    deck: &'a str,
}

#[derive(Serialize)]
struct DeleteDecksParams<'a> {
    decks: &'a [&'a str],
    cards_too: bool,
}

#[derive(Serialize)]
struct SaveDeckConfigParams<'a> {
    config: &'a DeckConfig,
}

#[derive(Serialize)]
struct SetDeckConfigIdParams<'a> {
    decks: &'a [&'a str],
    config_id: i64,
}

#[derive(Serialize)]
struct CloneDeckConfigParams<'a> {
    name: &'a str,
    clone_from: i64,
}

#[derive(Serialize)]
struct RemoveDeckConfigParams {
    config_id: i64,
}

#[derive(Serialize)]
struct DeckListParams<'a> {
    decks: &'a [&'a str],
}

impl<'a> DeckActions<'a> {
    /// Get all deck names.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deck_names").await
    }

    /// Get all deck names with their IDs, as a map from name to ID.
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_without_params("deck_names_and_ids").await
    }

    /// Get the decks containing the given cards, as a map from deck name to
    /// the card IDs in that deck.
    pub async fn get_for_cards(&self, cards: &[i64]) -> Result<HashMap<String, Vec<i64>>> {
        self.client.invoke("get_decks", CardsParams { cards }).await
    }

    /// Create a new deck and return its ID.
    ///
    /// If a deck with the same name already exists, returns the ID of the
    /// existing deck.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankiconn::AnkiClient;
    /// # async fn example() -> ankiconn::Result<()> {
    /// let client = AnkiClient::new();
    /// let deck_id = client.decks().create("Japanese::Vocabulary").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, name: &str) -> Result<i64> {
        self.client.invoke("create_deck", DeckParams { deck: name }).await
    }

    /// Move cards to a different deck.
    pub async fn move_cards(&self, cards: &[i64], deck: &str) -> Result<()> {
        self.client
            .invoke_void("change_deck", ChangeDeckParams { cards, deck })
            .await
    }

    /// Delete decks. With `cards_too`, the decks' cards are deleted as well;
    /// otherwise they move to the Default deck.
    pub async fn delete(&self, decks: &[&str], cards_too: bool) -> Result<()> {
        self.client
            .invoke_void("delete_decks", DeleteDecksParams { decks, cards_too })
            .await
    }

    /// Get the configuration group for a deck.
    pub async fn config(&self, deck: &str) -> Result<DeckConfig> {
        self.client.invoke("get_deck_config", DeckParams { deck }).await
    }

    /// Save a deck configuration group. Returns true on success.
    pub async fn save_config(&self, config: &DeckConfig) -> Result<bool> {
        self.client
            .invoke("save_deck_config", SaveDeckConfigParams { config })
            .await
    }

    /// Assign a configuration group to multiple decks. Returns true on
    /// success.
    pub async fn set_config_id(&self, decks: &[&str], config_id: i64) -> Result<bool> {
        self.client
            .invoke("set_deck_config_id", SetDeckConfigIdParams { decks, config_id })
            .await
    }

    /// Clone a configuration group and return the new group's ID.
    pub async fn clone_config(&self, name: &str, clone_from: i64) -> Result<i64> {
        self.client
            .invoke("clone_deck_config_id", CloneDeckConfigParams { name, clone_from })
            .await
    }

    /// Remove a configuration group. Returns true on success; the default
    /// group cannot be removed.
    pub async fn remove_config(&self, config_id: i64) -> Result<bool> {
        self.client
            .invoke("remove_deck_config_id", RemoveDeckConfigParams { config_id })
            .await
    }

    /// Get statistics for multiple decks, keyed by deck ID.
    pub async fn stats(&self, decks: &[&str]) -> Result<HashMap<String, DeckStats>> {
        self.client.invoke("get_deck_stats", DeckListParams { decks }).await
    }
}
