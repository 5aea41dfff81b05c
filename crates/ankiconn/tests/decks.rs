//! Tests for deck actions.

mod common;

use ankiconn::AnkiClient;
use common::{
    mock_action, mock_action_with_params, mock_anki_error, mock_anki_response, setup_mock_server,
};
use serde_json::json;

#[tokio::test]
async fn deck_names() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNames", mock_anki_response(vec!["Default", "Japanese"])).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().names().await.unwrap();

    assert_eq!(decks, vec!["Default", "Japanese"]);
}

#[tokio::test]
async fn deck_names_and_ids() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNamesAndIds",
        mock_anki_response(json!({ "Default": 1, "Japanese": 1234567890 })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().names_and_ids().await.unwrap();

    assert_eq!(decks.get("Default"), Some(&1));
    assert_eq!(decks.get("Japanese"), Some(&1234567890));
}

#[tokio::test]
async fn create_deck() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "createDeck",
        json!({ "deck": "New Deck" }),
        mock_anki_response(1234567890_i64),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let deck_id = client.decks().create("New Deck").await.unwrap();

    assert_eq!(deck_id, 1234567890);
}

#[tokio::test]
async fn delete_decks_sends_wire_keys() {
    let server = setup_mock_server().await;
    // cards_too must reach the wire as cardsToo.
    mock_action_with_params(
        &server,
        "deleteDecks",
        json!({ "decks": ["Old Deck"], "cardsToo": true }),
        mock_anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().delete(&["Old Deck"], true).await;

    assert!(result.is_ok(), "Expected Ok, got: {:?}", result);
}

#[tokio::test]
async fn set_config_id_sends_wire_keys() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "setDeckConfigId",
        json!({ "decks": ["Japanese"], "configId": 7 }),
        mock_anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.decks().set_config_id(&["Japanese"], 7).await.unwrap());
}

#[tokio::test]
async fn deck_stats() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getDeckStats",
        mock_anki_response(json!({
            "1651445861967": {
                "deck_id": 1651445861967_i64,
                "name": "Japanese",
                "new_count": 20,
                "learn_count": 0,
                "review_count": 5,
                "total_in_deck": 319
            }
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let stats = client.decks().stats(&["Japanese"]).await.unwrap();

    let deck = stats.get("1651445861967").unwrap();
    assert_eq!(deck.name, "Japanese");
    assert_eq!(deck.new_count, 20);
    assert_eq!(deck.total_in_deck, 319);
}

#[tokio::test]
async fn deck_error_surfaces_the_reason() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNames", mock_anki_error("deck was not found")).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("deck was not found"));
}
