//! Tests for miscellaneous actions and the raw call path.

mod common;

use ankiconn::actions::MiscAction;
use ankiconn::{AnkiClient, Error, Outcome};
use common::{
    mock_action, mock_action_with_params, mock_anki_error, mock_anki_response, setup_mock_server,
};
use serde_json::json;

#[tokio::test]
async fn version() {
    let server = setup_mock_server().await;
    mock_action(&server, "version", mock_anki_response(6)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert_eq!(client.misc().version().await.unwrap(), 6);
}

#[tokio::test]
async fn sync_is_void() {
    let server = setup_mock_server().await;
    mock_action(&server, "sync", mock_anki_response(serde_json::Value::Null)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.misc().sync().await.is_ok());
}

#[tokio::test]
async fn load_profile() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "loadProfile",
        json!({ "name": "user1" }),
        mock_anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.misc().load_profile("user1").await.unwrap());
}

#[tokio::test]
async fn export_package_sends_wire_keys() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "exportPackage",
        json!({ "deck": "Japanese", "path": "/tmp/japanese.apkg", "includeSchedData": true }),
        mock_anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let exported = client
        .misc()
        .export_package("Japanese", "/tmp/japanese.apkg", Some(true))
        .await
        .unwrap();
    assert!(exported);
}

#[tokio::test]
async fn multi_converts_action_names_and_unwraps_envelopes() {
    let server = setup_mock_server().await;
    // Batched action names travel as values, converted by the wrapper.
    mock_action_with_params(
        &server,
        "multi",
        json!({ "actions": [{ "action": "deckNames" }, { "action": "version" }] }),
        mock_anki_response(json!([
            { "result": ["Default"], "error": null },
            { "result": null, "error": "some failure" }
        ])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let outcomes = client
        .misc()
        .multi(&[MiscAction::new("deck_names"), MiscAction::new("version")])
        .await
        .unwrap();

    assert_eq!(outcomes[0], Outcome::Success(json!(["Default"])));
    assert_eq!(outcomes[1], Outcome::Failure(json!("some failure")));
}

#[tokio::test]
async fn call_returns_failure_for_error_envelopes() {
    let server = setup_mock_server().await;
    mock_action(&server, "createDeck", mock_anki_error("deck was not found")).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let outcome = client
        .call("create_deck", Some(json!({ "deck": "X" })))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Failure(json!("deck was not found")));
}

#[tokio::test]
async fn call_returns_null_success_for_void_actions() {
    let server = setup_mock_server().await;
    mock_action(&server, "sync", mock_anki_response(serde_json::Value::Null)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let outcome = client.call("sync", None).await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome, Outcome::Success(serde_json::Value::Null));
}

#[tokio::test]
async fn typed_invoke_reports_empty_responses() {
    let server = setup_mock_server().await;
    mock_action(&server, "version", mock_anki_response(serde_json::Value::Null)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let error = client.misc().version().await.unwrap_err();

    assert!(matches!(error, Error::EmptyResponse));
}
