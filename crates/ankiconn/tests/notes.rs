//! Tests for note actions.

mod common;

use std::collections::HashMap;

use ankiconn::{AnkiClient, NoteBuilder};
use common::{
    mock_action, mock_action_with_params, mock_anki_error, mock_anki_response, setup_mock_server,
};
use serde_json::json;

#[tokio::test]
async fn add_note_sends_wire_keys_and_exact_field_names() {
    let server = setup_mock_server().await;
    // deck_name/model_name become deckName/modelName; the "Front"/"Back"
    // field names must arrive untouched.
    mock_action_with_params(
        &server,
        "addNote",
        json!({
            "note": {
                "deckName": "Default",
                "modelName": "Basic",
                "fields": { "Front": "Hello", "Back": "World" },
                "tags": ["greeting"]
            }
        }),
        mock_anki_response(1496198395707_i64),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = NoteBuilder::new("Default", "Basic")
        .field("Front", "Hello")
        .field("Back", "World")
        .tag("greeting")
        .build();
    let note_id = client.notes().add(note).await.unwrap();

    assert_eq!(note_id, 1496198395707);
}

#[tokio::test]
async fn add_note_with_options_sends_duplicate_keys() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "addNote",
        json!({
            "note": {
                "deckName": "Default",
                "modelName": "Basic",
                "options": { "allowDuplicate": true }
            }
        }),
        mock_anki_response(1496198395708_i64),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = NoteBuilder::new("Default", "Basic")
        .field("Front", "Hello")
        .allow_duplicate()
        .build();
    client.notes().add(note).await.unwrap();
}

#[tokio::test]
async fn find_notes() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "findNotes",
        json!({ "query": "deck:Japanese tag:verb" }),
        mock_anki_response(vec![1483959289817_i64, 1483959291695]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let ids = client.notes().find("deck:Japanese tag:verb").await.unwrap();

    assert_eq!(ids, vec![1483959289817, 1483959291695]);
}

#[tokio::test]
async fn notes_info_parses_fields() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "notesInfo",
        mock_anki_response(json!([{
            "noteId": 1502298033753_i64,
            "modelName": "Basic",
            "tags": ["vocab"],
            "fields": {
                "Front": { "value": "front content", "order": 0 },
                "Back": { "value": "back content", "order": 1 }
            },
            "cards": [1498938915662_i64]
        }])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let notes = client.notes().info(&[1502298033753]).await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].model_name, "Basic");
    assert_eq!(notes[0].fields["Front"].value, "front content");
    assert_eq!(notes[0].cards, vec![1498938915662]);
}

#[tokio::test]
async fn update_note_fields() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "updateNoteFields",
        json!({ "note": { "id": 1502298033753_i64, "fields": { "Back": "new" } } }),
        mock_anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let fields = HashMap::from([("Back".to_string(), "new".to_string())]);
    client.notes().update_fields(1502298033753, fields).await.unwrap();
}

#[tokio::test]
async fn replace_tags_sends_wire_keys() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "replaceTags",
        json!({
            "notes": [1483959289817_i64],
            "tagToReplace": "old",
            "replaceWithTag": "new"
        }),
        mock_anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.notes().replace_tags(&[1483959289817], "old", "new").await.unwrap();
}

#[tokio::test]
async fn duplicate_note_error() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "addNote",
        mock_anki_error("cannot create note because it is a duplicate"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = NoteBuilder::new("Default", "Basic").field("Front", "Hello").build();
    let error = client.notes().add(note).await.unwrap_err();

    assert!(error.to_string().contains("duplicate"));
}
