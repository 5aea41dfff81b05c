//! Tests for statistics actions, including the wire names the generic
//! casing conversion cannot produce on its own.

mod common;

use ankiconn::AnkiClient;
use common::{mock_action, mock_action_with_params, mock_anki_response, setup_mock_server};
use serde_json::json;

#[tokio::test]
async fn card_reviews_sends_start_id_as_start_capital_id() {
    let server = setup_mock_server().await;
    // The wire key is startID, not startId.
    mock_action_with_params(
        &server,
        "cardReviews",
        json!({ "deck": "Japanese", "startID": 1594194095740_i64 }),
        mock_anki_response(json!([
            [1594194095746_i64, 1485369733217_i64, -1, 3, 4, -60, 2500, 6157, 0]
        ])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let reviews = client.statistics().card_reviews("Japanese", 1594194095740).await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0][1], 1485369733217);
}

#[tokio::test]
async fn latest_review_id_uses_the_override_wire_name() {
    let server = setup_mock_server().await;
    mock_action(&server, "getLatestReviewID", mock_anki_response(1594194095746_i64)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let id = client.statistics().latest_review_id("Japanese").await.unwrap();

    assert_eq!(id, 1594194095746);
}

#[tokio::test]
async fn collection_stats_html_uses_the_override_wire_name() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "getCollectionStatsHTML",
        json!({ "wholeCollection": true }),
        mock_anki_response("<center>...</center>"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let html = client.statistics().collection_stats_html(true).await.unwrap();

    assert!(html.starts_with("<center>"));
}

#[tokio::test]
async fn cards_reviewed_by_day() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getNumCardsReviewedByDay",
        mock_anki_response(json!([["2021-02-28", 124], ["2021-02-27", 261]])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let days = client.statistics().cards_reviewed_by_day().await.unwrap();

    assert_eq!(days[0], ("2021-02-28".to_string(), 124));
}
