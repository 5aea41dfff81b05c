//! Internal request and response envelopes for the AnkiConnect protocol.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::casing;

/// The request format expected by AnkiConnect.
///
/// Construction is the casing seam: the action name and all params keys come
/// in under the crate's underscore convention and leave in wire form.
#[derive(Debug, Serialize)]
pub(crate) struct WireRequest<'a> {
    /// The wire-form action name.
    pub action: String,
    /// The API version (always 6).
    pub version: u8,
    /// Optional API key for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    /// Optional parameters, keys already in wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl<'a> WireRequest<'a> {
    /// Build a request from an underscore action name and optional params.
    pub fn new(action: &str, params: Option<Value>, key: Option<&'a str>) -> Self {
        Self {
            action: casing::encode_key(action),
            version: 6,
            key,
            params: params.map(casing::encode_keys),
        }
    }
}

/// The response format returned by AnkiConnect.
#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    /// The result of the action, if successful.
    #[serde(default)]
    pub result: Option<Value>,
    /// The error slot, non-null when the action failed.
    #[serde(default)]
    pub error: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encodes_action_and_params_keys() {
        let request = WireRequest::new(
            "delete_decks",
            Some(json!({ "decks": ["Old"], "cards_too": true })),
            None,
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "action": "deleteDecks",
                "version": 6,
                "params": { "decks": ["Old"], "cardsToo": true },
            })
        );
    }

    #[test]
    fn omits_absent_key_and_params() {
        let request = WireRequest::new("version", None, None);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "action": "version", "version": 6 }));
    }

    #[test]
    fn carries_the_api_key() {
        let request = WireRequest::new("sync", None, Some("secret"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["key"], json!("secret"));
    }
}
