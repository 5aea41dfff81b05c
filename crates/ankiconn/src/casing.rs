//! Key-casing translation between the crate's underscore convention and the
//! camel convention AnkiConnect expects on the wire.
//!
//! AnkiConnect names its actions and parameter keys in leading-lowercase
//! camel style (`deckNames`, `cardsToo`), while everything in this crate uses
//! underscore names (`deck_names`, `cards_too`). This module is the single
//! seam where that mismatch is resolved: requests are encoded to wire form
//! immediately before serialization, and JSON given on the command line is
//! decoded back to underscore form right after parsing. Action wrappers and
//! params structs never deal with casing themselves.
//!
//! A handful of wire names capitalize acronyms in a way the generic
//! algorithm cannot produce (`startID`, `getLatestReviewID`); those are
//! handled by a static override table applied after the generic conversion.

use serde_json::Value;

/// Wire names whose capitalization the generic conversion cannot produce.
///
/// Applied as a whole-key substitution after encoding. Extend this table as
/// further exceptions turn up in the AnkiConnect action list.
const OVERRIDES: &[(&str, &str)] = &[
    ("startId", "startID"),
    ("getLatestReviewId", "getLatestReviewID"),
    ("getCollectionStatsHtml", "getCollectionStatsHTML"),
];

/// Convert an underscore key to its wire form.
///
/// The first word is kept as-is; every following word has its first
/// character ASCII-uppercased; words are joined without a separator. The
/// override table is consulted on the result, so `start_id` becomes
/// `startID` rather than `startId`.
///
/// Keys without an underscore are returned unchanged, which lets
/// already-capitalized names (note field names such as `Front`) pass through
/// byte-for-byte. Keys with leading or doubled underscores are not produced
/// by this crate and their conversion is unspecified.
///
/// # Example
///
/// ```
/// use ankiconn::casing::encode_key;
///
/// assert_eq!(encode_key("deck_names"), "deckNames");
/// assert_eq!(encode_key("start_id"), "startID");
/// assert_eq!(encode_key("Front"), "Front");
/// ```
pub fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in key.split('_').enumerate() {
        if i == 0 {
            out.push_str(word);
        } else if let Some(first) = word.chars().next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&word[first.len_utf8()..]);
        }
    }
    match OVERRIDES.iter().find(|(generic, _)| out == *generic) {
        Some((_, exact)) => (*exact).to_string(),
        None => out,
    }
}

/// Convert a wire key back to underscore form.
///
/// An underscore is inserted at every boundary where a lowercase letter or
/// digit is followed by an uppercase letter, and every character except the
/// first is ASCII-lowercased. The first character keeps its original case,
/// so `MyVariableName` decodes to `My_variable_name`, not `my_variable_name`.
///
/// Runs of uppercase letters collapse into a single word, which makes the
/// override table consistent under round-trip: `startID` decodes to
/// `start_id`.
///
/// # Example
///
/// ```
/// use ankiconn::casing::decode_key;
///
/// assert_eq!(decode_key("deckNames"), "deck_names");
/// assert_eq!(decode_key("startID"), "start_id");
/// ```
pub fn decode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower_or_digit = false;
    for (i, ch) in key.chars().enumerate() {
        if prev_lower_or_digit && ch.is_ascii_uppercase() {
            out.push('_');
        }
        if i == 0 {
            out.push(ch);
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }
    out
}

/// Recursively encode every object key in a JSON tree to wire form.
///
/// Arrays are walked element-wise; scalars and all values pass through
/// untouched. Only keys are rewritten.
pub fn encode_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (encode_key(&key), encode_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(encode_keys).collect()),
        scalar => scalar,
    }
}

/// Recursively decode every object key in a JSON tree to underscore form.
///
/// Applied to flag values parsed from the command line, and only there;
/// response payloads keep their wire keys.
pub fn decode_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (decode_key(&key), decode_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(decode_keys).collect()),
        scalar => scalar,
    }
}
