//! Error types for the ankiconn crate.
//!
//! The most common errors are:
//!
//! - [`Error::ConnectionRefused`]: Anki is not running or AnkiConnect is not
//!   installed
//! - [`Error::Remote`]: the action failed (e.g. deck not found, duplicate
//!   note)
//!
//! # Example
//!
//! ```no_run
//! use ankiconn::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use serde_json::Value;
use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Typically indicates network issues unrelated to Anki. For connection
    /// issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect reported the action as failed.
    ///
    /// Carries the response envelope's error slot verbatim. Common messages
    /// include "cannot create note because it is a duplicate" and "deck was
    /// not found".
    #[error("AnkiConnect error: {}", reason_text(.0))]
    Remote(Value),

    /// Response had neither a result nor an error.
    ///
    /// This is unexpected for value-returning actions and may indicate an
    /// AnkiConnect bug.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,
}

/// Render a failure reason without JSON quoting for plain strings.
fn reason_text(reason: &Value) -> String {
    match reason {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
