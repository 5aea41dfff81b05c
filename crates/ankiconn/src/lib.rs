//! A typed, async Rust client for the AnkiConnect API.
//!
//! This crate talks to the AnkiConnect add-on of the Anki flashcard
//! application: every operation POSTs a `{action, version, params}` envelope
//! to the local endpoint and unwraps the `{result, error}` response into an
//! [`Outcome`].
//!
//! Two conventions meet here. AnkiConnect names actions and parameter keys
//! in camel style (`deckNames`, `cardsToo`); this crate uses underscore
//! names everywhere (`deck_names`, `cards_too`) and resolves the mismatch in
//! one place, the [`casing`] module, at the request boundary. The [`catalog`]
//! module declares every dispatchable action with its required argument
//! count, for callers (such as the `ankiconn` CLI) that route actions by
//! name.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankiconn::AnkiClient;
//!
//! # async fn example() -> ankiconn::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! // Check that AnkiConnect is running
//! let version = client.misc().version().await?;
//! println!("AnkiConnect version: {}", version);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use ankiconn::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`AnkiClient::decks()`] - Create, delete, and configure decks
//! - [`AnkiClient::notes()`] - Add, find, update, tag, and delete notes
//! - [`AnkiClient::cards()`] - Find, inspect, suspend, and answer cards
//! - [`AnkiClient::models()`] - Manage note types, fields, and templates
//! - [`AnkiClient::media()`] - Store, retrieve, and manage media files
//! - [`AnkiClient::graphical()`] - Control Anki's graphical interface
//! - [`AnkiClient::statistics()`] - Review history and collection statistics
//! - [`AnkiClient::misc()`] - Version, sync, profiles, batched calls
//!
//! Untyped dispatch by action name goes through [`AnkiClient::call()`].
//!
//! # Requirements
//!
//! Anki must be running with the AnkiConnect add-on installed; by default
//! the client connects to `http://127.0.0.1:8765`.

pub mod actions;
pub mod casing;
pub mod catalog;
pub mod client;
pub mod error;
pub mod outcome;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use outcome::Outcome;
pub use types::{
    CanAddResult, CardAnswer, CardInfo, CardModTime, CardTemplate, DeckConfig, DeckStats,
    DuplicateScope, Ease, MediaAttachment, ModelDefinition, ModelFindReplace, ModelStyling, Note,
    NoteBuilder, NoteField, NoteInfo, NoteModTime, NoteOptions, NoteUpdate,
};
