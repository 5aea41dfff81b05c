//! Actions that drive Anki's graphical interface.

use serde::Serialize;
use serde_json::Value;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Ease, Note};

/// Provides access to GUI-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::graphical()`].
#[derive(Debug)]
pub struct GraphicalActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NoteIdParams {
    note: i64,
}

#[derive(Serialize)]
struct NoteParams<'a> {
    note: &'a Note,
}

#[derive(Serialize)]
struct EaseParams {
    ease: Ease,
}

#[derive(Serialize)]
struct NameParams<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PathParams<'a> {
    path: &'a str,
}

impl<'a> GraphicalActions<'a> {
    /// Open the card browser with a search query. Returns the card IDs it
    /// lists.
    pub async fn browse(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("gui_browse", QueryParams { query }).await
    }

    /// Select a note in the open card browser. Returns false if the browser
    /// is not open.
    pub async fn select_note(&self, note: i64) -> Result<bool> {
        self.client.invoke("gui_select_note", NoteIdParams { note }).await
    }

    /// Get the notes selected in the card browser.
    pub async fn selected_notes(&self) -> Result<Vec<i64>> {
        self.client.invoke_without_params("gui_selected_notes").await
    }

    /// Open the Add Cards dialog prefilled with a note. Returns the ID the
    /// note would get.
    pub async fn add_cards(&self, note: &Note) -> Result<i64> {
        self.client.invoke("gui_add_cards", NoteParams { note }).await
    }

    /// Open the note editor for an existing note.
    pub async fn edit_note(&self, note: i64) -> Result<()> {
        self.client.invoke_void("gui_edit_note", NoteIdParams { note }).await
    }

    /// Get the card currently shown in review, if any.
    pub async fn current_card(&self) -> Result<Option<Value>> {
        self.client.invoke_nullable_without_params("gui_current_card").await
    }

    /// Start the answer timer for the current card.
    pub async fn start_card_timer(&self) -> Result<bool> {
        self.client.invoke_without_params("gui_start_card_timer").await
    }

    /// Show the question side of the current card.
    pub async fn show_question(&self) -> Result<bool> {
        self.client.invoke_without_params("gui_show_question").await
    }

    /// Show the answer side of the current card.
    pub async fn show_answer(&self) -> Result<bool> {
        self.client.invoke_without_params("gui_show_answer").await
    }

    /// Answer the current card.
    pub async fn answer_card(&self, ease: Ease) -> Result<bool> {
        self.client.invoke("gui_answer_card", EaseParams { ease }).await
    }

    /// Undo the last action. Returns true if something was undone.
    pub async fn undo(&self) -> Result<bool> {
        self.client.invoke_without_params("gui_undo").await
    }

    /// Open the deck overview screen.
    pub async fn deck_overview(&self, name: &str) -> Result<bool> {
        self.client.invoke("gui_deck_overview", NameParams { name }).await
    }

    /// Open the deck browser screen.
    pub async fn deck_browser(&self) -> Result<()> {
        self.client.invoke_void_without_params("gui_deck_browser").await
    }

    /// Start reviewing a deck.
    pub async fn deck_review(&self, name: &str) -> Result<bool> {
        self.client.invoke("gui_deck_review", NameParams { name }).await
    }

    /// Open the import dialog for a file.
    pub async fn import_file(&self, path: &str) -> Result<()> {
        self.client.invoke_void("gui_import_file", PathParams { path }).await
    }

    /// Run a database check.
    pub async fn check_database(&self) -> Result<bool> {
        self.client.invoke_without_params("gui_check_database").await
    }

    /// Quit Anki. The request may not get a response before the process
    /// exits.
    pub async fn exit_anki(&self) -> Result<()> {
        self.client.invoke_void_without_params("gui_exit_anki").await
    }
}
