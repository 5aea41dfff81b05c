//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconn::{AnkiClient, NoteBuilder};
//!
//! # async fn example() -> ankiconn::Result<()> {
//! let client = AnkiClient::new();
//!
//! let note = NoteBuilder::new("Default", "Basic")
//!     .field("Front", "Hello")
//!     .field("Back", "World")
//!     .tag("greeting")
//!     .build();
//!
//! let note_id = client.notes().add(note).await?;
//! println!("Created note {}", note_id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CanAddResult, Note, NoteInfo, NoteModTime, NoteUpdate};

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct NoteParams<'a> {
    note: &'a Note,
}

#[derive(Serialize)]
struct NotesParams<'a> {
    notes: &'a [Note],
}

#[derive(Serialize)]
struct NoteUpdateParams<'a> {
    note: &'a NoteUpdate,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NoteIdsParams<'a> {
    notes: &'a [i64],
}

#[derive(Serialize)]
struct NoteIdParams {
    note: i64,
}

#[derive(Serialize)]
struct TagsParams<'a> {
    notes: &'a [i64],
    tags: &'a str,
}

#[derive(Serialize)]
struct UpdateNoteTagsParams<'a> {
    note: i64,
    tags: &'a [&'a str],
}

#[derive(Serialize)]
struct ReplaceTagsParams<'a> {
    notes: &'a [i64],
    tag_to_replace: &'a str,
    replace_with_tag: &'a str,
}

#[derive(Serialize)]
struct ReplaceTagsAllParams<'a> {
    tag_to_replace: &'a str,
    replace_with_tag: &'a str,
}

impl<'a> NoteActions<'a> {
    /// Add a single note and return its ID.
    pub async fn add(&self, note: Note) -> Result<i64> {
        self.client.invoke("add_note", NoteParams { note: &note }).await
    }

    /// Add multiple notes.
    ///
    /// Returns one entry per note: the new note ID, or null for notes that
    /// could not be added.
    pub async fn add_many(&self, notes: &[Note]) -> Result<Vec<Option<i64>>> {
        self.client.invoke("add_notes", NotesParams { notes }).await
    }

    /// Check whether each note can be added.
    pub async fn can_add(&self, notes: &[Note]) -> Result<Vec<bool>> {
        self.client.invoke("can_add_notes", NotesParams { notes }).await
    }

    /// Check whether each note can be added, with the reason when it
    /// cannot.
    pub async fn can_add_with_error_detail(&self, notes: &[Note]) -> Result<Vec<CanAddResult>> {
        self.client
            .invoke("can_add_notes_with_error_detail", NotesParams { notes })
            .await
    }

    /// Find notes matching an Anki search query and return their IDs.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankiconn::AnkiClient;
    /// # async fn example() -> ankiconn::Result<()> {
    /// let client = AnkiClient::new();
    /// let ids = client.notes().find("deck:Japanese tag:verb").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("find_notes", QueryParams { query }).await
    }

    /// Get detailed information about notes.
    pub async fn info(&self, notes: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client.invoke("notes_info", NoteIdsParams { notes }).await
    }

    /// Get modification times for notes.
    pub async fn mod_time(&self, notes: &[i64]) -> Result<Vec<NoteModTime>> {
        self.client.invoke("notes_mod_time", NoteIdsParams { notes }).await
    }

    /// Update a note's field values.
    pub async fn update_fields(&self, note_id: i64, fields: HashMap<String, String>) -> Result<()> {
        let note = NoteUpdate { id: note_id, fields, tags: None };
        self.client
            .invoke_void("update_note_fields", NoteUpdateParams { note: &note })
            .await
    }

    /// Update a note's fields and, optionally, its tags.
    pub async fn update(&self, note: &NoteUpdate) -> Result<()> {
        self.client.invoke_void("update_note", NoteUpdateParams { note }).await
    }

    /// Delete notes. All cards generated from them are deleted as well.
    pub async fn delete(&self, notes: &[i64]) -> Result<()> {
        self.client.invoke_void("delete_notes", NoteIdsParams { notes }).await
    }

    /// Add tags to notes. Tags are space-separated.
    pub async fn add_tags(&self, notes: &[i64], tags: &str) -> Result<()> {
        self.client.invoke_void("add_tags", TagsParams { notes, tags }).await
    }

    /// Remove tags from notes. Tags are space-separated.
    pub async fn remove_tags(&self, notes: &[i64], tags: &str) -> Result<()> {
        self.client.invoke_void("remove_tags", TagsParams { notes, tags }).await
    }

    /// Get all tags in the collection.
    pub async fn get_tags(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("get_tags").await
    }

    /// Get the tags of a single note.
    pub async fn note_tags(&self, note: i64) -> Result<Vec<String>> {
        self.client.invoke("get_note_tags", NoteIdParams { note }).await
    }

    /// Replace a note's tag list wholesale.
    pub async fn update_note_tags(&self, note: i64, tags: &[&str]) -> Result<()> {
        self.client
            .invoke_void("update_note_tags", UpdateNoteTagsParams { note, tags })
            .await
    }

    /// Replace a tag on the given notes.
    pub async fn replace_tags(&self, notes: &[i64], old: &str, new: &str) -> Result<()> {
        self.client
            .invoke_void(
                "replace_tags",
                ReplaceTagsParams { notes, tag_to_replace: old, replace_with_tag: new },
            )
            .await
    }

    /// Replace a tag across every note in the collection.
    pub async fn replace_tags_all(&self, old: &str, new: &str) -> Result<()> {
        self.client
            .invoke_void(
                "replace_tags_in_all_notes",
                ReplaceTagsAllParams { tag_to_replace: old, replace_with_tag: new },
            )
            .await
    }

    /// Remove tags no note uses.
    pub async fn clear_unused_tags(&self) -> Result<()> {
        self.client.invoke_void_without_params("clear_unused_tags").await
    }

    /// Delete notes whose fields are all empty.
    pub async fn remove_empty(&self) -> Result<()> {
        self.client.invoke_void_without_params("remove_empty_notes").await
    }
}
