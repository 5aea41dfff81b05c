//! Note-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A new note to be added to Anki.
///
/// Use [`NoteBuilder`] for a more ergonomic way to construct notes.
///
/// Field values are HTML; for a literal `<` or `>` use `&lt;` and `&gt;`.
/// Field names are case-sensitive and must match the model's field names
/// exactly; they pass to the wire untouched.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Audio attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<MediaAttachment>>,
    /// Video attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Vec<MediaAttachment>>,
    /// Picture attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<MediaAttachment>>,
    /// Duplicate-handling options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<NoteOptions>,
}

/// An update to an existing note, for `update_note` and
/// `update_note_fields`.
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdate {
    /// The note ID to update.
    pub id: i64,
    /// Field values to set, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Replacement tags; when absent, tags are left alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A media attachment for a note (audio, video, or picture).
///
/// Exactly one of `url`, `data`, or `path` should be set.
#[derive(Debug, Clone, Serialize)]
pub struct MediaAttachment {
    /// URL to download the media from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64-encoded media data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Local file path to read media from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Filename to save the media as.
    pub filename: String,
    /// Fields to insert the media reference into.
    pub fields: Vec<String>,
    /// Optional hash to skip download if the file already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
}

/// Options for adding notes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteOptions {
    /// Allow duplicate notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate: Option<bool>,
    /// Scope for duplicate checking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope: Option<DuplicateScope>,
    /// Additional options for duplicate scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope_options: Option<DuplicateScopeOptions>,
}

/// Scope for duplicate note checking.
///
/// These are wire values, not keys, so they carry their exact spelling.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum DuplicateScope {
    /// Check for duplicates within the target deck only.
    #[serde(rename = "deck")]
    Deck,
    /// Check for duplicates across the entire collection.
    #[serde(rename = "collection")]
    Collection,
}

/// Additional options for duplicate scope checking.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateScopeOptions {
    /// Deck name to check for duplicates in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    /// Check child decks as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_children: Option<bool>,
    /// Check all note types, not just the specified one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_all_models: Option<bool>,
}

/// Information about an existing note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    pub model_name: String,
    /// Tags on the note.
    pub tags: Vec<String>,
    /// Field values and metadata, keyed by field name.
    pub fields: HashMap<String, NoteField>,
    /// Card IDs generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
}

/// A field value with metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    pub order: i32,
}

/// Result of checking whether a note can be added.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanAddResult {
    /// Whether the note can be added.
    pub can_add: bool,
    /// Error message when it cannot.
    #[serde(default)]
    pub error: Option<String>,
}

/// Modification time information for a note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteModTime {
    /// The note ID.
    pub note_id: i64,
    /// Modification timestamp (seconds since epoch).
    #[serde(rename = "mod")]
    pub mod_time: i64,
}

/// Builder for creating notes with a fluent API.
///
/// # Example
///
/// ```
/// use ankiconn::NoteBuilder;
///
/// let note = NoteBuilder::new("My Deck", "Basic")
///     .field("Front", "What is the capital of France?")
///     .field("Back", "Paris")
///     .tag("geography")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteBuilder {
    deck_name: String,
    model_name: String,
    fields: HashMap<String, String>,
    tags: Vec<String>,
    audio: Option<Vec<MediaAttachment>>,
    video: Option<Vec<MediaAttachment>>,
    picture: Option<Vec<MediaAttachment>>,
    options: Option<NoteOptions>,
}

impl NoteBuilder {
    /// Create a new note builder for the given deck and note type.
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            deck_name: deck.into(),
            model_name: model.into(),
            ..Default::default()
        }
    }

    /// Set a field value.
    ///
    /// Field names are case-sensitive and must match the model exactly.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replace the tag list.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach an audio file.
    pub fn audio(mut self, attachment: MediaAttachment) -> Self {
        self.audio.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Attach a video file.
    pub fn video(mut self, attachment: MediaAttachment) -> Self {
        self.video.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Attach a picture.
    pub fn picture(mut self, attachment: MediaAttachment) -> Self {
        self.picture.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Allow the note even if it duplicates an existing one.
    pub fn allow_duplicate(mut self) -> Self {
        self.options.get_or_insert_with(NoteOptions::default).allow_duplicate = Some(true);
        self
    }

    /// Set the duplicate-checking scope.
    pub fn duplicate_scope(mut self, scope: DuplicateScope) -> Self {
        self.options.get_or_insert_with(NoteOptions::default).duplicate_scope = Some(scope);
        self
    }

    /// Build the note.
    pub fn build(self) -> Note {
        Note {
            deck_name: self.deck_name,
            model_name: self.model_name,
            fields: self.fields,
            tags: self.tags,
            audio: self.audio,
            video: self.video,
            picture: self.picture,
            options: self.options,
        }
    }
}
