//! Value types for AnkiConnect requests and responses.
//!
//! Request-side types serialize under the crate's underscore convention; the
//! client's casing seam rewrites their keys to wire form, so none of them
//! carry camel-case renames. Response-side types deserialize straight from
//! the wire and map its camel keys with serde renames.

mod card;
mod deck;
mod model;
mod note;

pub use card::{CardAnswer, CardInfo, CardModTime, Ease};
pub use deck::{DeckConfig, DeckStats, LapseConfig, NewCardConfig, ReviewConfig};
pub use model::{
    CardTemplate, ModelDefinition, ModelFindReplace, ModelStyling, ModelTemplates, TemplateSides,
};
pub use note::{
    CanAddResult, DuplicateScope, DuplicateScopeOptions, MediaAttachment, Note, NoteBuilder,
    NoteField, NoteInfo, NoteModTime, NoteOptions, NoteUpdate,
};
