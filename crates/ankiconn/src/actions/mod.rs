//! Typed wrappers for AnkiConnect actions, grouped by domain.
//!
//! Each group is a borrowed view over the client, obtained through an
//! accessor such as [`AnkiClient::decks()`](crate::AnkiClient::decks). The
//! wrappers pass underscore action names and params straight to the client;
//! the casing seam produces the wire form.

mod cards;
mod decks;
mod graphical;
mod media;
mod misc;
mod models;
mod notes;
mod statistics;

pub use cards::CardActions;
pub use decks::DeckActions;
pub use graphical::GraphicalActions;
pub use media::{MediaActions, StoreMediaFile};
pub use misc::{MiscAction, MiscActions, PermissionResult};
pub use models::ModelActions;
pub use notes::NoteActions;
pub use statistics::{ReviewRow, StatisticsActions};
