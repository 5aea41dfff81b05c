//! Media-related AnkiConnect actions.

use serde::Serialize;
use serde_json::Value;

use crate::client::AnkiClient;
use crate::error::{Error, Result};
use crate::outcome::Outcome;

/// Provides access to media-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Source and destination of a media file to store.
///
/// Exactly one of `data`, `path`, or `url` should be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreMediaFile<'a> {
    /// Filename to store the media as.
    pub filename: &'a str,
    /// Base64-encoded file contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
    /// Absolute path of a local file to read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
    /// URL to download the file from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    /// Overwrite an existing file of the same name (the default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_existing: Option<bool>,
}

#[derive(Serialize)]
struct FilenameParams<'a> {
    filename: &'a str,
}

#[derive(Serialize)]
struct PatternParams<'a> {
    pattern: &'a str,
}

impl<'a> MediaActions<'a> {
    /// Store a media file in the collection and return the filename it was
    /// saved under (AnkiConnect may rename to avoid conflicts).
    pub async fn store(&self, file: &StoreMediaFile<'_>) -> Result<String> {
        self.client.invoke("store_media_file", file).await
    }

    /// Retrieve a media file's contents, base64-encoded.
    ///
    /// Returns `None` when the file does not exist; AnkiConnect signals
    /// that with a `false` result rather than an error.
    pub async fn retrieve(&self, filename: &str) -> Result<Option<String>> {
        let params = serde_json::to_value(FilenameParams { filename })?;
        match self.client.call("retrieve_media_file", Some(params)).await? {
            Outcome::Success(Value::Bool(false)) => Ok(None),
            Outcome::Success(Value::String(data)) => Ok(Some(data)),
            Outcome::Success(other) => Ok(serde_json::from_value(other)?),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }

    /// List media filenames matching a glob pattern.
    pub async fn file_names(&self, pattern: &str) -> Result<Vec<String>> {
        self.client.invoke("get_media_files_names", PatternParams { pattern }).await
    }

    /// Get the path of the collection's media directory.
    pub async fn dir_path(&self) -> Result<String> {
        self.client.invoke_without_params("get_media_dir_path").await
    }

    /// Delete a media file from the collection.
    pub async fn delete(&self, filename: &str) -> Result<()> {
        self.client.invoke_void("delete_media_file", FilenameParams { filename }).await
    }
}
