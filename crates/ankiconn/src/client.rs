//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::actions::{
    CardActions, DeckActions, GraphicalActions, MediaActions, MiscActions, ModelActions,
    NoteActions, StatisticsActions,
};
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::request::{WireRequest, WireResponse};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with AnkiConnect.
///
/// Action names and parameter keys use this crate's underscore convention
/// everywhere; the client converts them to AnkiConnect's wire convention at
/// the request boundary.
///
/// # Example
///
/// ```no_run
/// use ankiconn::AnkiClient;
///
/// # async fn example() -> ankiconn::Result<()> {
/// let client = AnkiClient::new();
///
/// let version = client.misc().version().await?;
/// println!("AnkiConnect version: {}", version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access model (note type) operations.
    pub fn models(&self) -> ModelActions<'_> {
        ModelActions { client: self }
    }

    /// Access media operations.
    pub fn media(&self) -> MediaActions<'_> {
        MediaActions { client: self }
    }

    /// Access GUI operations.
    pub fn graphical(&self) -> GraphicalActions<'_> {
        GraphicalActions { client: self }
    }

    /// Access statistics operations.
    pub fn statistics(&self) -> StatisticsActions<'_> {
        StatisticsActions { client: self }
    }

    /// Access miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Execute an action by its underscore name and unwrap the response
    /// envelope into an [`Outcome`].
    ///
    /// This is the transport primitive every typed wrapper builds on, and
    /// the entry point for callers that dispatch actions by name. The action
    /// name and all keys in `params` are converted to wire form before the
    /// request is sent; transport and decoding problems surface as [`Error`],
    /// remote failures as [`Outcome::Failure`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ankiconn::{AnkiClient, Outcome};
    /// use serde_json::json;
    ///
    /// # async fn example() -> ankiconn::Result<()> {
    /// let client = AnkiClient::new();
    /// match client.call("create_deck", Some(json!({ "deck": "Japanese" }))).await? {
    ///     Outcome::Success(id) => println!("deck id: {}", id),
    ///     Outcome::Failure(reason) => eprintln!("failed: {}", reason),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call(&self, action: &str, params: Option<Value>) -> Result<Outcome> {
        let request = WireRequest::new(action, params, self.api_key.as_deref());
        let response = self
            .http_client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?;

        let envelope: WireResponse = response.json().await?;
        Ok(Outcome::from_envelope(envelope.result, envelope.error))
    }

    /// Execute an action with parameters, expecting a non-null result.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        match self.call(action, Some(serde_json::to_value(params)?)).await? {
            Outcome::Success(Value::Null) => Err(Error::EmptyResponse),
            Outcome::Success(value) => Ok(serde_json::from_value(value)?),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }

    /// Execute an action without parameters, expecting a non-null result.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        match self.call(action, None).await? {
            Outcome::Success(Value::Null) => Err(Error::EmptyResponse),
            Outcome::Success(value) => Ok(serde_json::from_value(value)?),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }

    /// Execute an action that returns null on success.
    pub(crate) async fn invoke_void<P>(&self, action: &str, params: P) -> Result<()>
    where
        P: Serialize,
    {
        match self.call(action, Some(serde_json::to_value(params)?)).await? {
            Outcome::Success(_) => Ok(()),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }

    /// Execute an action without parameters that returns null on success.
    pub(crate) async fn invoke_void_without_params(&self, action: &str) -> Result<()> {
        match self.call(action, None).await? {
            Outcome::Success(_) => Ok(()),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }

    /// Execute an action without parameters where null is a valid response.
    pub(crate) async fn invoke_nullable_without_params<R>(&self, action: &str) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        match self.call(action, None).await? {
            Outcome::Success(Value::Null) => Ok(None),
            Outcome::Success(value) => Ok(Some(serde_json::from_value(value)?)),
            Outcome::Failure(reason) => Err(Error::Remote(reason)),
        }
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankiconn::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authentication.
    ///
    /// Only required if AnkiConnect is configured to require an API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
