//! Miscellaneous AnkiConnect actions: version checks, syncing, profiles,
//! packages, and batched calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::casing;
use crate::client::AnkiClient;
use crate::error::Result;
use crate::outcome::Outcome;

/// Provides access to miscellaneous AnkiConnect operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// A single action for [`MiscActions::multi()`].
///
/// Carries an underscore action name; the wrapper converts it to wire form
/// when the batch is built.
#[derive(Debug, Clone)]
pub struct MiscAction {
    /// The underscore-form action name.
    pub action: String,
    /// Optional parameters, keys in underscore form.
    pub params: Option<Value>,
}

impl MiscAction {
    /// Create a new action without parameters.
    pub fn new(action: impl Into<String>) -> Self {
        Self { action: action.into(), params: None }
    }

    /// Create a new action with parameters.
    pub fn with_params(action: impl Into<String>, params: Value) -> Self {
        Self { action: action.into(), params: Some(params) }
    }
}

/// Result of requesting permission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResult {
    /// The permission status, `"granted"` or `"denied"`.
    pub permission: String,
    /// Whether an API key is required.
    #[serde(default)]
    pub require_api_key: bool,
    /// API version, present when granted.
    #[serde(default)]
    pub version: Option<u8>,
}

#[derive(Serialize)]
struct NameParams<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PathParams<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct ApiReflectParams<'a> {
    scopes: &'a [&'a str],
    actions: Option<&'a [&'a str]>,
}

#[derive(Serialize)]
struct ExportPackageParams<'a> {
    deck: &'a str,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_sched_data: Option<bool>,
}

#[derive(Serialize)]
struct WireBatchEntry {
    action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

#[derive(Serialize)]
struct MultiParams {
    actions: Vec<WireBatchEntry>,
}

impl<'a> MiscActions<'a> {
    /// Get the AnkiConnect API version.
    ///
    /// Useful for verifying that AnkiConnect is running and accessible.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ankiconn::AnkiClient;
    ///
    /// # async fn example() -> ankiconn::Result<()> {
    /// let client = AnkiClient::new();
    /// let version = client.misc().version().await?;
    /// assert_eq!(version, 6);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<u8> {
        self.client.invoke_without_params("version").await
    }

    /// Request permission to use AnkiConnect.
    ///
    /// Shows a dialog in Anki asking the user to grant access.
    pub async fn request_permission(&self) -> Result<PermissionResult> {
        self.client.invoke_without_params("request_permission").await
    }

    /// List the API's scopes and, optionally, its actions.
    pub async fn api_reflect(&self, scopes: &[&str], actions: Option<&[&str]>) -> Result<Value> {
        self.client.invoke("api_reflect", ApiReflectParams { scopes, actions }).await
    }

    /// Trigger a sync with AnkiWeb.
    pub async fn sync(&self) -> Result<()> {
        self.client.invoke_void_without_params("sync").await
    }

    /// List the available profiles.
    pub async fn profiles(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("get_profiles").await
    }

    /// Name of the currently loaded profile.
    pub async fn active_profile(&self) -> Result<String> {
        self.client.invoke_without_params("get_active_profile").await
    }

    /// Switch to another profile. Returns true on success.
    pub async fn load_profile(&self, name: &str) -> Result<bool> {
        self.client.invoke("load_profile", NameParams { name }).await
    }

    /// Perform several actions in one request.
    ///
    /// Returns one outcome per action, in order. Action names are given in
    /// underscore form and converted to the wire form here, since they
    /// travel as values rather than keys.
    pub async fn multi(&self, actions: &[MiscAction]) -> Result<Vec<Outcome>> {
        let entries = actions
            .iter()
            .map(|entry| WireBatchEntry {
                action: casing::encode_key(&entry.action),
                params: entry.params.clone(),
            })
            .collect();
        let envelopes: Vec<Value> = self.client.invoke("multi", MultiParams { actions: entries }).await?;
        Ok(envelopes
            .into_iter()
            .map(|envelope| match envelope {
                Value::Object(mut fields) => {
                    Outcome::from_envelope(fields.remove("result"), fields.remove("error"))
                }
                // Older AnkiConnect versions return bare results here.
                bare => Outcome::Success(bare),
            })
            .collect())
    }

    /// Export a deck to an `.apkg` file. Returns true on success.
    pub async fn export_package(
        &self,
        deck: &str,
        path: &str,
        include_sched_data: Option<bool>,
    ) -> Result<bool> {
        self.client
            .invoke("export_package", ExportPackageParams { deck, path, include_sched_data })
            .await
    }

    /// Import an `.apkg` file into the collection. Returns true on success.
    pub async fn import_package(&self, path: &str) -> Result<bool> {
        self.client.invoke("import_package", PathParams { path }).await
    }

    /// Reload the collection from disk.
    pub async fn reload_collection(&self) -> Result<()> {
        self.client.invoke_void_without_params("reload_collection").await
    }
}
