//! Model (note type) related AnkiConnect actions.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CardTemplate, ModelDefinition, ModelFindReplace, ModelStyling, ModelTemplates};

/// Provides access to model-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct ModelNameParams<'a> {
    model_name: &'a str,
}

#[derive(Serialize)]
struct ModelIdsParams<'a> {
    model_ids: &'a [i64],
}

#[derive(Serialize)]
struct ModelNamesParams<'a> {
    model_names: &'a [&'a str],
}

#[derive(Serialize)]
struct UpdateTemplatesModel<'a> {
    name: &'a str,
    templates: &'a ModelTemplates,
}

#[derive(Serialize)]
struct UpdateTemplatesParams<'a> {
    model: UpdateTemplatesModel<'a>,
}

#[derive(Serialize)]
struct UpdateStylingModel<'a> {
    name: &'a str,
    css: &'a str,
}

#[derive(Serialize)]
struct UpdateStylingParams<'a> {
    model: UpdateStylingModel<'a>,
}

#[derive(Serialize)]
struct FindReplaceParams<'a> {
    model: &'a ModelFindReplace,
}

#[derive(Serialize)]
struct TemplateRenameParams<'a> {
    model_name: &'a str,
    old_template_name: &'a str,
    new_template_name: &'a str,
}

#[derive(Serialize)]
struct TemplateAddParams<'a> {
    model_name: &'a str,
    template: &'a CardTemplate,
}

#[derive(Serialize)]
struct TemplateRemoveParams<'a> {
    model_name: &'a str,
    template_name: &'a str,
}

#[derive(Serialize)]
struct FieldRenameParams<'a> {
    model_name: &'a str,
    old_field_name: &'a str,
    new_field_name: &'a str,
}

#[derive(Serialize)]
struct FieldAddParams<'a> {
    model_name: &'a str,
    field_name: &'a str,
    index: usize,
}

#[derive(Serialize)]
struct FieldRemoveParams<'a> {
    model_name: &'a str,
    field_name: &'a str,
}

#[derive(Serialize)]
struct FieldSetFontParams<'a> {
    model_name: &'a str,
    field_name: &'a str,
    font: &'a str,
}

impl<'a> ModelActions<'a> {
    /// Get all model names.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("model_names").await
    }

    /// Get all model names with their IDs.
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_without_params("model_names_and_ids").await
    }

    /// Look up full model definitions by ID.
    pub async fn by_id(&self, model_ids: &[i64]) -> Result<Vec<Value>> {
        self.client.invoke("find_models_by_id", ModelIdsParams { model_ids }).await
    }

    /// Look up full model definitions by name.
    pub async fn by_name(&self, model_names: &[&str]) -> Result<Vec<Value>> {
        self.client
            .invoke("find_models_by_name", ModelNamesParams { model_names })
            .await
    }

    /// Get a model's field names, in order.
    pub async fn field_names(&self, model: &str) -> Result<Vec<String>> {
        self.client
            .invoke("model_field_names", ModelNameParams { model_name: model })
            .await
    }

    /// Get a model's field descriptions, in field order.
    pub async fn field_descriptions(&self, model: &str) -> Result<Vec<String>> {
        self.client
            .invoke("model_field_descriptions", ModelNameParams { model_name: model })
            .await
    }

    /// Get the fields used on each side of each template of a model.
    pub async fn fields_on_templates(&self, model: &str) -> Result<HashMap<String, Vec<Vec<String>>>> {
        self.client
            .invoke("model_fields_on_templates", ModelNameParams { model_name: model })
            .await
    }

    /// Create a new model and return its definition.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankiconn::{AnkiClient, CardTemplate, ModelDefinition};
    /// # async fn example() -> ankiconn::Result<()> {
    /// let client = AnkiClient::new();
    /// let model = ModelDefinition {
    ///     model_name: "Vocabulary".into(),
    ///     in_order_fields: vec!["Word".into(), "Meaning".into()],
    ///     css: None,
    ///     is_cloze: Some(false),
    ///     card_templates: vec![CardTemplate {
    ///         name: None,
    ///         front: "{{Word}}".into(),
    ///         back: "{{Meaning}}".into(),
    ///     }],
    /// };
    /// client.models().create(&model).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, model: &ModelDefinition) -> Result<Value> {
        self.client.invoke("create_model", model).await
    }

    /// Get a model's templates, keyed by template name.
    pub async fn templates(&self, model: &str) -> Result<ModelTemplates> {
        self.client
            .invoke("model_templates", ModelNameParams { model_name: model })
            .await
    }

    /// Get a model's styling.
    pub async fn styling(&self, model: &str) -> Result<ModelStyling> {
        self.client
            .invoke("model_styling", ModelNameParams { model_name: model })
            .await
    }

    /// Update (some of) a model's templates.
    pub async fn update_templates(&self, model: &str, templates: &ModelTemplates) -> Result<()> {
        self.client
            .invoke_void(
                "update_model_templates",
                UpdateTemplatesParams { model: UpdateTemplatesModel { name: model, templates } },
            )
            .await
    }

    /// Replace a model's styling.
    pub async fn update_styling(&self, model: &str, css: &str) -> Result<()> {
        self.client
            .invoke_void(
                "update_model_styling",
                UpdateStylingParams { model: UpdateStylingModel { name: model, css } },
            )
            .await
    }

    /// Find and replace text across a model's templates and styling.
    /// Returns the number of replacements.
    pub async fn find_and_replace(&self, op: &ModelFindReplace) -> Result<i64> {
        self.client
            .invoke("find_and_replace_in_models", FindReplaceParams { model: op })
            .await
    }

    /// Rename a template.
    pub async fn template_rename(&self, model: &str, old: &str, new: &str) -> Result<()> {
        self.client
            .invoke_void(
                "model_template_rename",
                TemplateRenameParams {
                    model_name: model,
                    old_template_name: old,
                    new_template_name: new,
                },
            )
            .await
    }

    /// Add a template to a model.
    pub async fn template_add(&self, model: &str, template: &CardTemplate) -> Result<()> {
        self.client
            .invoke_void("model_template_add", TemplateAddParams { model_name: model, template })
            .await
    }

    /// Remove a template from a model.
    pub async fn template_remove(&self, model: &str, template_name: &str) -> Result<()> {
        self.client
            .invoke_void(
                "model_template_remove",
                TemplateRemoveParams { model_name: model, template_name },
            )
            .await
    }

    /// Rename a field.
    pub async fn field_rename(&self, model: &str, old: &str, new: &str) -> Result<()> {
        self.client
            .invoke_void(
                "model_field_rename",
                FieldRenameParams { model_name: model, old_field_name: old, new_field_name: new },
            )
            .await
    }

    /// Add a field to a model at the given position.
    pub async fn field_add(&self, model: &str, field: &str, index: usize) -> Result<()> {
        self.client
            .invoke_void(
                "model_field_add",
                FieldAddParams { model_name: model, field_name: field, index },
            )
            .await
    }

    /// Remove a field from a model.
    pub async fn field_remove(&self, model: &str, field: &str) -> Result<()> {
        self.client
            .invoke_void(
                "model_field_remove",
                FieldRemoveParams { model_name: model, field_name: field },
            )
            .await
    }

    /// Set the editor font for a field.
    pub async fn field_set_font(&self, model: &str, field: &str, font: &str) -> Result<()> {
        self.client
            .invoke_void(
                "model_field_set_font",
                FieldSetFontParams { model_name: model, field_name: field, font },
            )
            .await
    }
}
