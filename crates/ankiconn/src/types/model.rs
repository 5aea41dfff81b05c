//! Model (note type) related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Definition of a new note type for `create_model`.
///
/// # Example
///
/// ```
/// use ankiconn::{CardTemplate, ModelDefinition};
///
/// let model = ModelDefinition {
///     model_name: "Vocabulary".into(),
///     in_order_fields: vec!["Word".into(), "Meaning".into()],
///     css: None,
///     is_cloze: Some(false),
///     card_templates: vec![CardTemplate {
///         name: Some("Recognition".into()),
///         front: "{{Word}}".into(),
///         back: "{{Meaning}}".into(),
///     }],
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ModelDefinition {
    /// Name of the new note type.
    pub model_name: String,
    /// Field names, in display order.
    pub in_order_fields: Vec<String>,
    /// Shared CSS for all card templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    /// Whether this is a cloze model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cloze: Option<bool>,
    /// The card templates.
    pub card_templates: Vec<CardTemplate>,
}

/// A single card template in a model definition.
///
/// The wire keys are capitalized single words and pass through the casing
/// seam untouched.
#[derive(Debug, Clone, Serialize)]
pub struct CardTemplate {
    /// Template name; AnkiConnect numbers unnamed templates.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Front side template.
    #[serde(rename = "Front")]
    pub front: String,
    /// Back side template.
    #[serde(rename = "Back")]
    pub back: String,
}

/// Front and back sides of an existing template, as returned by
/// `model_templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSides {
    /// Front side template.
    #[serde(rename = "Front")]
    pub front: String,
    /// Back side template.
    #[serde(rename = "Back")]
    pub back: String,
}

/// Styling of a note type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStyling {
    /// The model CSS.
    pub css: String,
}

/// A find-and-replace operation over a model's templates and styling, for
/// `find_and_replace_in_models`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelFindReplace {
    /// The model to operate on.
    pub model_name: String,
    /// Text to find.
    pub field_text: String,
    /// Replacement text.
    pub replace_text: String,
    /// Search front templates.
    pub front: bool,
    /// Search back templates.
    pub back: bool,
    /// Search the styling.
    pub css: bool,
}

/// Response shape of `model_templates`: template name to its sides.
pub type ModelTemplates = HashMap<String, TemplateSides>;
