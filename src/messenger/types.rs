use serde::{Deserialize, Serialize};

/// Template attachment: `{"type": "template", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: TemplatePayload,
}

impl Template {
    pub fn new(payload: TemplatePayload) -> Self {
        Self {
            kind: "template",
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePayload {
    pub template_type: TemplateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_element_style: Option<ElementStyle>,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    /// Vertical list, one row per element.
    List,
    /// Horizontal carousel of cards.
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStyle {
    Large,
    Compact,
}

/// A single card or list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub title: String,
    pub image_url: String,
    pub subtitle: String,
    pub buttons: Vec<Button>,
}

/// Card button, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    Postback { title: String, payload: String },
    WebUrl { url: String, title: String },
    ElementShare,
}

/// Stand-alone button sent next to a template rather than inside one.
///
/// Serialized with `title` first, which is the order existing clients see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickButton {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: String,
}
