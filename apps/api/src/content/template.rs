use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::resume::ResumeDocument;

/// Layout variant a resume is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Modern,
    Executive,
    Creative,
    Minimal,
    /// Any selector that is present but not one of the four named layouts.
    Fallback,
}

impl TemplateKind {
    /// Parses a template selector. Anything unrecognized maps to `Fallback`.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "modern" => TemplateKind::Modern,
            "executive" => TemplateKind::Executive,
            "creative" => TemplateKind::Creative,
            "minimal" => TemplateKind::Minimal,
            _ => TemplateKind::Fallback,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Executive => "executive",
            TemplateKind::Creative => "creative",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Fallback => "fallback",
        }
    }
}

/// Picks the layout for a record.
///
/// Precedence: the record's `template` field, then `content.selectedTemplate`
/// (a string, or an object carrying `id`), then `content.template.id`.
/// With no selector anywhere the result is `Modern`. Never fails.
pub fn resolve_template(doc: &ResumeDocument) -> TemplateKind {
    let from_record = doc.template.as_deref().and_then(non_empty);

    let from_selected = doc.content.get("selectedTemplate").and_then(|v| match v {
        Value::String(s) => non_empty(s),
        // An object selector without a usable id is still a selector.
        Value::Object(map) => Some(
            map.get("id")
                .and_then(Value::as_str)
                .and_then(non_empty)
                .unwrap_or(""),
        ),
        _ => None,
    });

    let from_template_id = doc
        .content
        .get("template")
        .and_then(|t| t.get("id"))
        .and_then(Value::as_str)
        .and_then(non_empty);

    match from_record.or(from_selected).or(from_template_id) {
        Some(selector) => TemplateKind::from_selector(selector),
        None => TemplateKind::Modern,
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(template: Option<&str>, content: Value) -> ResumeDocument {
        serde_json::from_value(json!({
            "slug": "s",
            "template": template,
            "content": content,
        }))
        .unwrap()
    }

    #[test]
    fn test_record_template_wins() {
        let d = doc(
            Some("executive"),
            json!({ "selectedTemplate": "creative", "template": { "id": "minimal" } }),
        );
        assert_eq!(resolve_template(&d), TemplateKind::Executive);
    }

    #[test]
    fn test_selected_template_then_template_id() {
        let d = doc(None, json!({ "selectedTemplate": "creative", "template": { "id": "minimal" } }));
        assert_eq!(resolve_template(&d), TemplateKind::Creative);

        let d = doc(None, json!({ "template": { "id": "minimal" } }));
        assert_eq!(resolve_template(&d), TemplateKind::Minimal);
    }

    #[test]
    fn test_selected_template_object_uses_id() {
        let d = doc(None, json!({ "selectedTemplate": { "id": "executive", "primaryColor": "#000" } }));
        assert_eq!(resolve_template(&d), TemplateKind::Executive);

        let d = doc(None, json!({ "selectedTemplate": { "primaryColor": "#000" } }));
        assert_eq!(resolve_template(&d), TemplateKind::Fallback);
    }

    #[test]
    fn test_defaults_to_modern() {
        assert_eq!(resolve_template(&doc(None, Value::Null)), TemplateKind::Modern);
        assert_eq!(resolve_template(&doc(Some(""), json!({}))), TemplateKind::Modern);
    }

    #[test]
    fn test_unknown_selector_is_fallback() {
        let d = doc(Some("ats-classic"), json!({}));
        assert_eq!(resolve_template(&d), TemplateKind::Fallback);
    }

    #[test]
    fn test_selector_parsing_is_case_insensitive() {
        assert_eq!(TemplateKind::from_selector(" Modern "), TemplateKind::Modern);
        assert_eq!(TemplateKind::from_selector("MINIMAL"), TemplateKind::Minimal);
    }
}
