use serde_json::Value;

use crate::content::view::ResumeView;
use crate::models::resume::OwnerProfile;

pub const DEFAULT_PRIMARY_COLOR: &str = "#6366f1";
pub const DEFAULT_SECONDARY_COLOR: &str = "#6b7280";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Primary,
    Secondary,
}

impl ThemeColor {
    fn key(self) -> &'static str {
        match self {
            ThemeColor::Primary => "primaryColor",
            ThemeColor::Secondary => "secondaryColor",
        }
    }
}

/// Read-only view over a resume's schema-tolerant content bag.
///
/// Stored records use two shapes: fields at the top level (`summary`) and
/// fields nested under `content` (`content.summary`). Lookups try the top
/// level first and take the first populated value.
#[derive(Debug, Clone, Copy)]
pub struct ContentAccessor<'a> {
    content: &'a Value,
}

impl<'a> ContentAccessor<'a> {
    pub fn new(content: &'a Value) -> Self {
        Self { content }
    }

    pub fn raw(&self) -> &'a Value {
        self.content
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let direct = self.content.get(key).filter(|v| is_populated(v));
        direct.or_else(|| {
            self.content
                .get("content")
                .and_then(|nested| nested.get(key))
                .filter(|v| is_populated(v))
        })
    }

    pub fn get_or(&self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// String-ish value for `key`. Numbers are rendered as text.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// Array of strings for `key`, skipping non-scalar entries.
    pub fn get_str_list(&self, key: &str) -> Vec<String> {
        self.get(key).map(string_list).unwrap_or_default()
    }

    /// Theme colour lookup without the built-in default.
    pub fn theme_color(&self, which: ThemeColor) -> Option<String> {
        self.theme_value(which.key())
    }

    pub fn primary_color(&self) -> String {
        self.theme_color(ThemeColor::Primary)
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string())
    }

    pub fn secondary_color(&self) -> String {
        self.theme_color(ThemeColor::Secondary)
            .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string())
    }

    /// Same lookup as the theme colours, else Inter.
    pub fn font_family(&self) -> String {
        self.theme_value("fontFamily")
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string())
    }

    /// Typed view consumed by the layout renderer.
    pub fn view(&self, owner: Option<&OwnerProfile>) -> ResumeView {
        ResumeView::from_accessor(self, owner)
    }

    fn theme_value(&self, key: &str) -> Option<String> {
        let nested = ["template", "selectedTemplate"].iter().find_map(|parent| {
            self.content
                .get(*parent)
                .and_then(|p| p.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        });
        nested
            .or_else(|| {
                self.content
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
            .map(str::to_string)
    }
}

/// Not null, not `""`, not `false`, not an empty array or object.
pub fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_key_wins_over_nested() {
        let content = json!({ "summary": "top", "content": { "summary": "nested" } });
        let acc = ContentAccessor::new(&content);
        assert_eq!(acc.get_str("summary").as_deref(), Some("top"));
    }

    #[test]
    fn test_empty_direct_value_falls_through_to_nested() {
        let content = json!({ "summary": "", "experience": [], "content": {
            "summary": "nested",
            "experience": [{ "title": "Agent" }]
        }});
        let acc = ContentAccessor::new(&content);
        assert_eq!(acc.get_str("summary").as_deref(), Some("nested"));
        assert_eq!(acc.get("experience").and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn test_missing_intermediates_return_default() {
        let content = json!({ "content": null });
        let acc = ContentAccessor::new(&content);
        let fallback = json!([]);
        assert!(acc.get("skills").is_none());
        assert_eq!(acc.get_or("skills", &fallback), &fallback);

        let null = Value::Null;
        assert!(ContentAccessor::new(&null).get("anything").is_none());
    }

    #[test]
    fn test_false_and_empty_object_are_unpopulated() {
        let content = json!({ "flag": false, "obj": {}, "n": 0 });
        let acc = ContentAccessor::new(&content);
        assert!(acc.get("flag").is_none());
        assert!(acc.get("obj").is_none());
        assert_eq!(acc.get_str("n").as_deref(), Some("0"));
    }

    #[test]
    fn test_theme_color_precedence() {
        let content = json!({
            "primaryColor": "#333333",
            "selectedTemplate": { "primaryColor": "#222222" },
            "template": { "primaryColor": "#111111" }
        });
        assert_eq!(ContentAccessor::new(&content).primary_color(), "#111111");

        let content = json!({
            "primaryColor": "#333333",
            "selectedTemplate": { "primaryColor": "#222222" }
        });
        assert_eq!(ContentAccessor::new(&content).primary_color(), "#222222");

        let content = json!({ "secondaryColor": "#333333" });
        let acc = ContentAccessor::new(&content);
        assert_eq!(acc.secondary_color(), "#333333");
        assert_eq!(acc.primary_color(), DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_font_family_precedence() {
        let content = json!({
            "fontFamily": "Georgia, serif",
            "selectedTemplate": { "fontFamily": "Lato" }
        });
        assert_eq!(ContentAccessor::new(&content).font_family(), "Lato");

        let content = json!({ "fontFamily": "Georgia, serif" });
        assert_eq!(ContentAccessor::new(&content).font_family(), "Georgia, serif");
    }

    #[test]
    fn test_repeated_reads_agree() {
        let content = json!({
            "summary": "",
            "content": { "summary": "Nested", "skills": ["Excel"] }
        });
        let acc = ContentAccessor::new(&content);
        for key in ["summary", "skills", "missing"] {
            assert_eq!(acc.get(key), acc.get(key), "{key}");
        }
        assert_eq!(acc.get_str("summary"), Some("Nested".to_string()));
        assert_eq!(acc.view(None), acc.view(None));
        assert_eq!(content["summary"], "");
    }

    #[test]
    fn test_theme_defaults_without_content() {
        let acc_content = Value::Null;
        let acc = ContentAccessor::new(&acc_content);
        assert_eq!(acc.primary_color(), "#6366f1");
        assert_eq!(acc.secondary_color(), "#6b7280");
        assert_eq!(acc.font_family(), "Inter, sans-serif");
        assert!(acc.theme_color(ThemeColor::Primary).is_none());
    }

    #[test]
    fn test_string_list_skips_objects() {
        let content = json!({ "certifications": ["AWS", { "x": 1 }, 2024] });
        let acc = ContentAccessor::new(&content);
        assert_eq!(acc.get_str_list("certifications"), vec!["AWS", "2024"]);
    }
}
