// Resume layout rendering.
// Templates build a print-layout tree (`tree::Element`); `html` serializes it.
// Rendering is pure: the same view and template always produce the same tree.

pub mod components;
pub mod creative;
pub mod executive;
pub mod fallback;
pub mod html;
pub mod minimal;
pub mod modern;
pub mod stylesheet;
pub mod tree;

pub use html::{preview_document, to_html};
pub use tree::{Element, Node, Style};

use crate::content::template::TemplateKind;
use crate::content::view::ResumeView;

/// Renders the resume body for `kind` inside the `#resume-content` root.
pub fn render_resume(kind: TemplateKind, view: &ResumeView) -> Element {
    let body = match kind {
        TemplateKind::Modern => modern::render(view),
        TemplateKind::Executive => executive::render(view),
        TemplateKind::Creative => creative::render(view),
        TemplateKind::Minimal => minimal::render(view),
        TemplateKind::Fallback => fallback::render(view),
    };
    components::resume_root(view).child(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentAccessor;
    use serde_json::json;

    const ALL: [TemplateKind; 5] = [
        TemplateKind::Modern,
        TemplateKind::Executive,
        TemplateKind::Creative,
        TemplateKind::Minimal,
        TemplateKind::Fallback,
    ];

    #[test]
    fn test_root_carries_page_geometry_and_font() {
        let content = json!({ "template": { "fontFamily": "Georgia, serif" } });
        let view = ContentAccessor::new(&content).view(None);
        for kind in ALL {
            let root = render_resume(kind, &view);
            assert_eq!(root.get_attr("id"), Some("resume-content"));
            assert_eq!(root.style.get("width"), Some("210mm"));
            assert_eq!(root.style.get("min-height"), Some("297mm"));
            assert_eq!(root.style.get("font-family"), Some("Georgia, serif"));
            assert_eq!(root.style.get("color"), Some("#1f2937"));
        }
    }

    #[test]
    fn test_every_layout_marks_a_header() {
        let content = json!({ "name": "Jane" });
        let view = ContentAccessor::new(&content).view(None);
        for kind in ALL {
            let root = render_resume(kind, &view);
            assert_eq!(
                root.count(|e| e.get_attr("data-section") == Some("header")),
                1,
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let content = json!({
            "name": "Jane Cruz",
            "summary": "Support lead",
            "experience": [{ "title": "Lead", "company": "Acme", "achievements": ["a", "b"] }],
            "skills": { "technical": ["SQL"], "soft": ["Coaching"] }
        });
        let view = ContentAccessor::new(&content).view(None);
        for kind in ALL {
            assert_eq!(
                to_html(&render_resume(kind, &view)),
                to_html(&render_resume(kind, &view))
            );
        }
    }

    #[test]
    fn test_missing_content_renders_without_failing() {
        let view = ContentAccessor::new(&serde_json::Value::Null).view(None);
        for kind in ALL {
            let html = to_html(&render_resume(kind, &view));
            assert!(html.starts_with("<div id=\"resume-content\""));
        }
    }
}
