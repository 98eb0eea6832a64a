//! Two-column layout: coloured sidebar with contact, skills and education;
//! main column with header, summary and experience.

use crate::content::template::TemplateKind;
use crate::content::view::ResumeView;
use crate::layout::components::{
    background, bullet_list, el, header_section, icon, or_empty, photo, text, Icon,
};
use crate::layout::tree::Element;

pub const SIDEBAR_WIDTH: &str = "75mm";
pub const MAX_TECHNICAL_SKILLS: usize = 6;
pub const MAX_SOFT_SKILLS: usize = 4;

pub fn render(view: &ResumeView) -> Element {
    el("div", "flex")
        .css("min-height", "297mm")
        .child(sidebar(view))
        .child(main_column(view))
}

fn sidebar(view: &ResumeView) -> Element {
    let panel = el("div", "text-white")
        .css("width", SIDEBAR_WIDTH)
        .css("padding", "24px");
    let panel = background(panel, &view.theme.header_background(TemplateKind::Modern));

    panel
        .child(photo_frame(view))
        .child(contact(view))
        .maybe_child(skills(view))
        .maybe_child(education(view))
}

fn photo_frame(view: &ResumeView) -> Element {
    let frame = el("div", "rounded-full overflow-hidden flex items-center justify-center")
        .css("width", "128px")
        .css("height", "128px")
        .css("margin", "0 auto 24px auto")
        .css("border", "4px solid rgba(255, 255, 255, 0.4)")
        .css("background-color", "rgba(255, 255, 255, 0.2)");

    match &view.profile_photo {
        Some(src) => frame.child(photo(src, "w-full").css("height", "100%")),
        None => frame.child(icon(Icon::User, 56).css("color", "rgba(255, 255, 255, 0.6)")),
    }
}

fn sidebar_heading(label: &str) -> Element {
    text("h3", "text-xs font-bold uppercase tracking-wider", label)
        .css("border-bottom", "1px solid rgba(255, 255, 255, 0.3)")
        .css("padding-bottom", "4px")
        .css("margin-bottom", "8px")
}

fn contact_row(kind: Icon, value: &str) -> Element {
    el("div", "flex items-center gap-2")
        .css("margin-bottom", "8px")
        .child(icon(kind, 14).css("opacity", "0.7"))
        .child(text("span", "text-xs", value))
}

fn contact(view: &ResumeView) -> Element {
    let email = view.header.email.as_deref().unwrap_or("email@example.com");
    el("div", "")
        .css("margin-bottom", "24px")
        .child(sidebar_heading("Contact"))
        .child(contact_row(Icon::Mail, email))
        .maybe_child(view.header.phone.as_deref().map(|p| contact_row(Icon::Phone, p)))
        .maybe_child(view.header.location.as_deref().map(|l| contact_row(Icon::MapPin, l)))
}

fn skill_dot(label: &str, dot_alpha: &str) -> Element {
    el("div", "text-xs flex items-center gap-2")
        .css("margin-bottom", "4px")
        .child(
            el("div", "rounded-full")
                .css("width", "6px")
                .css("height", "6px")
                .css("background-color", format!("rgba(255, 255, 255, {dot_alpha})")),
        )
        .text(label)
}

fn skills(view: &ResumeView) -> Option<Element> {
    let skills = view.skills.as_ref()?;
    if skills.technical().is_empty() && skills.soft().is_empty() {
        return None;
    }

    let mut block = el("div", "")
        .css("margin-bottom", "24px")
        .child(sidebar_heading("Skills"));

    if !skills.technical().is_empty() {
        block = block.child(el("div", "").children(
            skills
                .technical()
                .iter()
                .take(MAX_TECHNICAL_SKILLS)
                .map(|s| skill_dot(s, "0.6")),
        ));
    }
    if !skills.soft().is_empty() {
        block = block.child(
            el("div", "")
                .css("margin-top", "12px")
                .child(
                    text("p", "uppercase tracking-wide", "Soft Skills")
                        .css("font-size", "10px")
                        .css("opacity", "0.6"),
                )
                .children(
                    skills
                        .soft()
                        .iter()
                        .take(MAX_SOFT_SKILLS)
                        .map(|s| skill_dot(s, "0.4")),
                ),
        );
    }
    Some(block)
}

fn education(view: &ResumeView) -> Option<Element> {
    if view.education.is_empty() {
        return None;
    }
    let block = el("div", "")
        .child(sidebar_heading("Education"))
        .children(view.education.iter().map(|edu| {
            el("div", "text-xs")
                .css("margin-bottom", "8px")
                .child(text("p", "font-medium", or_empty(&edu.degree)))
                .child(text("p", "", or_empty(&edu.institution)).css("opacity", "0.7"))
                .child(text("p", "", or_empty(&edu.year)).css("opacity", "0.5"))
        }));
    Some(block)
}

fn main_column(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    let header = header_section(
        el("div", "")
            .css("margin-bottom", "24px")
            .child(text(
                "h1",
                "text-3xl font-bold text-gray-900",
                view.header.name.as_deref().unwrap_or("Your Name"),
            ))
            .child(
                text(
                    "p",
                    "text-lg",
                    view.header.title.as_deref().unwrap_or("Professional Title"),
                )
                .css("margin-top", "4px")
                .css("color", primary),
            ),
    );

    el("div", "flex-1")
        .css("padding", "32px")
        .child(header)
        .maybe_child(view.summary.as_deref().map(|summary| {
            el("div", "")
                .css("margin-bottom", "24px")
                .child(section_heading("Professional Summary", primary))
                .child(text("p", "text-sm text-gray-700 leading-relaxed", summary))
        }))
        .maybe_child((!view.experience.is_empty()).then(|| experience(view)))
}

fn section_heading(label: &str, primary: &str) -> Element {
    text("h2", "text-sm font-bold uppercase tracking-wider border-b-2", label)
        .css("color", primary)
        .css("border-color", primary)
        .css("padding-bottom", "4px")
        .css("margin-bottom", "8px")
}

fn experience(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    el("div", "")
        .child(section_heading("Work Experience", primary).css("break-inside", "avoid"))
        .children(view.experience.iter().map(|exp| {
            el("div", "")
                .css("margin-bottom", "16px")
                .child(
                    el("div", "flex justify-between items-baseline")
                        .child(text("h3", "font-semibold text-gray-900", or_empty(&exp.title)))
                        .child(text("span", "text-xs text-gray-500", or_empty(&exp.duration))),
                )
                .child(text("p", "text-sm", or_empty(&exp.company)).css("color", primary))
                .maybe_child((!exp.achievements.is_empty()).then(|| {
                    bullet_list("text-sm text-gray-600 list-disc", &exp.achievements)
                        .css("margin-top", "4px")
                }))
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentAccessor;
    use serde_json::json;

    fn render_content(content: serde_json::Value) -> Element {
        render(&ContentAccessor::new(&content).view(None))
    }

    #[test]
    fn test_sidebar_caps_skills() {
        let tree = render_content(json!({
            "skills": {
                "technical": ["tech-1", "tech-2", "tech-3", "tech-4", "tech-5", "tech-6", "tech-7"],
                "soft": ["soft-1", "soft-2", "soft-3", "soft-4", "soft-5"]
            }
        }));
        let text = tree.text_content();
        assert!(text.contains("tech-6"));
        assert!(!text.contains("tech-7"));
        assert!(text.contains("soft-4"));
        assert!(!text.contains("soft-5"));
    }

    #[test]
    fn test_sidebar_uses_gradient_background() {
        let tree = render_content(json!({ "primaryColor": "#123456", "secondaryColor": "#654321" }));
        let sidebar = tree.at(&[0]).unwrap();
        assert_eq!(sidebar.style.get("width"), Some("75mm"));
        assert_eq!(
            sidebar.style.get("background-image"),
            Some("linear-gradient(135deg, #123456, #654321)")
        );
    }

    fn headings(tree: &Element) -> Vec<String> {
        tree.element_paths()
            .iter()
            .filter_map(|p| tree.at(p))
            .filter(|e| matches!(e.tag.as_str(), "h2" | "h3"))
            .map(Element::text_content)
            .collect()
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let tree = render_content(json!({ "name": "Jane" }));
        let text = tree.text_content();
        assert!(text.contains("Jane"));
        assert!(!text.contains("Professional Summary"));
        assert!(!text.contains("Work Experience"));

        let headings = headings(&tree);
        assert_eq!(headings, vec!["Contact".to_string()]);
    }

    #[test]
    fn test_skills_block_needs_technical_or_soft_entries() {
        for skills in [
            json!({ "technical": [], "soft": [] }),
            json!({ "languages": ["Tagalog"] }),
            json!(["Excel"]),
            json!([{ "name": "Excel" }]),
        ] {
            let tree = render_content(json!({ "skills": skills }));
            assert!(!headings(&tree).contains(&"Skills".to_string()), "{skills}");
        }

        let tree = render_content(json!({ "skills": { "soft": ["Empathy"] } }));
        assert!(headings(&tree).contains(&"Skills".to_string()));
    }

    #[test]
    fn test_education_heading_only_with_entries() {
        let tree = render_content(json!({ "education": [{ "degree": "BSIT" }] }));
        assert!(headings(&tree).contains(&"Education".to_string()));
        assert!(tree.text_content().contains("BSIT"));
    }

    #[test]
    fn test_placeholder_icon_without_photo() {
        let tree = render_content(json!({}));
        assert_eq!(tree.count(|e| e.tag == "img"), 0);
        assert!(tree.count(|e| e.tag == "svg") >= 1);

        let tree = render_content(json!({ "profilePhoto": "https://cdn.example.com/p.png" }));
        assert_eq!(tree.count(|e| e.tag == "img"), 1);
    }

    #[test]
    fn test_all_achievements_rendered() {
        let tree = render_content(json!({ "experience": [
            { "title": "Lead", "achievements": ["1", "2", "3", "4", "5", "6"] }
        ]}));
        assert_eq!(tree.count(|e| e.tag == "li"), 6);
    }
}
