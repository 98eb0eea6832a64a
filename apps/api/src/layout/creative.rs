//! Portfolio layout: gradient hero with a diagonal cut, skill pills and
//! card-style experience.

use crate::content::template::TemplateKind;
use crate::content::view::ResumeView;
use crate::layout::components::{background, el, header_section, icon, or_empty, photo, text, Icon};
use crate::layout::tree::Element;

pub const MAX_BULLETS: usize = 2;
pub const HERO_CLIP_PATH: &str = "polygon(0 100%, 100% 100%, 100% 0)";

pub fn render(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    let skills_block = view
        .skills
        .as_ref()
        .filter(|s| !s.technical_and_soft().is_empty())
        .map(|s| {
            let filled = s.technical().iter().map(|skill| {
                pill(skill)
                    .class("text-white")
                    .css("background-color", primary)
            });
            let outlined = s.soft().iter().map(|skill| {
                pill(skill)
                    .css("border", format!("2px solid {primary}"))
                    .css("color", primary)
            });
            el("div", "")
                .css("margin-bottom", "24px")
                .child(heading("Skills & Expertise", primary))
                .child(el("div", "flex flex-wrap gap-2").children(filled.chain(outlined)))
        });

    let body = el("div", "relative")
        .css("padding", "32px")
        .css("margin-top", "-64px")
        .maybe_child(view.summary.as_deref().map(|summary| {
            el("div", "bg-white rounded-2xl shadow-xl border-l-4")
                .css("padding", "24px")
                .css("margin-bottom", "24px")
                .css("border-color", primary)
                .child(heading("About Me", primary).css("margin-bottom", "8px"))
                .child(text("p", "text-gray-700", summary))
        }))
        .maybe_child(skills_block)
        .maybe_child((!view.experience.is_empty()).then(|| experience(view)))
        .maybe_child((!view.education.is_empty()).then(|| education(view)));

    el("div", "").child(hero(view)).child(body)
}

fn heading(label: &str, primary: &str) -> Element {
    text("h2", "text-lg font-bold", label)
        .css("color", primary)
        .css("margin-bottom", "12px")
}

fn pill(label: &str) -> Element {
    text("span", "rounded-full text-sm font-medium", label).css("padding", "8px 16px")
}

fn hero(view: &ResumeView) -> Element {
    let frame = el("div", "rounded-2xl overflow-hidden shadow-2xl")
        .css("width", "176px")
        .css("height", "176px")
        .css("border", "4px solid rgba(255, 255, 255, 0.4)")
        .css("background-color", "rgba(255, 255, 255, 0.2)");
    let frame = match &view.profile_photo {
        Some(src) => frame.child(photo(src, "w-full").css("height", "100%")),
        None => frame.child(
            el("div", "w-full flex items-center justify-center")
                .css("height", "100%")
                .child(icon(Icon::User, 80).css("color", "rgba(255, 255, 255, 0.6)")),
        ),
    };

    let contact_pill = |kind: Icon, value: &str| {
        el("div", "flex items-center gap-2 rounded-full")
            .css("background-color", "rgba(255, 255, 255, 0.2)")
            .css("padding", "8px 16px")
            .child(icon(kind, 16))
            .child(text("span", "text-sm", value))
    };
    let contacts = el("div", "flex gap-4")
        .css("margin-top", "24px")
        .child(contact_pill(Icon::Mail, or_empty(&view.header.email)))
        .maybe_child(view.header.phone.as_deref().map(|p| contact_pill(Icon::Phone, p)))
        .maybe_child(view.header.location.as_deref().map(|l| contact_pill(Icon::MapPin, l)));

    let identity = el("div", "text-white flex-1")
        .child(text(
            "h1",
            "text-5xl font-black tracking-tight",
            view.header.name.as_deref().unwrap_or("YOUR NAME"),
        ))
        .child(
            text(
                "p",
                "text-2xl font-light",
                view.header.title.as_deref().unwrap_or("Creative Professional"),
            )
            .css("margin-top", "8px")
            .css("opacity", "0.9"),
        )
        .child(contacts);

    let banner = el("div", "relative overflow-hidden")
        .css("height", "140mm");
    let banner = background(banner, &view.theme.header_background(TemplateKind::Creative));

    header_section(
        banner
            .child(
                el("div", "bg-white")
                    .css("position", "absolute")
                    .css("bottom", "0")
                    .css("left", "0")
                    .css("right", "0")
                    .css("height", "128px")
                    .css("clip-path", HERO_CLIP_PATH),
            )
            .child(
                el("div", "relative flex items-center gap-8")
                    .css("padding", "32px")
                    .css("height", "100%")
                    .child(frame)
                    .child(identity),
            ),
    )
}

fn experience(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    let cards = view.experience.iter().map(|exp| {
        let bullets = exp.achievements.iter().take(MAX_BULLETS).map(|a| {
            el("li", "flex items-start gap-2")
                .child(text("span", "", "\u{25b8}").css("color", primary))
                .text(a.as_str())
        });
        el("div", "bg-gray-50 rounded-xl")
            .css("padding", "16px")
            .child(
                el("div", "flex justify-between items-start")
                    .css("margin-bottom", "4px")
                    .child(text("h3", "font-bold text-gray-900", or_empty(&exp.title)))
                    .child(
                        text("span", "text-xs rounded-full bg-white text-gray-500", or_empty(&exp.duration))
                            .css("padding", "4px 8px"),
                    ),
            )
            .child(text("p", "text-sm font-medium", or_empty(&exp.company)).css("color", primary))
            .maybe_child(
                (!exp.achievements.is_empty())
                    .then(|| el("ul", "text-sm text-gray-600").css("margin-top", "8px").children(bullets)),
            )
    });

    el("div", "")
        .css("margin-bottom", "24px")
        .child(heading("Experience", primary))
        .child(el("div", "grid gap-3").children(cards))
}

fn education(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    el("div", "")
        .child(heading("Education", primary))
        .child(el("div", "flex flex-wrap gap-3").children(view.education.iter().map(|edu| {
            el("div", "bg-gray-50 rounded-xl flex items-center gap-3")
                .css("padding", "12px 16px")
                .child(icon(Icon::GraduationCap, 20).css("color", primary))
                .child(
                    el("div", "")
                        .child(text("p", "font-medium text-sm", or_empty(&edu.degree)))
                        .child(text(
                            "p",
                            "text-xs text-gray-500",
                            format!("{} \u{2022} {}", or_empty(&edu.institution), or_empty(&edu.year)),
                        )),
                )
        })))
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
    fn test_hero_has_diagonal_overlay() {
        let tree = render_content(json!({}));
        assert_eq!(
            tree.count(|e| e.style.get("clip-path") == Some(HERO_CLIP_PATH)),
            1
        );
        let hero = tree.at(&[0]).unwrap();
        assert_eq!(hero.get_attr("data-section"), Some("header"));
        assert_eq!(hero.style.get("height"), Some("140mm"));
    }

    #[test]
    fn test_placeholder_icon_instead_of_img() {
        let tree = render_content(json!({ "name": "Jane" }));
        assert_eq!(tree.count(|e| e.tag == "img"), 0);
        assert_eq!(tree.count(|e| e.tag == "svg" && e.style.get("width") == Some("80px")), 1);
    }

    #[test]
    fn test_experience_capped_at_two_bullets() {
        let tree = render_content(json!({ "experience": [
            { "title": "Designer", "achievements": ["one", "two", "three"] }
        ]}));
        assert_eq!(tree.count(|e| e.tag == "li"), MAX_BULLETS);
        assert!(!tree.text_content().contains("three"));
    }

    #[test]
    fn test_skill_pills_filled_and_outlined() {
        let tree = render_content(json!({ "primaryColor": "#ff0000", "skills": {
            "technical": ["Figma"], "soft": ["Empathy"]
        }}));
        let filled = tree.count(|e| e.has_class("rounded-full") && e.style.get("background-color") == Some("#ff0000"));
        let outlined = tree.count(|e| e.style.get("border") == Some("2px solid #ff0000"));
        assert_eq!(filled, 1);
        assert_eq!(outlined, 1);
    }

    #[test]
    fn test_empty_sections_omitted() {
        let text = render_content(json!({})).text_content();
        assert!(!text.contains("About Me"));
        assert!(!text.contains("Skills & Expertise"));
        assert!(!text.contains("Experience"));
        assert!(!text.contains("Education"));
    }
}
