//! Typography-only layout. Never renders a photo.

use crate::content::view::ResumeView;
use crate::layout::components::{el, header_section, or_empty, text};
use crate::layout::tree::Element;

pub const MAX_BULLETS: usize = 2;
pub const SKILL_SEPARATOR: &str = " \u{00b7} ";
pub const BULLET_SEPARATOR: &str = " \u{2022} ";

pub const NO_SUMMARY: &str = "Professional summary not provided.";
pub const NO_EXPERIENCE: &str = "No experience listed.";
pub const NO_SKILLS: &str = "No skills listed.";
pub const NO_EDUCATION: &str = "No education listed.";

pub fn render(view: &ResumeView) -> Element {
    el("div", "")
        .css("padding", "48px")
        .child(header(view))
        .child(
            el("div", "")
                .css("margin-bottom", "32px")
                .child(text(
                    "p",
                    "text-gray-700 leading-relaxed text-lg",
                    view.summary.as_deref().unwrap_or(NO_SUMMARY),
                )),
        )
        .child(experience(view))
        .child(
            el("div", "grid grid-cols-2 gap-12")
                .child(skills(view))
                .child(education(view)),
        )
}

fn header(view: &ResumeView) -> Element {
    let separator = || text("span", "text-gray-300", "|");
    let mut line = el("div", "flex items-center gap-3 text-gray-500")
        .css("margin-top", "12px")
        .child(text(
            "span",
            "text-lg",
            view.header.title.as_deref().unwrap_or("Professional"),
        ))
        .child(separator())
        .child(text("span", "", or_empty(&view.header.email)));
    for value in [&view.header.phone, &view.header.location].into_iter().flatten() {
        line = line.child(separator()).child(text("span", "", value.as_str()));
    }

    header_section(
        el("div", "")
            .css("margin-bottom", "40px")
            .child(text(
                "h1",
                "text-5xl font-light text-gray-900 tracking-tight",
                view.header.name.as_deref().unwrap_or("Your Name"),
            ))
            .child(line)
            // Short accent rule under the header.
            .child(
                el("div", "h-0.5 bg-gray-900")
                    .css("width", "64px")
                    .css("margin-top", "24px"),
            ),
    )
}

fn label(name: &str) -> Element {
    text("h2", "text-xs font-medium uppercase text-gray-400", name)
        .css("letter-spacing", "0.3em")
        .css("margin-bottom", "16px")
}

fn experience(view: &ResumeView) -> Element {
    let block = el("div", "").css("margin-bottom", "32px").child(label("Experience"));
    if view.experience.is_empty() {
        return block.child(text("p", "text-gray-400 text-sm", NO_EXPERIENCE));
    }

    block.children(view.experience.iter().map(|exp| {
        el("div", "")
            .css("margin-bottom", "24px")
            .child(
                el("div", "flex justify-between items-baseline")
                    .child(text("span", "font-medium text-gray-900", or_empty(&exp.title)))
                    .child(text("span", "text-sm text-gray-400", or_empty(&exp.duration))),
            )
            .child(text("p", "text-gray-600", or_empty(&exp.company)))
            .maybe_child((!exp.achievements.is_empty()).then(|| {
                let joined = exp
                    .achievements
                    .iter()
                    .take(MAX_BULLETS)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(BULLET_SEPARATOR);
                text("p", "text-gray-600 text-sm", joined).css("margin-top", "4px")
            }))
    }))
}

fn skills(view: &ResumeView) -> Element {
    let all = view
        .skills
        .as_ref()
        .map(|s| s.technical_and_soft())
        .unwrap_or_default();
    let line = if all.is_empty() {
        NO_SKILLS.to_string()
    } else {
        all.join(SKILL_SEPARATOR)
    };
    el("div", "")
        .child(label("Skills").css("margin-bottom", "12px"))
        .child(text("p", "text-gray-700", line))
}

fn education(view: &ResumeView) -> Element {
    let block = el("div", "").child(label("Education").css("margin-bottom", "12px"));
    if view.education.is_empty() {
        return block.child(text("p", "text-gray-400 text-sm", NO_EDUCATION));
    }

    block.children(view.education.iter().map(|edu| {
        let year = edu.year.as_deref().map(|y| format!(", {y}")).unwrap_or_default();
        el("div", "text-gray-700")
            .child(text("span", "font-medium", or_empty(&edu.degree)))
            .text(format!(" \u{2014} {}{}", or_empty(&edu.institution), year))
    }))
}
