//! Classic serif layout with a centred header and a two-column footer.

use crate::content::view::ResumeView;
use crate::layout::components::{bullet_list, el, header_section, or_empty, photo, text};
use crate::layout::tree::Element;

pub const MAX_BULLETS: usize = 4;

pub const NO_SUMMARY: &str = "Professional summary not provided.";
pub const NO_EXPERIENCE: &str = "No experience listed.";
pub const NO_TECHNICAL_SKILLS: &str = "No technical skills listed.";
pub const NO_EDUCATION: &str = "No education listed.";

pub fn render(view: &ResumeView) -> Element {
    el("div", "font-serif")
        .css("padding", "40px")
        .child(header(view))
        .maybe_child(view.profile_photo.as_deref().map(|src| {
            el("div", "float-right")
                .css("margin-left", "24px")
                .css("margin-bottom", "16px")
                .child(
                    el("div", "rounded overflow-hidden border-gray-300")
                        .css("width", "96px")
                        .css("height", "96px")
                        .css("border-width", "2px")
                        .css("border-style", "solid")
                        .child(photo(src, "w-full").css("height", "100%")),
                )
        }))
        .child(summary(view))
        .child(experience(view))
        .child(
            el("div", "grid grid-cols-2 gap-8")
                .child(skills(view))
                .child(education(view)),
        )
}

fn header(view: &ResumeView) -> Element {
    let mut contact = el("div", "flex justify-center gap-6 text-sm text-gray-600")
        .css("margin-top", "12px")
        .child(text("span", "", or_empty(&view.header.email)));
    for value in [&view.header.phone, &view.header.location].into_iter().flatten() {
        contact = contact
            .child(text("span", "", "\u{2022}"))
            .child(text("span", "", value.as_str()));
    }

    header_section(
        el("div", "text-center border-b-2 border-gray-300")
            .css("padding-bottom", "24px")
            .css("margin-bottom", "24px")
            .child(text(
                "h1",
                "text-4xl font-serif font-bold text-gray-900",
                view.header.name.as_deref().unwrap_or("Your Name"),
            ))
            .child(
                text(
                    "p",
                    "text-lg font-serif text-gray-600",
                    view.header.title.as_deref().unwrap_or("Professional Title"),
                )
                .css("margin-top", "8px"),
            )
            .child(contact),
    )
}

fn heading(label: &str) -> Element {
    text(
        "h2",
        "text-sm font-serif font-bold uppercase tracking-widest text-gray-700 border-b border-gray-200",
        label,
    )
    .css("padding-bottom", "4px")
    .css("margin-bottom", "8px")
}

fn placeholder(tag: &str, message: &str) -> Element {
    text(tag, "text-sm font-serif text-gray-400", message)
}

fn summary(view: &ResumeView) -> Element {
    el("div", "")
        .css("margin-bottom", "24px")
        .child(heading("Executive Summary"))
        .child(text(
            "p",
            "text-sm font-serif text-gray-700 leading-relaxed",
            view.summary.as_deref().unwrap_or(NO_SUMMARY),
        ))
}

fn experience(view: &ResumeView) -> Element {
    let block = el("div", "clear-both")
        .css("margin-bottom", "24px")
        .child(heading("Professional Experience"));

    if view.experience.is_empty() {
        return block.child(placeholder("p", NO_EXPERIENCE));
    }

    block.children(view.experience.iter().map(|exp| {
        el("div", "")
            .css("padding-bottom", "12px")
            .css("margin-bottom", "16px")
            .child(
                el("div", "flex justify-between items-baseline")
                    .child(text("h3", "font-serif font-semibold text-gray-900", or_empty(&exp.title)))
                    .child(text("span", "text-sm font-serif text-gray-500", or_empty(&exp.duration))),
            )
            .child(text(
                "p",
                "text-sm font-serif text-gray-600 italic",
                or_empty(&exp.company),
            ))
            .maybe_child((!exp.achievements.is_empty()).then(|| {
                bullet_list(
                    "text-sm font-serif text-gray-700 list-disc",
                    exp.achievements.iter().take(MAX_BULLETS),
                )
                .css("margin-top", "8px")
            }))
    }))
}

fn skills(view: &ResumeView) -> Element {
    let block = el("div", "").child(heading("Core Competencies"));
    let technical = view.skills.as_ref().map(|s| s.technical()).unwrap_or_default();

    let cloud = if technical.is_empty() {
        el("div", "flex flex-wrap gap-2").child(
            text("span", "text-xs font-serif text-gray-400", NO_TECHNICAL_SKILLS),
        )
    } else {
        el("div", "flex flex-wrap gap-2").children(technical.iter().map(|skill| {
            text("span", "text-xs font-serif bg-gray-100 text-gray-700 rounded", skill.as_str())
                .css("padding", "4px 8px")
        }))
    };
    block.child(cloud)
}

fn education(view: &ResumeView) -> Element {
    let block = el("div", "").child(heading("Education"));
    if view.education.is_empty() {
        return block.child(placeholder("p", NO_EDUCATION));
    }

    block.children(view.education.iter().map(|edu| {
        let year = edu.year.as_deref().map(|y| format!(", {y}")).unwrap_or_default();
        el("div", "text-sm font-serif")
            .child(text("p", "font-medium text-gray-800", or_empty(&edu.degree)))
            .child(text(
                "p",
                "text-gray-600",
                format!("{}{}", or_empty(&edu.institution), year),
            ))
    }))
}
