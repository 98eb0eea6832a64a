//! Small building blocks shared by the resume layouts.

use crate::content::view::ResumeView;
use crate::layout::tree::Element;

pub const RESUME_ROOT_ID: &str = "resume-content";
pub const PAGE_WIDTH: &str = "210mm";
pub const PAGE_MIN_HEIGHT: &str = "297mm";
pub const BODY_TEXT_COLOR: &str = "#1f2937";

/// Root container every layout renders into.
pub fn resume_root(view: &ResumeView) -> Element {
    Element::new("div")
        .attr("id", RESUME_ROOT_ID)
        .class("bg-white")
        .css("font-family", view.theme.font_family.as_str())
        .css("color", BODY_TEXT_COLOR)
        .css("width", PAGE_WIDTH)
        .css("min-height", PAGE_MIN_HEIGHT)
}

pub fn el(tag: &str, classes: &str) -> Element {
    Element::new(tag).class(classes)
}

pub fn text(tag: &str, classes: &str, content: impl Into<String>) -> Element {
    Element::new(tag).class(classes).text(content)
}

/// `<ul>` with one `<li>` per item.
pub fn bullet_list<'a>(classes: &str, items: impl IntoIterator<Item = &'a String>) -> Element {
    el("ul", classes).children(items.into_iter().map(|item| text("li", "", item.as_str())))
}

pub fn photo(src: &str, classes: &str) -> Element {
    Element::new("img")
        .attr("src", src)
        .attr("alt", "Profile")
        .class(classes)
        .css("object-fit", "cover")
}

pub fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Applies a background that may be a gradient or a flat colour.
pub fn background(el: Element, value: &str) -> Element {
    if value.contains("gradient(") {
        el.css("background-image", value)
    } else {
        el.css("background-color", value)
    }
}

/// Marks the block the print pass anchors a synthesized divider after.
pub fn header_section(el: Element) -> Element {
    el.attr("data-section", "header")
}

// ────────────────────────────────────────────────────────────────────────────
// Icons (lucide outlines, 24x24 viewBox)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Mail,
    Phone,
    MapPin,
    GraduationCap,
    Award,
    Trophy,
}

type Shape = (&'static str, &'static [(&'static str, &'static str)]);

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::User => &[
                ("path", &[("d", "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2")]),
                ("circle", &[("cx", "12"), ("cy", "7"), ("r", "4")]),
            ],
            Icon::Mail => &[
                ("rect", &[("width", "20"), ("height", "16"), ("x", "2"), ("y", "4"), ("rx", "2")]),
                ("path", &[("d", "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7")]),
            ],
            Icon::Phone => &[(
                "path",
                &[(
                    "d",
                    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                     19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 \
                     0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 \
                     1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
                )],
            )],
            Icon::MapPin => &[
                ("path", &[("d", "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z")]),
                ("circle", &[("cx", "12"), ("cy", "10"), ("r", "3")]),
            ],
            Icon::GraduationCap => &[
                ("path", &[("d", "M22 10v6M2 10l10-5 10 5-10 5z")]),
                ("path", &[("d", "M6 12v5c3 3 9 3 12 0v-5")]),
            ],
            Icon::Award => &[
                ("circle", &[("cx", "12"), ("cy", "8"), ("r", "6")]),
                ("path", &[("d", "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11")]),
            ],
            Icon::Trophy => &[
                ("path", &[("d", "M6 9H4.5a2.5 2.5 0 0 1 0-5H6")]),
                ("path", &[("d", "M18 9h1.5a2.5 2.5 0 0 0 0-5H18")]),
                ("path", &[("d", "M4 22h16")]),
                ("path", &[("d", "M18 2H6v7a6 6 0 0 0 12 0V2Z")]),
            ],
        }
    }
}

/// Inline SVG icon drawn in `currentColor`.
pub fn icon(kind: Icon, size_px: u32) -> Element {
    let size = format!("{size_px}px");
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .css("width", size.as_str())
        .css("height", size)
        .css("flex-shrink", "0")
        .children(kind.shapes().iter().map(|(tag, attrs)| {
            attrs
                .iter()
                .fold(Element::new(tag), |shape, (name, value)| shape.attr(name, *value))
        }))
}
