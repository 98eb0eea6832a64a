//! Computed-style resolution for the print snapshot.
//!
//! A browser resolves an element's final style from inherited values, the
//! class stylesheet and its inline declarations. The snapshot has to be
//! self-contained, so this pass does the same resolution over the layout
//! tree and writes the result back as inline declarations.

use crate::layout::stylesheet::CLASS_RULES;
use crate::layout::tree::{Element, Node, Style};

/// Properties children take from their parent.
pub const INHERITED: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
    "text-align",
    "text-transform",
];

/// Properties copied inline verbatim.
const COPIED: &[&str] = &[
    "color",
    "background-color",
    "background-image",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "letter-spacing",
    "text-align",
    "text-transform",
    "width",
    "height",
    "min-height",
    "display",
    "flex",
    "flex-direction",
    "flex-wrap",
    "align-items",
    "justify-content",
    "gap",
    "grid-template-columns",
    "list-style-type",
];

/// Property families copied inline (`margin-top`, `border-left-width`, ...).
const COPIED_PREFIXES: &[&str] = &["margin", "padding", "border"];

pub const ROOT_BACKGROUND: &str = "#ffffff";
pub const ROOT_COLOR: &str = "#1f2937";

fn is_copied(prop: &str) -> bool {
    COPIED.contains(&prop) || COPIED_PREFIXES.iter().any(|p| prop.starts_with(p))
}

pub fn is_transparent(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    v == "transparent" || v == "rgba(0, 0, 0, 0)" || v == "rgba(0,0,0,0)"
}

/// Resolves the full style of `el` given its parent's computed style.
/// Precedence, lowest first: inherited, class rules in stylesheet order, inline.
pub fn computed_style(el: &Element, parent: Option<&Style>) -> Style {
    let mut style = Style::new();

    if let Some(parent) = parent {
        for prop in INHERITED {
            if let Some(value) = parent.get(prop) {
                style.set(prop, value);
            }
        }
    }

    for (class, decls) in CLASS_RULES {
        if el.has_class(class) {
            for (prop, value) in decls.iter() {
                style.set(prop, *value);
            }
        }
    }

    for (prop, value) in el.style.iter() {
        style.set(prop, value);
    }
    style
}

/// Writes each element's computed style back as inline declarations.
/// Existing inline declarations are kept; copyable computed ones are added.
pub fn inline_computed_styles(root: &mut Element) {
    let mut base = Style::new();
    base.set("color", ROOT_COLOR);
    inline_subtree(root, &base, true);
}

fn inline_subtree(el: &mut Element, parent: &Style, is_root: bool) {
    let mut computed = computed_style(el, Some(parent));
    if is_root {
        computed.set_default("background-color", ROOT_BACKGROUND);
    }

    for (prop, value) in computed.iter() {
        if !is_copied(prop) {
            continue;
        }
        if prop == "background-color" && is_transparent(value) {
            continue;
        }
        if (prop == "width" || prop == "height") && value == "auto" {
            continue;
        }
        el.style.set(prop, value);
    }

    for node in el.children.iter_mut() {
        if let Node::Element(child) = node {
            inline_subtree(child, &computed, false);
        }
    }
}

/// Parses a CSS pixel length (`"2px"`, `"0.5px"`, `"0"`).
pub fn parse_px(value: &str) -> Option<f32> {
    let v = value.trim();
    if v == "0" {
        return Some(0.0);
    }
    v.strip_suffix("px")?.trim().parse::<f32>().ok()
}
