//! Header divider handling for the print snapshot.
//!
//! HTML-to-PDF engines routinely drop sub-2px rules, so the snapshot always
//! carries exactly one divider with explicit geometry. An existing rule is
//! found by marker, then by geometry; failing both, one is synthesized after
//! the header block. Detection never fails.

use tracing::debug;

use crate::layout::tree::{Element, Node};
use crate::print::styles::{is_transparent, parse_px};

pub const DIVIDER_ATTR: &str = "data-divider";
pub const HEADER_ATTR: &str = "data-section";

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_HEIGHT: &str = "0.5px";
pub const DEFAULT_MARGIN: &str = "24px";
const MAX_RULE_HEIGHT_PX: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerSource {
    Marked,
    Geometry,
    Synthesized,
}

fn is_thin(el: &Element) -> bool {
    el.style
        .get("height")
        .and_then(parse_px)
        .is_some_and(|h| h <= MAX_RULE_HEIGHT_PX)
}

fn has_visible_background(el: &Element) -> bool {
    el.style
        .get("background-color")
        .is_some_and(|bg| !is_transparent(bg))
}

/// Finds the divider in a tree whose computed styles have been inlined.
///
/// Marker candidates are tried in order: an explicit `data-divider`
/// attribute, `h-0.5` with `my-6`, `h-0.5`, then `h-px`. Class candidates
/// must also be at most 2px tall. The geometric fallback accepts any
/// full-width element at most 2px tall with a visible background.
pub fn find_divider(tree: &Element) -> Option<(Vec<usize>, DividerSource)> {
    let marked = tree
        .find_path(|e| e.get_attr(DIVIDER_ATTR).is_some())
        .or_else(|| tree.find_path(|e| e.has_class("h-0.5") && e.has_class("my-6") && is_thin(e)))
        .or_else(|| tree.find_path(|e| e.has_class("h-0.5") && is_thin(e)))
        .or_else(|| tree.find_path(|e| e.has_class("h-px") && is_thin(e)));
    if let Some(path) = marked {
        return Some((path, DividerSource::Marked));
    }

    tree.find_path(|e| {
        is_thin(e) && e.style.get("width") == Some("100%") && has_visible_background(e)
    })
    .map(|path| (path, DividerSource::Geometry))
}

/// A divider with fully explicit geometry.
pub fn synthesized_divider() -> Element {
    Element::new("div")
        .attr(DIVIDER_ATTR, "true")
        .css("display", "block")
        .css("width", "100%")
        .css("height", DEFAULT_HEIGHT)
        .css("margin-top", DEFAULT_MARGIN)
        .css("margin-bottom", DEFAULT_MARGIN)
        .css("background-color", DEFAULT_COLOR)
        .css("opacity", "1")
        .css("box-shadow", "none")
        .css("border", "none")
        .css("padding", "0")
}

/// Inserts a synthesized divider and returns its path.
///
/// It goes directly after the first header block; without one, after the
/// root's first element child; otherwise it is appended to the root.
pub fn insert_divider(tree: &mut Element) -> Vec<usize> {
    let header = tree
        .find_path(|e| e.get_attr(HEADER_ATTR) == Some("header"))
        .filter(|p| !p.is_empty());

    let (parent_path, index) = match header {
        Some(path) => {
            let (last, parent) = path.split_last().map(|(l, p)| (*l, p.to_vec())).unwrap_or((0, Vec::new()));
            (parent, last + 1)
        }
        None => {
            let first_child = tree
                .children
                .iter()
                .position(|n| matches!(n, Node::Element(_)));
            (Vec::new(), first_child.map_or(tree.children.len(), |i| i + 1))
        }
    };

    let Some(parent) = tree.at_mut(&parent_path) else {
        tree.children.push(synthesized_divider().into());
        return vec![tree.children.len() - 1];
    };
    let index = index.min(parent.children.len());
    parent.children.insert(index, synthesized_divider().into());

    let mut path = parent_path;
    path.push(index);
    path
}

/// Locates the divider, synthesizing one when none exists.
pub fn locate_or_insert(tree: &mut Element) -> (Vec<usize>, DividerSource) {
    if let Some(found) = find_divider(tree) {
        debug!(path = ?found.0, source = ?found.1, "divider located");
        return found;
    }
    let path = insert_divider(tree);
    debug!(path = ?path, "divider synthesized");
    (path, DividerSource::Synthesized)
}

/// Pins the divider's print geometry.
///
/// Explicit colour, opacity, height and margins are kept. A divider with no
/// background becomes black at full opacity.
pub fn finalize(divider: &mut Element) {
    let style = &mut divider.style;

    let has_background = style
        .get("background-color")
        .is_some_and(|bg| !bg.trim().is_empty());
    if !has_background {
        style.set("background-color", DEFAULT_COLOR);
        style.set("opacity", "1");
    }

    style.set("display", "block");
    style.set_default("width", "100%");
    style.set_default("height", DEFAULT_HEIGHT);
    style.set_default("margin-top", DEFAULT_MARGIN);
    style.set_default("margin-bottom", DEFAULT_MARGIN);
    style.set("box-shadow", "none");
    style.set_default("border", "none");

    divider.set_attr(DIVIDER_ATTR, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(classes: &str, height: &str) -> Element {
        Element::new("div")
            .class(classes)
            .css("height", height)
            .css("width", "100%")
            .css("background-color", "#6366f1")
    }

    #[test]
    fn test_prefers_h05_my6_over_plain_h05() {
        let tree = Element::new("div")
            .child(rule("h-0.5", "2px"))
            .child(rule("w-full h-0.5 my-6", "2px"));
        let (path, source) = find_divider(&tree).unwrap();
        assert_eq!(path, vec![1]);
        assert_eq!(source, DividerSource::Marked);
    }

    #[test]
    fn test_marker_class_must_be_thin() {
        let tree = Element::new("div").child(rule("h-0.5", "12px"));
        assert!(find_divider(&tree).is_none());
    }

    #[test]
    fn test_h_px_and_geometry_fallbacks() {
        let tree = Element::new("div").child(rule("h-px", "1px"));
        assert_eq!(find_divider(&tree).map(|f| f.1), Some(DividerSource::Marked));

        let tree = Element::new("div")
            .child(Element::new("p").text("x"))
            .child(rule("", "1px"));
        assert_eq!(
            find_divider(&tree),
            Some((vec![1], DividerSource::Geometry))
        );
    }

    #[test]
    fn test_geometry_ignores_transparent_rules() {
        let tree = Element::new("div").child(
            Element::new("div")
                .css("height", "1px")
                .css("width", "100%")
                .css("background-color", "transparent"),
        );
        assert!(find_divider(&tree).is_none());
    }

    #[test]
    fn test_inserted_after_nested_header() {
        let mut tree = Element::new("div").child(
            Element::new("div")
                .child(Element::new("aside"))
                .child(Element::new("header").attr(HEADER_ATTR, "header"))
                .child(Element::new("section")),
        );
        let path = insert_divider(&mut tree);
        assert_eq!(path, vec![0, 2]);
        assert_eq!(tree.at(&path).and_then(|e| e.get_attr(DIVIDER_ATTR)), Some("true"));
        assert_eq!(tree.at(&[0, 3]).map(|e| e.tag.as_str()), Some("section"));
    }

    #[test]
    fn test_inserted_after_first_child_without_header() {
        let mut tree = Element::new("div")
            .child(Element::new("h1"))
            .child(Element::new("p"));
        assert_eq!(insert_divider(&mut tree), vec![1]);

        let mut empty = Element::new("div");
        assert_eq!(insert_divider(&mut empty), vec![0]);
    }

    #[test]
    fn test_finalize_keeps_explicit_values() {
        let mut d = rule("h-0.5 my-6", "2px").css("opacity", "0.3");
        finalize(&mut d);
        assert_eq!(d.style.get("background-color"), Some("#6366f1"));
        assert_eq!(d.style.get("opacity"), Some("0.3"));
        assert_eq!(d.style.get("height"), Some("2px"));
        assert_eq!(d.style.get("margin-top"), Some(DEFAULT_MARGIN));
        assert_eq!(d.style.get("display"), Some("block"));
        assert_eq!(d.get_attr(DIVIDER_ATTR), Some("true"));
    }

    #[test]
    fn test_finalize_defaults_missing_background() {
        let mut d = Element::new("div").class("h-px");
        finalize(&mut d);
        assert_eq!(d.style.get("background-color"), Some(DEFAULT_COLOR));
        assert_eq!(d.style.get("opacity"), Some("1"));
        assert_eq!(d.style.get("height"), Some(DEFAULT_HEIGHT));
    }
}
