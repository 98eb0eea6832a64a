//! Print-safety normalization applied to every element except the divider.

use crate::layout::tree::Element;

/// Effects dropped from print output.
pub const STRIPPED_EFFECTS: &[&str] = &["box-shadow", "text-shadow", "filter", "backdrop-filter"];

const BLACK: &[&str] = &["black", "#000", "#000000", "rgb(0, 0, 0)", "rgba(0, 0, 0, 1)"];

pub fn is_black(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    BLACK.contains(&v.as_str())
}

fn is_glass(el: &Element) -> bool {
    el.classes
        .iter()
        .any(|c| c == "glass" || c.starts_with("glass-") || c.contains("backdrop"))
}

/// Strips effects, restores full opacity, whitens glass panels and clears
/// black backgrounds.
pub fn sanitize_element(el: &mut Element) {
    for prop in STRIPPED_EFFECTS {
        el.style.remove(prop);
    }

    let translucent = el
        .style
        .get("opacity")
        .and_then(|o| o.trim().parse::<f32>().ok())
        .is_some_and(|o| o < 1.0);
    if translucent {
        el.style.set("opacity", "1");
    }

    if is_glass(el) {
        el.style.remove("background-image");
        el.style.set("background-color", "#ffffff");
    }

    if el.style.get("background-color").is_some_and(is_black) {
        el.style.set("background-color", "transparent");
    }
}

/// Applies [`sanitize_element`] to every element except the one at `skip`.
pub fn sanitize_tree(root: &mut Element, skip: &[usize]) {
    for path in root.element_paths() {
        if path == skip {
            continue;
        }
        if let Some(el) = root.at_mut(&path) {
            sanitize_element(el);
        }
    }
}
