//! HTML serialization of the layout tree.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::layout::stylesheet::stylesheet_css;
use crate::layout::tree::{Element, Node};

const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link", "circle", "path", "rect"];

/// Serializes an element and its subtree. Text and attribute values are escaped.
pub fn to_html(root: &Element) -> String {
    let mut out = String::with_capacity(4096);
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    for (name, value) in &el.attrs {
        push_attr(out, name, value);
    }
    if !el.classes.is_empty() {
        push_attr(out, "class", &el.classes.join(" "));
    }
    if !el.style.is_empty() {
        push_attr(out, "style", &el.style.to_css());
    }

    if VOID_TAGS.contains(&el.tag.as_str()) && el.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    for node in &el.children {
        match node {
            Node::Text(text) => out.push_str(&encode_text(text)),
            Node::Element(child) => write_element(child, out),
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

/// Wraps a rendered resume in a standalone page for on-screen preview.
pub fn preview_document(root: &Element, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n\
         <style>\n* {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         body {{ background: #f3f4f6; padding: 24px; }}\n\
         #resume-content {{ margin: 0 auto; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }}\n\
         {css}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = encode_text(title),
        css = stylesheet_css(|_, _| true),
        body = to_html(root),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_attrs_classes_and_style_in_order() {
        let el = Element::new("div")
            .attr("id", "resume-content")
            .class("flex gap-2")
            .css("color", "#111")
            .text("hi");
        assert_eq!(
            to_html(&el),
            "<div id=\"resume-content\" class=\"flex gap-2\" style=\"color: #111\">hi</div>"
        );
    }

    #[test]
    fn test_escapes_text_and_attribute_values() {
        let el = Element::new("p")
            .attr("title", "a \"quoted\" <value>")
            .text("R&D <team>");
        let html = to_html(&el);
        assert!(html.contains("R&amp;D &lt;team&gt;"));
        assert!(html.contains("title=\"a &quot;quoted&quot; &lt;value&gt;\""));
    }

    #[test]
    fn test_void_elements_self_close() {
        let el = Element::new("div").child(Element::new("img").attr("src", "x.png"));
        assert_eq!(to_html(&el), "<div><img src=\"x.png\" /></div>");
    }

    #[test]
    fn test_preview_document_includes_stylesheet_and_title() {
        let doc = preview_document(&Element::new("div"), "Jane <Cruz>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Jane &lt;Cruz&gt;</title>"));
        assert!(doc.contains(".rounded-full {"));
    }
}
