//! Standalone HTML shell for print snapshots, plus export naming.

use html_escape::encode_text;

use crate::layout::stylesheet::stylesheet_css;
use crate::print::sanitize::{is_black, STRIPPED_EFFECTS};

pub const BRAND: &str = "BPOC";
pub const TITLE_SUFFIX: &str = "Resume | BPOC.IO";

/// Print rules for an A4 page. The divider block forces visibility and only
/// supplies colour/opacity where the element carries none inline.
const PRINT_CSS: &str = r#"@page { size: A4; margin: 0; }
* { box-sizing: border-box; -webkit-print-color-adjust: exact; print-color-adjust: exact; }
html, body { margin: 0; padding: 0; background: #ffffff; width: 210mm; }
#resume-content { width: 210mm; min-height: 297mm; margin: 0; box-shadow: none; border-radius: 0; }
h1, h2, h3, h4, h5, h6 { break-after: avoid; page-break-after: avoid; break-inside: avoid; page-break-inside: avoid; }
li, button, [role="button"], .rounded-full { break-inside: avoid; page-break-inside: avoid; }
p { orphans: 2; widows: 2; }
[data-divider="true"] { display: block !important; visibility: visible !important; width: 100%; border: none; }
[data-divider="true"]:not([style*="background"]) { background-color: #000000 !important; }
[data-divider="true"]:not([style*="opacity"]) { opacity: 1 !important; }
.glass, [class*="backdrop"] { background: #ffffff !important; backdrop-filter: none !important; }
"#;

/// Class rules safe for print: nothing that paints black or adds effects.
fn print_stylesheet() -> String {
    stylesheet_css(|_, decls| {
        !decls.iter().any(|(prop, value)| {
            STRIPPED_EFFECTS.contains(prop) || (*prop == "background-color" && is_black(value))
        })
    })
}

/// Wraps serialized resume markup in a complete print document.
pub fn print_document(body_html: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>\n{classes}{print}</style>\n</head>\n\
         <body>\n{body_html}\n</body>\n</html>\n",
        title = encode_text(title),
        classes = print_stylesheet(),
        print = PRINT_CSS,
    )
}

/// `First-Last-BPOC-Resume.pdf`; missing parts default to `Resume` / `User`.
pub fn file_name_for(full_name: &str) -> String {
    let parts: Vec<String> = full_name
        .split_whitespace()
        .map(|p| {
            p.chars()
                .filter(|c| !c.is_control() && !matches!(c, '"' | '/' | '\\'))
                .collect::<String>()
        })
        .filter(|p| !p.is_empty())
        .collect();

    let first = parts.first().map(String::as_str).unwrap_or("Resume");
    let last = if parts.len() > 1 {
        parts[1..].join("-")
    } else {
        "User".to_string()
    };
    format!("{first}-{last}-{BRAND}-Resume.pdf")
}

pub fn document_title(full_name: &str) -> String {
    format!("{} - {TITLE_SUFFIX}", full_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_full_name() {
        assert_eq!(file_name_for("Jane Cruz"), "Jane-Cruz-BPOC-Resume.pdf");
        assert_eq!(
            file_name_for("Maria  Clara de la Cruz"),
            "Maria-Clara-de-la-Cruz-BPOC-Resume.pdf"
        );
    }

    #[test]
    fn test_file_name_defaults() {
        assert_eq!(file_name_for("Cher"), "Cher-User-BPOC-Resume.pdf");
        assert_eq!(file_name_for("   "), "Resume-User-BPOC-Resume.pdf");
    }

    #[test]
    fn test_file_name_drops_header_unsafe_chars() {
        assert_eq!(file_name_for("Jo\"hn Do/e"), "John-Doe-BPOC-Resume.pdf");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("Jane Cruz"), "Jane Cruz - Resume | BPOC.IO");
    }

    #[test]
    fn test_print_document_shell() {
        let doc = print_document("<div id=\"resume-content\"></div>", "A & B - Resume | BPOC.IO");
        assert!(doc.contains("<title>A &amp; B - Resume | BPOC.IO</title>"));
        assert!(doc.contains("@page { size: A4; margin: 0; }"));
        assert!(doc.contains("p { orphans: 2; widows: 2; }"));
        assert!(doc.contains(".rounded-full { break-inside: avoid"));
        assert!(doc.contains("[data-divider=\"true\"]:not([style*=\"background\"])"));
    }

    #[test]
    fn test_print_stylesheet_drops_effect_rules() {
        let css = print_stylesheet();
        assert!(!css.contains("box-shadow"));
        assert!(!css.contains("backdrop-filter"));
        assert!(css.contains(".h-0\\.5 { height: 2px; }"));
    }
}
