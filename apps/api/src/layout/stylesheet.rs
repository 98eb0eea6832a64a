//! Utility-class stylesheet shared by the on-screen preview and the print
//! snapshot's computed-style pass.
//!
//! Each class maps to a fixed set of declarations. Templates mix these
//! classes with inline declarations; inline always wins.

/// `(class, declarations)` pairs. Rule order matters: later rules override
/// earlier ones for the same property when an element carries both classes.
#[rustfmt::skip]
pub static CLASS_RULES: &[(&str, &[(&str, &str)])] = &[
    // layout
    ("flex",            &[("display", "flex")]),
    ("flex-col",        &[("flex-direction", "column")]),
    ("flex-1",          &[("flex", "1 1 0%")]),
    ("flex-wrap",       &[("flex-wrap", "wrap")]),
    ("items-center",    &[("align-items", "center")]),
    ("items-baseline",  &[("align-items", "baseline")]),
    ("items-start",     &[("align-items", "flex-start")]),
    ("justify-between", &[("justify-content", "space-between")]),
    ("justify-center",  &[("justify-content", "center")]),
    ("grid",            &[("display", "grid")]),
    ("grid-cols-2",     &[("grid-template-columns", "repeat(2, minmax(0, 1fr))")]),
    ("grid-cols-3",     &[("grid-template-columns", "repeat(3, minmax(0, 1fr))")]),
    ("block",           &[("display", "block")]),
    ("relative",        &[("position", "relative")]),
    ("overflow-hidden", &[("overflow", "hidden")]),
    ("float-right",     &[("float", "right")]),
    ("clear-both",      &[("clear", "both")]),
    ("w-full",          &[("width", "100%")]),
    ("gap-2",           &[("gap", "8px")]),
    ("gap-3",           &[("gap", "12px")]),
    ("gap-4",           &[("gap", "16px")]),
    ("gap-6",           &[("gap", "24px")]),
    ("gap-8",           &[("gap", "32px")]),
    ("gap-12",          &[("gap", "48px")]),
    // rules and dividers
    ("h-px",            &[("height", "1px")]),
    ("h-0.5",           &[("height", "2px")]),
    ("my-6",            &[("margin-top", "24px"), ("margin-bottom", "24px")]),
    ("border-b",        &[("border-bottom", "1px solid #e5e7eb")]),
    ("border-b-2",      &[("border-bottom-width", "2px"), ("border-bottom-style", "solid")]),
    ("border-l-4",      &[("border-left-width", "4px"), ("border-left-style", "solid")]),
    // shapes
    ("rounded",         &[("border-radius", "4px")]),
    ("rounded-lg",      &[("border-radius", "8px")]),
    ("rounded-xl",      &[("border-radius", "12px")]),
    ("rounded-2xl",     &[("border-radius", "16px")]),
    ("rounded-full",    &[("border-radius", "9999px")]),
    ("shadow-md",       &[("box-shadow", "0 4px 6px -1px rgba(0, 0, 0, 0.1)")]),
    ("shadow-lg",       &[("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)")]),
    ("shadow-xl",       &[("box-shadow", "0 20px 25px -5px rgba(0, 0, 0, 0.1)")]),
    ("shadow-2xl",      &[("box-shadow", "0 25px 50px -12px rgba(0, 0, 0, 0.25)")]),
    ("glass",           &[("backdrop-filter", "blur(12px)"), ("background-color", "rgba(255, 255, 255, 0.1)")]),
    // typography
    ("font-serif",      &[("font-family", "Georgia, Cambria, 'Times New Roman', serif")]),
    ("font-light",      &[("font-weight", "300")]),
    ("font-medium",     &[("font-weight", "500")]),
    ("font-semibold",   &[("font-weight", "600")]),
    ("font-bold",       &[("font-weight", "700")]),
    ("font-black",      &[("font-weight", "900")]),
    ("italic",          &[("font-style", "italic")]),
    ("uppercase",       &[("text-transform", "uppercase")]),
    ("text-center",     &[("text-align", "center")]),
    ("text-xs",         &[("font-size", "12px"), ("line-height", "16px")]),
    ("text-sm",         &[("font-size", "14px"), ("line-height", "20px")]),
    ("text-base",       &[("font-size", "16px"), ("line-height", "24px")]),
    ("text-lg",         &[("font-size", "18px"), ("line-height", "28px")]),
    ("text-2xl",        &[("font-size", "24px"), ("line-height", "32px")]),
    ("text-3xl",        &[("font-size", "30px"), ("line-height", "36px")]),
    ("text-4xl",        &[("font-size", "36px"), ("line-height", "40px")]),
    ("text-5xl",        &[("font-size", "48px"), ("line-height", "1")]),
    ("leading-relaxed", &[("line-height", "1.625")]),
    ("tracking-wide",   &[("letter-spacing", "0.025em")]),
    ("tracking-wider",  &[("letter-spacing", "0.05em")]),
    ("tracking-widest", &[("letter-spacing", "0.2em")]),
    ("tracking-tight",  &[("letter-spacing", "-0.025em")]),
    ("list-disc",       &[("list-style-type", "disc"), ("padding-left", "18px")]),
    ("whitespace-nowrap", &[("white-space", "nowrap")]),
    // palette
    ("text-white",      &[("color", "#ffffff")]),
    ("text-gray-300",   &[("color", "#d1d5db")]),
    ("text-gray-400",   &[("color", "#9ca3af")]),
    ("text-gray-500",   &[("color", "#6b7280")]),
    ("text-gray-600",   &[("color", "#4b5563")]),
    ("text-gray-700",   &[("color", "#374151")]),
    ("text-gray-800",   &[("color", "#1f2937")]),
    ("text-gray-900",   &[("color", "#111827")]),
    ("bg-white",        &[("background-color", "#ffffff")]),
    ("bg-gray-50",      &[("background-color", "#f9fafb")]),
    ("bg-gray-100",     &[("background-color", "#f3f4f6")]),
    ("bg-gray-900",     &[("background-color", "#111827")]),
    ("border-gray-200", &[("border-color", "#e5e7eb")]),
    ("border-gray-300", &[("border-color", "#d1d5db")]),
];

/// Declarations a class contributes, if the class is known.
pub fn class_declarations(class: &str) -> Option<&'static [(&'static str, &'static str)]> {
    CLASS_RULES
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, decls)| *decls)
}

/// Renders the rules as a CSS stylesheet. `keep` filters individual rules,
/// which lets the print shell drop anything that would paint black.
pub fn stylesheet_css(keep: impl Fn(&str, &[(&str, &str)]) -> bool) -> String {
    let mut css = String::new();
    for (class, decls) in CLASS_RULES {
        if !keep(class, decls) {
            continue;
        }
        let body = decls
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        css.push_str(&format!(".{} {{ {} }}\n", escape_class(class), body));
    }
    css
}

/// Escapes characters that are not valid in a bare CSS class selector (`h-0.5`).
fn escape_class(class: &str) -> String {
    class
        .chars()
        .flat_map(|c| match c {
            '.' | ':' | '/' | '[' | ']' => vec!['\\', c],
            _ => vec![c],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_declarations_lookup() {
        assert_eq!(class_declarations("h-0.5"), Some(&[("height", "2px")][..]));
        assert!(class_declarations("no-such-class").is_none());
    }

    #[test]
    fn test_stylesheet_escapes_dots_in_selectors() {
        let css = stylesheet_css(|_, _| true);
        assert!(css.contains(".h-0\\.5 { height: 2px; }"));
        assert!(css.contains(".rounded-full { border-radius: 9999px; }"));
    }

    #[test]
    fn test_stylesheet_filter_drops_rules() {
        let css = stylesheet_css(|class, _| !class.starts_with("shadow"));
        assert!(!css.contains("box-shadow"));
        assert!(css.contains(".flex {"));
    }
}
