//! Generic single-column layout for records whose template selector is not
//! one of the named layouts. Renders every section the content carries.

use crate::content::view::{ResumeView, Skills};
use crate::layout::components::{bullet_list, el, header_section, icon, or_empty, text, Icon};
use crate::layout::tree::Element;

pub const HEADER_NAME_COLOR: &str = "#1f2937";
pub const HEADER_TITLE_COLOR: &str = "#374151";
pub const DIVIDER_OPACITY: &str = "0.3";
pub const DEFAULT_HEADER_TEXT: &str = "Professional";

pub fn render(view: &ResumeView) -> Element {
    let primary = view.theme.primary.as_str();
    let secondary = view.theme.secondary.as_str();
    let ctx = Ctx { primary, secondary };

    el("div", "")
        .css("padding", "32px")
        .child(header(view))
        .child(divider(primary))
        .maybe_child(view.summary.as_deref().map(|summary| {
            ctx.section("Professional Summary").child(
                text("p", "text-gray-700 leading-relaxed", summary)
                    .css("padding-left", "12px")
                    .css("border-left", format!("2px solid {secondary}")),
            )
        }))
        .maybe_child((!view.experience.is_empty()).then(|| experience(view, &ctx)))
        .maybe_child((!view.education.is_empty()).then(|| education(view, &ctx)))
        .maybe_child(
            view.skills
                .as_ref()
                .filter(|skills| !skills.is_empty())
                .map(|skills| skills_section(skills, &ctx)),
        )
        .maybe_child((!view.certifications.is_empty()).then(|| {
            ctx.section("Certifications").children(view.certifications.iter().map(|cert| {
                ctx.entry()
                    .child(
                        el("div", "flex items-center gap-2")
                            .child(icon(Icon::Award, 16).css("color", "#059669"))
                            .child(text("span", "text-gray-700 font-medium", cert.as_str())),
                    )
            }))
        }))
        .maybe_child((!view.projects.is_empty()).then(|| projects(view, &ctx)))
        .maybe_child((!view.achievements.is_empty()).then(|| {
            ctx.section("Achievements").children(view.achievements.iter().map(|item| {
                ctx.entry().child(
                    el("div", "flex items-center gap-2")
                        .child(icon(Icon::Trophy, 16).css("color", "#d97706"))
                        .child(text("span", "text-gray-700", item.as_str())),
                )
            }))
        }))
        .maybe_child((!view.organizations.is_empty()).then(|| organizations(view, &ctx)))
        .maybe_child((!view.has_structured_content()).then(|| raw_dump(view)))
}

/// Theme colours threaded through the section builders.
struct Ctx<'a> {
    primary: &'a str,
    secondary: &'a str,
}

impl Ctx<'_> {
    /// Section wrapper with an accent bar and coloured heading.
    fn section(&self, title: &str) -> Element {
        el("div", "")
            .css("margin-bottom", "24px")
            .child(
                el("div", "flex items-center gap-2")
                    .css("margin-bottom", "12px")
                    .child(
                        el("div", "rounded-full")
                            .css("width", "4px")
                            .css("height", "24px")
                            .css("background-color", self.primary),
                    )
                    .child(
                        text("h2", "text-lg font-semibold text-gray-900", title)
                            .css("color", self.primary),
                    ),
            )
    }

    fn entry(&self) -> Element {
        el("div", "border-l-4")
            .css("padding-left", "16px")
            .css("margin-bottom", "12px")
            .css("border-color", self.secondary)
    }
}

fn header(view: &ResumeView) -> Element {
    let h = &view.legacy_header;
    let theme = &view.theme;
    let align = if view.profile_photo.is_some() { "left" } else { "center" };

    let identity = el("div", "")
        .css("text-align", align)
        .child(
            text(
                "h1",
                "text-2xl font-bold text-gray-900",
                h.name.as_deref().unwrap_or(DEFAULT_HEADER_TEXT),
            )
            .css("margin-bottom", "8px")
            .css(
                "color",
                theme.primary_explicit.as_deref().unwrap_or(HEADER_NAME_COLOR),
            ),
        )
        .child(
            text(
                "p",
                "text-lg font-semibold text-gray-800",
                h.title.as_deref().unwrap_or(DEFAULT_HEADER_TEXT),
            )
            .css("margin-bottom", "8px")
            .css(
                "color",
                theme.secondary_explicit.as_deref().unwrap_or(HEADER_TITLE_COLOR),
            ),
        )
        .maybe_child(h.location.as_deref().map(|l| text("p", "text-gray-600", l)));

    let photo = view.profile_photo.as_deref().map(|src| {
        el("div", "")
            .css("position", "absolute")
            .css("top", "-8px")
            .css("right", "0")
            .child(
                Element::new("img")
                    .attr("src", src)
                    .attr("alt", "Profile")
                    .class("rounded-lg shadow-lg")
                    .css("width", "128px")
                    .css("height", "128px")
                    .css("object-fit", "cover")
                    .css("border", format!("4px solid {}", theme.primary)),
            )
    });

    header_section(
        el("div", "")
            .css("margin-bottom", "32px")
            .child(el("div", "relative").child(identity).maybe_child(photo)),
    )
}

/// The labelled rule between header and body.
fn divider(primary: &str) -> Element {
    el("div", "w-full h-0.5 my-6")
        .css("background-color", primary)
        .css("opacity", DIVIDER_OPACITY)
}

fn badge(label: &str) -> Element {
    text("span", "text-xs rounded-full", label).css("padding", "4px 8px")
}

fn chip(label: &str) -> Element {
    text("span", "text-xs text-gray-500 bg-gray-100 rounded-full", label).css("padding", "4px 8px")
}

fn experience(view: &ResumeView, ctx: &Ctx<'_>) -> Element {
    ctx.section("Work Experience").children(view.experience.iter().map(|exp| {
        ctx.entry()
            .child(
                el("div", "flex justify-between items-start")
                    .css("margin-bottom", "8px")
                    .child(text("h3", "font-semibold text-gray-900", or_empty(&exp.title)))
                    .child(chip(or_empty(&exp.duration))),
            )
            .child(text("p", "text-gray-600 font-medium", or_empty(&exp.company)).css("margin-bottom", "8px"))
            .maybe_child(
                exp.description
                    .as_deref()
                    .map(|d| text("p", "text-gray-700 text-sm", d)),
            )
            .maybe_child(
                (!exp.achievements.is_empty())
                    .then(|| bullet_list("list-disc text-sm text-gray-700", &exp.achievements)),
            )
    }))
}

fn education(view: &ResumeView, ctx: &Ctx<'_>) -> Element {
    ctx.section("Education").children(view.education.iter().map(|edu| {
        ctx.entry()
            .child(
                el("div", "flex justify-between items-start")
                    .css("margin-bottom", "8px")
                    .child(text("h3", "font-semibold text-gray-900", or_empty(&edu.degree)))
                    .child(chip(or_empty(&edu.year))),
            )
            .child(text("p", "text-gray-600 font-medium", or_empty(&edu.institution)).css("margin-bottom", "8px"))
            .maybe_child(
                edu.major
                    .as_deref()
                    .map(|m| text("p", "text-gray-700 text-sm", format!("Major: {m}"))),
            )
            .maybe_child((!edu.highlights.is_empty()).then(|| {
                bullet_list("list-disc text-sm text-gray-700", &edu.highlights).css("margin-top", "8px")
            }))
    }))
}

fn skills_section(skills: &Skills, ctx: &Ctx<'_>) -> Element {
    let filled = |s: &String| {
        badge(s)
            .css("background-color", ctx.secondary)
            .css("color", "#ffffff")
    };
    let section = ctx.section("Skills");

    match skills {
        Skills::Untyped(list) => section.child(el("div", "flex flex-wrap gap-2").children(list.iter().map(filled))),
        Skills::Categorized { technical, soft, languages } => {
            let group = |title: &str, badges: Vec<Element>| {
                (!badges.is_empty()).then(|| {
                    el("div", "")
                        .child(text("h3", "font-medium text-gray-900", title).css("margin-bottom", "12px"))
                        .child(el("div", "flex flex-wrap gap-2").children(badges))
                })
            };
            let outlined = |s: &String, border: &str, color: &str| {
                badge(s)
                    .css("border", format!("1px solid {border}"))
                    .css("color", color)
            };

            section.child(
                el("div", "grid grid-cols-3 gap-6")
                    .maybe_child(group("Technical Skills", technical.iter().map(filled).collect()))
                    .maybe_child(group(
                        "Soft Skills",
                        soft.iter().map(|s| outlined(s, "#d1d5db", "#374151")).collect(),
                    ))
                    .maybe_child(group(
                        "Languages",
                        languages.iter().map(|s| outlined(s, "#93c5fd", "#1d4ed8")).collect(),
                    )),
            )
        }
    }
}

fn projects(view: &ResumeView, ctx: &Ctx<'_>) -> Element {
    ctx.section("Projects").children(view.projects.iter().map(|project| {
        ctx.entry()
            .child(text("h3", "font-semibold text-gray-900", or_empty(&project.title)).css("margin-bottom", "8px"))
            .maybe_child(
                project
                    .description
                    .as_deref()
                    .map(|d| text("p", "text-gray-700 text-sm", d).css("margin-bottom", "8px")),
            )
            .maybe_child((!project.technologies.is_empty()).then(|| {
                el("div", "flex flex-wrap gap-2")
                    .css("margin-bottom", "8px")
                    .children(project.technologies.iter().map(|t| {
                        badge(t).css("border", "1px solid #c4b5fd").css("color", "#6d28d9")
                    }))
            }))
            .maybe_child(
                (!project.impact.is_empty())
                    .then(|| bullet_list("list-disc text-sm text-gray-700", &project.impact)),
            )
    }))
}

fn organizations(view: &ResumeView, ctx: &Ctx<'_>) -> Element {
    ctx.section("Organizations & Activities").children(view.organizations.iter().map(|org| {
        ctx.entry()
            .child(
                el("div", "flex justify-between items-start")
                    .css("margin-bottom", "8px")
                    .child(text("h3", "font-semibold text-gray-900", or_empty(&org.role)))
                    .child(chip(or_empty(&org.duration))),
            )
            .child(text("p", "text-gray-600 font-medium", or_empty(&org.organization)).css("margin-bottom", "8px"))
            .maybe_child(
                org.description
                    .as_deref()
                    .map(|d| text("p", "text-gray-700 text-sm", d)),
            )
    }))
}

fn raw_dump(view: &ResumeView) -> Element {
    let pretty = serde_json::to_string_pretty(&view.raw).unwrap_or_else(|_| view.raw.to_string());
    el("div", "bg-gray-50 rounded-lg")
        .css("padding", "24px")
        .child(
            text("p", "text-gray-600", "No structured content found. Showing raw data:")
                .css("margin-bottom", "16px"),
        )
        .child(
            Element::new("details")
                .child(text("summary", "", "Show raw data").css("color", "#2563eb"))
                .child(text("pre", "text-xs text-gray-500", pretty).css("margin-top", "8px")),
        )
}
