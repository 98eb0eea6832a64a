//! Typed, lenient projection of resume content for the layout renderer.
//!
//! Parsing never fails: entries with an unexpected shape are skipped and
//! missing fields become `None` or empty lists.

use serde::Serialize;
use serde_json::Value;

use crate::content::accessor::{scalar_text, string_list, ContentAccessor, ThemeColor};
use crate::content::template::TemplateKind;
use crate::models::resume::OwnerProfile;

/// Flat header background used by the minimal layout.
pub const LIGHT_HEADER_BACKGROUND: &str = "#f5f5f5";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub font_family: String,
    /// Colours as stored, without built-in defaults. The fallback layout's
    /// header uses its own neutral defaults when these are absent.
    pub primary_explicit: Option<String>,
    pub secondary_explicit: Option<String>,
}

impl Theme {
    pub fn header_background(&self, kind: TemplateKind) -> String {
        match kind {
            TemplateKind::Minimal => LIGHT_HEADER_BACKGROUND.to_string(),
            _ => format!(
                "linear-gradient(135deg, {}, {})",
                self.primary, self.secondary
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceItem {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub major: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub impact: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationItem {
    pub role: Option<String>,
    pub organization: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// Skills come either grouped by category or, in older records, as a flat list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Skills {
    Categorized {
        technical: Vec<String>,
        soft: Vec<String>,
        languages: Vec<String>,
    },
    Untyped(Vec<String>),
}

impl Skills {
    pub fn technical(&self) -> &[String] {
        match self {
            Skills::Categorized { technical, .. } => technical,
            Skills::Untyped(_) => &[],
        }
    }

    pub fn soft(&self) -> &[String] {
        match self {
            Skills::Categorized { soft, .. } => soft,
            Skills::Untyped(_) => &[],
        }
    }

    pub fn languages(&self) -> &[String] {
        match self {
            Skills::Categorized { languages, .. } => languages,
            Skills::Untyped(_) => &[],
        }
    }

    /// True when no category carries any entry.
    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Categorized { technical, soft, languages } => {
                technical.is_empty() && soft.is_empty() && languages.is_empty()
            }
            Skills::Untyped(list) => list.is_empty(),
        }
    }

    /// Technical followed by soft skills.
    pub fn technical_and_soft(&self) -> Vec<&str> {
        self.technical()
            .iter()
            .chain(self.soft())
            .map(String::as_str)
            .collect()
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(Skills::Untyped(string_list(value))),
            Value::Object(_) => {
                let list = |key: &str| value.get(key).map(string_list).unwrap_or_default();
                Some(Skills::Categorized {
                    technical: list("technical"),
                    soft: list("soft"),
                    languages: list("languages"),
                })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeView {
    /// Header fields from content, falling back to the owner profile.
    pub header: HeaderInfo,
    /// Header as the fallback layout resolves it: owner profile first, then
    /// content, then the legacy `headerInfo` object.
    pub legacy_header: HeaderInfo,
    pub profile_photo: Option<String>,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Option<Skills>,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectItem>,
    pub achievements: Vec<String>,
    pub organizations: Vec<OrganizationItem>,
    pub theme: Theme,
    #[serde(skip)]
    pub raw: Value,
}

impl ResumeView {
    pub(crate) fn from_accessor(acc: &ContentAccessor<'_>, owner: Option<&OwnerProfile>) -> Self {
        let owner_field = |f: fn(&OwnerProfile) -> &Option<String>| {
            owner
                .and_then(|o| f(o).as_deref())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let header_info = |key: &str| {
            acc.raw()
                .get("headerInfo")
                .and_then(|h| h.get(key))
                .and_then(scalar_text)
        };

        let header = HeaderInfo {
            name: acc.get_str("name").or_else(|| owner_field(|o| &o.full_name)),
            title: acc
                .get_str("bestJobTitle")
                .or_else(|| owner_field(|o| &o.position)),
            email: acc.get_str("email").or_else(|| owner_field(|o| &o.email)),
            phone: acc.get_str("phone").or_else(|| owner_field(|o| &o.phone)),
            location: acc
                .get_str("location")
                .or_else(|| owner_field(|o| &o.location)),
        };

        let legacy_header = HeaderInfo {
            name: owner_field(|o| &o.full_name)
                .or_else(|| acc.get_str("name"))
                .or_else(|| header_info("name")),
            title: owner_field(|o| &o.position)
                .or_else(|| acc.get_str("bestJobTitle"))
                .or_else(|| header_info("title")),
            email: header.email.clone(),
            phone: header.phone.clone(),
            location: owner_field(|o| &o.location)
                .or_else(|| header_info("location"))
                .or_else(|| acc.get_str("location")),
        };

        ResumeView {
            header,
            legacy_header,
            profile_photo: acc.get_str("profilePhoto"),
            summary: acc.get_str("summary"),
            experience: items(acc, "experience", parse_experience),
            education: items(acc, "education", parse_education),
            skills: acc.get("skills").and_then(Skills::from_value),
            certifications: acc.get_str_list("certifications"),
            projects: items(acc, "projects", parse_project),
            achievements: acc.get_str_list("achievements"),
            organizations: items(acc, "organizations", parse_organization),
            theme: Theme {
                primary: acc.primary_color(),
                secondary: acc.secondary_color(),
                font_family: acc.font_family(),
                primary_explicit: acc.theme_color(ThemeColor::Primary),
                secondary_explicit: acc.theme_color(ThemeColor::Secondary),
            },
            raw: acc.raw().clone(),
        }
    }

    /// True when none of the core sections carry anything renderable.
    pub fn has_structured_content(&self) -> bool {
        self.summary.is_some()
            || !self.experience.is_empty()
            || !self.education.is_empty()
            || self.skills.is_some()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry parsing
// ────────────────────────────────────────────────────────────────────────────

fn items<T>(acc: &ContentAccessor<'_>, key: &str, parse: fn(&Value) -> Option<T>) -> Vec<T> {
    acc.get(key)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse).collect())
        .unwrap_or_default()
}

fn field(entry: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| entry.get(*k).and_then(scalar_text))
}

/// A list field that tolerates a single string in place of an array.
fn list_field(entry: &Value, key: &str) -> Vec<String> {
    match entry.get(key) {
        Some(v @ Value::Array(_)) => string_list(v),
        Some(v) => scalar_text(v).into_iter().collect(),
        None => Vec::new(),
    }
}

fn parse_experience(entry: &Value) -> Option<ExperienceItem> {
    match entry {
        Value::Object(_) => Some(ExperienceItem {
            title: field(entry, &["title", "position"]),
            company: field(entry, &["company"]),
            duration: field(entry, &["duration", "dates"]),
            description: field(entry, &["description"]),
            achievements: list_field(entry, "achievements"),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(ExperienceItem {
            title: Some(s.clone()),
            ..Default::default()
        }),
        _ => None,
    }
}

fn parse_education(entry: &Value) -> Option<EducationItem> {
    match entry {
        Value::Object(_) => Some(EducationItem {
            degree: field(entry, &["degree"]),
            institution: field(entry, &["institution", "school"]),
            year: field(entry, &["year", "graduationYear"]),
            major: field(entry, &["major"]),
            highlights: list_field(entry, "highlights"),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(EducationItem {
            degree: Some(s.clone()),
            ..Default::default()
        }),
        _ => None,
    }
}

fn parse_project(entry: &Value) -> Option<ProjectItem> {
    entry.is_object().then(|| ProjectItem {
        title: field(entry, &["title", "name"]),
        description: field(entry, &["description"]),
        technologies: list_field(entry, "technologies"),
        impact: list_field(entry, "impact"),
    })
}

fn parse_organization(entry: &Value) -> Option<OrganizationItem> {
    entry.is_object().then(|| OrganizationItem {
        role: field(entry, &["role", "title"]),
        organization: field(entry, &["organization", "company"]),
        duration: field(entry, &["duration"]),
        description: field(entry, &["description"]),
    })
}
