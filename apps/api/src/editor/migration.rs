//! Upgrade of persisted resume JSON to the current schema.
//!
//! Two legacy shapes are accepted: `skills` stored as one comma-separated
//! string, and project entries without `techStack` / `liveUrl` / `githubUrl`.
//! `upgrade` is total: anything it cannot interpret becomes an empty value.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::resume::{
    split_comma_list, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillCategory, SkillSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Flat skills string and/or projects missing link fields.
    V0Legacy,
    V1,
}

pub const PROJECT_FIELDS_ADDED_IN_V1: &[&str] = &["techStack", "liveUrl", "githubUrl"];

pub fn detect_version(value: &Value) -> SchemaVersion {
    let skills_is_flat = value.get("skills").map_or(false, Value::is_string);
    let projects_missing_fields = value
        .get("projects")
        .and_then(Value::as_array)
        .map_or(false, |projects| {
            projects.iter().any(|p| {
                PROJECT_FIELDS_ADDED_IN_V1
                    .iter()
                    .any(|field| p.get(field).is_none())
            })
        });

    if skills_is_flat || projects_missing_fields {
        SchemaVersion::V0Legacy
    } else {
        SchemaVersion::V1
    }
}

/// Parses a stored document. Unparseable input is treated as no stored state.
pub fn parse_persisted(raw: &str) -> ResumeDocument {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => upgrade(&value),
        Err(e) => {
            warn!("Ignoring unparseable stored resume: {e}");
            ResumeDocument::default()
        }
    }
}

/// Converts any JSON value into a current-schema document.
pub fn upgrade(value: &Value) -> ResumeDocument {
    let Some(root) = value.as_object() else {
        warn!("Stored resume is not a JSON object; starting empty");
        return ResumeDocument::default();
    };

    if detect_version(value) == SchemaVersion::V0Legacy {
        warn!("Upgrading legacy resume shape to current schema");
    }

    ResumeDocument {
        personal: personal(root.get("personal")),
        experience: entries(root.get("experience"), |e| ExperienceEntry {
            company: text(e.get("company")),
            role: text(e.get("role")),
            duration: text(e.get("duration")),
            desc: text(e.get("desc")),
        }),
        education: entries(root.get("education"), |e| EducationEntry {
            school: text(e.get("school")),
            degree: text(e.get("degree")),
            year: text(e.get("year")),
        }),
        projects: entries(root.get("projects"), |e| ProjectEntry {
            title: text(e.get("title")),
            desc: text(e.get("desc")),
            tech_stack: string_list(e.get("techStack")),
            live_url: text(e.get("liveUrl")),
            github_url: text(e.get("githubUrl")),
        }),
        skills: skills(root.get("skills")),
    }
}

fn personal(value: Option<&Value>) -> PersonalInfo {
    let empty = Map::new();
    let p = value.and_then(Value::as_object).unwrap_or(&empty);
    PersonalInfo {
        name: text(p.get("name")),
        email: text(p.get("email")),
        phone: text(p.get("phone")),
        location: text(p.get("location")),
        summary: text(p.get("summary")),
        github: text(p.get("github")),
        linkedin: text(p.get("linkedin")),
    }
}

fn skills(value: Option<&Value>) -> SkillSet {
    let mut set = SkillSet::default();
    match value {
        Some(Value::String(flat)) => set.replace(SkillCategory::Technical, split_comma_list(flat)),
        Some(Value::Object(groups)) => {
            for category in [
                SkillCategory::Technical,
                SkillCategory::Soft,
                SkillCategory::Tools,
            ] {
                set.replace(category, string_list(groups.get(category.as_str())));
            }
        }
        Some(Value::Array(items)) => {
            set.replace(SkillCategory::Technical, items.iter().map(|v| text(Some(v))))
        }
        _ => {}
    }
    set
}

fn entries<T>(value: Option<&Value>, build: impl Fn(&Map<String, Value>) -> T) -> Vec<T> {
    let empty = Map::new();
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| build(item.as_object().unwrap_or(&empty)))
                .collect()
        })
        .unwrap_or_default()
}

/// Scalar coercion: strings as-is, numbers and bools as text, anything else empty.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| text(Some(v)).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(flat)) => split_comma_list(flat),
        _ => Vec::new(),
    }
}
