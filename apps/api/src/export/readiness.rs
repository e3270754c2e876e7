use serde::Serialize;

use crate::models::resume::ResumeDocument;

pub const INCOMPLETE_WARNING: &str =
    "Your resume may look incomplete. Add your name and at least one experience or project.";

/// Advisory pre-export check. Never blocks an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReadiness {
    pub has_name: bool,
    pub has_content: bool,
    pub warning: Option<&'static str>,
}

pub fn check_export_readiness(doc: &ResumeDocument) -> ExportReadiness {
    let has_name = !doc.personal.name.trim().is_empty();
    let has_content = !doc.experience.is_empty() || !doc.projects.is_empty();
    ExportReadiness {
        has_name,
        has_content,
        warning: (!(has_name && has_content)).then_some(INCOMPLETE_WARNING),
    }
}
