use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCENT: &str = "#0f766e";

/// Visual template used for the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl Template {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "classic" => Some(Template::Classic),
            "modern" => Some(Template::Modern),
            "minimal" => Some(Template::Minimal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Minimal => "minimal",
        }
    }
}

/// Presentation preferences, persisted next to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub template: Template,
    pub accent: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            template: Template::default(),
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}
