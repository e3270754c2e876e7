//! The canonical ATS rule set. Order matters: it is both the evaluation
//! order and the order suggestions are reported in.

use serde::Serialize;

use crate::models::resume::ResumeDocument;
use crate::scoring::heuristics::{contains_action_verb, trimmed_len};

/// A single scored predicate over the resume.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub points: u32,
    pub suggestion: &'static str,
    pub check: fn(&ResumeDocument) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("points", &self.points)
            .finish()
    }
}

/// Describes a rule without its predicate, for listing over the API.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub points: u32,
    pub suggestion: &'static str,
}

impl From<&Rule> for RuleInfo {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            points: rule.points,
            suggestion: rule.suggestion,
        }
    }
}

const SUMMARY_MIN_CHARS: usize = 50;
const EXPERIENCE_DESC_MIN_CHARS: usize = 5;
const MIN_SKILLS: usize = 5;

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn has_name(doc: &ResumeDocument) -> bool {
    present(&doc.personal.name)
}

fn has_email(doc: &ResumeDocument) -> bool {
    present(&doc.personal.email)
}

fn has_phone(doc: &ResumeDocument) -> bool {
    present(&doc.personal.phone)
}

fn has_linkedin(doc: &ResumeDocument) -> bool {
    present(&doc.personal.linkedin)
}

fn has_github(doc: &ResumeDocument) -> bool {
    present(&doc.personal.github)
}

fn summary_long_enough(doc: &ResumeDocument) -> bool {
    trimmed_len(&doc.personal.summary) > SUMMARY_MIN_CHARS
}

fn summary_uses_action_verbs(doc: &ResumeDocument) -> bool {
    contains_action_verb(&doc.personal.summary)
}

fn has_described_experience(doc: &ResumeDocument) -> bool {
    doc.experience
        .iter()
        .any(|e| trimmed_len(&e.desc) > EXPERIENCE_DESC_MIN_CHARS)
}

fn has_education(doc: &ResumeDocument) -> bool {
    !doc.education.is_empty()
}

fn has_project(doc: &ResumeDocument) -> bool {
    !doc.projects.is_empty()
}

fn has_enough_skills(doc: &ResumeDocument) -> bool {
    doc.skills.total() >= MIN_SKILLS
}

pub const DEFAULT_RULES: &[Rule] = &[
    Rule {
        id: "name",
        points: 10,
        suggestion: "Add your full name",
        check: has_name,
    },
    Rule {
        id: "email",
        points: 10,
        suggestion: "Add a professional email",
        check: has_email,
    },
    Rule {
        id: "phone",
        points: 5,
        suggestion: "Add your phone number",
        check: has_phone,
    },
    Rule {
        id: "linkedin",
        points: 5,
        suggestion: "Link your LinkedIn profile",
        check: has_linkedin,
    },
    Rule {
        id: "github",
        points: 5,
        suggestion: "Link your GitHub repository",
        check: has_github,
    },
    Rule {
        id: "summary_length",
        points: 10,
        suggestion: "Write a summary (min. 50 characters)",
        check: summary_long_enough,
    },
    Rule {
        id: "summary_action_verbs",
        points: 10,
        suggestion: "Use action verbs in summary (built, led, etc.)",
        check: summary_uses_action_verbs,
    },
    Rule {
        id: "experience",
        points: 15,
        suggestion: "Add work experience with descriptions",
        check: has_described_experience,
    },
    Rule {
        id: "education",
        points: 10,
        suggestion: "Add your education background",
        check: has_education,
    },
    Rule {
        id: "projects",
        points: 10,
        suggestion: "Add at least one project",
        check: has_project,
    },
    Rule {
        id: "skills",
        points: 10,
        suggestion: "Target at least 5 skills",
        check: has_enough_skills,
    },
];
