//! Inline writing hints shown next to form fields. Advisory only, they never
//! affect the score.

use serde::Serialize;

use crate::models::resume::{ListKind, ResumeDocument};
use crate::scoring::heuristics::{has_action_verb, has_measurable_impact, word_count};

const SUMMARY_MIN_WORDS: usize = 40;
const SUMMARY_MAX_WORDS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingHint {
    StartWithActionVerb,
    AddMeasurableImpact,
    SummaryTooShort,
    SummaryTooLong,
}

impl WritingHint {
    pub fn message(&self) -> &'static str {
        match self {
            WritingHint::StartWithActionVerb => {
                "Start with a strong action verb (Built, Led, Designed, Improved...)"
            }
            WritingHint::AddMeasurableImpact => {
                "Add measurable impact (numbers, percentages, scale)"
            }
            WritingHint::SummaryTooShort => "Expand your summary to at least 40 words",
            WritingHint::SummaryTooLong => "Trim your summary to at most 120 words",
        }
    }
}

/// Hints for a single experience or project description.
pub fn entry_guidance(desc: &str) -> Vec<WritingHint> {
    if desc.trim().is_empty() {
        return vec![];
    }
    let mut hints = Vec::new();
    if !has_action_verb(desc) {
        hints.push(WritingHint::StartWithActionVerb);
    }
    if !has_measurable_impact(desc) {
        hints.push(WritingHint::AddMeasurableImpact);
    }
    hints
}

pub fn summary_guidance(summary: &str) -> Vec<WritingHint> {
    match word_count(summary) {
        0 => vec![],
        n if n < SUMMARY_MIN_WORDS => vec![WritingHint::SummaryTooShort],
        n if n > SUMMARY_MAX_WORDS => vec![WritingHint::SummaryTooLong],
        _ => vec![],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HintView {
    pub hint: WritingHint,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryGuidance {
    pub kind: ListKind,
    pub index: usize,
    pub hints: Vec<HintView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentGuidance {
    pub summary: Vec<HintView>,
    pub entries: Vec<EntryGuidance>,
}

fn views(hints: Vec<WritingHint>) -> Vec<HintView> {
    hints
        .into_iter()
        .map(|hint| HintView {
            hint,
            message: hint.message(),
        })
        .collect()
}

/// Collects hints for the summary and every experience/project entry that
/// has at least one hint.
pub fn document_guidance(doc: &ResumeDocument) -> DocumentGuidance {
    let experience = doc
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| (ListKind::Experience, i, e.desc.as_str()));
    let projects = doc
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| (ListKind::Projects, i, p.desc.as_str()));

    let entries = experience
        .chain(projects)
        .filter_map(|(kind, index, desc)| {
            let hints = entry_guidance(desc);
            (!hints.is_empty()).then(|| EntryGuidance {
                kind,
                index,
                hints: views(hints),
            })
        })
        .collect();

    DocumentGuidance {
        summary: views(summary_guidance(&doc.personal.summary)),
        entries,
    }
}
