//! Views over a `ScoreResult`: the compact meter shown beside the form and
//! the detailed gauge on the preview page.

use serde::Serialize;

use crate::scoring::engine::{ScoreResult, Suggestion, MAX_SCORE};

pub const COMPACT_SUGGESTION_LIMIT: usize = 3;
pub const GAUGE_RADIUS: f64 = 45.0;
pub const SUCCESS_MESSAGE: &str = "Your resume is ATS-ready. Great work!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Strong,
    GettingThere,
    NeedsWork,
}

impl ScoreLevel {
    /// Buckets: above 70 is strong, 41 to 70 is getting there, 40 and below
    /// needs work.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 70 => ScoreLevel::Strong,
            s if s > 40 => ScoreLevel::GettingThere,
            _ => ScoreLevel::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Strong => "Strong Resume",
            ScoreLevel::GettingThere => "Getting There",
            ScoreLevel::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompactView {
    pub score: u32,
    pub fill_percent: f64,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedView {
    pub score: u32,
    pub circumference: f64,
    pub stroke_offset: f64,
    pub level: ScoreLevel,
    pub level_label: &'static str,
    pub suggestions: Vec<Suggestion>,
    pub success_message: Option<&'static str>,
}

pub fn compact_view(result: &ScoreResult) -> CompactView {
    let score = result.score.min(MAX_SCORE);
    CompactView {
        score,
        fill_percent: f64::from(score),
        suggestions: result
            .suggestions
            .iter()
            .take(COMPACT_SUGGESTION_LIMIT)
            .cloned()
            .collect(),
    }
}

pub fn detailed_view(result: &ScoreResult) -> DetailedView {
    let score = result.score.min(MAX_SCORE);
    let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
    let level = ScoreLevel::from_score(score);
    DetailedView {
        score,
        circumference,
        stroke_offset: circumference * (1.0 - f64::from(score) / 100.0),
        level,
        level_label: level.label(),
        suggestions: result.suggestions.clone(),
        success_message: result.suggestions.is_empty().then_some(SUCCESS_MESSAGE),
    }
}
