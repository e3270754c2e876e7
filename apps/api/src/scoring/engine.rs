//! ATS scoring engine — evaluates an ordered rule set against a resume.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; the default backend is
//! `RuleBasedScorer` over `DEFAULT_RULES`.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;
use crate::scoring::rules::{Rule, RuleInfo, DEFAULT_RULES};

pub const MAX_SCORE: u32 = 100;

/// Remediation text for a failed rule, with the points it would add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub points: u32,
}

/// Output of one evaluation. Suggestions follow rule order, not points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub suggestions: Vec<Suggestion>,
}

pub trait ResumeScorer: Send + Sync {
    fn score(&self, doc: &ResumeDocument) -> ScoreResult;

    /// Rules in evaluation order.
    fn rules(&self) -> Vec<RuleInfo>;
}

#[derive(Debug, Clone)]
pub struct RuleBasedScorer {
    rules: Vec<Rule>,
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }
}

impl RuleBasedScorer {
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl ResumeScorer for RuleBasedScorer {
    fn score(&self, doc: &ResumeDocument) -> ScoreResult {
        evaluate(&self.rules, doc)
    }

    fn rules(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(RuleInfo::from).collect()
    }
}

/// Sums points of passing rules (capped at `MAX_SCORE`) and collects a
/// suggestion for every failing rule.
pub fn evaluate(rules: &[Rule], doc: &ResumeDocument) -> ScoreResult {
    let mut earned: u32 = 0;
    let mut suggestions = Vec::new();

    for rule in rules {
        if (rule.check)(doc) {
            earned = earned.saturating_add(rule.points);
        } else {
            suggestions.push(Suggestion {
                text: rule.suggestion.to_string(),
                points: rule.points,
            });
        }
    }

    ScoreResult {
        score: earned.min(MAX_SCORE),
        suggestions,
    }
}
