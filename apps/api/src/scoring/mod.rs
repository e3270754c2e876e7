// ATS scoring: text heuristics, the ordered rule set and the engine that
// aggregates them. Everything here is pure and synchronous.

pub mod engine;
pub mod guidance;
pub mod handlers;
pub mod heuristics;
pub mod rules;

pub use engine::{ResumeScorer, RuleBasedScorer, ScoreResult};
