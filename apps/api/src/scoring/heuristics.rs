//! Text heuristics over free-text resume fields.
//!
//! These are intentionally coarse. `has_measurable_impact` only looks for a
//! digit, so a year like "2024" counts as impact.

/// Closed vocabulary of verbs recognised as action verbs.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "led",
    "improved",
    "created",
    "optimized",
    "automated",
    "managed",
];

/// True when the trimmed, lower-cased text starts with an action verb.
/// Drives the inline hint under experience and project descriptions.
pub fn has_action_verb(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.starts_with(verb))
}

/// True when the lower-cased text contains an action verb anywhere.
/// Used by the summary scoring rule.
pub fn contains_action_verb(text: &str) -> bool {
    let lower = text.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}

/// True when the text contains at least one ASCII digit.
pub fn has_measurable_impact(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in characters after trimming surrounding whitespace.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
