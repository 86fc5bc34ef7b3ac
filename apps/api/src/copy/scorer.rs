//! Copy Scorer — bag-of-keywords quality heuristic for ad copy.
//!
//! `score` is a pure, total function: any string input (including non-ASCII)
//! produces a full breakdown, and no sub-score ever leaves [0, 100].

use serde::{Deserialize, Serialize};

/// Emotional trigger words. Distinct substring matches, divided by 10.
pub const EMOTION_TRIGGERS: [&str; 16] = [
    "secret",
    "finally",
    "new",
    "weird",
    "shocking",
    "hidden",
    "proven",
    "guarantee",
    "instantly",
    "limited",
    "exclusive",
    "today",
    "now",
    "fast",
    "breakthrough",
    "odd",
];

/// Structural copywriting keywords (AIDA + PAS + offer signals). Divided by 6.
pub const STRUCTURE_KEYWORDS: [&str; 9] = [
    "attention",
    "interest",
    "desire",
    "action",
    "problem",
    "agitate",
    "solution",
    "guarantee",
    "bonus",
];

/// Call-to-action phrases. Distinct substring matches, divided by 3.
pub const CTA_PHRASES: [&str; 12] = [
    "click here",
    "tap here",
    "join now",
    "buy now",
    "order now",
    "get started",
    "sign up",
    "enroll now",
    "start now",
    "act now",
    "claim",
    "grab",
];

/// Timeframe words counted toward the specificity signal.
const TIMEFRAME_WORDS: [&str; 6] = ["day", "days", "week", "weeks", "month", "months"];

/// Weights of the five sub-scores. Must sum to 1.0.
const W_LENGTH: f64 = 0.20;
const W_EMOTION: f64 = 0.25;
const W_STRUCTURE: f64 = 0.20;
const W_CTA: f64 = 0.15;
const W_SPECIFICITY: f64 = 0.20;

/// Full score breakdown for a block of ad copy.
/// Serialized field names match the original report shape (`Score`, `CTA`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyScore {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Length")]
    pub length: f64,
    #[serde(rename = "Emotion")]
    pub emotion: f64,
    #[serde(rename = "Structure")]
    pub structure: f64,
    #[serde(rename = "CTA")]
    pub cta: f64,
    #[serde(rename = "Specificity")]
    pub specificity: f64,
}

impl CopyScore {
    fn zero() -> Self {
        CopyScore {
            score: 0.0,
            length: 0.0,
            emotion: 0.0,
            structure: 0.0,
            cta: 0.0,
            specificity: 0.0,
        }
    }
}

/// Scores a block of ad copy on five weighted heuristics.
///
/// Length is bucketed, not continuous: under 80 words scores 20, 80–1500
/// scores 60, and over 1500 scores 50. The non-monotonic drop for walls of
/// text is intentional policy.
pub fn score(text: &str) -> CopyScore {
    if text.trim().is_empty() {
        return CopyScore::zero();
    }

    let lower = text.to_lowercase();
    let n = word_count(text);

    let length = if n < 80 {
        20.0
    } else if n <= 1500 {
        60.0
    } else {
        50.0
    };

    let emotion = capped_ratio(distinct_matches(&lower, &EMOTION_TRIGGERS), 10.0);
    let structure = capped_ratio(distinct_matches(&lower, &STRUCTURE_KEYWORDS), 6.0);
    let cta = capped_ratio(distinct_matches(&lower, &CTA_PHRASES), 3.0);

    let has_number = text.chars().any(|c| c.is_ascii_digit() || c == '$');
    let specificity_hits =
        (usize::from(has_number) + distinct_matches(&lower, &TIMEFRAME_WORDS)).min(5);
    let specificity = specificity_hits as f64 / 5.0 * 100.0;

    let overall = W_LENGTH * length
        + W_EMOTION * emotion
        + W_STRUCTURE * structure
        + W_CTA * cta
        + W_SPECIFICITY * specificity;

    CopyScore {
        score: round1(overall),
        length,
        emotion: round1(emotion),
        structure: round1(structure),
        cta: round1(cta),
        specificity: round1(specificity),
    }
}

/// Counts maximal runs of word characters (alphanumeric or underscore).
fn word_count(text: &str) -> usize {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .count()
}

/// Counts how many keywords appear at least once in the (lowercased) text.
/// Distinct matches — repeated occurrences of the same keyword count once.
fn distinct_matches(lower_text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower_text.contains(*k)).count()
}

/// count / denominator, capped at 1, scaled to [0, 100].
fn capped_ratio(count: usize, denominator: f64) -> f64 {
    (count as f64 / denominator).min(1.0) * 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
