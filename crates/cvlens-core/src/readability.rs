//! Bullet-level readability statistics.
//!
//! Measures how bullets are written rather than what they say: length,
//! how many carry a quantifiable metric, and how much hedging they contain.
//!
//! A bullet is quantifiable when it contains a digit, a `%` sign, or a
//! currency symbol next to a number. Metric density is the share of
//! quantifiable bullets; the scoring stage aims for about 30%.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::keywords::WeakPhraseMatcher;
use crate::text;

/// Digits, percentages, or currency amounts.
static METRIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d|%|[$€£]\s?\d").expect("valid regex"));

/// Writing-quality statistics over every bullet of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityStats {
    /// Mean words per bullet (unrounded).
    pub avg_word_count: f64,
    /// Number of non-blank bullets.
    pub bullet_points: usize,
    /// Share of bullets with a quantifiable metric, 0.0 to 1.0.
    pub metric_density: f64,
    /// Bullets containing a number, percentage, or currency amount.
    pub quantifiable_achievements: usize,
    /// Weak-phrase matches across all bullets.
    pub weak_words: usize,
}

/// Whether a bullet contains a quantifiable metric.
pub fn has_metric(bullet: &str) -> bool {
    METRIC_PATTERN.is_match(bullet)
}

/// Compute readability statistics over normalized bullets.
///
/// Zero bullets yields all-zero statistics.
#[tracing::instrument(skip_all, fields(bullets = bullets.len()))]
pub fn analyze_bullets(bullets: &[&str]) -> ReadabilityStats {
    if bullets.is_empty() {
        return ReadabilityStats::default();
    }

    let matcher = WeakPhraseMatcher::shared();
    let bullet_points = bullets.len();
    let total_words: usize = bullets.iter().map(|b| text::word_count(b)).sum();
    let quantifiable_achievements = bullets.iter().filter(|b| has_metric(b)).count();
    let weak_words = bullets.iter().map(|b| matcher.count(b)).sum();

    ReadabilityStats {
        avg_word_count: total_words as f64 / bullet_points as f64,
        bullet_points,
        metric_density: quantifiable_achievements as f64 / bullet_points as f64,
        quantifiable_achievements,
        weak_words,
    }
}
