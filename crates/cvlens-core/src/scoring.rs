//! Composite scoring: ATS score, completeness, and job match.
//!
//! # ATS score
//!
//! Out of 100, deliberately strict so an unremarkable resume lands in the
//! 60s rather than near the top:
//!
//! | Component | Points | Rule |
//! |-----------|--------|------|
//! | Structure | 40 | weighted section scores |
//! | Action verbs | 15 | capped at 15 occurrences |
//! | Technical skills | 10 | capped at 10 occurrences |
//! | Soft skills | 5 | capped at 5 occurrences |
//! | Metric density | 15 | target 30% of bullets |
//! | Bullet length | 10 | full marks for 10 to 25 words |
//! | Bullet volume | 5 | capped at 8 bullets |
//! | Weak phrases | −15 | −3 per match |
//!
//! # Job match
//!
//! 70% relevance against the posting (token overlap plus skill coverage),
//! 30% the ATS score.

use std::collections::HashSet;

use crate::aggregate::ResumeText;
use crate::keywords::{KeywordCounts, is_skill_term};
use crate::readability::ReadabilityStats;
use crate::resume::ResumeData;
use crate::sections::SectionScores;
use crate::text;
use crate::word_lists::STOP_WORDS;

/// Section weights for the structure component, in [`SectionScores::as_array`] order.
const SECTION_WEIGHTS: [f64; 8] = [0.15, 0.15, 0.30, 0.10, 0.15, 0.10, 0.025, 0.025];

const STRUCTURE_POINTS: f64 = 40.0;
const ACTION_VERB_CAP: usize = 15;
const TECHNICAL_CAP: usize = 10;
const SOFT_SKILL_CAP: usize = 5;
/// Share of bullets that should carry a metric.
pub const METRIC_DENSITY_TARGET: f64 = 0.3;
const METRIC_POINTS: f64 = 15.0;
/// Ideal bullet length band, in words.
pub const BULLET_WORDS_MIN: f64 = 10.0;
/// Upper end of the ideal bullet length band.
pub const BULLET_WORDS_MAX: f64 = 25.0;
const BULLET_LENGTH_POINTS: f64 = 10.0;
const BULLET_VOLUME_TARGET: usize = 8;
const BULLET_VOLUME_POINTS: f64 = 5.0;
const WEAK_PHRASE_PENALTY: f64 = 3.0;
const WEAK_PHRASE_PENALTY_MAX: f64 = 15.0;

/// Share of distinct job-description terms that counts as full coverage.
const OVERLAP_FOR_FULL_COVERAGE: f64 = 0.5;

/// Round and clamp a raw score to 0..=100.
fn to_percent(raw: f64) -> u32 {
    raw.round().clamp(0.0, 100.0) as u32
}

/// `min(count, cap) / cap * points`.
fn capped(count: usize, cap: usize, points: f64) -> f64 {
    count.min(cap) as f64 / cap as f64 * points
}

/// Mean of all section scores, rounded.
pub fn completeness(sections: &SectionScores) -> u32 {
    to_percent(sections.mean())
}

/// Compute the ATS compatibility score.
#[tracing::instrument(skip_all)]
pub fn ats_score(
    sections: &SectionScores,
    keywords: &KeywordCounts,
    readability: &ReadabilityStats,
) -> u32 {
    let structure: f64 = sections
        .as_array()
        .iter()
        .zip(SECTION_WEIGHTS)
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        / 100.0
        * STRUCTURE_POINTS;

    let keyword_points = capped(keywords.action_verbs, ACTION_VERB_CAP, 15.0)
        + capped(keywords.technical_skills, TECHNICAL_CAP, 10.0)
        + capped(keywords.soft_skills, SOFT_SKILL_CAP, 5.0);

    let metric_points =
        (readability.metric_density / METRIC_DENSITY_TARGET).min(1.0) * METRIC_POINTS;
    let readability_points = metric_points
        + bullet_length_points(readability)
        + capped(
            readability.bullet_points,
            BULLET_VOLUME_TARGET,
            BULLET_VOLUME_POINTS,
        );

    let penalty =
        (readability.weak_words as f64 * WEAK_PHRASE_PENALTY).min(WEAK_PHRASE_PENALTY_MAX);

    let raw = structure + keyword_points + readability_points - penalty;
    tracing::debug!(
        structure,
        keyword_points,
        readability_points,
        penalty,
        "ats components"
    );
    to_percent(raw)
}

/// Full marks inside the ideal band, tapering outside it.
fn bullet_length_points(readability: &ReadabilityStats) -> f64 {
    if readability.bullet_points == 0 {
        return 0.0;
    }
    let avg = readability.avg_word_count;
    if avg < BULLET_WORDS_MIN {
        avg / BULLET_WORDS_MIN * BULLET_LENGTH_POINTS
    } else if avg > BULLET_WORDS_MAX {
        (BULLET_LENGTH_POINTS - (avg - BULLET_WORDS_MAX) * 0.5).max(0.0)
    } else {
        BULLET_LENGTH_POINTS
    }
}

/// Distinct content words of a job description (stop words and bare
/// numbers removed).
pub fn job_terms(job_description: &str) -> HashSet<String> {
    text::extract_words(job_description)
        .into_iter()
        .filter(|w| !STOP_WORDS.contains(w.as_str()))
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .collect()
}

/// Compute the job-match score.
///
/// Returns 0 unless the resume carries a usable job description.
#[tracing::instrument(skip_all)]
pub fn job_match_score(resume: &ResumeData, text: &ResumeText, ats_score: u32) -> u32 {
    let Some(job_description) = resume.job_description_text() else {
        return 0;
    };

    let wanted = job_terms(job_description);
    if wanted.is_empty() {
        return 0;
    }

    let mut have: HashSet<String> = text.words().into_iter().collect();
    have.extend(text::extract_words(&resume.job_title));
    for entry in &resume.experience {
        have.extend(text::extract_words(&entry.role));
    }

    let matched = wanted.iter().filter(|w| have.contains(*w)).count();
    let overlap = matched as f64 / wanted.len() as f64;
    let token_coverage = (overlap / OVERLAP_FOR_FULL_COVERAGE).min(1.0);

    let skill_terms: Vec<&String> = wanted.iter().filter(|w| is_skill_term(w)).collect();
    let skill_coverage = if skill_terms.is_empty() {
        token_coverage
    } else {
        skill_terms.iter().filter(|w| have.contains(**w)).count() as f64 / skill_terms.len() as f64
    };

    let relevance = 0.6f64.mul_add(token_coverage, 0.4 * skill_coverage);
    tracing::debug!(overlap, token_coverage, skill_coverage, "job match components");
    to_percent(70.0f64.mul_add(relevance, 30.0 * f64::from(ats_score) / 100.0))
}
