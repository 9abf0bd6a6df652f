//! Per-section completeness scoring.
//!
//! Each of the eight resume sections is scored 0 to 100 with a small,
//! inspectable heuristic. Scores stay unrounded; callers round for display.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resume::ResumeData;
use crate::text;

/// Summary length (characters) that earns full marks.
const SUMMARY_TARGET_CHARS: f64 = 200.0;
/// Skill count that earns full marks.
const SKILLS_TARGET: f64 = 6.0;
/// Achievement count that earns full marks.
const ACHIEVEMENTS_TARGET: f64 = 3.0;
/// Score for an optional section the resume leaves out.
const OPTIONAL_SECTION_ABSENT: f64 = 50.0;

/// Scores for each resume section, each 0.0 to 100.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    /// Contact details.
    pub personal_info: f64,
    /// Professional summary.
    pub summary: f64,
    /// Work experience.
    pub experience: f64,
    /// Education.
    pub education: f64,
    /// Skills list.
    pub skills: f64,
    /// Key achievements.
    pub achievements: f64,
    /// Projects (optional section).
    pub projects: f64,
    /// Certifications (optional section).
    pub certifications: f64,
}

impl SectionScores {
    /// All eight scores in declaration order.
    pub const fn as_array(&self) -> [f64; 8] {
        [
            self.personal_info,
            self.summary,
            self.experience,
            self.education,
            self.skills,
            self.achievements,
            self.projects,
            self.certifications,
        ]
    }

    /// Unweighted mean of all eight scores.
    pub fn mean(&self) -> f64 {
        let scores = self.as_array();
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Score every section of a resume.
#[tracing::instrument(skip_all)]
pub fn score_sections(resume: &ResumeData) -> SectionScores {
    SectionScores {
        personal_info: score_personal_info(resume),
        summary: score_summary(&resume.summary),
        experience: score_experience(resume),
        education: presence(!resume.education.is_empty(), 0.0),
        skills: ratio_score(text::split_skills(&resume.skills).len(), SKILLS_TARGET),
        achievements: ratio_score(resume.key_achievements.bullets().len(), ACHIEVEMENTS_TARGET),
        projects: presence(!resume.projects.is_empty(), OPTIONAL_SECTION_ABSENT),
        certifications: presence(!resume.certifications.is_empty(), OPTIONAL_SECTION_ABSENT),
    }
}

/// 20 points for each filled contact field.
fn score_personal_info(resume: &ResumeData) -> f64 {
    let filled = [
        &resume.full_name,
        &resume.email,
        &resume.phone,
        &resume.linkedin,
        &resume.location,
    ]
    .iter()
    .filter(|field| !field.trim().is_empty())
    .count();
    filled as f64 * 20.0
}

fn score_summary(summary: &str) -> f64 {
    let chars = summary.trim().chars().count() as f64;
    (chars / SUMMARY_TARGET_CHARS * 100.0).clamp(0.0, 100.0)
}

/// 50 for having any experience, +25 past 100 average characters of
/// description, +25 more past 200.
fn score_experience(resume: &ResumeData) -> f64 {
    if resume.experience.is_empty() {
        return 0.0;
    }

    let total: usize = resume
        .experience
        .iter()
        .map(|e| e.description.char_len())
        .sum();
    let avg = total as f64 / resume.experience.len() as f64;

    let mut score = 50.0;
    if avg > 100.0 {
        score += 25.0;
    }
    if avg > 200.0 {
        score += 25.0;
    }
    score
}

fn ratio_score(count: usize, target: f64) -> f64 {
    (count as f64 / target * 100.0).min(100.0)
}

const fn presence(present: bool, absent_score: f64) -> f64 {
    if present { 100.0 } else { absent_score }
}
