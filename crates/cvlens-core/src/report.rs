//! Analytics result types.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! both CLI JSON output and MCP tool responses. Keys are camelCase to match
//! the editor's document format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityStats;
use crate::sections::SectionScores;

/// Complete analytics for one resume.
///
/// Built fresh on every [`crate::analyze`] call. Compare structurally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    /// Applicant-tracking-system compatibility, 0 to 100.
    pub ats_score: u32,
    /// Mean section completeness, 0 to 100.
    pub completeness: u32,
    /// Relevance to the job description, 0 to 100 (0 without one).
    pub job_match_score: u32,
    /// What the resume already does well.
    pub strengths: Vec<String>,
    /// Actionable suggestions, most important first.
    pub improvements: Vec<String>,
    /// Per-section scores.
    pub section_scores: SectionScores,
    /// Keyword statistics.
    pub keywords: KeywordStats,
    /// Bullet-level writing statistics.
    pub readability: ReadabilityStats,
}

impl AnalyticsResult {
    /// The score a UI leads with: job match when scoring against a posting,
    /// completeness otherwise.
    pub const fn headline_score(&self) -> u32 {
        if self.job_match_score > 0 {
            self.job_match_score
        } else {
            self.completeness
        }
    }
}

/// Keyword statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    /// Action verb occurrences.
    pub action_verbs: usize,
    /// Technical keyword occurrences.
    pub technical_skills: usize,
    /// Soft skill occurrences.
    pub soft_skills: usize,
    /// Job-description terms missing from the resume (at most 10).
    pub missing_keywords: Vec<String>,
}

/// Qualitative band for a 0 to 100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    /// 85 and above.
    Excellent,
    /// 70 to 84.
    Good,
    /// 50 to 69.
    Fair,
    /// Below 50.
    NeedsWork,
}

impl ScoreBand {
    /// Band a score.
    pub const fn from_score(score: u32) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }

    /// Lowest score that falls in this band.
    pub const fn floor(&self) -> u32 {
        match self {
            Self::Excellent => 85,
            Self::Good => 70,
            Self::Fair => 50,
            Self::NeedsWork => 0,
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsWork => "needs work",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
