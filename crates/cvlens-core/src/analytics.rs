//! The scoring pipeline entry point.
//!
//! [`analyze`] runs every stage in order (aggregate → keywords and
//! readability → sections → composite scores and recommendations). It reads
//! the resume, performs no I/O, and cannot fail.

use crate::aggregate::ResumeText;
use crate::keywords;
use crate::readability;
use crate::recommendations::{self, Signals};
use crate::report::{AnalyticsResult, KeywordStats};
use crate::resume::ResumeData;
use crate::scoring;
use crate::sections;

/// Compute analytics for one resume.
///
/// Deterministic: identical input gives structurally identical output.
#[tracing::instrument(skip_all, fields(job_mode = resume.job_description_text().is_some()))]
pub fn analyze(resume: &ResumeData) -> AnalyticsResult {
    let text = ResumeText::collect(resume);

    let counts = keywords::count_keywords(&text);
    let bullets: Vec<&str> = text.bullets().collect();
    let readability = readability::analyze_bullets(&bullets);
    let section_scores = sections::score_sections(resume);

    let ats_score = scoring::ats_score(&section_scores, &counts, &readability);
    let completeness = scoring::completeness(&section_scores);
    let job_description = resume.job_description_text();
    let job_match_score = scoring::job_match_score(resume, &text, ats_score);

    let keyword_stats = KeywordStats {
        action_verbs: counts.action_verbs,
        technical_skills: counts.technical_skills,
        soft_skills: counts.soft_skills,
        missing_keywords: job_description
            .map(|jd| keywords::missing_keywords(jd, &text))
            .unwrap_or_default(),
    };

    let (strengths, improvements) = recommendations::recommend(&Signals {
        sections: &section_scores,
        keywords: &keyword_stats,
        readability: &readability,
        job_match: job_description.map(|_| job_match_score),
    });

    tracing::debug!(ats_score, completeness, job_match_score, "analysis complete");

    AnalyticsResult {
        ats_score,
        completeness,
        job_match_score,
        strengths,
        improvements,
        section_scores,
        keywords: keyword_stats,
        readability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{Description, ExperienceEntry};

    #[test]
    fn empty_resume_does_not_panic() {
        let result = analyze(&ResumeData::default());
        assert_eq!(result.job_match_score, 0);
        assert_eq!(result.readability.bullet_points, 0);
        assert!(result.completeness <= 20);
        assert!(result.strengths.is_empty());
        assert!(!result.improvements.is_empty());
    }

    #[test]
    fn job_mode_fills_missing_keywords() {
        let resume = ResumeData {
            experience: vec![ExperienceEntry {
                role: "Engineer".into(),
                description: Description::from(vec!["Built Python services"]),
                ..Default::default()
            }],
            skills: "Python".into(),
            job_description: "Looking for a Python engineer with Docker and Kubernetes".into(),
            ..Default::default()
        };
        let result = analyze(&resume);
        assert_eq!(result.keywords.missing_keywords, vec!["docker", "kubernetes"]);
        assert!(result.job_match_score > 0);
        assert!(
            result
                .improvements
                .iter()
                .any(|i| i.ends_with("docker, kubernetes"))
        );
    }

    #[test]
    fn completeness_mode_has_no_missing_keywords() {
        let resume = ResumeData {
            skills: "Python".into(),
            job_description: "Docker".into(),
            ..Default::default()
        };
        let result = analyze(&resume);
        assert!(result.keywords.missing_keywords.is_empty());
        assert_eq!(result.job_match_score, 0);
    }
}
