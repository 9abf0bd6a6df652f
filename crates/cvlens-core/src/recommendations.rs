//! Strengths and improvement suggestions.
//!
//! A fixed rule table: every rule checks one threshold and maps it to one
//! strength message (met) or one improvement message (not met). Output order
//! is table order.

use crate::readability::ReadabilityStats;
use crate::report::KeywordStats;
use crate::scoring::{BULLET_WORDS_MAX, METRIC_DENSITY_TARGET};
use crate::sections::SectionScores;

/// Number of missing keywords named in the improvement message.
const MISSING_KEYWORDS_SHOWN: usize = 5;

/// Strength message for rich action-verb usage.
pub const STRONG_ACTION_VERBS: &str = "Strong action verbs throughout your bullets";
/// Improvement message for low metric density.
pub const ADD_METRICS: &str = "Add more quantifiable metrics to your experience bullets";

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    /// Section scores.
    pub sections: &'a SectionScores,
    /// Keyword statistics.
    pub keywords: &'a KeywordStats,
    /// Readability statistics.
    pub readability: &'a ReadabilityStats,
    /// Job-match score, present only in job-match mode.
    pub job_match: Option<u32>,
}

/// Outcome of one rule.
enum Verdict {
    Strength(&'static str),
    Improvement(String),
    Silent,
}

fn either(met: bool, strength: &'static str, improvement: &str) -> Verdict {
    if met {
        Verdict::Strength(strength)
    } else {
        Verdict::Improvement(improvement.to_string())
    }
}

type Rule = fn(&Signals<'_>) -> Verdict;

const RULES: &[Rule] = &[
    |s| {
        either(
            s.sections.summary >= 80.0,
            "Strong professional summary",
            "Expand your professional summary to 2-3 sentences highlighting your key value",
        )
    },
    |s| {
        either(
            s.sections.experience >= 75.0,
            "Detailed work experience descriptions",
            "Add more detail to your experience descriptions",
        )
    },
    |s| {
        either(
            s.readability.metric_density >= METRIC_DENSITY_TARGET,
            "Good use of quantifiable achievements",
            ADD_METRICS,
        )
    },
    |s| {
        either(
            s.keywords.action_verbs >= 10,
            STRONG_ACTION_VERBS,
            "Start more bullets with strong action verbs (e.g., led, built, increased)",
        )
    },
    |s| {
        either(
            s.sections.skills >= 100.0,
            "Comprehensive skills section",
            "List at least 6 relevant skills",
        )
    },
    |s| {
        either(
            s.keywords.technical_skills >= 5,
            "Solid technical keyword coverage",
            "Include more technical skills and tools relevant to your field",
        )
    },
    |s| {
        either(
            s.sections.personal_info >= 100.0,
            "Complete contact information",
            "Complete your contact information (name, email, phone, LinkedIn, location)",
        )
    },
    |s| {
        either(
            s.sections.achievements >= 100.0,
            "Highlighted key achievements",
            "Add at least 3 key achievements",
        )
    },
    |s| {
        if s.readability.weak_words > 0 {
            Verdict::Improvement(
                "Replace weak phrases like \"responsible for\" with direct action statements"
                    .to_string(),
            )
        } else if s.readability.bullet_points > 0 {
            Verdict::Strength("Confident, direct phrasing")
        } else {
            Verdict::Silent
        }
    },
    |s| {
        if s.readability.bullet_points > 0 && s.readability.avg_word_count > BULLET_WORDS_MAX {
            Verdict::Improvement("Shorten long bullets to under 25 words".to_string())
        } else {
            Verdict::Silent
        }
    },
    |s| match s.job_match {
        Some(score) if score >= 70 => Verdict::Strength("Strong alignment with the job description"),
        _ => Verdict::Silent,
    },
    |s| {
        if s.job_match.is_some() && !s.keywords.missing_keywords.is_empty() {
            let shown: Vec<&str> = s
                .keywords
                .missing_keywords
                .iter()
                .take(MISSING_KEYWORDS_SHOWN)
                .map(String::as_str)
                .collect();
            Verdict::Improvement(format!(
                "Add missing keywords from the job description: {}",
                shown.join(", ")
            ))
        } else {
            Verdict::Silent
        }
    },
];

/// Apply every rule and collect `(strengths, improvements)`.
#[tracing::instrument(skip_all)]
pub fn recommend(signals: &Signals<'_>) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for rule in RULES {
        match rule(signals) {
            Verdict::Strength(msg) => strengths.push(msg.to_string()),
            Verdict::Improvement(msg) => improvements.push(msg),
            Verdict::Silent => {}
        }
    }
    (strengths, improvements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        sections: &SectionScores,
        keywords: &KeywordStats,
        readability: &ReadabilityStats,
        job_match: Option<u32>,
    ) -> (Vec<String>, Vec<String>) {
        recommend(&Signals {
            sections,
            keywords,
            readability,
            job_match,
        })
    }

    #[test]
    fn empty_resume_has_no_strengths() {
        let (strengths, improvements) = run(
            &SectionScores::default(),
            &KeywordStats::default(),
            &ReadabilityStats::default(),
            None,
        );
        assert!(strengths.is_empty());
        assert_eq!(improvements.len(), 8);
        assert!(improvements.contains(&ADD_METRICS.to_string()));
    }

    #[test]
    fn strong_resume_has_strengths_in_rule_order() {
        let sections = SectionScores {
            personal_info: 100.0,
            summary: 90.0,
            experience: 100.0,
            education: 100.0,
            skills: 100.0,
            achievements: 100.0,
            projects: 100.0,
            certifications: 50.0,
        };
        let keywords = KeywordStats {
            action_verbs: 12,
            technical_skills: 8,
            soft_skills: 2,
            missing_keywords: Vec::new(),
        };
        let readability = ReadabilityStats {
            avg_word_count: 14.0,
            bullet_points: 10,
            metric_density: 0.4,
            quantifiable_achievements: 4,
            weak_words: 0,
        };
        let (strengths, improvements) = run(&sections, &keywords, &readability, Some(80));
        assert!(improvements.is_empty(), "{improvements:?}");
        assert_eq!(strengths.first().map(String::as_str), Some("Strong professional summary"));
        assert_eq!(
            strengths.last().map(String::as_str),
            Some("Strong alignment with the job description")
        );
        assert!(strengths.contains(&STRONG_ACTION_VERBS.to_string()));
    }

    #[test]
    fn weak_phrases_produce_improvement() {
        let readability = ReadabilityStats {
            avg_word_count: 5.0,
            bullet_points: 1,
            weak_words: 1,
            ..Default::default()
        };
        let (strengths, improvements) = run(
            &SectionScores::default(),
            &KeywordStats::default(),
            &readability,
            None,
        );
        assert!(!strengths.contains(&STRONG_ACTION_VERBS.to_string()));
        assert!(improvements.iter().any(|i| i.contains("weak phrases")));
    }

    #[test]
    fn long_bullets_flagged() {
        let readability = ReadabilityStats {
            avg_word_count: 31.0,
            bullet_points: 2,
            ..Default::default()
        };
        let (_, improvements) = run(
            &SectionScores::default(),
            &KeywordStats::default(),
            &readability,
            None,
        );
        assert!(improvements.iter().any(|i| i.contains("Shorten long bullets")));
    }

    #[test]
    fn missing_keywords_named_only_in_job_mode() {
        let keywords = KeywordStats {
            missing_keywords: ["aws", "docker", "kafka", "redis", "spark", "scala"]
                .map(String::from)
                .to_vec(),
            ..Default::default()
        };
        let (_, without_job) = run(
            &SectionScores::default(),
            &keywords,
            &ReadabilityStats::default(),
            None,
        );
        assert!(!without_job.iter().any(|i| i.contains("missing keywords")));

        let (_, with_job) = run(
            &SectionScores::default(),
            &keywords,
            &ReadabilityStats::default(),
            Some(40),
        );
        let msg = with_job
            .iter()
            .find(|i| i.contains("missing keywords"))
            .expect("missing keywords improvement");
        assert!(msg.ends_with("aws, docker, kafka, redis, spark"));
    }
}
