//! Per-section text streams.
//!
//! [`ResumeText`] is the first pipeline stage: it pulls every free-text field
//! out of a [`ResumeData`] and normalizes descriptions into bullets.

use crate::resume::ResumeData;
use crate::text;

/// Normalized free text of one resume, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeText {
    /// Professional summary.
    pub summary: String,
    /// Experience bullets across all entries, in order.
    pub experience: Vec<String>,
    /// Key achievement lines.
    pub achievements: Vec<String>,
    /// Individual skills.
    pub skills: Vec<String>,
    /// Project bullets across all entries.
    pub projects: Vec<String>,
    /// Leadership bullets across all entries.
    pub leadership: Vec<String>,
}

impl ResumeText {
    /// Collect and normalize all free-text fields of a resume.
    #[tracing::instrument(skip_all)]
    pub fn collect(resume: &ResumeData) -> Self {
        let experience = resume
            .experience
            .iter()
            .flat_map(|e| e.description.bullets())
            .collect();
        let projects = resume
            .projects
            .iter()
            .flat_map(|p| p.description.bullets())
            .collect();
        let leadership = resume
            .leadership
            .iter()
            .flat_map(|l| l.description.bullets())
            .collect();

        Self {
            summary: resume.summary.trim().to_string(),
            experience,
            achievements: resume.key_achievements.bullets(),
            skills: text::split_skills(&resume.skills),
            projects,
            leadership,
        }
    }

    /// Every bullet that counts toward readability statistics.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .chain(&self.leadership)
            .chain(&self.projects)
            .chain(&self.achievements)
            .map(String::as_str)
    }

    /// Case-folded words of all aggregated text.
    pub fn words(&self) -> Vec<String> {
        std::iter::once(self.summary.as_str())
            .chain(self.experience.iter().map(String::as_str))
            .chain(self.achievements.iter().map(String::as_str))
            .chain(self.skills.iter().map(String::as_str))
            .chain(self.projects.iter().map(String::as_str))
            .chain(self.leadership.iter().map(String::as_str))
            .flat_map(text::extract_words)
            .collect()
    }

    /// Case-folded words of the skills and experience text only.
    pub fn skill_and_experience_words(&self) -> Vec<String> {
        self.skills
            .iter()
            .chain(&self.experience)
            .flat_map(|s| text::extract_words(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{Description, ExperienceEntry, ProjectEntry};

    fn sample() -> ResumeData {
        ResumeData {
            summary: "  Backend engineer.  ".into(),
            experience: vec![
                ExperienceEntry {
                    description: Description::from("• Built APIs\n• Cut latency 40%"),
                    ..Default::default()
                },
                ExperienceEntry {
                    description: Description::from(vec!["Led migrations"]),
                    ..Default::default()
                },
            ],
            projects: vec![ProjectEntry {
                description: Description::from("- Wrote a parser"),
                ..Default::default()
            }],
            skills: "Rust, Go".into(),
            key_achievements: Description::from("Speaker at RustConf"),
            ..Default::default()
        }
    }

    #[test]
    fn collects_sections() {
        let text = ResumeText::collect(&sample());
        assert_eq!(text.summary, "Backend engineer.");
        assert_eq!(
            text.experience,
            vec!["Built APIs", "Cut latency 40%", "Led migrations"]
        );
        assert_eq!(text.projects, vec!["Wrote a parser"]);
        assert_eq!(text.skills, vec!["Rust", "Go"]);
        assert_eq!(text.achievements, vec!["Speaker at RustConf"]);
        assert!(text.leadership.is_empty());
    }

    #[test]
    fn bullets_cover_readability_sections() {
        let text = ResumeText::collect(&sample());
        let bullets: Vec<&str> = text.bullets().collect();
        assert_eq!(bullets.len(), 5);
        assert!(!bullets.contains(&"Backend engineer."));
    }

    #[test]
    fn words_are_case_folded() {
        let text = ResumeText::collect(&sample());
        let words = text.words();
        assert_eq!(words.first().map(String::as_str), Some("backend"));
        assert!(words.contains(&"apis".to_string()));
        assert!(words.contains(&"rustconf".to_string()));
    }

    #[test]
    fn skill_and_experience_words_exclude_summary() {
        let text = ResumeText::collect(&sample());
        let words = text.skill_and_experience_words();
        assert!(words.contains(&"rust".to_string()));
        assert!(words.contains(&"latency".to_string()));
        assert!(!words.contains(&"backend".to_string()));
        assert!(!words.contains(&"parser".to_string()));
    }

    #[test]
    fn empty_resume_collects_nothing() {
        let text = ResumeText::collect(&ResumeData::default());
        assert_eq!(text, ResumeText::default());
        assert_eq!(text.bullets().count(), 0);
        assert!(text.words().is_empty());
    }
}
