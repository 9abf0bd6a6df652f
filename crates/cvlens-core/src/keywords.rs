//! Keyword classification.
//!
//! Counts lexicon hits across a resume and finds job-description terms the
//! resume never mentions.

use std::collections::HashSet;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::aggregate::ResumeText;
use crate::text;
use crate::word_lists::{ACTION_VERBS, SOFT_SKILLS, TECHNICAL_KEYWORDS, WEAK_PHRASES};

/// Maximum number of missing keywords reported.
pub const MAX_MISSING_KEYWORDS: usize = 10;

/// Lexicon category a single word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Strong action verb ("spearheaded").
    ActionVerb,
    /// Technology, tool, or platform ("kubernetes").
    TechnicalSkill,
    /// Interpersonal skill ("leadership").
    SoftSkill,
}

/// Classify one case-folded word.
///
/// A word lands in at most one category; action verbs take priority, then
/// technical terms, then soft skills.
pub fn classify_word(word: &str) -> Option<KeywordCategory> {
    if ACTION_VERBS.contains(word) {
        Some(KeywordCategory::ActionVerb)
    } else if TECHNICAL_KEYWORDS.contains(word) {
        Some(KeywordCategory::TechnicalSkill)
    } else if SOFT_SKILLS.contains(word) {
        Some(KeywordCategory::SoftSkill)
    } else {
        None
    }
}

/// Whether a word belongs to the skill vocabulary (technical or soft).
pub fn is_skill_term(word: &str) -> bool {
    matches!(
        classify_word(word),
        Some(KeywordCategory::TechnicalSkill | KeywordCategory::SoftSkill)
    )
}

/// Lexicon hit counts summed over a whole resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    /// Action verb occurrences.
    pub action_verbs: usize,
    /// Technical keyword occurrences.
    pub technical_skills: usize,
    /// Soft skill occurrences.
    pub soft_skills: usize,
}

/// Count lexicon occurrences across all aggregated resume text.
#[tracing::instrument(skip_all)]
pub fn count_keywords(resume: &ResumeText) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for word in resume.words() {
        match classify_word(&word) {
            Some(KeywordCategory::ActionVerb) => counts.action_verbs += 1,
            Some(KeywordCategory::TechnicalSkill) => counts.technical_skills += 1,
            Some(KeywordCategory::SoftSkill) => counts.soft_skills += 1,
            None => {}
        }
    }
    tracing::debug!(
        action_verbs = counts.action_verbs,
        technical_skills = counts.technical_skills,
        soft_skills = counts.soft_skills,
        "keywords counted"
    );
    counts
}

/// Case-insensitive substring matcher for [`WEAK_PHRASES`].
pub struct WeakPhraseMatcher {
    automaton: AhoCorasick,
}

static WEAK_PHRASE_MATCHER: LazyLock<WeakPhraseMatcher> = LazyLock::new(|| WeakPhraseMatcher {
    automaton: AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(WEAK_PHRASES)
        .expect("weak phrase patterns are valid"),
});

impl WeakPhraseMatcher {
    /// The shared matcher, built once per process.
    pub fn shared() -> &'static Self {
        &WEAK_PHRASE_MATCHER
    }

    /// Number of non-overlapping weak-phrase matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.automaton.find_iter(text).count()
    }

    /// The distinct weak phrases found in `text`, in lexicon order.
    pub fn phrases_in(&self, text: &str) -> Vec<&'static str> {
        let mut ids: Vec<usize> = self
            .automaton
            .find_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter().map(|id| WEAK_PHRASES[id]).collect()
    }
}

/// Skill-vocabulary terms in the job description that the resume's skills
/// and experience never mention.
///
/// Returned in order of first appearance in the job description,
/// de-duplicated, and capped at [`MAX_MISSING_KEYWORDS`].
pub fn missing_keywords(job_description: &str, resume: &ResumeText) -> Vec<String> {
    let have: HashSet<String> = resume.skill_and_experience_words().into_iter().collect();
    let mut seen = HashSet::new();

    text::extract_words(job_description)
        .into_iter()
        .filter(|w| is_skill_term(w))
        .filter(|w| !have.contains(w))
        .filter(|w| seen.insert(w.clone()))
        .take(MAX_MISSING_KEYWORDS)
        .collect()
}
