//! Curated lexicons for resume analysis.
//!
//! Stop words, action verbs, technical keywords, soft skills, and weak
//! phrases. All entries are lowercase; callers case-fold before lookup.
//! The action-verb, technical, and soft-skill sets are pairwise disjoint.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words, filtered out before job-description overlap.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "etc", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
        "just", "like", "may", "me", "more", "most", "must", "my", "no", "nor", "not", "now",
        "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
        "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Strong, resume-appropriate action verbs.
pub static ACTION_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "accelerated",
        "achieved",
        "architected",
        "automated",
        "built",
        "championed",
        "collaborated",
        "coordinated",
        "created",
        "delivered",
        "designed",
        "developed",
        "directed",
        "drove",
        "engineered",
        "established",
        "executed",
        "expanded",
        "generated",
        "implemented",
        "improved",
        "increased",
        "initiated",
        "launched",
        "led",
        "managed",
        "mentored",
        "negotiated",
        "optimized",
        "orchestrated",
        "pioneered",
        "reduced",
        "resolved",
        "scaled",
        "spearheaded",
        "streamlined",
        "transformed",
        "trained",
    ]
    .into_iter()
    .collect()
});

/// Technology, tool, and platform terms.
pub static TECHNICAL_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "agile",
        "analytics",
        "angular",
        "ansible",
        "api",
        "apis",
        "aws",
        "azure",
        "c#",
        "c++",
        "ci/cd",
        "cloud",
        "css",
        "devops",
        "django",
        "docker",
        "excel",
        "figma",
        "flask",
        "gcp",
        "git",
        "github",
        "graphql",
        "hadoop",
        "html",
        "java",
        "javascript",
        "jenkins",
        "jira",
        "kafka",
        "kotlin",
        "kubernetes",
        "linux",
        "microservices",
        "mongodb",
        "mysql",
        "node.js",
        "nodejs",
        "numpy",
        "pandas",
        "php",
        "postgresql",
        "python",
        "pytorch",
        "react",
        "redis",
        "rest",
        "ruby",
        "rust",
        "salesforce",
        "scala",
        "scrum",
        "snowflake",
        "spark",
        "sql",
        "swift",
        "tableau",
        "tensorflow",
        "terraform",
        "typescript",
    ]
    .into_iter()
    .collect()
});

/// Interpersonal and behavioral terms.
pub static SOFT_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "accountability",
        "adaptability",
        "collaboration",
        "collaborative",
        "communication",
        "creativity",
        "critical-thinking",
        "detail-oriented",
        "empathy",
        "flexibility",
        "initiative",
        "interpersonal",
        "leadership",
        "mentorship",
        "negotiation",
        "organizational",
        "ownership",
        "presentation",
        "problem-solving",
        "resilience",
        "stakeholder",
        "teamwork",
        "time-management",
    ]
    .into_iter()
    .collect()
});

/// Hedging phrases that signal passive, low-impact writing.
///
/// Matched as case-insensitive substrings, not tokens.
pub static WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "helped",
    "worked on",
    "assisted with",
    "involved in",
    "participated in",
    "duties included",
    "tasked with",
    "in charge of",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicons_are_lowercase() {
        for set in [&*STOP_WORDS, &*ACTION_VERBS, &*TECHNICAL_KEYWORDS, &*SOFT_SKILLS] {
            for word in set {
                assert_eq!(*word, word.to_lowercase());
            }
        }
        for phrase in WEAK_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn classification_lexicons_are_disjoint() {
        assert!(ACTION_VERBS.is_disjoint(&TECHNICAL_KEYWORDS));
        assert!(ACTION_VERBS.is_disjoint(&SOFT_SKILLS));
        assert!(TECHNICAL_KEYWORDS.is_disjoint(&SOFT_SKILLS));
    }

    #[test]
    fn lexicon_sizes() {
        assert!(STOP_WORDS.len() >= 90);
        assert_eq!(ACTION_VERBS.len(), 38);
        assert!(TECHNICAL_KEYWORDS.len() >= 55);
        assert_eq!(SOFT_SKILLS.len(), 23);
        assert_eq!(WEAK_PHRASES.len(), 9);
    }

    #[test]
    fn lexicon_entries_survive_tokenization() {
        for set in [&*ACTION_VERBS, &*TECHNICAL_KEYWORDS, &*SOFT_SKILLS] {
            for word in set {
                assert_eq!(crate::text::extract_words(word), vec![word.to_string()]);
            }
        }
    }
}
