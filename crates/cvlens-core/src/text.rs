//! Text processing utilities.
//!
//! Bullet normalization, skill splitting, and word extraction shared by every
//! scoring stage. Bullet splitting lives here and nowhere else, so the counts
//! behind a score always agree with the bullets a user sees.

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::sync::LazyLock;

use crate::word_lists::{ACTION_VERBS, SOFT_SKILLS, TECHNICAL_KEYWORDS};

/// Leading bullet marker (`•`, `-`, `*`) plus any whitespace after it.
static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[•\-*]\s*").expect("valid regex"));

/// Split a newline-delimited description into bullets.
///
/// Strips one leading bullet marker from each line, trims, and drops blank
/// lines. Order is preserved.
pub fn split_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| BULLET_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Normalize a list-form description: trim entries and drop blank ones.
pub fn clean_bullets(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split the comma-separated skills string into individual skills.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Spaced spellings of hyphenated lexicon terms ("problem solving"), mapped
/// back to their lexicon form so they tokenize as one word.
struct HyphenatedTerms {
    automaton: AhoCorasick,
    replacements: Vec<&'static str>,
}

static HYPHENATED_TERMS: LazyLock<HyphenatedTerms> = LazyLock::new(|| {
    let mut replacements: Vec<&'static str> = SOFT_SKILLS
        .iter()
        .chain(TECHNICAL_KEYWORDS.iter())
        .copied()
        .filter(|term| term.contains('-'))
        .collect();
    replacements.sort_unstable();
    let patterns: Vec<String> = replacements.iter().map(|t| t.replace('-', " ")).collect();
    HyphenatedTerms {
        automaton: AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .expect("hyphenated term patterns are valid"),
        replacements,
    }
});

fn is_lexicon_term(word: &str) -> bool {
    ACTION_VERBS.contains(word) || TECHNICAL_KEYWORDS.contains(word) || SOFT_SKILLS.contains(word)
}

fn trim_word(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
}

/// Extract case-folded words from text.
///
/// Splits on whitespace and strips surrounding punctuation. Characters that
/// show up inside technology names (`c++`, `c#`, `node.js`) survive, but a
/// trailing period or comma does not. Slash compounds (`react/redux`) split
/// into their parts unless the whole compound is a lexicon term (`ci/cd`),
/// and spaced forms of hyphenated lexicon terms (`problem solving`) come out
/// as the single lexicon word.
pub fn extract_words(text: &str) -> Vec<String> {
    let terms = &*HYPHENATED_TERMS;
    let text = terms.automaton.replace_all(text, &terms.replacements);

    let mut words = Vec::new();
    for raw in text.split_whitespace() {
        let word = trim_word(raw).to_lowercase();
        if word.is_empty() {
            continue;
        }
        if word.contains('/') && !is_lexicon_term(&word) {
            words.extend(
                word.split('/')
                    .map(trim_word)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string),
            );
        } else {
            words.push(word);
        }
    }
    words
}

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
