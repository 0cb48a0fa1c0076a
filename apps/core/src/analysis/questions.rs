//! Exam question extraction.
//!
//! A line is a question when it carries a literal `?` and either opens with a
//! question/command word or looks like a numbered, lettered or capitalised
//! item.

use regex::Regex;
use std::sync::LazyLock;

use super::corpus::{char_len, RawCorpus};
use super::dedup_capped;

/// Maximum number of questions kept in the record.
pub const MAX_QUESTIONS: usize = 15;

/// Minimum length for lines accepted on item markers alone.
pub const MIN_QUESTION_LEN: usize = 20;
/// Minimum length for lines opening with a question or command word.
pub const MIN_WORDED_QUESTION_LEN: usize = 12;
pub const MAX_QUESTION_LEN: usize = 250;

static QUESTION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(what|who|when|where|why|how|which|can|do|does|is|are|was|were|will|should|could|would|define|explain|describe|calculate|give|state|list|name)",
    )
    .expect("Invalid regex: question words")
});

static ITEM_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"^[A-Z]").expect("Invalid regex: capitalised line"),
        Regex::new(r"^\([a-z]\)").expect("Invalid regex: lettered item"),
        Regex::new(r"^\d+[.)]\s").expect("Invalid regex: numbered item"),
    ]
});

/// Questions found in the corpus, before any cap, with exact duplicates removed.
///
/// The analyzer records the pre-cap length of the undeduplicated list as the
/// question count, so this returns both.
pub fn scan_questions(corpus: &RawCorpus<'_>) -> (Vec<String>, usize) {
    let found: Vec<String> = corpus
        .lines()
        .iter()
        .filter(|line| is_question(line))
        .map(|line| line.to_string())
        .collect();
    let total = found.len();

    (dedup_capped(found, MAX_QUESTIONS), total)
}

/// Capped, deduplicated question list.
pub fn extract_questions(corpus: &RawCorpus<'_>) -> Vec<String> {
    scan_questions(corpus).0
}

fn is_question(line: &str) -> bool {
    if !line.contains('?') {
        return false;
    }

    let len = char_len(line);
    if len > MAX_QUESTION_LEN {
        return false;
    }

    if QUESTION_WORDS.is_match(&line.to_lowercase()) {
        return len >= MIN_WORDED_QUESTION_LEN;
    }

    len >= MIN_QUESTION_LEN && ITEM_MARKERS.iter().any(|marker| marker.is_match(line))
}
