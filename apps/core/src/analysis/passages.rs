//! Representative sentences and paragraphs.
//!
//! Both work on the raw text rather than the line view: sentences routinely
//! wrap across extracted lines, and paragraphs are delimited by the blank
//! lines the line view throws away.

use regex::Regex;
use std::sync::LazyLock;

use super::corpus::char_len;

pub const MAX_SENTENCES: usize = 8;
pub const MAX_PARAGRAPHS: usize = 3;
/// Hard character limit of the content summary.
pub const SUMMARY_MAX_CHARS: usize = 600;

const MIN_SENTENCE_WORDS: usize = 6;
const MAX_SENTENCE_WORDS: usize = 40;
const MIN_PARAGRAPH_LEN: usize = 100;
const MAX_PARAGRAPH_LEN: usize = 800;
const MIN_PARAGRAPH_WORDS: usize = 16;
const SUMMARY_PARAGRAPHS: usize = 2;

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][^.!?]{30,200}[.!?]").expect("Invalid regex: sentence span")
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid regex: paragraph break"));

/// Complete-looking sentences in corpus order.
pub fn extract_sentences(text: &str) -> Vec<String> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| {
            let words = s.split_whitespace().count();
            (MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS).contains(&words)
                && !s.contains('©')
                && !s.to_lowercase().contains("page")
        })
        .take(MAX_SENTENCES)
        .map(str::to_string)
        .collect()
}

/// Blank-line delimited blocks of prose, trimmed.
pub fn extract_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| {
            let len = char_len(p);
            (MIN_PARAGRAPH_LEN..MAX_PARAGRAPH_LEN).contains(&len)
                && p.split_whitespace().count() >= MIN_PARAGRAPH_WORDS
                && !p.contains('©')
        })
        .take(MAX_PARAGRAPHS)
        .map(str::to_string)
        .collect()
}

/// First two paragraphs joined by a blank line, cut at [`SUMMARY_MAX_CHARS`].
///
/// The cut is not word-aware and may end mid-word.
pub fn summarize_paragraphs(paragraphs: &[String]) -> String {
    let joined = paragraphs
        .iter()
        .take(SUMMARY_PARAGRAPHS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n");

    match joined.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => joined[..cut].to_string(),
        None => joined,
    }
}
