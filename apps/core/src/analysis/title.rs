//! Paper title detection.
//!
//! Exam papers print their title in capitals near the top; only the head of
//! the corpus is scanned so later all-caps section headers are not mistaken
//! for it.

use regex::Regex;
use std::sync::LazyLock;

use super::corpus::{char_len, RawCorpus};

/// Number of leading lines considered.
pub const TITLE_SCAN_LINES: usize = 20;

const MIN_TITLE_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 100;

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Z\s\-:]+$").expect("Invalid regex: title pattern")
});

/// Returns the first title-like line among the first [`TITLE_SCAN_LINES`] lines.
pub fn extract_title(corpus: &RawCorpus<'_>) -> Option<String> {
    corpus
        .lines()
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| is_title_candidate(line))
        .map(|line| line.to_string())
}

fn is_title_candidate(line: &str) -> bool {
    let len = char_len(line);
    (MIN_TITLE_LEN..MAX_TITLE_LEN).contains(&len) && TITLE_PATTERN.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_capitalised_line_wins() {
        let corpus = RawCorpus::new(
            "Malawi National Examinations Board\nMSCE PHYSICS EXAMINATION\nSECTION A: MECHANICS",
        );
        assert_eq!(
            extract_title(&corpus).as_deref(),
            Some("MSCE PHYSICS EXAMINATION")
        );
    }

    #[test]
    fn test_digits_disqualify() {
        let corpus = RawCorpus::new("PHYSICS PAPER 1\nsome other text");
        assert_eq!(extract_title(&corpus), None);
    }

    #[test]
    fn test_only_head_is_scanned() {
        let mut text: String = (0..TITLE_SCAN_LINES)
            .map(|i| format!("line number {}\n", i))
            .collect();
        text.push_str("LATE CAPITAL HEADING\n");
        assert_eq!(extract_title(&RawCorpus::new(&text)), None);
    }

    #[test]
    fn test_length_bounds() {
        // nine characters is too short, ten is enough
        assert!(!is_title_candidate("GEOGRAPHY"));
        assert!(is_title_candidate("AGRICULTUR"));
        assert!(!is_title_candidate(&"A".repeat(MAX_TITLE_LEN)));
    }
}
