//! Topic extraction from structural heading lines.
//!
//! Only headings are accepted: keyword-marked sections (`SECTION A: ...`,
//! `Unit 3 ...`), numbered topics and short ALL-CAPS lines.

use regex::Regex;
use std::sync::LazyLock;

use super::corpus::{char_len, RawCorpus};
use super::dedup_capped;

/// Maximum number of topics kept.
pub const MAX_TOPICS: usize = 10;

/// Minimum topic length for generic headings.
pub const MIN_TOPIC_LEN: usize = 10;
/// Minimum topic length when the line carries an explicit SECTION/PART/CHAPTER/UNIT/TOPIC marker.
pub const MIN_MARKED_TOPIC_LEN: usize = 4;
pub const MAX_TOPIC_LEN: usize = 80;

const MIN_LINE_LEN: usize = 10;
const MAX_LINE_LEN: usize = 100;
const MAX_TOPIC_WORDS: usize = 15;

struct HeadingPattern {
    pattern: Regex,
    marked: bool,
}

// Every pattern names the heading text `topic`.
static HEADING_PATTERNS: LazyLock<Vec<HeadingPattern>> = LazyLock::new(|| {
    vec![
        HeadingPattern {
            pattern: Regex::new(
                r"(?i)^(?:SECTION|PART|CHAPTER|UNIT|TOPIC)(?:\s*(?:[IVX]+|[0-9]+)|\s+[A-Z])\b[:.\-\s]*(?P<topic>.+)",
            )
            .expect("Invalid regex: marked heading"),
            marked: true,
        },
        HeadingPattern {
            pattern: Regex::new(
                r"^(?:Section|Part|Chapter|Unit|Topic)\s+(?:[IVX]+|[0-9]+|[A-Z])\b[:.\-\s]*(?P<topic>.+)",
            )
            .expect("Invalid regex: title-case heading"),
            marked: true,
        },
        HeadingPattern {
            pattern: Regex::new(r"^[0-9]+\.\s*(?P<topic>[A-Z][A-Za-z\s]{5,80})$")
                .expect("Invalid regex: numbered topic"),
            marked: false,
        },
        HeadingPattern {
            pattern: Regex::new(r"^(?P<topic>[A-Z][A-Z\s]{8,60})$")
                .expect("Invalid regex: all-caps heading"),
            marked: false,
        },
    ]
});

static NUMERIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid regex: numeric line"));

/// Extract deduplicated topic headings in first-seen order.
pub fn extract_topics(corpus: &RawCorpus<'_>) -> Vec<String> {
    let mut topics = Vec::new();

    for line in corpus.lines().iter().filter(|l| is_candidate_line(l)) {
        for heading in HEADING_PATTERNS.iter() {
            let Some(caps) = heading.pattern.captures(line) else {
                continue;
            };
            let text = caps
                .name("topic")
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().trim())
                .unwrap_or_default();

            if is_acceptable_topic(text, heading.marked) {
                topics.push(text.to_string());
            }
        }
    }

    dedup_capped(topics, MAX_TOPICS)
}

fn is_candidate_line(line: &str) -> bool {
    let len = char_len(line);
    (MIN_LINE_LEN..MAX_LINE_LEN).contains(&len)
        && !line.contains('©')
        && !line.contains("Page")
        && !line.contains("---")
        && !NUMERIC_LINE.is_match(line)
}

fn is_acceptable_topic(topic: &str, marked: bool) -> bool {
    let min_len = if marked {
        MIN_MARKED_TOPIC_LEN
    } else {
        MIN_TOPIC_LEN
    };
    let len = char_len(topic);
    let lower = topic.to_lowercase();

    // marked headings carry a capitalised title; instruction text after a
    // section marker does not
    if marked && !topic.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    (min_len..=MAX_TOPIC_LEN).contains(&len)
        && topic.split(' ').count() <= MAX_TOPIC_WORDS
        && !lower.starts_with("and ")
        && !lower.starts_with("the ")
        && !lower.contains("copyright")
}
