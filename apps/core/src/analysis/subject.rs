//! Subject detection from a fixed priority table.
//!
//! Narrow names sit ahead of the broad ones that would also match them
//! (`English Literature` before `English`).

use regex::Regex;
use std::sync::LazyLock;

use super::corpus::RawCorpus;

struct SubjectPattern {
    pattern: Regex,
    name: &'static str,
}

fn subject(pattern: &str, name: &'static str) -> SubjectPattern {
    SubjectPattern {
        pattern: Regex::new(pattern).expect("Invalid regex: subject pattern"),
        name,
    }
}

static SUBJECT_PATTERNS: LazyLock<Vec<SubjectPattern>> = LazyLock::new(|| {
    vec![
        subject(r"(?i)physics", "Physics"),
        subject(r"(?i)chemistry", "Chemistry"),
        subject(r"(?i)biology", "Biology"),
        subject(r"(?i)life\s*science", "Life Science"),
        subject(r"(?i)physical\s*science", "Physical Science"),
        subject(r"(?i)mathematics|maths?", "Mathematics"),
        subject(r"(?i)english\s*literature|literature", "English Literature"),
        subject(r"(?i)english", "English"),
        subject(r"(?i)history", "History"),
        subject(r"(?i)geography|geog", "Geography"),
        subject(r"(?i)agriculture|agric", "Agriculture"),
        subject(r"(?i)social\s*studies", "Social Studies"),
        subject(r"(?i)computer\s*science", "Computer Science"),
        subject(r"(?i)business\s*studies", "Business Studies"),
        subject(r"(?i)economics", "Economics"),
        subject(r"(?i)accounting", "Accounting"),
    ]
});

/// Canonical names of every subject the detector can return, in priority order.
pub fn known_subjects() -> Vec<&'static str> {
    SUBJECT_PATTERNS.iter().map(|s| s.name).collect()
}

/// Scans lines in order; on the first line where any pattern matches, returns
/// the first matching table entry.
pub fn detect_subject(corpus: &RawCorpus<'_>) -> Option<String> {
    corpus.lines().iter().find_map(|line| {
        SUBJECT_PATTERNS
            .iter()
            .find(|s| s.pattern.is_match(line))
            .map(|s| s.name.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        detect_subject(&RawCorpus::new(text))
    }

    #[test]
    fn test_first_line_with_a_match_wins() {
        assert_eq!(
            detect("Candidate number\nBIOLOGY PAPER II\nChemistry appendix").as_deref(),
            Some("Biology")
        );
    }

    #[test]
    fn test_literature_before_english() {
        assert_eq!(
            detect("English Literature paper").as_deref(),
            Some("English Literature")
        );
        assert_eq!(detect("English Language").as_deref(), Some("English"));
    }

    #[test]
    fn test_table_order_within_a_line() {
        // both Physics and Chemistry appear; Physics is earlier in the table
        assert_eq!(
            detect("Chemistry and Physics combined").as_deref(),
            Some("Physics")
        );
        assert_eq!(detect("Physical Science").as_deref(), Some("Physical Science"));
    }

    #[test]
    fn test_no_subject() {
        assert_eq!(detect("Answer all questions in the space provided"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn test_known_subjects_listed_in_priority_order() {
        let subjects = known_subjects();
        assert_eq!(subjects.len(), 16);
        assert_eq!(subjects[0], "Physics");
        let lit = subjects.iter().position(|s| *s == "English Literature").unwrap();
        let eng = subjects.iter().position(|s| *s == "English").unwrap();
        assert!(lit < eng);
    }
}
