//! Quality gate for provider-generated summaries.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Overall rating of a provider summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

/// A shortcoming found in a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    TooShort,
    MissingStructure,
    MissingExamTips,
    MissingPracticeQuestions,
    MissingTopics,
}

/// Result of [`validate_summary_quality`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub quality: Quality,
    pub issues: Vec<QualityIssue>,
    /// Number of `###` headings, a rough topic count
    pub topic_count: usize,
}

impl QualityReport {
    pub fn is_acceptable(&self) -> bool {
        self.quality != Quality::Low
    }
}

static STRUCTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"###|##|\*\*").expect("Invalid regex: structure markers"));
static EXAM_TIPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)exam tip|technique|strategy|approach").expect("Invalid regex: exam tips")
});
static PRACTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)practice question|example question|try this")
        .expect("Invalid regex: practice questions")
});
static TOPICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)topic|concept|section|chapter").expect("Invalid regex: topic vocabulary")
});

const MAX_MEDIUM_ISSUES: usize = 2;

/// Rate a provider summary. Anything shorter than `min_len` characters is Low;
/// otherwise more than two issues is Low, any issue is Medium.
pub fn validate_summary_quality(summary: &str, min_len: usize) -> QualityReport {
    let mut issues = Vec::new();

    let too_short = summary.chars().count() < min_len;
    if too_short {
        issues.push(QualityIssue::TooShort);
    }
    if !STRUCTURE.is_match(summary) {
        issues.push(QualityIssue::MissingStructure);
    }
    if !EXAM_TIPS.is_match(summary) {
        issues.push(QualityIssue::MissingExamTips);
    }
    if !PRACTICE.is_match(summary) {
        issues.push(QualityIssue::MissingPracticeQuestions);
    }
    if !TOPICS.is_match(summary) {
        issues.push(QualityIssue::MissingTopics);
    }

    // Too short is Low outright, even with two or fewer other issues. The
    // older web gate rated such summaries Medium; that is intentionally dropped.
    let quality = if too_short || issues.len() > MAX_MEDIUM_ISSUES {
        Quality::Low
    } else if !issues.is_empty() {
        Quality::Medium
    } else {
        Quality::High
    };

    QualityReport {
        quality,
        issues,
        topic_count: summary.matches("###").count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "## Overview\n### Topic 1: Forces\nExam tip: show units.\n\
                        ### Topic 2: Energy\nPractice question: calculate the work done.\n";

    #[test]
    fn test_high_quality() {
        let report = validate_summary_quality(GOOD, 50);
        assert_eq!(report.quality, Quality::High);
        assert!(report.issues.is_empty());
        assert_eq!(report.topic_count, 2);
    }

    #[test]
    fn test_short_is_low_even_with_everything_else() {
        let report = validate_summary_quality(GOOD, 10_000);
        assert_eq!(report.quality, Quality::Low);
        assert_eq!(report.issues, vec![QualityIssue::TooShort]);
        assert!(!report.is_acceptable());
    }

    #[test]
    fn test_medium_with_one_or_two_issues() {
        let text = "## Heading\nA concept and a strategy, nothing to practise.";
        let report = validate_summary_quality(text, 10);
        assert_eq!(report.issues, vec![QualityIssue::MissingPracticeQuestions]);
        assert_eq!(report.quality, Quality::Medium);
        assert!(report.is_acceptable());
    }

    #[test]
    fn test_low_with_many_issues() {
        let report = validate_summary_quality("plain words only, nothing useful here", 10);
        assert_eq!(report.quality, Quality::Low);
        assert_eq!(report.issues.len(), 4);
    }
}
