//! Analysis Record - output structure of the content analysis engine.

use serde::{Deserialize, Serialize};

/// Structured, bounded extraction result for one corpus.
///
/// Built once by [`ContentAnalyzer`](super::ContentAnalyzer) and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Capitalised title line from the head of the paper
    pub title: Option<String>,

    /// Canonical subject name
    pub subject: Option<String>,

    /// Section / chapter / unit headings (max 10)
    pub topics: Vec<String>,

    /// Exam questions (max 15)
    pub questions: Vec<String>,

    /// Frequent capitalised terms, most frequent first (max 12)
    pub keywords: Vec<String>,

    /// Representative sentences (max 8)
    pub sentences: Vec<String>,

    /// Representative paragraphs (max 3)
    pub paragraphs: Vec<String>,

    /// Questions found before deduplication and capping
    pub question_count: usize,

    /// First two paragraphs, at most 600 characters
    pub content_summary: String,

    /// Corpus length in characters
    pub character_count: usize,
}

impl AnalysisRecord {
    /// Nothing at all was extracted.
    pub fn is_sparse(&self) -> bool {
        self.title.is_none()
            && self.subject.is_none()
            && self.topics.is_empty()
            && self.questions.is_empty()
            && self.keywords.is_empty()
    }

    /// Estimated page count shown in the guide overview (100 characters a page, rounded).
    pub fn estimated_pages(&self) -> usize {
        (self.character_count + 50) / 100
    }
}
