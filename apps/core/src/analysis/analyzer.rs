//! Content Analyzer - main orchestrator for the analysis module.
//!
//! Runs every extractor as an independent pass over the same corpus and
//! assembles the bounded [`AnalysisRecord`]. No extractor sees another's
//! output, so running order only matters for the first-match rules inside
//! each extractor.

use tracing::debug;

use super::corpus::RawCorpus;
use super::keywords::KeywordExtractor;
use super::passages::{extract_paragraphs, extract_sentences, summarize_paragraphs};
use super::questions::scan_questions;
use super::record::AnalysisRecord;
use super::subject::detect_subject;
use super::title::extract_title;
use super::topics::extract_topics;

/// Main analyzer that orchestrates all extractors
pub struct ContentAnalyzer {
    keyword_extractor: KeywordExtractor,
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentAnalyzer {
    /// Create a new analyzer with the standard extractor settings
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Analyze raw extracted text. Never fails: empty or noisy input yields a
    /// record with empty or absent fields.
    pub fn analyze(&self, text: &str) -> AnalysisRecord {
        let corpus = RawCorpus::new(text);

        let (questions, question_count) = scan_questions(&corpus);
        let paragraphs = extract_paragraphs(corpus.text());
        let content_summary = summarize_paragraphs(&paragraphs);

        let record = AnalysisRecord {
            title: extract_title(&corpus),
            subject: detect_subject(&corpus),
            topics: extract_topics(&corpus),
            questions,
            keywords: self.keyword_extractor.extract_keywords(corpus.text()),
            sentences: extract_sentences(corpus.text()),
            paragraphs,
            question_count,
            content_summary,
            character_count: corpus.char_count(),
        };

        debug!(
            lines = corpus.lines().len(),
            topics = record.topics.len(),
            questions = record.question_count,
            keywords = record.keywords.len(),
            subject = record.subject.as_deref().unwrap_or("-"),
            "Content analysis complete"
        );

        record
    }
}

/// Analyze `text` with a default [`ContentAnalyzer`].
pub fn analyze_content(text: &str) -> AnalysisRecord {
    ContentAnalyzer::new().analyze(text)
}
