//! # Analysis Module
//!
//! Heuristic, dependency-free text mining over extracted exam-paper text.
//! No language model: every extractor is a regex-driven pattern matcher.
//!
//! ## Components
//! - `corpus`: line view over the raw text
//! - `title`: paper title from the head of the corpus
//! - `subject`: canonical subject from a priority table
//! - `topics`: section / unit / chapter headings
//! - `questions`: exam questions
//! - `keywords`: frequency-ranked capitalised terms
//! - `passages`: representative sentences, paragraphs and the content summary
//! - `record`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod corpus;
pub mod keywords;
pub mod passages;
pub mod questions;
pub mod record;
pub mod subject;
pub mod title;
pub mod topics;

use std::collections::HashSet;

pub use analyzer::{analyze_content, ContentAnalyzer};
pub use corpus::RawCorpus;
pub use keywords::{KeywordExtractor, KeywordResult};
pub use record::AnalysisRecord;

/// Drop exact duplicates keeping first-seen order, then keep at most `cap`.
pub(crate) fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}
