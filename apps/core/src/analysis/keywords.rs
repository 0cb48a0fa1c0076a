//! Keyword extraction by capitalised-term frequency.
//!
//! Exam papers capitalise the terms that matter (names of laws, processes,
//! places, people). Capitalised words and multi-word phrases are tallied
//! across the whole corpus, boilerplate is filtered through a stopword list,
//! and terms seen often enough are ranked by frequency.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Exam boilerplate and generic sentence starters that are never keywords.
const STOPWORDS: &[&str] = &[
    "Section", "Question", "Answer", "Marks", "Total", "Name", "Date", "Page", "Time", "Paper",
    "Examination", "Instructions", "Read", "Write", "Show", "Calculate", "Explain", "Describe",
    "State", "Give", "List", "The", "This", "That", "What", "Which", "When", "Where", "Why",
    "How", "Space", "Below", "Above", "Following", "Given", "Then", "There", "They", "These",
    "Those", "Here", "Come", "Only", "Sometimes", "Perhaps", "Maybe", "Also", "Just", "Very",
    "Much", "More", "Most", "Some", "Many",
];

static CAPITALISED_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]{2,}(?:[ \t]+[A-Z][a-z]+)*\b").expect("Invalid regex: capitalised term")
});

/// A ranked keyword with its raw frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The term exactly as it appeared in the corpus
    pub keyword: String,
    /// Number of occurrences
    pub frequency: usize,
}

/// Frequency-ranked extractor for capitalised terms
pub struct KeywordExtractor {
    stopwords: HashSet<&'static str>,
    min_term_length: usize,
    min_frequency: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Maximum number of keywords kept in the record.
    pub const MAX_KEYWORDS: usize = 12;

    /// Create an extractor with the record's settings: terms longer than three
    /// characters, seen at least three times, top twelve.
    pub fn new() -> Self {
        Self::with_config(3, Self::MAX_KEYWORDS)
    }

    /// Create an extractor with a custom frequency floor and cap
    pub fn with_config(min_frequency: usize, max_keywords: usize) -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            min_term_length: 4,
            min_frequency,
            max_keywords,
        }
    }

    fn is_stopword(&self, term: &str) -> bool {
        self.stopwords.contains(term)
    }

    /// Tally terms in first-seen order.
    fn tally(&self, text: &str) -> Vec<(String, usize)> {
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for m in CAPITALISED_TERM.find_iter(text) {
            let term = m.as_str();
            if term.chars().count() < self.min_term_length || self.is_stopword(term) {
                continue;
            }
            match index.get(term) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(term, order.len());
                    order.push((term.to_string(), 1));
                }
            }
        }

        order
    }

    /// Extract ranked keywords: descending frequency, ties in first-seen order.
    pub fn extract(&self, text: &str) -> Vec<KeywordResult> {
        let mut ranked: Vec<KeywordResult> = self
            .tally(text)
            .into_iter()
            .filter(|(_, count)| *count >= self.min_frequency)
            .map(|(keyword, frequency)| KeywordResult { keyword, frequency })
            .collect();

        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(self.max_keywords);
        ranked
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|k| k.keyword).collect()
    }
}
