//! Line classifier front end.
//!
//! Splits raw extracted text into the ordered sequence of trimmed, non-empty
//! lines every extractor scans. Source layout is gone by the time text gets
//! here, so line order is the only structure left.

/// A borrowed view over one corpus string and its non-empty lines.
#[derive(Debug, Clone)]
pub struct RawCorpus<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> RawCorpus<'a> {
    /// Build the line view for `text`.
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Self { text, lines }
    }

    /// The untouched input, for extractors that work across line breaks.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Trimmed non-empty lines in source order.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Corpus length in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Character length of a line. Length thresholds across the extractors are
/// expressed in characters, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
