//! Exam paper content analysis and study-guide generation.
//!
//! Raw text extracted from exam papers goes through the heuristic
//! [`analysis`] engine into an [`AnalysisRecord`], which the [`guide`]
//! renderer turns into study notes. The [`summarizer`] can put a generative
//! provider in front of that and falls back to the heuristic guide whenever
//! the provider is missing, failing or below the quality bar.

pub mod analysis;
pub mod config;
pub mod error;
pub mod events;
pub mod guide;
pub mod input;
pub mod summarizer;

#[cfg(test)]
mod tests;

pub use analysis::{analyze_content, AnalysisRecord, ContentAnalyzer};
pub use config::NotesConfig;
pub use error::AppError;
pub use events::{CountingRecorder, Event, EventRecorder, NoopRecorder};
pub use guide::{render, ExamLevel, GuideContext};
pub use summarizer::{Summarizer, Summary, SummaryProvider, SummarySource};

/// Analyze `text` and render the heuristic study guide in one call.
pub fn generate_study_guide(text: &str, context: &GuideContext) -> String {
    render(&analyze_content(text), context)
}
