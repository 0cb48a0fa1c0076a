//! # Guide Module
//!
//! Turns an analysis record into a formatted study guide.
//!
//! ## Components
//! - `context`: exam level and subject overrides
//! - `question_kind`: command-word categories with their study tips
//! - `subject_tips`: static per-subject tips table
//! - `renderer`: the guide template

pub mod context;
pub mod question_kind;
pub mod renderer;
pub mod subject_tips;

pub use context::{ExamLevel, GuideContext, DEFAULT_SUBJECT};
pub use question_kind::QuestionKind;
pub use renderer::render;
pub use subject_tips::subject_tips;
