//! # Summarizer Module
//!
//! Optional generative path in front of the heuristic guide.
//!
//! ## Components
//! - `prompt`: provider request construction
//! - `quality`: quality gate for provider output
//! - `provider`: the provider seam
//! - `pipeline`: retry and fallback orchestration

pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod quality;

pub use pipeline::{Summarizer, Summary, SummarySource, DEFAULT_PROVIDER_TIMEOUT};
pub use prompt::{build_prompt, PromptInput, SummaryRequest, SYSTEM_PROMPT};
pub use provider::SummaryProvider;
pub use quality::{validate_summary_quality, Quality, QualityIssue, QualityReport};
