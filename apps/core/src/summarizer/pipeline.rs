//! Summarizer - chooses between a provider summary and the heuristic guide.
//!
//! The provider is optional. Its answer goes through the quality gate; a
//! low-quality answer is retried once with the strict prompt, and anything
//! that still fails (or errors, or times out) falls back to the heuristic
//! guide. The heuristic path needs nothing external and cannot fail.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::prompt::{build_prompt, PromptInput, SummaryRequest};
use super::provider::SummaryProvider;
use super::quality::{validate_summary_quality, QualityReport};
use crate::analysis::ContentAnalyzer;
use crate::config::NotesConfig;
use crate::error::AppError;
use crate::events::{Event, EventRecorder, NoopRecorder};
use crate::guide::{render, GuideContext};

/// Default provider call timeout
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the delivered text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    Provider,
    Heuristic,
}

/// Delivered study notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub source: SummarySource,
    /// Quality report of the accepted provider text; `None` for the heuristic guide
    pub quality: Option<QualityReport>,
}

/// Orchestrates provider, quality gate and heuristic fallback
pub struct Summarizer {
    config: NotesConfig,
    provider: Option<Arc<dyn SummaryProvider>>,
    recorder: Arc<dyn EventRecorder>,
    analyzer: ContentAnalyzer,
    provider_timeout: Duration,
}

impl Summarizer {
    /// Heuristic-only summarizer
    pub fn new(config: NotesConfig) -> Self {
        Self {
            config,
            provider: None,
            recorder: Arc::new(NoopRecorder),
            analyzer: ContentAnalyzer::new(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn SummaryProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn EventRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn with_timeout(mut self, provider_timeout: Duration) -> Self {
        self.provider_timeout = provider_timeout;
        self
    }

    /// Produce study notes for `corpus`. Always returns non-empty text.
    pub async fn summarize(
        &self,
        corpus: &str,
        reference_text: Option<&str>,
        context: &GuideContext,
    ) -> Summary {
        let context = GuideContext {
            subject: context
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            level: Some(context.level.unwrap_or(self.config.default_level)),
        };

        if let Some(provider) = &self.provider {
            if corpus.chars().count() >= self.config.min_provider_corpus {
                if let Some(summary) = self
                    .try_provider(provider.as_ref(), corpus, reference_text, &context)
                    .await
                {
                    return summary;
                }
            } else {
                debug!("Corpus too short for the provider, using heuristic guide");
            }
        }

        self.heuristic(corpus, &context)
    }

    /// Render the heuristic guide directly.
    pub fn heuristic(&self, corpus: &str, context: &GuideContext) -> Summary {
        let analysis = self.analyzer.analyze(corpus);
        self.recorder.record(Event::AnalysisCompleted);

        let text = render(&analysis, context);
        self.recorder.record(Event::HeuristicFallback);
        info!(chars = text.len(), "Generated heuristic study guide");

        Summary {
            text,
            source: SummarySource::Heuristic,
            quality: None,
        }
    }

    async fn try_provider(
        &self,
        provider: &dyn SummaryProvider,
        corpus: &str,
        reference_text: Option<&str>,
        context: &GuideContext,
    ) -> Option<Summary> {
        let input = PromptInput {
            corpus,
            reference_text,
            subject: context.subject.as_deref(),
            level: context.effective_level(),
        };

        let first = self.call(provider, build_prompt(&input, false)).await?;
        let report = validate_summary_quality(&first, self.config.min_summary_len);
        if report.is_acceptable() {
            return Some(self.accept(provider, first, report));
        }

        warn!(
            provider = provider.name(),
            issues = ?report.issues,
            "Low quality summary detected"
        );
        if !self.config.retry_low_quality {
            return None;
        }

        self.recorder.record(Event::ProviderRetried);
        info!(provider = provider.name(), "Retrying with strict prompt");

        let second = self.call(provider, build_prompt(&input, true)).await?;
        let report = validate_summary_quality(&second, self.config.min_summary_len);
        if !second.trim().is_empty() && report.is_acceptable() {
            Some(self.accept(provider, second, report))
        } else {
            warn!(provider = provider.name(), "Retry still below quality bar");
            None
        }
    }

    async fn call(&self, provider: &dyn SummaryProvider, request: SummaryRequest) -> Option<String> {
        let result = timeout(self.provider_timeout, provider.generate(&request))
            .await
            .map_err(AppError::from)
            .and_then(|r| r);

        match result {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Summary provider failed");
                self.recorder.record(Event::ProviderFailed);
                None
            }
        }
    }

    fn accept(&self, provider: &dyn SummaryProvider, text: String, report: QualityReport) -> Summary {
        self.recorder.record(Event::ProviderAccepted);
        info!(
            provider = provider.name(),
            quality = ?report.quality,
            topics = report.topic_count,
            "Provider summary accepted"
        );
        Summary {
            text,
            source: SummarySource::Provider,
            quality: Some(report),
        }
    }
}
