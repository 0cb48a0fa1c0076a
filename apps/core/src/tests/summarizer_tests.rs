//! Summarizer Tests
//!
//! Provider gating, the single strict retry, timeouts and the heuristic
//! fallback, driven by scripted providers.

use super::SAMPLE_PAPER;
use crate::config::NotesConfig;
use crate::error::AppError;
use crate::events::{CountingRecorder, Event};
use crate::guide::{ExamLevel, GuideContext};
use crate::summarizer::{
    Quality, Summarizer, SummaryProvider, SummaryRequest, SummarySource,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provider that replays scripted replies and keeps every request it saw.
struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, AppError>>>,
    requests: Mutex<Vec<SummaryRequest>>,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    fn new(replies: Vec<Result<String, AppError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(vec![Ok(good_summary())])
        }
    }

    fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &SummaryRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Provider("no scripted reply left".into())))
    }
}

/// Structured, long enough, mentions tips, practice and topics.
fn good_summary() -> String {
    let mut text = String::from(
        "## Overview\n### Topic 1: Forces\nExam tip: always show units.\n\
         ### Topic 2: Energy\nPractice question: calculate the work done.\n",
    );
    text.push_str(&"Revise each concept with worked examples. ".repeat(20));
    text
}

fn summarizer_with(
    provider: Arc<ScriptedProvider>,
    recorder: Arc<CountingRecorder>,
) -> Summarizer {
    Summarizer::new(NotesConfig::default())
        .with_provider(provider)
        .with_recorder(recorder)
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_provider_uses_heuristic_guide() {
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = Summarizer::new(NotesConfig::default()).with_recorder(recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert!(summary.quality.is_none());
        assert!(summary.text.contains("## DOCUMENT OVERVIEW"));
        assert_eq!(recorder.count(Event::AnalysisCompleted), 1);
        assert_eq!(recorder.count(Event::HeuristicFallback), 1);
    }

    #[tokio::test]
    async fn test_empty_corpus_still_produces_guide() {
        let summary = Summarizer::new(NotesConfig::default())
            .summarize("", None, &GuideContext::default())
            .await;
        assert!(!summary.text.trim().is_empty());
        assert!(summary.text.contains("## FINAL TIPS"));
    }

    #[tokio::test]
    async fn test_short_corpus_skips_provider() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(good_summary())]));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider.clone(), recorder.clone());

        let summary = summarizer
            .summarize("What is velocity?", None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert!(provider.requests().is_empty());
        assert_eq!(recorder.count(Event::HeuristicFallback), 1);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err(AppError::Provider(
            "model offline".into(),
        ))]));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider.clone(), recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert_eq!(provider.requests().len(), 1);
        assert_eq!(recorder.count(Event::ProviderFailed), 1);
        assert_eq!(recorder.count(Event::ProviderRetried), 0);
        assert_eq!(recorder.count(Event::HeuristicFallback), 1);
    }

    #[tokio::test]
    async fn test_provider_timeout_falls_back() {
        let provider = Arc::new(ScriptedProvider::slow(Duration::from_millis(500)));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider, recorder.clone())
            .with_timeout(Duration::from_millis(10));

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert_eq!(recorder.count(Event::ProviderFailed), 1);
    }
}

// ============================================================================
// Quality Gate Tests
// ============================================================================

#[cfg(test)]
mod quality_gate_tests {
    use super::*;

    #[tokio::test]
    async fn test_good_summary_accepted() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(good_summary())]));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider.clone(), recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, Some("Force equals mass times acceleration."), &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Provider);
        assert_eq!(summary.text, good_summary());
        assert_eq!(summary.quality.map(|q| q.quality), Some(Quality::High));
        assert_eq!(recorder.count(Event::ProviderAccepted), 1);
        assert_eq!(recorder.count(Event::AnalysisCompleted), 0);

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].strict);
        assert!(requests[0].user_prompt.contains("TEXTBOOK REFERENCE MATERIAL"));
    }

    #[tokio::test]
    async fn test_low_quality_retried_with_strict_prompt() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Ok("too short".into()),
            Ok(good_summary()),
        ]));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider.clone(), recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Provider);
        assert_eq!(recorder.count(Event::ProviderRetried), 1);
        assert_eq!(recorder.count(Event::ProviderAccepted), 1);

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert!(!requests[0].strict);
        assert!(requests[1].strict);
        assert!(requests[1].user_prompt.contains("previous attempt"));
    }

    #[tokio::test]
    async fn test_low_quality_twice_falls_back() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Ok("too short".into()),
            Ok("still too short".into()),
        ]));
        let recorder = Arc::new(CountingRecorder::new());
        let summarizer = summarizer_with(provider.clone(), recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert_eq!(provider.requests().len(), 2);
        assert_eq!(recorder.count(Event::ProviderAccepted), 0);
        assert_eq!(recorder.count(Event::HeuristicFallback), 1);
    }

    #[tokio::test]
    async fn test_retry_disabled() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Ok("too short".into()),
            Ok(good_summary()),
        ]));
        let recorder = Arc::new(CountingRecorder::new());
        let config = NotesConfig {
            retry_low_quality: false,
            ..Default::default()
        };
        let summarizer = Summarizer::new(config)
            .with_provider(provider.clone())
            .with_recorder(recorder.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert_eq!(summary.source, SummarySource::Heuristic);
        assert_eq!(provider.requests().len(), 1);
        assert_eq!(recorder.count(Event::ProviderRetried), 0);
    }

    #[tokio::test]
    async fn test_configured_default_level_reaches_prompt_and_guide() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err(AppError::Timeout(
            "slow".into(),
        ))]));
        let config = NotesConfig {
            default_level: ExamLevel::Jce,
            ..Default::default()
        };
        let summarizer = Summarizer::new(config).with_provider(provider.clone());

        let summary = summarizer
            .summarize(SAMPLE_PAPER, None, &GuideContext::default())
            .await;

        assert!(provider.requests()[0]
            .user_prompt
            .contains("Create Comprehensive JCE Exam Revision Notes"));
        assert!(summary.text.contains("**Level:** JCE"));
    }
}
