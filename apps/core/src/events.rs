//! Usage event counting.
//!
//! Callers inject an [`EventRecorder`]; nothing in the pipeline keeps
//! process-wide counters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;

/// Something worth counting during guide generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// A corpus went through the content analyzer
    AnalysisCompleted,
    /// Provider output passed the quality gate
    ProviderAccepted,
    /// Provider output failed the quality gate and was retried
    ProviderRetried,
    /// Provider call failed or timed out
    ProviderFailed,
    /// The heuristic guide was served
    HeuristicFallback,
}

/// Counting collaborator.
pub trait EventRecorder: Send + Sync {
    fn record(&self, event: Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl EventRecorder for NoopRecorder {
    fn record(&self, _event: Event) {}
}

/// Thread-safe in-memory tally.
#[derive(Debug, Default)]
pub struct CountingRecorder {
    counts: Mutex<HashMap<Event, u64>>,
}

impl CountingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `event` was recorded.
    pub fn count(&self, event: Event) -> u64 {
        match self.counts.lock() {
            Ok(counts) => counts.get(&event).copied().unwrap_or(0),
            Err(poisoned) => poisoned.into_inner().get(&event).copied().unwrap_or(0),
        }
    }

    /// Copy of all counts.
    pub fn snapshot(&self) -> HashMap<Event, u64> {
        match self.counts.lock() {
            Ok(counts) => counts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventRecorder for CountingRecorder {
    fn record(&self, event: Event) {
        match self.counts.lock() {
            Ok(mut counts) => *counts.entry(event).or_insert(0) += 1,
            Err(poisoned) => {
                warn!("Event counter lock poisoned, recovering");
                *poisoned.into_inner().entry(event).or_insert(0) += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counts_per_event() {
        let recorder = CountingRecorder::new();
        recorder.record(Event::AnalysisCompleted);
        recorder.record(Event::AnalysisCompleted);
        recorder.record(Event::HeuristicFallback);

        assert_eq!(recorder.count(Event::AnalysisCompleted), 2);
        assert_eq!(recorder.count(Event::HeuristicFallback), 1);
        assert_eq!(recorder.count(Event::ProviderFailed), 0);
        assert_eq!(recorder.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_recording() {
        let recorder = Arc::new(CountingRecorder::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let recorder = Arc::clone(&recorder);
                thread::spawn(move || {
                    for _ in 0..100 {
                        recorder.record(Event::AnalysisCompleted);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(recorder.count(Event::AnalysisCompleted), 800);
    }

    #[test]
    fn test_noop() {
        NoopRecorder.record(Event::ProviderAccepted);
    }
}
