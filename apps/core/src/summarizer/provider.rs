use async_trait::async_trait;

use super::prompt::SummaryRequest;
use crate::error::AppError;

/// Defines the public interface for a generative summary service.
///
/// The service itself lives outside this crate (a hosted model, a local
/// runtime); implementations adapt it to this seam so the summarizer can
/// gate its output and fall back to the heuristic guide.
#[async_trait]
pub trait SummaryProvider: Send + Sync + 'static {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Generates a complete summary for the request.
    async fn generate(&self, request: &SummaryRequest) -> Result<String, AppError>;
}
