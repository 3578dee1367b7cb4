use async_trait::async_trait;

use crate::domain::AnalysisResult;

use super::LlmClientError;

#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("completion failed: {0}")]
    Completion(#[from] LlmClientError),
    #[error("empty completion")]
    EmptyResponse,
    #[error("malformed analysis json: {0}")]
    MalformedJson(String),
}
