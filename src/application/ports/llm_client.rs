use async_trait::async_trait;

/// Single-shot chat completion: `prompt` is the instruction, `context` the
/// document text it applies to.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError>;
}

/// Every variant is absorbed by the analysis fallback; none reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
