use crate::application::ports::{LlmClient, LlmClientError};

/// Replies with a canned completion, or fails when built with [`MockLlmClient::failing`].
pub struct MockLlmClient {
    response: Option<String>,
}

impl MockLlmClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    pub fn failing() -> Self {
        Self { response: None }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::with_response(
            r#"{"engagementScore": 82, "sentiment": "positive", "suggestions": ["Add a hook", "Shorten paragraphs", "Use a question", "Tag partners"], "keyTopics": ["Testing"]}"#,
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str, _context: &str) -> Result<String, LlmClientError> {
        self.response
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("mock completion failure".to_string()))
    }
}
