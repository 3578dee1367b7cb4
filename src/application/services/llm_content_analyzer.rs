use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::application::ports::{AnalysisError, ContentAnalyzer, LlmClient};
use crate::domain::{AnalysisResult, Sentiment};

pub const ANALYSIS_INSTRUCTION: &str = "Analyze the following content for social media engagement potential. Provide:\n\
1. An engagement score from 0 to 100 (integer)\n\
2. The overall sentiment: positive, neutral, or negative\n\
3. Exactly four specific suggestions to improve engagement\n\
4. The key topics covered by the content\n\
\n\
Respond ONLY with JSON in exactly this shape:\n\
{\n\
  \"engagementScore\": 0,\n\
  \"sentiment\": \"positive\" | \"neutral\" | \"negative\",\n\
  \"suggestions\": [\"...\", \"...\", \"...\", \"...\"],\n\
  \"keyTopics\": [\"...\"]\n\
}";

/// Scores content by asking a completion model and reading back its JSON.
pub struct LlmContentAnalyzer<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
}

impl<L> LlmContentAnalyzer<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl<L> ContentAnalyzer for LlmContentAnalyzer<L>
where
    L: LlmClient + ?Sized,
{
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let raw = self.llm_client.complete(ANALYSIS_INSTRUCTION, text).await?;
        parse_analysis(&raw)
    }
}

/// Reads the model's reply. Missing or ill-typed fields are filled from the fallback one by one.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }

    let json = outermost_object(trimmed)
        .ok_or_else(|| AnalysisError::MalformedJson("no JSON object in response".to_string()))?;

    let value: Value =
        serde_json::from_str(json).map_err(|e| AnalysisError::MalformedJson(e.to_string()))?;

    let fields = value
        .as_object()
        .ok_or_else(|| AnalysisError::MalformedJson("response is not a JSON object".to_string()))?;

    Ok(backfill(fields))
}

fn backfill(fields: &Map<String, Value>) -> AnalysisResult {
    let defaults = AnalysisResult::fallback();

    AnalysisResult {
        engagement_score: fields
            .get("engagementScore")
            .and_then(score_from_value)
            .unwrap_or(defaults.engagement_score),
        sentiment: fields
            .get("sentiment")
            .and_then(Value::as_str)
            .and_then(Sentiment::parse)
            .unwrap_or(defaults.sentiment),
        suggestions: fields
            .get("suggestions")
            .and_then(string_list)
            .unwrap_or(defaults.suggestions),
        key_topics: fields
            .get("keyTopics")
            .and_then(string_list)
            .unwrap_or(defaults.key_topics),
    }
}

fn score_from_value(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(AnalysisResult::clamp_score(raw))
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    )
}

// Models often wrap the object in a ```json fence or a sentence.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
