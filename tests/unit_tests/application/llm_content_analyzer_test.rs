use std::sync::Arc;

use content_insight::application::ports::{AnalysisError, ContentAnalyzer};
use content_insight::application::services::{LlmContentAnalyzer, parse_analysis};
use content_insight::domain::{AnalysisResult, FALLBACK_SCORE, FALLBACK_TOPICS, Sentiment};
use content_insight::infrastructure::llm::MockLlmClient;

#[test]
fn given_complete_json_when_parsing_then_reads_every_field() {
    let raw = r#"{"engagementScore": 64, "sentiment": "negative", "suggestions": ["a", "b", "c", "d"], "keyTopics": ["Rust", "Tooling"]}"#;

    let analysis = parse_analysis(raw).unwrap();

    assert_eq!(analysis.engagement_score, 64);
    assert_eq!(analysis.sentiment, Sentiment::Negative);
    assert_eq!(analysis.suggestions, vec!["a", "b", "c", "d"]);
    assert_eq!(analysis.key_topics, vec!["Rust", "Tooling"]);
}

#[test]
fn given_score_above_range_when_parsing_then_clamps_to_hundred() {
    let analysis = parse_analysis(r#"{"engagementScore": 180}"#).unwrap();
    assert_eq!(analysis.engagement_score, 100);
}

#[test]
fn given_negative_score_when_parsing_then_clamps_to_zero() {
    let analysis = parse_analysis(r#"{"engagementScore": -12}"#).unwrap();
    assert_eq!(analysis.engagement_score, 0);
}

#[test]
fn given_non_numeric_score_when_parsing_then_uses_fallback_score() {
    let analysis = parse_analysis(r#"{"engagementScore": "very high"}"#).unwrap();
    assert_eq!(analysis.engagement_score, FALLBACK_SCORE);
}

#[test]
fn given_numeric_string_score_when_parsing_then_accepts_it() {
    let analysis = parse_analysis(r#"{"engagementScore": " 88 "}"#).unwrap();
    assert_eq!(analysis.engagement_score, 88);
}

#[test]
fn given_partial_json_when_parsing_then_backfills_each_missing_field() {
    let analysis = parse_analysis(r#"{"sentiment": "positive"}"#).unwrap();
    let defaults = AnalysisResult::fallback();

    assert_eq!(analysis.engagement_score, FALLBACK_SCORE);
    assert_eq!(analysis.sentiment, Sentiment::Positive);
    assert_eq!(analysis.suggestions, defaults.suggestions);
    assert_eq!(analysis.key_topics, FALLBACK_TOPICS.to_vec());
}

#[test]
fn given_unknown_sentiment_when_parsing_then_defaults_to_neutral() {
    let analysis = parse_analysis(r#"{"sentiment": "ecstatic"}"#).unwrap();
    assert_eq!(analysis.sentiment, Sentiment::Neutral);
}

#[test]
fn given_mixed_list_items_when_parsing_then_keeps_only_strings() {
    let analysis = parse_analysis(r#"{"keyTopics": ["Launch", 3, null, "  ", "Pricing"]}"#).unwrap();
    assert_eq!(analysis.key_topics, vec!["Launch", "Pricing"]);
}

#[test]
fn given_fenced_json_when_parsing_then_extracts_object() {
    let raw = "Here you go:\n```json\n{\"engagementScore\": 55, \"sentiment\": \"neutral\"}\n```";
    let analysis = parse_analysis(raw).unwrap();
    assert_eq!(analysis.engagement_score, 55);
}

#[test]
fn given_empty_reply_when_parsing_then_returns_empty_response() {
    assert!(matches!(
        parse_analysis("   \n"),
        Err(AnalysisError::EmptyResponse)
    ));
}

#[test]
fn given_prose_reply_when_parsing_then_returns_malformed_json() {
    assert!(matches!(
        parse_analysis("I think this content is great!"),
        Err(AnalysisError::MalformedJson(_))
    ));
}

#[test]
fn given_broken_json_when_parsing_then_returns_malformed_json() {
    assert!(matches!(
        parse_analysis(r#"{"engagementScore": 70, "sentiment": }"#),
        Err(AnalysisError::MalformedJson(_))
    ));
}

#[tokio::test]
async fn given_failing_client_when_analyzing_then_surfaces_completion_error() {
    let analyzer = LlmContentAnalyzer::new(Arc::new(MockLlmClient::failing()));

    let result = analyzer.analyze("Some content worth scoring").await;

    assert!(matches!(result, Err(AnalysisError::Completion(_))));
}

#[tokio::test]
async fn given_default_mock_client_when_analyzing_then_returns_parsed_analysis() {
    let analyzer = LlmContentAnalyzer::new(Arc::new(MockLlmClient::default()));

    let analysis = analyzer.analyze("Some content worth scoring").await.unwrap();

    assert_eq!(analysis.engagement_score, 82);
    assert_eq!(analysis.key_topics, vec!["Testing"]);
}
