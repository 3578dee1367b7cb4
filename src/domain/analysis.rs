use serde::Serialize;

pub const FALLBACK_SCORE: u8 = 75;
pub const MAX_SCORE: u8 = 100;

pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Add engaging visuals to capture attention",
    "Include a clear call-to-action",
    "Use relevant hashtags to increase reach",
    "Post at optimal times for your audience",
];

pub const FALLBACK_TOPICS: [&str; 2] = ["Content", "Social Media"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Engagement analysis of a piece of content. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub engagement_score: u8,
    pub sentiment: Sentiment,
    pub suggestions: Vec<String>,
    pub key_topics: Vec<String>,
}

impl AnalysisResult {
    /// Substituted wholesale when the analysis service cannot be used.
    pub fn fallback() -> Self {
        Self {
            engagement_score: FALLBACK_SCORE,
            sentiment: Sentiment::Neutral,
            suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            key_topics: FALLBACK_TOPICS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Rounds and clamps an arbitrary score into `0..=100`. Non-finite input gets the fallback.
    pub fn clamp_score(raw: f64) -> u8 {
        if !raw.is_finite() {
            return FALLBACK_SCORE;
        }
        raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    }
}
