use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall tone of a piece of feedback, as classified by the analysis service.
///
/// The wire contract is closed: a response carrying any other string fails
/// deserialization rather than being coerced into a fifth category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Structured analysis of one piece of customer feedback.
///
/// Theme and insight ordering is whatever the service produced (most relevant
/// first) and is never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub summary: String,
    pub key_themes: Vec<String>,
    pub actionable_insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub model: String,
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
}

const fn default_timeout() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            request_timeout: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_round_trips_all_four_values() {
        for (sentiment, expected) in [
            (Sentiment::Positive, "\"Positive\""),
            (Sentiment::Negative, "\"Negative\""),
            (Sentiment::Neutral, "\"Neutral\""),
            (Sentiment::Mixed, "\"Mixed\""),
        ] {
            let json = serde_json::to_string(&sentiment).unwrap();
            assert_eq!(json, expected);
            let back: Sentiment = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sentiment);
        }
    }

    #[test]
    fn test_sentiment_rejects_unknown_value() {
        let result: Result<Sentiment, _> = serde_json::from_str("\"Unknown\"");
        assert!(result.is_err());

        // Case matters: the contract is exact strings
        let result: Result<Sentiment, _> = serde_json::from_str("\"positive\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_analysis_result_deserialization() {
        let json = r#"{
            "sentiment": "Positive",
            "summary": "Customer is satisfied with product quality and shipping speed.",
            "key_themes": ["product quality", "shipping speed"],
            "actionable_insights": ["Highlight shipping speed in marketing"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(
            result.summary,
            "Customer is satisfied with product quality and shipping speed."
        );
        assert_eq!(result.key_themes, vec!["product quality", "shipping speed"]);
        assert_eq!(
            result.actionable_insights,
            vec!["Highlight shipping speed in marketing"]
        );
    }

    #[test]
    fn test_analysis_result_preserves_theme_order() {
        let json = r#"{
            "sentiment": "Mixed",
            "summary": "s",
            "key_themes": ["zebra", "apple", "mango"],
            "actionable_insights": []
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.key_themes, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_analysis_result_missing_field_is_an_error() {
        let json = r#"{"sentiment": "Positive", "summary": "ok"}"#;
        let result: Result<AnalysisResult, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(
            config.api_base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout, 120);
    }
}
