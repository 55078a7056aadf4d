// Gemini generateContent API client

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::AnalysisResult;

/// Why an analysis call failed. The UI collapses all of these into one
/// generic message; the variants exist for diagnostic logging.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analysis service returned status {status}: {body}")]
    BadStatus { status: StatusCode, body: String },

    #[error("analysis service returned no candidates")]
    EmptyResponse,

    #[error("analysis payload did not match the expected shape: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Schema sent with every request so the service emits the structured
/// analysis shape instead of prose. The sentiment enum here mirrors the
/// closed `Sentiment` type; the client still validates the response.
fn analysis_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": {
                "type": "STRING",
                "enum": ["Positive", "Negative", "Neutral", "Mixed"],
                "description": "The overall sentiment of the feedback."
            },
            "summary": {
                "type": "STRING",
                "description": "A concise one or two sentence summary of the feedback."
            },
            "key_themes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Short phrases for recurring topics, most relevant first."
            },
            "actionable_insights": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Concrete follow-up actions suggested by the feedback."
            }
        },
        "required": ["sentiment", "summary", "key_themes", "actionable_insights"]
    })
}

fn build_prompt(feedback: &str) -> String {
    format!(
        "Analyze the following customer feedback. Classify the overall sentiment, \
         summarize it, extract the key themes, and suggest actionable insights.\n\n\
         Feedback:\n{feedback}"
    )
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: String,
        request_timeout: u64,
    ) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .map_err(AnalysisError::ClientBuild)?;

        Ok(Self {
            base_url,
            model,
            api_key,
            client,
        })
    }

    /// Runs one piece of feedback through the service and parses the
    /// structured result. Exactly one outbound call per invocation; no
    /// retries, no caching.
    ///
    /// The caller is responsible for only passing non-empty text.
    pub async fn analyze_feedback(&self, feedback: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(feedback),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_response_schema(),
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::BadStatus { status, body });
        }

        let payload = response.json::<GenerateContentResponse>().await?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(AnalysisError::EmptyResponse)?;

        let result = serde_json::from_str::<AnalysisResult>(text.trim())?;
        Ok(result)
    }
}
