//! Client for the hosted analysis model.
//!
//! One outbound request per submission: the source text plus the fixed
//! structured-output schema go out, a parsed [`AnalysisResult`] comes back.
//! No retries, no timeouts, no streaming.

pub mod schema;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use validator::Validate;

use crate::config::{AppConfig, API_KEY_VAR};
use crate::error::AppError;
use crate::models::AnalysisResult;

/// Defines the public interface of the analysis backend.
///
/// This trait abstracts the hosted model so the session controller can be
/// exercised against a mock provider in tests.
#[async_trait]
pub trait AnalysisProvider: Send + Sync + 'static {
    /// Analyzes one piece of source text and returns the structured report.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn build_payload(text: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Analyze the following text and provide a structured NLP report: \"{}\"",
                        text
                    )
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::response_schema()
            }
        })
    }

    /// Extracts the generated text from the response envelope and parses it
    /// into a validated report.
    fn parse_response(body: &Value) -> Result<AnalysisResult, AppError> {
        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::InvalidResponse("response carries no candidate text".to_string())
            })?;

        let result: AnalysisResult = serde_json::from_str(text).map_err(|e| {
            debug!(payload = text, "failed to parse analysis payload");
            AppError::InvalidResponse(format!("malformed analysis payload: {}", e))
        })?;

        result.validate()?;
        Ok(result)
    }
}

#[async_trait]
impl AnalysisProvider for GeminiClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Config(format!("{} is not set", API_KEY_VAR)))?;

        info!(chars = text.len(), "requesting analysis");

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let res = self
            .client
            .post(&url)
            .json(&Self::build_payload(text))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text().await?;
        let body: Value = serde_json::from_str(&body)?;
        Self::parse_response(&body)
    }
}
