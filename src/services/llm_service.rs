use async_trait::async_trait;
use log::{debug, info};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GenerationError {
    #[error("Provider rate limit reached")]
    RateLimited,

    #[error("Provider error: {0}")]
    ProviderError(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(error: reqwest::Error) -> Self {
        if error.status() == Some(StatusCode::TOO_MANY_REQUESTS) {
            return GenerationError::RateLimited;
        }
        GenerationError::ProviderError(error.to_string())
    }
}

/// A generative-language backend that turns a prompt into text.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self::new(&cfg.gemini_api_base, &cfg.gemini_api_key, &cfg.gemini_model)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl SummaryGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        info!("Requesting generation from {} ({} prompt chars)", self.model, prompt.len());
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ProviderError(format!("Failed to parse response: {}", e)))?;
        let text = extract_text(&body)?;
        debug!("Generation returned {} chars", text.len());
        Ok(text)
    }
}

/// Maps a non-success provider status to the error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        GenerationError::RateLimited
    } else {
        GenerationError::ProviderError(format!("API error ({}): {}", status, body))
    }
}

/// Joins the text parts of the first candidate. Empty output is an error.
fn extract_text(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| GenerationError::ProviderError("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(GenerationError::ProviderError("Empty response text".to_string()));
    }
    Ok(text)
}
