use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::config::ClientConfig;
use crate::models::email::{EmailPayload, EmailRequest};
use crate::models::summary::{SummarizePayload, SummarizeRequest};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx answer; `message` is what the service said, or `HTTP <status>`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx answer that still carried an `error` field.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// The two calls the chat makes against the API service.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizePayload, ApiError>;
    async fn send_email(&self, request: &EmailRequest) -> Result<EmailPayload, ApiError>;
}

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(base_url: Url) -> Self {
        HttpApiClient {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(cfg.api_url.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizePayload, ApiError> {
        let response = self
            .client
            .post(self.endpoint("summarize"))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        summarize_outcome(status, &body)
    }

    async fn send_email(&self, request: &EmailRequest) -> Result<EmailPayload, ApiError> {
        let response = self
            .client
            .post(self.endpoint("email"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Email API response: {}", body);
        email_outcome(status, &body)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn http_status_message(status: StatusCode) -> String {
    format!("HTTP {}", status.as_u16())
}

fn summarize_outcome(status: StatusCode, body: &str) -> Result<SummarizePayload, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_str::<SummarizePayload>(body)
            .ok()
            .and_then(|p| non_empty(p.error))
            .unwrap_or_else(|| http_status_message(status));
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let payload: SummarizePayload =
        serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    if let Some(error) = non_empty(payload.error.clone()) {
        return Err(ApiError::Rejected(error));
    }
    Ok(payload)
}

/// Like `summarize_outcome`, but a 2xx body that is not JSON counts as sent.
fn email_outcome(status: StatusCode, body: &str) -> Result<EmailPayload, ApiError> {
    if !status.is_success() {
        let message = match serde_json::from_str::<EmailPayload>(body) {
            Ok(payload) => non_empty(payload.error)
                .or_else(|| non_empty(payload.message))
                .unwrap_or_else(|| http_status_message(status)),
            Err(_) if !body.is_empty() => body.to_string(),
            Err(_) => http_status_message(status),
        };
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let payload = serde_json::from_str::<EmailPayload>(body).unwrap_or_default();
    if let Some(error) = non_empty(payload.error.clone()) {
        return Err(ApiError::Rejected(error));
    }
    Ok(payload)
}
