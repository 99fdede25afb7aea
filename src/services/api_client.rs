//! HTTP client for the classifier backend.
//!
//! Two operations against a fixed contract: `POST /predict` and
//! `POST /explain?top_n=N`, plus a `GET /health` probe. Single-flight per
//! invocation, no retries, no deduplication across calls.

use std::time::Duration;

use crate::constants;
use crate::models::job_types::{ExplanationResult, HealthResponse, JobPostingInput, PredictionResult};

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::get_api_url(),
            timeout_secs: constants::get_timeout_secs(),
        }
    }
}

/// Classifier API client.
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

/// Terminal failure modes of a single request.
#[derive(Debug, Clone)]
pub enum RequestError {
    /// Browser-level failure before any response (unreachable, timeout).
    Transport(String),
    /// Response received with a non-2xx status. The body is captured for
    /// explain calls only; predict failures never read it.
    Status { code: u16, body: Option<String> },
    /// Response body was not valid JSON or did not match the contract.
    Parse(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Network error: {}", e),
            Self::Status { code, body: Some(body) } => {
                write!(f, "Server error {}: {}", code, body)
            }
            Self::Status { code, body: None } => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for RequestError {}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Submit a payload for classification.
    ///
    /// Non-2xx statuses fail without reading the body; the UI shows a
    /// generic message for every predict failure.
    pub async fn predict(&self, input: &JobPostingInput) -> Result<PredictionResult, RequestError> {
        let response = self
            .http_client
            .post(self.endpoint("/predict"))
            .json(input)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RequestError::Status {
                code: response.status().as_u16(),
                body: None,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Parse(e.to_string()))
    }

    /// Request a feature-attribution breakdown for a previously submitted
    /// payload. `top_n` is a hint to the server for how many features to
    /// return per polarity; it is not enforced client-side.
    ///
    /// Non-2xx statuses capture the body text so explain failures carry
    /// full diagnostic detail.
    pub async fn explain(
        &self,
        input: &JobPostingInput,
        top_n: u32,
    ) -> Result<ExplanationResult, RequestError> {
        let response = self
            .http_client
            .post(self.endpoint("/explain"))
            .query(&[("top_n", top_n)])
            .json(input)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                code,
                body: Some(body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Parse(e.to_string()))
    }

    /// Probe backend health.
    pub async fn health(&self) -> Result<HealthResponse, RequestError> {
        let response = self
            .http_client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RequestError::Status {
                code: response.status().as_u16(),
                body: None,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Parse(e.to_string()))
    }
}
