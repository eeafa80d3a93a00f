use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::AppConfig;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Failures while talking to the generation API.
///
/// None of these are retried; the festival service maps all of them to a
/// `500 Internal Server Error` carrying [`UpstreamError::detail`].
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure, timeout or broken body stream.
    #[error("request to generation API failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("generation API returned {status}")]
    Status { status: u16, body: Value },
    /// The API answered 2xx but the body was not a `generateContent` envelope.
    #[error("generation API returned an unreadable envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Best-effort diagnostic payload for the client: the upstream's own error
    /// body when there is one, otherwise the error message.
    pub fn detail(&self) -> Value {
        match self {
            UpstreamError::Status { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Thin wrapper over a `reqwest::Client` bound to one model and API key.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Builds the client from the startup configuration. The configured
    /// timeout bounds each whole request, connect through body.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.api_base_url, config.model
            ),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Sends `prompt` and returns the first candidate's text.
    ///
    /// `Ok(None)` means the API answered successfully but produced no text
    /// (no candidates, blocked candidate, empty part).
    pub async fn generate_text(&self, prompt: &str) -> Result<Option<String>, UpstreamError> {
        let request =
            GenerateContentRequest::from_prompt(prompt, self.temperature, self.max_output_tokens);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(envelope.first_text())
    }
}
