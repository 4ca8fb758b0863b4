//! HTTP client service
//!
//! Encapsulates the single-message exchange with the model-hosting endpoint

use crate::config::settings::{InferenceConfig, DEFAULT_BASE_URL};
use crate::models::inference::{InferenceResponse, InvokeRequest, InvokeResponse};
use crate::utils::error::{AppError, AppResult};
use crate::utils::extract::extract_block;
use crate::utils::logging::{create_request_log_summary, truncate_content};
use anyhow::Context;
use reqwest::{Client, Response};
use tracing::{debug, error, info};

/// Path segment appended after the model identifier
pub const INVOKE_SUFFIX: &str = "/invoke";

/// Inference endpoint client
///
/// Holds only immutable state, so clones and concurrent calls are independent.
/// No timeout is applied here; callers that need one wrap `send_message`.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl InferenceClient {
    /// Create a client for the default endpoint
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client for a specific endpoint base
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("aitestgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into();
        info!("Inference client initialized with base URL: {}", base_url);

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }

    /// Create a client from inference settings
    pub fn from_settings(config: &InferenceConfig) -> AppResult<Self> {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
    }

    /// Endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Target URL for `model_name`
    pub fn build_url(&self, model_name: &str) -> String {
        format!("{}{}{}", self.base_url, model_name, INVOKE_SUFFIX)
    }

    /// Send `prompt` to `model_name` and return the extracted code blocks
    pub async fn send_message(&self, prompt: &str, model_name: &str) -> AppResult<InferenceResponse> {
        let url = self.build_url(model_name);
        info!("Sending request to URL: {}", url);

        let request = InvokeRequest::user_prompt(prompt, model_name);
        if let Ok(summary) = serde_json::to_string_pretty(&create_request_log_summary(&request)) {
            debug!("Inference request:\n{}", summary);
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Error calling inference API: {}", e);
                AppError::Transport(e)
            })?;

        let raw_content = self.handle_response(response).await?;

        Ok(InferenceResponse {
            content: extract_block(&raw_content),
        })
    }

    /// Check status, decode and validate the body, returning the raw message text
    async fn handle_response(&self, response: Response) -> AppResult<String> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                error!("Failed to read error response body: {}", e);
                AppError::Transport(e)
            })?;
            error!("API Response: {} {}", status.as_u16(), body);
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            error!("Failed to decode inference response: {}", e);
            AppError::Transport(e)
        })?;
        debug!("Inference API response: {}", truncate_content(&data.to_string(), 2000));

        let parsed: InvokeResponse = serde_json::from_value(data)
            .map_err(|e| AppError::MalformedResponse(format!("unexpected response shape: {}", e)))?;

        parsed
            .first_content()
            .map(str::to_string)
            .map_err(AppError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InferenceClient::new("test_key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_url_concatenates() {
        let client = InferenceClient::with_base_url("k", "http://localhost:9000/model/").unwrap();
        assert_eq!(
            client.build_url("openai.gpt-oss-20b-1:0"),
            "http://localhost:9000/model/openai.gpt-oss-20b-1:0/invoke"
        );
    }

    #[test]
    fn test_debug_hides_credential() {
        let client = InferenceClient::new("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }
}
