//! Inference endpoint data models
//!
//! Wire structures for the `/invoke` chat exchange

use serde::{Deserialize, Serialize};

/// Role used for the single prompt message
pub const USER_ROLE: &str = "user";

/// Fixed sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Request body sent to `{base_url}{model}/invoke`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// Model identifier
    pub model: String,
    /// Conversation, always a single user message
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
}

impl InvokeRequest {
    /// Single-message request for `prompt` against `model`
    pub fn user_prompt(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: USER_ROLE.to_string(),
                content: prompt.into(),
            }],
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body returned by the endpoint
///
/// Every field is optional on the wire so that a missing `choices` array is
/// reported as a malformed response rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<InvokeChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<InvokeUsage>,
}

/// One completion choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Option<InvokeMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message inside a choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl InvokeResponse {
    /// `choices[0].message.content`, describing which step is missing on failure
    pub fn first_content(&self) -> Result<&str, String> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| "response contains no choices".to_string())?;
        let message = choice
            .message
            .as_ref()
            .ok_or_else(|| "choices[0] has no message".to_string())?;
        message
            .content
            .as_deref()
            .ok_or_else(|| "choices[0].message has no content".to_string())
    }
}

/// Extracted result of one `send_message` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResponse {
    pub content: String,
}
