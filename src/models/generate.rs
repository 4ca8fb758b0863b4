//! Companion service data models
//!
//! Request and response bodies for the `/v1` endpoints

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// POST /v1/prompts/render
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Prompt key, e.g. `SELENIUM_JAVA_PAGE_ONLY`
    pub prompt_key: String,
    /// Placeholder bindings
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub prompt_key: String,
    pub prompt: String,
}

/// POST /v1/messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    pub prompt: String,
    /// Falls back to the configured default model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub model_name: String,
    pub content: String,
}

/// POST /v1/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt_key: String,
    #[serde(default)]
    pub variables: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub prompt_key: String,
    pub model_name: String,
    pub content: String,
}

/// Entry of GET /v1/prompt-types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTypeInfo {
    pub key: String,
    pub label: String,
    pub placeholders: Vec<String>,
}
