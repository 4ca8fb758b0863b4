//! Logging utilities
//!
//! Shared logging helpers that keep large prompts out of the logs

use crate::models::inference::{ChatMessage, InvokeRequest};

/// Set to true to include full prompt text in debug logs
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... ({} chars truncated)", &s[..cut], s.len() - cut)
}

fn filter_message(msg: &ChatMessage) -> serde_json::Value {
    serde_json::json!({
        "role": msg.role,
        "content": truncate_content(&msg.content, 200),
    })
}

/// Create a filtered summary of an invoke request for logging
pub fn create_request_log_summary(request: &InvokeRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        return serde_json::to_value(request)
            .unwrap_or(serde_json::json!({"error": "serialize failed"}));
    }

    let messages: Vec<serde_json::Value> = request.messages.iter().map(filter_message).collect();

    serde_json::json!({
        "model": request.model,
        "temperature": request.temperature,
        "messages": messages,
    })
}
