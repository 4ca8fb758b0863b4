//! Error handling module
//!
//! Defines error types shared by the inference client, the prompt store
//! and the companion HTTP service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Network failure or undecodable response body
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Inference endpoint answered with a non-success status
    #[error("API call failed: {status} - {body}")]
    Api {
        /// HTTP status code returned upstream
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response JSON did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Unregistered prompt key
    #[error("Prompt not found: {0}")]
    TemplateNotFound(String),

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Upstream call exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body returned by the companion service
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Api { .. }
            | AppError::Transport(_)
            | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "invalid_request_error",
            AppError::TemplateNotFound(_) => "not_found_error",
            AppError::Timeout => "timeout_error",
            AppError::Api { .. } => "api_error",
            AppError::Transport(_) => "transport_error",
            AppError::MalformedResponse(_) => "malformed_response_error",
            AppError::Config(_) | AppError::Internal(_) => "internal_error",
        }
    }

    /// Whether the error was caused by the caller rather than by us or upstream
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::TemplateNotFound(_))
    }

    /// Convert to the service error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error_type: "error".to_string(),
            error: ErrorDetail {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            tracing::warn!("Client error: {} - Status code: {}", self, status);
        } else {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
