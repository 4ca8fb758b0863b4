//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic of the companion service

pub mod generate;
pub mod health;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::services::InferenceClient;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: InferenceClient,
}

impl AppState {
    /// Build state, creating the inference client from settings
    pub fn new(settings: Settings) -> Result<Self> {
        let client = InferenceClient::from_settings(&settings.inference)
            .context("Failed to create inference client")?;
        Ok(Self { settings, client })
    }
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    let app_state = Arc::new(AppState::new(settings)?);
    let cors = cors_layer(&app_state.settings)?;

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(RequestBodyLimitLayer::new(app_state.settings.request.max_request_size));

    let router = Router::new()
        .route("/v1/prompt-types", get(generate::list_prompt_types))
        .route("/v1/prompts/render", post(generate::render_prompt))
        .route("/v1/messages", post(generate::send_message))
        .route("/v1/generate", post(generate::generate))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware_stack);

    Ok(router)
}

/// CORS policy from security settings
fn cors_layer(settings: &Settings) -> Result<CorsLayer> {
    if !settings.security.cors_enabled {
        return Ok(CorsLayer::new());
    }

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if settings.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = settings
        .security
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid allowed origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}
