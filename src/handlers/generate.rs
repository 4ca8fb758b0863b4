//! Code generation handlers
//!
//! Renders prompt templates and forwards prompts to the inference endpoint

use crate::handlers::AppState;
use crate::models::generate::*;
use crate::models::inference::InferenceResponse;
use crate::prompts::{get_prompt, PromptType};
use crate::utils::error::{AppError, AppResult};
use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// List registered prompt types
///
/// GET /v1/prompt-types
pub async fn list_prompt_types() -> Json<Vec<PromptTypeInfo>> {
    let types = PromptType::ALL
        .iter()
        .map(|prompt_type| PromptTypeInfo {
            key: prompt_type.key().to_string(),
            label: prompt_type.label().to_string(),
            placeholders: prompt_type
                .placeholders()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();

    Json(types)
}

/// Render a prompt without calling the model
///
/// POST /v1/prompts/render
pub async fn render_prompt(Json(request): Json<RenderRequest>) -> AppResult<Json<RenderResponse>> {
    let prompt = get_prompt(&request.prompt_key, &request.variables)?;

    Ok(Json(RenderResponse {
        prompt_key: request.prompt_key,
        prompt,
    }))
}

/// Send a raw prompt to the model
///
/// POST /v1/messages
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MessageRequest>,
) -> AppResult<Json<MessageResponse>> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let model_name = resolve_model(&state, request.model_name)?;
    let response = invoke_with_timeout(&state, &request.prompt, &model_name).await?;

    Ok(Json(MessageResponse {
        model_name,
        content: response.content,
    }))
}

/// Render a prompt template and send it to the model
///
/// POST /v1/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    debug!("Received generate request for prompt type: {}", request.prompt_key);

    let prompt = get_prompt(&request.prompt_key, &request.variables)?;
    let model_name = resolve_model(&state, request.model_name)?;
    let response = invoke_with_timeout(&state, &prompt, &model_name).await?;

    Ok(Json(GenerateResponse {
        prompt_key: request.prompt_key,
        model_name,
        content: response.content,
    }))
}

/// Pick the requested model or the configured default, and check it is usable in a URL path
fn resolve_model(state: &AppState, requested: Option<String>) -> AppResult<String> {
    let model_name = requested.unwrap_or_else(|| state.settings.inference.default_model.clone());
    validate_model_name(&model_name)?;
    Ok(model_name)
}

pub(crate) fn validate_model_name(model_name: &str) -> AppResult<()> {
    if model_name.is_empty() {
        return Err(AppError::Validation("modelName cannot be empty".to_string()));
    }
    if model_name.contains(char::is_whitespace) || model_name.contains('/') {
        return Err(AppError::Validation(format!("invalid modelName: {}", model_name)));
    }
    Ok(())
}

async fn invoke_with_timeout(
    state: &AppState,
    prompt: &str,
    model_name: &str,
) -> AppResult<InferenceResponse> {
    let limit = Duration::from_secs(state.settings.request.timeout);

    match tokio::time::timeout(limit, state.client.send_message(prompt, model_name)).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Inference call to {} exceeded {}s", model_name, limit.as_secs());
            Err(AppError::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_model_name() {
        assert!(validate_model_name("openai.gpt-oss-20b-1:0").is_ok());
        assert!(validate_model_name("anthropic.claude-3-haiku-20240307-v1:0").is_ok());

        assert!(matches!(validate_model_name(""), Err(AppError::Validation(_))));
        assert!(matches!(validate_model_name("a b"), Err(AppError::Validation(_))));
        assert!(matches!(validate_model_name("../admin"), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_prompt_types_in_registration_order() {
        let types = list_prompt_types().await.0;

        let keys: Vec<&str> = types.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "SELENIUM_JAVA_PAGE_ONLY",
                "CUCUMBER_ONLY",
                "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
                "PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY",
                "DATA",
            ]
        );
        assert_eq!(types[2].placeholders, vec!["domContent", "pageUrl"]);
    }
}
