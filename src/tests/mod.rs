//! Router test module
//!
//! Drives the full router in-process with `oneshot`

#[cfg(test)]
mod router_tests {
    use crate::config::Settings;
    use crate::handlers::{create_router, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use tower::ServiceExt;

    fn create_test_settings(base_url: &str) -> Settings {
        let base_url = base_url.to_string();
        Settings::from_lookup(move |key| match key {
            "INFERENCE_API_KEY" => Some("router-test-key".to_string()),
            "INFERENCE_BASE_URL" => Some(base_url.clone()),
            "INFERENCE_DEFAULT_MODEL" => Some("test-model".to_string()),
            _ => None,
        })
        .expect("Failed to create test settings")
    }

    async fn create_test_app(base_url: &str) -> Router {
        create_router(create_test_settings(base_url))
            .await
            .expect("Failed to create router")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app("http://127.0.0.1:9/model/").await;

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_render_unknown_key_is_not_found() {
        let app = create_test_app("http://127.0.0.1:9/model/").await;

        let request = post_json("/v1/prompts/render", serde_json::json!({"promptKey": "NOT_A_KEY"}));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
        assert_eq!(body["error"]["message"], "Prompt not found: NOT_A_KEY");
    }

    #[tokio::test]
    async fn test_generate_uses_default_model() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/model/test-model/invoke")
                    .header("Authorization", "Bearer router-test-key")
                    .body_contains("<form id=\\\"login\\\"></form>");
                then.status(200).json_body(serde_json::json!({
                    "choices": [{"message": {"content": "Sure!\n```java\nclass LoginPage {}\n```"}}]
                }));
            })
            .await;

        let app = create_test_app(&server.url("/model/")).await;
        let request = post_json(
            "/v1/generate",
            serde_json::json!({
                "promptKey": "SELENIUM_JAVA_PAGE_ONLY",
                "variables": {"domContent": "<form id=\"login\"></form>"}
            }),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["modelName"], "test-model");
        assert_eq!(body["content"], "```java\nclass LoginPage {}\n```");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_rejects_bad_model_name() {
        let app = create_test_app("http://127.0.0.1:9/model/").await;

        let request = post_json(
            "/v1/generate",
            serde_json::json!({"promptKey": "DATA", "modelName": "../other"}),
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_app_state_debug_hides_api_key() {
        let state = AppState::new(create_test_settings("http://127.0.0.1:9/model/")).unwrap();

        let debug = format!("{:?}", state);
        assert!(!debug.contains("router-test-key"));
        assert!(debug.contains("test-model"));
    }
}
