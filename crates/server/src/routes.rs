use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use pagelift_core::{ExtractConfig, ExtractionResult};
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;

pub const HEALTH_MESSAGE: &str = "Web Content Extractor API is running";

/// Immutable settings shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub extract: Arc<ExtractConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/extract", post(extract))
        .with_state(state)
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Missing bodies, malformed JSON and absent or blank `url` fields are all
/// reported as a missing URL.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn extract(
    State(state): State<AppState>, payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let url = match payload {
        Ok(Json(ExtractRequest { url: Some(url) })) if !url.trim().is_empty() => url,
        _ => return Err(ApiError::MissingUrl),
    };

    tracing::info!(%url, "extraction requested");
    let result = pagelift_core::extract(&url, &state.extract).await?;
    tracing::info!(
        %url,
        blocks = result.blocks.len(),
        words = result.statistics.word_count(),
        "extraction succeeded"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const PAGE: &str = r#"<html><head><title> Test Page </title><meta name="author" content="Ada"></head>
        <body><nav><a href="/">Home</a></nav><article><h1>Intro</h1>
        <p>This is a sufficiently long paragraph for inclusion.</p></article></body></html>"#;

    fn app_with(config: ExtractConfig) -> Router {
        api_router(AppState { extract: Arc::new(config) })
    }

    fn app() -> Router {
        app_with(ExtractConfig::default())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/extract")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], HEALTH_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_missing_url_field() {
        let response = app().oneshot(post_json("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, serde_json::json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_blank_url() {
        let response = app().oneshot(post_json(r#"{"url": "   "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let response = app().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/extract")
            .body(Body::from(r#"{"url": "https://example.com"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let response = app().oneshot(post_json(r#"{"url": "not a url"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, serde_json::json!({ "error": "Invalid URL format" }));
    }

    #[tokio::test]
    async fn test_extract_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/article", mock_server.uri());
        let body = serde_json::json!({ "url": url }).to_string();
        let response = app().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["url"], url);
        assert_eq!(json["title"], "Test Page");
        assert_eq!(json["author"], "Ada");
        assert_eq!(json["blocks"][0], serde_json::json!({ "type": "heading", "level": 1, "text": "Intro" }));
        assert_eq!(json["blocks"][1]["type"], "paragraph");
        assert_eq!(json["statistics"]["headingCount"], 1);
        assert_eq!(json["statistics"]["paragraphCount"], 1);
        assert!(json["renderedContent"].as_str().unwrap().contains("INTRO"));
        assert!(json["extractedAt"].is_string());
    }

    #[tokio::test]
    async fn test_upstream_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let body = serde_json::json!({ "url": mock_server.uri() }).to_string();
        let response = app().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "Failed to fetch page: Not Found");
    }

    #[tokio::test]
    async fn test_upstream_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_millis(1_000)))
            .mount(&mock_server)
            .await;

        let app = app_with(ExtractConfig::builder().timeout_ms(100).build());
        let body = serde_json::json!({ "url": mock_server.uri() }).to_string();
        let response = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, serde_json::json!({ "error": "Request timed out" }));
    }
}
