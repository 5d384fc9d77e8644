//! Fetch and orchestrator tests against a local mock server
#![cfg(feature = "fetch")]

use std::time::Duration;

use pagelift_core::{ExtractConfig, Extractor, FetchConfig, PageliftError, extract, fetch_url};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<html><head><title>Mocked</title></head><body><main><h2>Served</h2><p>Body text served by the mock upstream.</p></main></body></html>";

fn test_config() -> FetchConfig {
    FetchConfig { user_agent: "pagelift-test/1.0".to_string(), ..FetchConfig::default() }
}

#[tokio::test]
async fn test_fetch_success_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("User-Agent", "pagelift-test/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/page", mock_server.uri());
    let body = fetch_url(&url, &test_config()).await.unwrap();
    assert!(body.contains("<h2>Served</h2>"));
}

#[tokio::test]
async fn test_fetch_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    match fetch_url(&url, &test_config()).await {
        Err(err @ PageliftError::Upstream { .. }) => {
            assert_eq!(err.user_message(), "Failed to fetch page: Not Found");
            assert!(!err.is_client_error());
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = fetch_url(&mock_server.uri(), &test_config()).await;
    match result {
        Err(PageliftError::Upstream { status, status_text }) => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_millis(1_000)))
        .mount(&mock_server)
        .await;

    let config = FetchConfig { timeout_ms: 100, ..test_config() };
    match fetch_url(&mock_server.uri(), &config).await {
        Err(err @ PageliftError::Timeout { timeout_ms: 100 }) => {
            assert_eq!(err.user_message(), "Request timed out");
        }
        other => panic!("Expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let result = fetch_url(&url, &test_config()).await;
    assert!(matches!(result, Err(PageliftError::Network(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_extract_invalid_url() {
    let err = extract("not a url", &ExtractConfig::default()).await.unwrap_err();
    assert!(matches!(err, PageliftError::InvalidUrl(_)));
    assert!(err.is_client_error());
    assert_eq!(err.user_message(), "Invalid URL format");
}

#[tokio::test]
async fn test_extractor_fetches_and_extracts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    let extractor = Extractor::with_config(ExtractConfig::builder().user_agent("pagelift-test/1.0").build());
    let url = format!("{}/article", mock_server.uri());
    let result = extractor.extract(&url).await.unwrap();

    assert_eq!(result.url, url);
    assert_eq!(result.title, "Mocked");
    assert_eq!(result.statistics.heading_count(), 1);
    assert_eq!(result.statistics.paragraph_count(), 1);
    assert!(result.rendered_content.contains("SERVED"));
}
