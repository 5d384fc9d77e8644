use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{ConfigError, ServerConfig};
use crate::error::ApiError;
use crate::routes::{AppState, api_router};

/// Builds the full application: routes plus CORS, timeout, compression and
/// request tracing layers.
pub fn build_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let state = AppState { extract: Arc::new(config.extract_config()) };

    let app = with_deadline(api_router(state), config.request_timeout());

    Ok(app
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.frontend_url)?)
        .layer(TraceLayer::new_for_http()))
}

/// Answers requests that outlive `deadline` with the JSON error shape.
fn with_deadline(router: Router, deadline: Duration) -> Router {
    router.layer(middleware::from_fn(move |req, next| enforce_deadline(deadline, req, next)))
}

async fn enforce_deadline(deadline: Duration, request: Request, next: Next) -> Response {
    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::DeadlineExceeded.into_response(),
    }
}

fn cors_layer(frontend_url: &str) -> Result<CorsLayer, ConfigError> {
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::POST]).allow_headers([CONTENT_TYPE]);

    if frontend_url == "*" {
        return Ok(cors.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .map_err(|e| ConfigError::Invalid { field: "frontend_url".into(), reason: e.to_string() })?;
    Ok(cors.allow_origin(origin))
}
