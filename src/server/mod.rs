use crate::adapter::TranslateAdapter;
use crate::config::PacingConfig;
use crate::error::Error;
use crate::models::TranslateRequest;
use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode},
    routing::{get, post},
    Router as AxumRouter,
};
use rand::Rng;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<TranslateAdapter>,
    pub pacing: PacingConfig,
}

/// Build the HTTP surface: POST /translate, GET /health, permissive CORS
/// (the relay exists to serve browser clients blocked by CORS upstream)
/// and per-request trace spans.
pub fn build_app(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health))
        .route("/translate", post(handle_translate))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                // Keep health checks out of the request logs
                if request.uri().path() == "/health" {
                    tracing::trace_span!("health_check")
                } else {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }
            }),
        )
        .with_state(state)
}

async fn health() -> Response<Body> {
    let body = serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "message": "Translate relay is running",
    })
    .to_string();

    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn handle_translate(State(state): State<AppState>, req: Request<Body>) -> Response<Body> {
    // Read the raw body first so malformed JSON and a missing text field
    // both surface as client input errors, not internal faults
    let body_bytes = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let value: serde_json::Value = match serde_json::from_slice(&body_bytes) {
        Ok(v) => v,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &Error::Input("text".to_string()).to_string(),
            );
        }
    };

    if value.get("text").is_none() {
        return error_response(
            StatusCode::BAD_REQUEST,
            &Error::Input("text".to_string()).to_string(),
        );
    }

    let request: TranslateRequest = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to parse translate request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid request format");
        }
    };

    info!(
        "Translate request - method: {:?}, source: {}, target: {}",
        request.method, request.source_lang, request.target_lang
    );

    // Advisory pacing: spread calls toward the upstream to reduce
    // burstiness. No effect on correctness or ordering.
    if state.pacing.enabled {
        let delay = {
            let mut rng = rand::thread_rng();
            rng.gen_range(state.pacing.min_delay..=state.pacing.max_delay)
        };
        tokio::time::sleep(delay).await;
    }

    let result = state
        .adapter
        .translate(
            &request.text,
            &request.source_lang,
            &request.target_lang,
            request.method,
        )
        .await;

    // Upstream failures are part of the response contract: the failure
    // envelope ships with HTTP 200, not a 5xx
    match serde_json::to_string(&result) {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        Err(e) => {
            error!("Failed to serialize translation result: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response<Body> {
    let body = serde_json::json!({
        "success": false,
        "error": message,
    });

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
