use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use translate_relay_engine::adapter::TranslateAdapter;
use translate_relay_engine::config::{PacingConfig, UpstreamConfig};
use translate_relay_engine::server::{build_app, AppState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(upstream_base: String) -> AppState {
    let adapter = TranslateAdapter::new(UpstreamConfig {
        base_url: upstream_base,
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    AppState {
        adapter: Arc::new(adapter),
        pacing: PacingConfig {
            enabled: false,
            min_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(0),
        },
    }
}

fn post_translate(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/translate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = build_app(test_state("http://127.0.0.1:1/unused".to_string()));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn missing_text_is_rejected_without_an_upstream_call() {
    let server = MockServer::start().await;

    // Zero expected calls: the request must be rejected before any fetch
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(test_state(format!("{}/translate_a/single", server.uri())));

    let response = app
        .oneshot(post_translate(serde_json::json!({"source_lang": "ja"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Missing required field: text");
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let app = build_app(test_state("http://127.0.0.1:1/unused".to_string()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn end_to_end_compact_translation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            [[["Xin chào"]], null, "ja"]
        )))
        .mount(&server)
        .await;

    let app = build_app(test_state(format!("{}/translate_a/single", server.uri())));

    let response = app
        .oneshot(post_translate(serde_json::json!({
            "text": "こんにちは",
            "source_lang": "ja",
            "target_lang": "vi",
            "method": "compact"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["translated_text"], "Xin chào");
    assert_eq!(json["source_language"], "ja");
    assert_eq!(json["target_language"], "vi");
    assert_eq!(json["confidence"], 1.0);
    assert_eq!(json["method"], "compact");
    assert_eq!(json["original_text"], "こんにちは");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn legacy_method_alias_selects_the_compact_variant() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            [[["hola"]], null, "en"]
        )))
        .mount(&server)
        .await;

    let app = build_app(test_state(format!("{}/translate_a/single", server.uri())));

    let response = app
        .oneshot(post_translate(serde_json::json!({
            "text": "hello",
            "target_lang": "es",
            "method": "mazii"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["method"], "compact");
}

#[tokio::test]
async fn upstream_failure_ships_as_a_failure_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = build_app(test_state(format!("{}/translate_a/single", server.uri())));

    let response = app
        .oneshot(post_translate(serde_json::json!({"text": "hello"})))
        .await
        .unwrap();

    // Failure envelope is part of the contract, not an HTTP error
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(!json["error"].as_str().unwrap().is_empty());
    assert_eq!(json["original_text"], "hello");
}
