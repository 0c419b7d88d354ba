// ABOUTME: Integration tests for the Hugging Face captioning client against a fake upstream
// ABOUTME: Checks request shape, successful captions, model errors and malformed responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use smart_recipes::external::{
    first_caption, CaptionProvider, HuggingFaceCaptioner, HuggingFaceCaptionerConfig,
};
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral port and return its base URL
async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn captioner(base_url: &str) -> HuggingFaceCaptioner {
    HuggingFaceCaptioner::new(HuggingFaceCaptionerConfig {
        api_url: format!("{base_url}/models/captioner"),
        api_key: "hf_test_key".to_owned(),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

/// Echoes what it received so the test can check the request shape
async fn echo_caption(headers: HeaderMap, body: Bytes) -> Json<Value> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    Json(json!([
        { "generated_text": format!("{auth}|{content_type}|{}", body.len()) }
    ]))
}

#[tokio::test]
async fn test_sends_bearer_and_octet_stream() {
    let base = spawn_upstream(Router::new().route("/models/captioner", post(echo_caption))).await;

    let results = captioner(&base)
        .caption(Bytes::from_static(b"12345"))
        .await
        .unwrap();

    assert_eq!(
        first_caption(&results).unwrap(),
        "Bearer hf_test_key|application/octet-stream|5"
    );
}

#[tokio::test]
async fn test_model_error_object_is_external_error() {
    let app = Router::new().route(
        "/models/captioner",
        post(|| async { Json(json!({ "error": "Model is currently loading" })) }),
    );
    let base = spawn_upstream(app).await;

    let err = captioner(&base)
        .caption(Bytes::from_static(b"img"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), 502);
    assert!(err.message.contains("Model is currently loading"));
    assert_eq!(err.client_message(), "Failed to process image");
}

#[tokio::test]
async fn test_non_success_status_carries_detail() {
    let app = Router::new().route(
        "/models/captioner",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "overloaded" })),
            )
                .into_response()
        }),
    );
    let base = spawn_upstream(app).await;

    let err = captioner(&base)
        .caption(Bytes::from_static(b"img"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), 502);
    assert!(err.message.contains("503"));
    assert!(err.message.contains("overloaded"));
}

#[tokio::test]
async fn test_malformed_responses_are_guarded() {
    let app = Router::new()
        .route("/empty/models/captioner", post(|| async { Json(json!([])) }))
        .route(
            "/object/models/captioner",
            post(|| async { Json(json!({ "caption": "rice" })) }),
        )
        .route(
            "/text/models/captioner",
            post(|| async { "not json at all" }),
        );
    let base = spawn_upstream(app).await;

    for prefix in ["empty", "object", "text"] {
        let result = captioner(&format!("{base}/{prefix}"))
            .caption(Bytes::from_static(b"img"))
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.http_status(), 502, "{prefix}");
        assert_eq!(err.client_message(), "Failed to process image");
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = captioner(&format!("http://{addr}"))
        .caption(Bytes::from_static(b"img"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), 502);
    assert_eq!(err.client_message(), "Failed to process image");
}
