//! In-process tests for the request/logging contract.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cloudrun_logging::http::router;
use cloudrun_logging::logging::MemorySink;
use cloudrun_logging::trace::{FixedResolver, NoIdentity, ProjectIdentityResolver};
use cloudrun_logging::AppState;

fn state(sink: Arc<MemorySink>, identity: Arc<dyn ProjectIdentityResolver>) -> AppState {
    AppState { identity, sink }
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_response_is_fixed_500_for_any_method_and_path() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(sink, Arc::new(NoIdentity)));

    let requests = [
        (Method::GET, "/", Body::empty()),
        (Method::POST, "/some/deep/path", Body::from("payload")),
        (Method::DELETE, "/resource/42", Body::empty()),
        (Method::PUT, "/anything?query=1", Body::from("{}")),
    ];
    for (method, uri, body) in requests {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response.into_body()).await, "Something went wrong");
    }
}

#[tokio::test]
async fn test_exactly_one_log_line_per_request() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(sink.clone(), Arc::new(NoIdentity)));

    for _ in 0..3 {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        app.clone().oneshot(request).await.unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["message"], "This is the default display field.");
        assert_eq!(value["severity"], "NOTICE");
        assert_eq!(value["component"], "arbitrary-property");
    }
}

#[tokio::test]
async fn test_trace_present_with_identity_and_header() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(
        sink.clone(),
        Arc::new(FixedResolver("my-proj".to_string())),
    ));

    let request = Request::builder()
        .uri("/")
        .header("X-Cloud-Trace-Context", "abc123/456;o=1")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap();

    let value: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(
        value["logging.googleapis.com/trace"],
        "projects/my-proj/traces/abc123"
    );
}

#[tokio::test]
async fn test_trace_omitted_without_header() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(
        sink.clone(),
        Arc::new(FixedResolver("my-proj".to_string())),
    ));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap();

    let value: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert!(value.get("logging.googleapis.com/trace").is_none());
}

#[tokio::test]
async fn test_trace_omitted_with_empty_header() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(
        sink.clone(),
        Arc::new(FixedResolver("my-proj".to_string())),
    ));

    let request = Request::builder()
        .uri("/")
        .header("X-Cloud-Trace-Context", "")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap();

    let value: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert!(value.get("logging.googleapis.com/trace").is_none());
}

#[tokio::test]
async fn test_trace_omitted_without_identity() {
    let sink = Arc::new(MemorySink::new());
    let app = router(state(sink.clone(), Arc::new(NoIdentity)));

    let request = Request::builder()
        .uri("/")
        .header("X-Cloud-Trace-Context", "abc123/456;o=1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // Response is unchanged; only the trace field is affected.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert!(value.get("logging.googleapis.com/trace").is_none());
}
