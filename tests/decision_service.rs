//! End-to-end tests for the HTTP decision service.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use md_redirect::config::ServiceConfig;
use md_redirect::host::WebRequestAdapter;
use md_redirect::http::{DecisionServer, HealthResponse};
use md_redirect::policy::matcher::SuffixMatcher;
use md_redirect::{RedirectEngine, RedirectPolicy, RequestKind};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_decide_over_http() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.url("/v1/decide"))
        .json(&json!({
            "url": "https://example.com/docs/readme.md",
            "type": "main_frame",
            "requestId": "17",
            "tabId": 3
        }))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "redirectUrl": "http://localhost:2403?url=https%3A%2F%2Fexample.com%2Fdocs%2Freadme.md" })
    );

    let res = client
        .post(server.url("/v1/decide"))
        .json(&json!({ "url": "https://example.com/readme.md", "type": "sub_frame" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "{}");

    server.stop().await;
}

#[tokio::test]
async fn test_undecodable_event_fails_open() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    for body in [
        "garbage",
        r#"{"url":"readme.md","type":"main_frame"}"#,
        r#"{"url":"https://a.org/x.md","type":"prefetch"}"#,
    ] {
        let res = client
            .post(server.url("/v1/decide"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200, "{}", body);
        assert_eq!(res.text().await.unwrap(), "{}", "{}", body);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_health() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let health: HealthResponse = res.json().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.target, "http://localhost:2403");

    server.stop().await;
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let router = DecisionServer::new(ServiceConfig::default()).router();

    let res = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/decide")
                .header("x-request-id", "abc-123")
                .body(Body::from(r#"{"url":"https://a.org/","type":"main_frame"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn test_long_markdown_url_redirected_with_defaults() {
    let router = DecisionServer::new(ServiceConfig::default()).router();

    let url = format!("https://a.org/p?q={}&f=x.md", "a".repeat(70_000));
    let res = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/decide")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "url": url, "type": "main_frame" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let target = body["redirectUrl"].as_str().expect("long .md URL should redirect");
    assert!(target.starts_with("http://localhost:2403?url=https%3A%2F%2Fa.org%2Fp%3Fq%3Daaa"));
    assert!(target.ends_with("%26f%3Dx.md"));
}

#[tokio::test]
async fn test_custom_adapter_policy() {
    let mut config = ServiceConfig::default();
    config.timeouts.request_secs = 2;
    let policy = RedirectPolicy::new(
        RequestKind::MainFrame,
        vec![Box::new(SuffixMatcher::new(".rst"))],
        "http://127.0.0.1:9000/view",
    );
    let server = DecisionServer::with_adapter(config, WebRequestAdapter::new(RedirectEngine::new(policy)));
    assert_eq!(server.config().timeouts.request_secs, 2);

    let router = server.router();
    let res = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/decide")
                .body(Body::from(r#"{"url":"https://a.org/guide.rst","type":"main_frame"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&bytes).unwrap(),
        json!({ "redirectUrl": "http://127.0.0.1:9000/view?url=https%3A%2F%2Fa.org%2Fguide.rst" })
    );

    let res = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.target, "http://127.0.0.1:9000/view");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let mut config = ServiceConfig::default();
    config.listener.max_body_bytes = 32;
    let router = DecisionServer::new(config).router();

    let url = format!("https://a.org/{}.md", "x".repeat(64));
    let res = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/decide")
                .body(Body::from(json!({ "url": url, "type": "main_frame" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_unknown_route() {
    let router = DecisionServer::new(ServiceConfig::default()).router();

    let res = router
        .oneshot(Request::builder().uri("/decide").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
