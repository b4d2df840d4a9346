//! Response headers added by the middleware stack.

use axum::http::StatusCode;
use gearbox_integration_tests::TestApp;

#[tokio::test]
async fn test_security_headers_on_pages() {
    let app = TestApp::new();
    let res = app.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.header("x-frame-options"), "DENY");
    assert_eq!(res.header("x-content-type-options"), "nosniff");
    assert!(!res.header("referrer-policy").is_empty());
    assert!(res.header("content-security-policy").contains("default-src 'none'"));
}

#[tokio::test]
async fn test_csp_nonce_matches_inline_script() {
    let app = TestApp::new();
    let res = app.get("/about").await;

    let csp = res.header("content-security-policy");
    let nonce = csp
        .split_whitespace()
        .find_map(|token| token.strip_prefix("'nonce-"))
        .and_then(|rest| rest.strip_suffix("';").or_else(|| rest.strip_suffix('\'')))
        .expect("script-src carries a nonce");

    assert!(res.body.contains(&format!("nonce=\"{nonce}\"")));
}

#[tokio::test]
async fn test_request_id_is_generated_or_echoed() {
    let app = TestApp::new();

    let res = app.get("/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "ok");
    assert!(!res.header("x-request-id").is_empty());

    let first = app.get("/health").await;
    assert_ne!(first.header("x-request-id"), res.header("x-request-id"));
}

#[tokio::test]
async fn test_error_pages_are_not_cached() {
    let app = TestApp::new();
    let res = app.get("/nope").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.header("cache-control"), "no-store");
}
