//! Integration tests for liveness, static pages and the standard middleware.

use axum::http::StatusCode;
use std::sync::Arc;

use super::test_utils::{test_config, MockSnippetModel, PanickingSnippetModel, TestApp};
use snippetbox::Config;

fn assert_security_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(
        headers["content-security-policy"],
        "default-src 'self'; style-src 'self' fonts.googleapis.com; font-src fonts.gstatic.com"
    );
    assert_eq!(headers["referrer-policy"], "origin-when-cross-origin");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "deny");
    assert_eq!(headers["x-xss-protection"], "0");
}

#[tokio::test]
async fn test_ping() {
    let mut app = TestApp::new();

    let response = app.get("/ping").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
    assert_security_headers(&response.headers);
    // Liveness probes stay outside the session layer.
    assert!(app.cookie.is_none());
}

#[tokio::test]
async fn test_home_lists_latest_snippets() {
    let mut app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Latest Snippets"));
    assert!(response.body.contains("An old silent pond"));
    assert!(response.body.contains(r#"href="/snippet/view/1""#));
    assert!(response.body.contains("01 Jan 2024 at 10:00"));
    assert_security_headers(&response.headers);
}

#[tokio::test]
async fn test_about() {
    let mut app = TestApp::new();

    let response = app.get("/about").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("About"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut app = TestApp::new();

    let response = app.get("/no/such/page").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not Found");
    assert_security_headers(&response.headers);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let mut app = TestApp::new();

    let response = app.get("/static/css/main.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(".flash"));
}

#[tokio::test]
async fn test_panic_becomes_server_error_and_closes_connection() {
    let mut app = TestApp::with_snippets(Arc::new(PanickingSnippetModel));

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers["connection"], "close");
    assert_eq!(response.body, "Internal Server Error");
    assert!(!response.body.contains("listing exploded"));
    assert_security_headers(&response.headers);
}

fn debug_config() -> Config {
    Config {
        debug: true,
        ..test_config()
    }
}

#[tokio::test]
async fn test_debug_mode_shows_panic_detail() {
    let mut app = TestApp::with_config(Arc::new(PanickingSnippetModel), debug_config());

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.starts_with("Internal Server Error"));
    assert!(response.body.contains("listing exploded"));
    assert_eq!(response.headers["connection"], "close");
    assert_security_headers(&response.headers);
}

#[tokio::test]
async fn test_debug_mode_leaves_client_errors_alone() {
    let mut app = TestApp::with_config(Arc::new(MockSnippetModel), debug_config());

    let response = app.get("/no/such/page").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not Found");
}

#[tokio::test]
async fn test_anonymous_nav_offers_signup_and_login() {
    let mut app = TestApp::new();

    let response = app.get("/").await;

    assert!(response.body.contains(r#"href="/user/signup""#));
    assert!(response.body.contains(r#"href="/user/login""#));
    assert!(!response.body.contains(r#"action="/user/logout""#));
}
