//! Integration tests for signup, login, logout, account pages and CSRF.

use axum::http::StatusCode;
use std::sync::atomic::Ordering;

use super::test_utils::{TestApp, DUPE_EMAIL, REAL_EMAIL, REAL_PASSWORD};

// =============================================================================
// Signup
// =============================================================================

#[tokio::test]
async fn test_signup_redirects_to_login_with_flash() {
    let mut app = TestApp::new();

    let response = app
        .submit(
            "/user/signup",
            "/user/signup",
            &[
                ("name", "Bob"),
                ("email", "bob@example.com"),
                ("password", "validPa$$word"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/user/login"));

    let login = app.get("/user/login").await;
    assert!(login.body.contains("Your signup was successful. Please log in."));
}

#[tokio::test]
async fn test_signup_validation() {
    let cases = [
        ("", "bob@example.com", "validPa$$word", "This field cannot be blank"),
        ("Bob", "bob@example.", "validPa$$word", "This field must be a valid email address"),
        ("Bob", "bob@example.com", "pa$$", "This field must be at least 8 characters long"),
        ("Bob", DUPE_EMAIL, "validPa$$word", "Email address is already in use"),
    ];

    let mut app = TestApp::new();
    for (name, email, password, message) in cases {
        let response = app
            .submit(
                "/user/signup",
                "/user/signup",
                &[("name", name), ("email", email), ("password", password)],
            )
            .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{message}");
        assert!(response.body.contains(message), "{message}");
        // Entered values are kept, passwords are not.
        assert!(!response.body.contains(password), "{message}");
    }

    // A failed signup does not log anyone in.
    let account = app.get("/account/view").await;
    assert_eq!(account.status, StatusCode::SEE_OTHER);
}

// =============================================================================
// Login and logout
// =============================================================================

#[tokio::test]
async fn test_login_with_wrong_credentials() {
    let mut app = TestApp::new();

    let response = app
        .submit(
            "/user/login",
            "/user/login",
            &[("email", REAL_EMAIL), ("password", "wrongPa$$word")],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Email or password is incorrect"));
    assert!(response.body.contains(REAL_EMAIL));
}

#[tokio::test]
async fn test_login_with_blank_fields() {
    let mut app = TestApp::new();

    let response = app
        .submit("/user/login", "/user/login", &[("email", ""), ("password", "")])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("This field cannot be blank"));
    assert!(!response.body.contains("Email or password is incorrect"));
}

#[tokio::test]
async fn test_login_redirects_to_create_by_default() {
    let mut app = TestApp::new();

    let response = app.login().await;

    assert_eq!(response.location(), Some("/snippet/create"));

    let home = app.get("/").await;
    assert!(home.body.contains(r#"action="/user/logout""#));
    assert!(home.body.contains("Create snippet"));
}

#[tokio::test]
async fn test_login_returns_to_requested_page() {
    let mut app = TestApp::new();

    let bounced = app.get("/account/view").await;
    assert_eq!(bounced.location(), Some("/user/login"));

    let response = app.login().await;
    assert_eq!(response.location(), Some("/account/view"));

    // The stored path is used once.
    app.submit("/account/view", "/user/logout", &[]).await;
    let again = app.login().await;
    assert_eq!(again.location(), Some("/snippet/create"));
}

#[tokio::test]
async fn test_login_renews_session_id() {
    let mut app = TestApp::new();

    app.get("/user/login").await;
    let anonymous_cookie = app.cookie.clone();
    assert!(anonymous_cookie.is_some());

    app.login().await;
    assert_ne!(app.cookie, anonymous_cookie);

    let account = app.get("/account/view").await;
    assert_eq!(account.status, StatusCode::OK);

    app.cookie = anonymous_cookie;
    let account = app.get("/account/view").await;
    assert_eq!(account.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_deleted_user_is_not_authenticated() {
    let mut app = TestApp::new();
    app.login().await;

    app.users.deleted.store(true, Ordering::SeqCst);

    let response = app.get("/account/view").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/user/login"));
}

#[tokio::test]
async fn test_logout() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app.submit("/account/view", "/user/logout", &[]).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let home = app.get("/").await;
    assert!(home.body.contains("logged out successfully"));
    assert!(home.body.contains(r#"href="/user/login""#));

    let create = app.get("/snippet/create").await;
    assert_eq!(create.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_requires_login() {
    let mut app = TestApp::new();

    let response = app.submit("/user/login", "/user/logout", &[]).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/user/login"));
}

// =============================================================================
// Account
// =============================================================================

#[tokio::test]
async fn test_account_view() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app.get("/account/view").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Alice"));
    assert!(response.body.contains(REAL_EMAIL));
    assert!(response.body.contains("01 Jan 2024 at 10:00"));
    assert_eq!(response.headers["cache-control"], "no-store");
}

#[tokio::test]
async fn test_password_update() {
    let cases = [
        ("wrongPa$$word", "newPa$$word", "newPa$$word", "Current password is incorrect"),
        (REAL_PASSWORD, "newPa$$word", "otherPa$$word", "Passwords do not match"),
        (REAL_PASSWORD, "short", "short", "This field must be at least 8 characters long"),
        ("", "newPa$$word", "newPa$$word", "This field cannot be blank"),
    ];

    let mut app = TestApp::new();
    app.login().await;

    for (current, new, confirm, message) in cases {
        let response = app
            .submit(
                "/account/password/update",
                "/account/password/update",
                &[
                    ("currentPassword", current),
                    ("newPassword", new),
                    ("confirmPassword", confirm),
                ],
            )
            .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{message}");
        assert!(response.body.contains(message), "{message}");
    }

    let response = app
        .submit(
            "/account/password/update",
            "/account/password/update",
            &[
                ("currentPassword", REAL_PASSWORD),
                ("newPassword", "newPa$$word"),
                ("confirmPassword", "newPa$$word"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/account/view"));

    let account = app.get("/account/view").await;
    assert!(account.body.contains("Your password has been updated!"));
}

// =============================================================================
// CSRF
// =============================================================================

#[tokio::test]
async fn test_post_without_csrf_token_is_rejected() {
    let mut app = TestApp::new();
    app.get("/user/login").await;

    let response = app
        .post_form(
            "/user/login",
            &[("email", REAL_EMAIL), ("password", REAL_PASSWORD)],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_csrf_token_from_another_session_is_rejected() {
    let mut victim = TestApp::new();
    let stolen = victim.csrf_token("/user/login").await;

    let mut attacker = TestApp::new();
    attacker.get("/user/login").await;
    let response = attacker
        .post_form(
            "/user/login",
            &[
                ("email", REAL_EMAIL),
                ("password", REAL_PASSWORD),
                ("csrf_token", stolen.as_str()),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_csrf_token_is_masked_per_render() {
    let mut app = TestApp::new();

    let first = app.csrf_token("/user/login").await;
    let second = app.csrf_token("/user/login").await;

    assert_ne!(first, second);

    // Any earlier rendering stays valid for the same session.
    let response = app
        .post_form(
            "/user/login",
            &[
                ("email", REAL_EMAIL),
                ("password", REAL_PASSWORD),
                ("csrf_token", first.as_str()),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}
