//! Integration tests for viewing and creating snippets.

use axum::http::StatusCode;

use super::test_utils::TestApp;

#[tokio::test]
async fn test_snippet_view() {
    let mut app = TestApp::new();

    let response = app.get("/snippet/view/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("An old silent pond..."));
    assert!(response.body.contains("Expires: 01 Jan 2099 at 10:00"));
}

#[tokio::test]
async fn test_snippet_view_bad_ids_are_not_found() {
    let cases = [
        "/snippet/view/2",
        "/snippet/view/-1",
        "/snippet/view/0",
        "/snippet/view/1.23",
        "/snippet/view/foo",
        "/snippet/view/",
    ];

    let mut app = TestApp::new();
    for uri in cases {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_create_requires_login() {
    let mut app = TestApp::new();

    let response = app.get("/snippet/create").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/user/login"));
}

#[tokio::test]
async fn test_create_form_for_authenticated_user() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app.get("/snippet/create").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"<form action="/snippet/create" method="POST">"#));
    assert!(response.body.contains(r#"value="365" checked"#));
    assert_eq!(response.headers["cache-control"], "no-store");
}

#[tokio::test]
async fn test_create_post_redirects_and_flashes() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app
        .submit(
            "/snippet/create",
            "/snippet/create",
            &[("title", "O snail"), ("content", "Climb Mount Fuji"), ("expires", "7")],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/snippet/view/2"));

    let next = app.get("/snippet/view/1").await;
    assert!(next.body.contains("Snippet successfully created!"));

    // Flash messages are shown once.
    let after = app.get("/snippet/view/1").await;
    assert!(!after.body.contains("Snippet successfully created!"));
}

#[tokio::test]
async fn test_create_post_validation() {
    let long_title = "a".repeat(101);
    let cases: [(&str, &str, &str, &str); 4] = [
        ("", "content", "7", "This field cannot be blank"),
        (&long_title, "content", "7", "This field cannot be longer than 100 characters"),
        ("title", "   ", "7", "This field cannot be blank"),
        ("title", "content", "30", "This field must equal 1, 7 or 365"),
    ];

    let mut app = TestApp::new();
    app.login().await;

    for (title, content, expires, message) in cases {
        let response = app
            .submit(
                "/snippet/create",
                "/snippet/create",
                &[("title", title), ("content", content), ("expires", expires)],
            )
            .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{message}");
        assert!(response.body.contains(message), "{message}");
    }
}

#[tokio::test]
async fn test_create_post_with_non_numeric_expiry_is_bad_request() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app
        .submit(
            "/snippet/create",
            "/snippet/create",
            &[("title", "t"), ("content", "c"), ("expires", "soon")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_without_csrf_token_is_rejected() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app
        .post_form(
            "/snippet/create",
            &[("title", "t"), ("content", "c"), ("expires", "7")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
