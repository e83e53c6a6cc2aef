//! Router assembly.
//!
//! Three middleware chains, from the outside in:
//! - standard (every request): security headers, request log, debug error
//!   detail, panic recovery
//! - dynamic (page routes): session, CSRF, authenticate
//! - protected (dynamic plus): require authentication
//!
//! axum applies `.layer` calls bottom-up, so the last layer added is the
//! outermost one.

use crate::handlers::{health, pages, snippets, users};
use crate::middleware;
use crate::session::session_layer;
use crate::state::AppState;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_sessions::SessionStore;

/// Build the application router on top of a session store
pub fn routes<Store>(state: AppState, store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let protected = Router::new()
        .route(
            "/snippet/create",
            get(snippets::snippet_create).post(snippets::snippet_create_post),
        )
        .route("/user/logout", post(users::logout_post))
        .route("/account/view", get(users::account_view))
        .route(
            "/account/password/update",
            get(users::password_update).post(users::password_update_post),
        )
        .route_layer(from_fn(middleware::require_authentication));

    let dynamic = Router::new()
        .route("/", get(snippets::home))
        .route("/about", get(pages::about))
        .route("/snippet/view/{id}", get(snippets::snippet_view))
        .route("/user/signup", get(users::signup).post(users::signup_post))
        .route("/user/login", get(users::login).post(users::login_post))
        .merge(protected)
        .route_layer(from_fn_with_state(state.clone(), middleware::authenticate))
        .route_layer(from_fn(middleware::csrf_protect))
        .route_layer(session_layer(store, &state.config));

    Router::new()
        .route("/ping", get(health::ping))
        .merge(dynamic)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(pages::not_found)
        .layer(middleware::recover_panic())
        .layer(from_fn_with_state(state.clone(), middleware::show_error_detail))
        .layer(middleware::log_requests())
        .layer(from_fn(middleware::secure_headers))
        .with_state(state)
}
