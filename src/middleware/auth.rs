use crate::error::AppResult;
use crate::session;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Authentication state of the current request
///
/// Inserted by [`authenticate`] on every page request and read-only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub is_authenticated: bool,
    pub user_id: Option<i64>,
}

/// Mark the request as authenticated if the session's user still exists
///
/// A user id left in a session after the account disappeared is ignored.
pub async fn authenticate(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let user_id: i64 = session
        .get(session::AUTHENTICATED_USER_ID)
        .await?
        .unwrap_or(0);

    let mut context = AuthContext::default();
    if user_id != 0 && state.users.exists(user_id).await? {
        context = AuthContext {
            is_authenticated: true,
            user_id: Some(user_id),
        };
    }

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Redirect anonymous visitors to the login form
///
/// For GET requests the original path is remembered so that a successful
/// login can send the user back to it.
pub async fn require_authentication(
    session: Session,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let authenticated = request
        .extensions()
        .get::<AuthContext>()
        .is_some_and(|ctx| ctx.is_authenticated);

    if !authenticated {
        if request.method() == Method::GET {
            let path = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| request.uri().path().to_string());
            session.insert(session::REDIRECT_PATH, path).await?;
        }
        return Ok(Redirect::to("/user/login").into_response());
    }

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}
