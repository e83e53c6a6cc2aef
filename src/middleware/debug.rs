use crate::error::ErrorDetail;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// In debug mode, replace a 500 body with the error that caused it
pub async fn show_error_detail(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.debug {
        return response;
    }

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let reason = parts.status.canonical_reason().unwrap_or("Error");
    Response::from_parts(parts, Body::from(format!("{reason}\n\n{detail}")))
}
