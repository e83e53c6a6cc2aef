use super::PageContext;
use crate::error::{AppError, AppResult};
use crate::views::{self, render};
use axum::{http::StatusCode, response::Response};

pub async fn about(page: PageContext) -> AppResult<Response> {
    let data = page.template_data().await?;
    Ok(render(StatusCode::OK, views::pages::about(&data)))
}

/// Fallback for unmatched paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
