//! # Error Handling
//!
//! This module defines the error types for the application and handles
//! converting them into HTTP responses.
//!
//! There are two layers:
//! - [`ModelError`]: what the data-access layer reports. Some variants are
//!   domain outcomes (duplicate email, bad credentials) that handlers turn
//!   into form errors instead of failures.
//! - [`AppError`]: what a handler or middleware gives up with. It knows how to
//!   become a response and never leaks internal detail to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors reported by the snippet and user models
#[derive(Error, Debug)]
pub enum ModelError {
    /// The requested row does not exist (or, for snippets, has expired)
    #[error("no matching record found")]
    NoRecord,

    /// Unknown email or wrong password
    ///
    /// Both cases share this variant so callers cannot tell which one happened.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup with an email address that is already registered
    #[error("duplicate email")]
    DuplicateEmail,

    /// An expiry that does not fit in a timestamp
    #[error("expiry of {0} days is out of range")]
    InvalidExpiry(i64),

    /// Any other failure from the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failed to hash, or a stored hash could not be parsed
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A blocking hash task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience alias for data-access results
pub type ModelResult<T> = Result<T, ModelError>;

/// Application-wide error type
///
/// Each variant corresponds to a category of failure and a status code.
/// Validation problems are *not* errors: handlers re-render the form with a
/// 422 status themselves.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed submission (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing resource (404)
    #[error("Not found")]
    NotFound,

    /// State-changing request without a valid CSRF token (400)
    #[error("CSRF token missing or invalid")]
    CsrfFailure,

    /// Data-access failure
    ///
    /// `NoRecord` becomes a 404, everything else a 500.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// The session store could not load or save session data
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::CsrfFailure => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::Model(ModelError::NoRecord) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Description of a server error, attached to its response as an extension
///
/// Clients never see it unless the `debug` middleware copies it into the body.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Convert AppError into an HTTP response
///
/// ## How it works
/// 1. Determine the status code
/// 2. Log server-side failures with full detail
/// 3. Respond with the status text only, so nothing internal reaches the client
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::BadRequest(reason) => tracing::debug!("Rejected malformed request: {}", reason),
            AppError::CsrfFailure => tracing::warn!("Rejected request with failed CSRF check"),
            _ if status.is_server_error() => tracing::error!("{:?}", self),
            _ => {}
        }

        let body = status.canonical_reason().unwrap_or("Error");
        let mut response = (status, body).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(ErrorDetail(self.to_string()));
        }
        response
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
