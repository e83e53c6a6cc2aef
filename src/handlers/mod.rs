//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `health`: Liveness endpoint (`/ping`)
//! - `pages`: Static pages and the 404 fallback
//! - `snippets`: Listing, viewing and creating snippets
//! - `users`: Signup, login, logout, account and password change
//!
//! ## Handler Pattern
//! Display handlers build [`TemplateData`] and render a page. Submit handlers:
//! 1. Decode the form (400 if the body is malformed)
//! 2. Run the form's validation; on failure re-render it with 422
//! 3. Perform one model call, turning domain errors into form errors
//! 4. Set a flash message and redirect with 303 See Other

pub mod health;
pub mod pages;
pub mod snippets;
pub mod users;

use crate::error::{AppError, AppResult};
use crate::middleware::{AuthContext, CsrfToken};
use crate::session;
use crate::views::TemplateData;
use axum::{
    extract::{rejection::FormRejection, FromRequestParts},
    http::request::Parts,
    Form,
};
use tower_sessions::Session;

/// Per-request pieces every page handler needs
///
/// Gathers the session, the authentication context set by the
/// `authenticate` middleware, and the masked CSRF token.
pub struct PageContext {
    pub session: Session,
    pub auth: AuthContext,
    pub csrf_token: String,
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::Internal(message.to_string()))?;

        let auth = parts.extensions.get::<AuthContext>().copied().unwrap_or_default();
        let csrf_token = parts
            .extensions
            .get::<CsrfToken>()
            .map(|CsrfToken(token)| token.clone())
            .unwrap_or_default();

        Ok(PageContext {
            session,
            auth,
            csrf_token,
        })
    }
}

impl PageContext {
    /// Template data for the page about to be rendered
    ///
    /// Consumes the flash message, so call this only when a page is rendered.
    pub async fn template_data(&self) -> AppResult<TemplateData> {
        let flash: Option<String> = self.session.remove(session::FLASH).await?;
        Ok(TemplateData::new(
            flash,
            self.auth.is_authenticated,
            self.csrf_token.clone(),
        ))
    }

    pub async fn flash(&self, message: &str) -> AppResult<()> {
        self.session.insert(session::FLASH, message).await?;
        Ok(())
    }

    /// Id of the authenticated user
    ///
    /// Only protected routes call this, so a missing id is an internal error.
    pub fn user_id(&self) -> AppResult<i64> {
        self.auth
            .user_id
            .ok_or_else(|| AppError::Internal("protected route reached without a user".into()))
    }
}

/// Unwrap a decoded form, mapping decode failures to 400
pub fn decode_form<T>(form: Result<Form<T>, FormRejection>) -> AppResult<T> {
    form.map(|Form(inner)| inner)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
