//! CSRF protection
//!
//! Each session gets a random 32-byte base token, kept server-side in the
//! session record. Pages never show the base token itself: every render gets
//! a masked copy (random pad followed by pad XOR base), so the value in the
//! HTML changes on every response while still unmasking to the same base.
//!
//! Requests with an unsafe method must send the masked token back in the
//! `csrf_token` form field.

use crate::error::{AppError, AppResult};
use crate::session;
use axum::{
    body::{self, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use rand::Rng;
use subtle::ConstantTimeEq;
use tower_sessions::Session;
use url::form_urlencoded;

/// Name of the hidden form field carrying the masked token
pub const FORM_FIELD: &str = "csrf_token";

const TOKEN_LEN: usize = 32;

/// Largest form body read while looking for the token
const MAX_FORM_BYTES: usize = 1024 * 1024;

/// Masked token for the current request, ready to embed in a form
#[derive(Debug, Clone)]
pub struct CsrfToken(pub String);

pub fn generate_base_token() -> [u8; TOKEN_LEN] {
    rand::thread_rng().gen()
}

/// Hex of `pad || (pad ^ base)` with a fresh random pad
pub fn mask_token(base: &[u8; TOKEN_LEN]) -> String {
    let pad: [u8; TOKEN_LEN] = rand::thread_rng().gen();

    let mut masked = Vec::with_capacity(TOKEN_LEN * 2);
    masked.extend_from_slice(&pad);
    masked.extend(pad.iter().zip(base).map(|(p, b)| p ^ b));

    hex::encode(masked)
}

/// True if `submitted` unmasks to `base`
pub fn verify_token(base: &[u8; TOKEN_LEN], submitted: &str) -> bool {
    let Ok(raw) = hex::decode(submitted) else {
        return false;
    };
    if raw.len() != TOKEN_LEN * 2 {
        return false;
    }

    let (pad, masked) = raw.split_at(TOKEN_LEN);
    let unmasked: Vec<u8> = pad.iter().zip(masked).map(|(p, m)| p ^ m).collect();

    unmasked.ct_eq(base.as_slice()).into()
}

fn is_safe(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE)
}

/// Load the session's base token, creating one on first visit
async fn base_token(session: &Session) -> AppResult<[u8; TOKEN_LEN]> {
    let stored: Option<String> = session.get(session::CSRF_TOKEN).await?;

    if let Some(token) = stored
        .and_then(|hex_token| hex::decode(hex_token).ok())
        .and_then(|bytes| <[u8; TOKEN_LEN]>::try_from(bytes).ok())
    {
        return Ok(token);
    }

    let token = generate_base_token();
    session.insert(session::CSRF_TOKEN, hex::encode(token)).await?;
    Ok(token)
}

pub async fn csrf_protect(session: Session, request: Request, next: Next) -> AppResult<Response> {
    let base = base_token(&session).await?;

    let mut request = if is_safe(request.method()) {
        request
    } else {
        let (parts, body) = request.into_parts();
        let bytes = body::to_bytes(body, MAX_FORM_BYTES)
            .await
            .map_err(|e| AppError::BadRequest(format!("unreadable request body: {e}")))?;

        let submitted = form_urlencoded::parse(&bytes)
            .find(|(key, _)| key == FORM_FIELD)
            .map(|(_, value)| value.into_owned());

        match submitted {
            Some(token) if verify_token(&base, &token) => {}
            _ => {
                tracing::warn!(method = %parts.method, uri = %parts.uri, "CSRF token missing or invalid");
                return Err(AppError::CsrfFailure);
            }
        }

        Request::from_parts(parts, Body::from(bytes))
    };

    request.extensions_mut().insert(CsrfToken(mask_token(&base)));
    Ok(next.run(request).await)
}
