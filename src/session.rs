//! Session keys and the session manager layer.
//!
//! Session data lives server-side (SQLite in production, memory in tests);
//! the browser only holds the session id cookie.

use crate::config::Config;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

/// Id of the logged-in user; absent when logged out
pub const AUTHENTICATED_USER_ID: &str = "authenticated_user_id";

/// One-time notice shown on the next rendered page
pub const FLASH: &str = "flash";

/// Hex-encoded CSRF base token
pub const CSRF_TOKEN: &str = "csrf_token";

/// Path of the protected page that sent the visitor to the login form
pub const REDIRECT_PATH: &str = "redirect_path";

/// Build the session layer for `store` using the configured cookie policy
///
/// The cookie is HttpOnly with path `/`. It is marked Secure unless
/// `secure_cookies` is off, and it expires after the configured period of
/// inactivity.
pub fn session_layer<Store>(store: Store, config: &Config) -> SessionManagerLayer<Store>
where
    Store: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_secure(config.secure_cookies)
        .with_http_only(true)
        .with_path("/")
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            config.session_lifetime_hours,
        )))
}
