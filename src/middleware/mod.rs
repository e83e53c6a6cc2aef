//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//! Used for cross-cutting concerns like authentication, logging, headers, etc.
//!
//! ## Our Middleware
//! Applied to every request (outermost first):
//! - `headers`: fixed security headers on every response, recovered panics included
//! - `logging`: a tracing span and log lines per request
//! - `debug`: error detail in 500 bodies when the `debug` flag is set
//! - `panic`: turns a panicking handler into a 500 and closes the connection
//!
//! Applied to page routes, after the session layer has run:
//! - `csrf`: rejects state-changing requests without a valid token
//! - `auth::authenticate`: marks the request as authenticated when the
//!   session holds the id of a user that still exists
//!
//! Applied to protected routes only:
//! - `auth::require_authentication`: sends anonymous visitors to the login form

pub mod auth;
pub mod csrf;
pub mod debug;
pub mod headers;
pub mod logging;
pub mod panic;

pub use auth::{authenticate, require_authentication, AuthContext};
pub use csrf::{csrf_protect, CsrfToken};
pub use debug::show_error_detail;
pub use headers::secure_headers;
pub use logging::log_requests;
pub use panic::recover_panic;
