//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.
//! Used by load balancers and monitoring systems.

/// Liveness check
///
/// ## Route
/// GET /ping
///
/// Always answers with the literal body `OK`. It sits outside the session
/// layer, so probes never create sessions.
pub async fn ping() -> &'static str {
    "OK"
}
