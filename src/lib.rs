//! # Snippetbox
//!
//! A server-rendered snippet sharing site: visitors read snippets, and
//! registered users log in to publish new ones and manage their password.
//!
//! ## Request pipeline
//! 1. Standard middleware: panic recovery, request logging, security headers
//! 2. Route dispatch
//! 3. Page middleware: session load/save, CSRF check, authentication context
//! 4. Protected routes only: login required
//! 5. Handler: validate, call a model, update the session, render or redirect

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod validator;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorDetail, ModelError, ModelResult};
pub use routes::routes;
pub use state::AppState;
