//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources (models, configuration, etc.)
//! across different parts of your application.
//!
//! ## The State Pattern
//! Instead of creating new database connections for each request, we:
//! 1. Create a connection pool once at startup
//! 2. Wrap it in the SQLite models and store them in AppState
//! 3. Share it across all request handlers
//! 4. Axum clones the state for each request (cheap because we use Arc)

use crate::config::Config;
use crate::db::{SnippetModel, SqliteSnippetModel, SqliteUserModel, UserModel};
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// ## Why trait objects?
/// Handlers depend only on the [`SnippetModel`] and [`UserModel`] capabilities.
/// Production passes the SQLite implementations; tests pass mocks.
///
/// ## Thread Safety
/// Both model traits require `Send + Sync`, and `Arc<T>` is thread-safe, so
/// the state can be shared across all request tasks.
#[derive(Clone)]
pub struct AppState {
    /// Snippet storage
    pub snippets: Arc<dyn SnippetModel>,

    /// User accounts and credential checks
    pub users: Arc<dyn UserModel>,

    /// Process-wide configuration, loaded once at startup
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state from any pair of model implementations
    pub fn new(
        snippets: Arc<dyn SnippetModel>,
        users: Arc<dyn UserModel>,
        config: Config,
    ) -> Self {
        AppState {
            snippets,
            users,
            config: Arc::new(config),
        }
    }

    /// Initialize application state on top of an SQLite pool
    ///
    /// `SqlitePool` is already a clone-able handle to the pool, so both models
    /// share the same connections.
    pub fn with_sqlite(pool: SqlitePool, config: Config) -> Self {
        AppState::new(
            Arc::new(SqliteSnippetModel::new(pool.clone())),
            Arc::new(SqliteUserModel::new(pool)),
            config,
        )
    }
}
