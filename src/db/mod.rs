//! # Database Module
//!
//! This module organizes all database-related code into submodules:
//! - `models`: Data structures (Snippet, User)
//! - `snippets`: SQLite-backed [`SnippetModel`]
//! - `users`: SQLite-backed [`UserModel`]
//!
//! ## Why traits?
//! Handlers only see `Arc<dyn SnippetModel>` and `Arc<dyn UserModel>`.
//! Production wires in the SQLite implementations; tests substitute mocks
//! without touching a database.

pub mod models;
pub mod snippets;
pub mod users;

use crate::error::ModelResult;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqlitePool;

pub use models::{Snippet, User};
pub use snippets::SqliteSnippetModel;
pub use users::SqliteUserModel;

/// Access to stored snippets
#[async_trait]
pub trait SnippetModel: Send + Sync {
    /// Store a new snippet expiring `expires_days` from now and return its id
    async fn insert(&self, title: &str, content: &str, expires_days: i64) -> ModelResult<i64>;

    /// Fetch one snippet
    ///
    /// Fails with `NoRecord` if the id is unknown or the snippet has expired.
    async fn get(&self, id: i64) -> ModelResult<Snippet>;

    /// Up to `limit` unexpired snippets, newest first
    async fn latest(&self, limit: u32) -> ModelResult<Vec<Snippet>>;
}

/// Access to user accounts
#[async_trait]
pub trait UserModel: Send + Sync {
    /// Create an account; fails with `DuplicateEmail` if the email is taken
    async fn insert(&self, name: &str, email: &str, password: &str) -> ModelResult<()>;

    /// Return the id of the user with these credentials
    ///
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    async fn authenticate(&self, email: &str, password: &str) -> ModelResult<i64>;

    async fn exists(&self, id: i64) -> ModelResult<bool>;

    /// Fails with `NoRecord` if absent
    async fn get(&self, id: i64) -> ModelResult<User>;

    /// Replace the password after checking the current one
    ///
    /// Fails with `InvalidCredentials` if `current_password` is wrong.
    async fn password_update(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
    ) -> ModelResult<()>;
}

/// Connect to the database and bring the schema up to date
///
/// The `sqlx::migrate!` macro embeds migrations from ./migrations at compile
/// time; already-applied migrations are skipped.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Render a timestamp the way it is stored
///
/// Fixed microsecond precision and a `Z` suffix keep stored values the same
/// length, so SQLite's text comparison orders them chronologically.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
