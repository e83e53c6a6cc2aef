use crate::db::models::Snippet;
use crate::db::{timestamp, SnippetModel};
use crate::error::{ModelError, ModelResult};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// [`SnippetModel`] backed by the `snippets` table
#[derive(Debug, Clone)]
pub struct SqliteSnippetModel {
    pool: SqlitePool,
}

impl SqliteSnippetModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetModel for SqliteSnippetModel {
    async fn insert(&self, title: &str, content: &str, expires_days: i64) -> ModelResult<i64> {
        let now = Utc::now();
        let expires = Duration::try_days(expires_days)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(ModelError::InvalidExpiry(expires_days))?;

        let result = sqlx::query(
            "INSERT INTO snippets (title, content, created, expires)
             VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(timestamp(now))
        .bind(timestamp(expires))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> ModelResult<Snippet> {
        let snippet = sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets
             WHERE expires > ? AND id = ?",
        )
        .bind(timestamp(Utc::now()))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => ModelError::NoRecord,
            _ => ModelError::Database(e),
        })?;

        Ok(snippet)
    }

    async fn latest(&self, limit: u32) -> ModelResult<Vec<Snippet>> {
        let snippets = sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets
             WHERE expires > ?
             ORDER BY id DESC
             LIMIT ?",
        )
        .bind(timestamp(Utc::now()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }
}
