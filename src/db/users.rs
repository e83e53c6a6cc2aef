use crate::db::models::User;
use crate::db::{timestamp, UserModel};
use crate::error::{ModelError, ModelResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// bcrypt cost used for stored passwords
pub const DEFAULT_HASH_COST: u32 = 12;

/// [`UserModel`] backed by the `users` table
#[derive(Debug, Clone)]
pub struct SqliteUserModel {
    pool: SqlitePool,
    hash_cost: u32,
}

impl SqliteUserModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Override the bcrypt cost (tests use the minimum to stay fast)
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    async fn hashed_password(&self, id: i64) -> ModelResult<String> {
        let (hash,): (String,) = sqlx::query_as("SELECT hashed_password FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => ModelError::NoRecord,
                _ => ModelError::Database(e),
            })?;

        Ok(hash)
    }
}

// bcrypt is deliberately slow; both helpers run on the blocking pool.

async fn hash_password(password: &str, cost: u32) -> ModelResult<String> {
    let password = password.to_owned();
    Ok(tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??)
}

async fn verify_password(password: &str, hash: String) -> ModelResult<bool> {
    let password = password.to_owned();
    Ok(tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??)
}

#[async_trait]
impl UserModel for SqliteUserModel {
    async fn insert(&self, name: &str, email: &str, password: &str) -> ModelResult<()> {
        let hashed = hash_password(password, self.hash_cost).await?;

        sqlx::query(
            "INSERT INTO users (name, email, hashed_password, created)
             VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(hashed)
        .bind(timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => ModelError::DuplicateEmail,
            _ => ModelError::Database(e),
        })?;

        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> ModelResult<i64> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, hashed_password FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        let Some((id, hash)) = row else {
            return Err(ModelError::InvalidCredentials);
        };

        if verify_password(password, hash).await? {
            Ok(id)
        } else {
            Err(ModelError::InvalidCredentials)
        }
    }

    async fn exists(&self, id: i64) -> ModelResult<bool> {
        let (exists,): (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists != 0)
    }

    async fn get(&self, id: i64) -> ModelResult<User> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email, created FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => ModelError::NoRecord,
                _ => ModelError::Database(e),
            })?;

        Ok(user)
    }

    async fn password_update(
        &self,
        id: i64,
        current_password: &str,
        new_password: &str,
    ) -> ModelResult<()> {
        let hash = self.hashed_password(id).await?;

        // A stored hash bcrypt cannot parse surfaces as PasswordHash, never as success.
        if !verify_password(current_password, hash).await? {
            return Err(ModelError::InvalidCredentials);
        }

        let hashed = hash_password(new_password, self.hash_cost).await?;

        sqlx::query("UPDATE users SET hashed_password = ? WHERE id = ?")
            .bind(hashed)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
