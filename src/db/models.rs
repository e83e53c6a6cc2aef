//! # Database Models
//!
//! This module defines the data structures that map to database tables.
//!
//! ## Why Strings for dates?
//! SQLite stores timestamps as text. They are written by [`crate::db::timestamp`]
//! (RFC 3339, UTC) and parsed back only when a page formats them for display.

/// A shared piece of text
///
/// Snippets are never edited or deleted. Once `expires` is in the past they
/// simply stop showing up in queries.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Snippet {
    /// Row id, assigned by SQLite
    pub id: i64,

    /// Short title, at most 100 characters
    pub title: String,

    /// Snippet body
    pub content: String,

    /// When the snippet was created (RFC 3339 timestamp)
    pub created: String,

    /// When the snippet stops being visible (RFC 3339 timestamp)
    pub expires: String,
}

/// A registered account
///
/// The password hash lives only in the database and is never loaded into
/// this struct.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Row id, assigned by SQLite
    pub id: i64,

    /// Display name given at signup
    pub name: String,

    /// Login email, unique across users
    pub email: String,

    /// When the account was created (RFC 3339 timestamp)
    pub created: String,
}
