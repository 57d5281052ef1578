//! User entity, per-user statistics and repository trait.
//!
//! Maps to the `users` table in the database schema. Only the columns the
//! feed needs are loaded.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a registered account.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - username: VARCHAR(64) NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Aggregate activity counts for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Posts authored by the user
    pub post_count: i64,

    /// Comments written by the user
    pub comment_count: i64,
}

/// Repository trait for user lookups and activity counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Count posts authored by the user.
    async fn count_posts(&self, user_id: i64) -> Result<i64, AppError>;

    /// Count comments written by the user.
    async fn count_comments(&self, user_id: i64) -> Result<i64, AppError>;
}
