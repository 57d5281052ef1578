//! Post Repository Implementation
//!
//! PostgreSQL implementation of the aggregated feed query.
//! Category names, like counts and comment counts are aggregated in
//! subqueries and joined onto the newest posts.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::domain::{Post, PostRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const RECENT_POSTS_QUERY: &str = r#"
    SELECT
        p.id,
        p.title,
        p.content,
        u.username,
        cat.category_names,
        p.created_at,
        COALESCE(l.like_count, 0) AS like_count,
        COALESCE(cm.comment_count, 0) AS comment_count
    FROM posts p
    INNER JOIN users u ON p.user_id = u.id
    LEFT JOIN (
        SELECT pc.post_id, STRING_AGG(c.name, ', ') AS category_names
        FROM post_categories pc
        INNER JOIN categories c ON c.id = pc.category_id
        GROUP BY pc.post_id
    ) cat ON cat.post_id = p.id
    LEFT JOIN (
        SELECT post_id, COUNT(*) AS like_count
        FROM likes
        WHERE post_id IS NOT NULL
        GROUP BY post_id
    ) l ON l.post_id = p.id
    LEFT JOIN (
        SELECT post_id, COUNT(*) AS comment_count
        FROM comments
        GROUP BY post_id
    ) cm ON cm.post_id = p.id
    ORDER BY p.created_at DESC
    LIMIT $1
"#;

/// Internal row type for the feed query.
#[derive(Debug, FromRow)]
struct FeedPostRow {
    id: i64,
    title: String,
    content: String,
    username: String,
    category_names: Option<String>,
    created_at: DateTime<Utc>,
    like_count: i64,
    comment_count: i64,
}

impl FeedPostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            username: self.username,
            category_name: Post::category_label(self.category_names),
            created_at: self.created_at,
            like_count: self.like_count,
            comment_count: self.comment_count,
            is_liked: false,
        }
    }
}

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Creates a new PgPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Decode each row on its own, dropping rows that fail to decode. Errors
/// from the query itself still propagate.
async fn decode_rows<T>(
    mut rows: BoxStream<'_, Result<PgRow, sqlx::Error>>,
    table: &str,
) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    let mut decoded = Vec::new();
    while let Some(row) = rows.try_next().await? {
        match T::from_row(&row) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                tracing::warn!(table, error = %e, "Skipping row that failed to decode");
                metrics::record_skipped_row(table);
            }
        }
    }
    Ok(decoded)
}

#[async_trait]
impl PostRepository for PgPostRepository {
    /// A single malformed row is dropped without failing the whole feed.
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query(RECENT_POSTS_QUERY)
            .bind(limit)
            .fetch(&self.pool);

        let rows: Vec<FeedPostRow> = decode_rows(rows, "posts").await?;
        Ok(rows.into_iter().map(FeedPostRow::into_post).collect())
    }

    /// One round trip for the whole page instead of one existence check per post.
    async fn find_liked_post_ids(
        &self,
        user_id: i64,
        post_ids: &[i64],
    ) -> Result<HashSet<i64>, AppError> {
        if post_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT post_id
            FROM likes
            WHERE user_id = $1 AND post_id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
