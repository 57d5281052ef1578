//! Feed post entity and repository trait.
//!
//! A `Post` here is the aggregated read model of the `posts` table joined with
//! its author, categories, likes and comments. It is built fresh for every
//! request and never written back.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Category label used when a post has no linked categories.
pub const DEFAULT_CATEGORY: &str = "General";

/// Hard cap on the number of posts the feed query returns.
pub const FEED_POST_LIMIT: i64 = 20;

/// An aggregated post as shown in the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Primary key of the post
    pub id: i64,

    pub title: String,

    pub content: String,

    /// Author's username
    pub username: String,

    /// Comma-separated category names, or [`DEFAULT_CATEGORY`]
    pub category_name: String,

    pub created_at: DateTime<Utc>,

    /// Likes attached to this post (comment likes excluded)
    pub like_count: i64,

    pub comment_count: i64,

    /// Whether the current viewer liked this post. Always false for guests.
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    /// Resolve the category label from the aggregated category names.
    ///
    /// A post without categories (NULL aggregate) or with an empty aggregate
    /// is labelled [`DEFAULT_CATEGORY`].
    pub fn category_label(category_names: Option<String>) -> String {
        match category_names {
            Some(names) if !names.is_empty() => names,
            _ => DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Repository trait for the aggregated post feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch up to `limit` posts, newest first, with author, categories and
    /// like/comment counts resolved.
    ///
    /// Rows that fail to decode are skipped; the rest of the batch is returned.
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Return the subset of `post_ids` the given user has liked.
    async fn find_liked_post_ids(
        &self,
        user_id: i64,
        post_ids: &[i64],
    ) -> Result<HashSet<i64>, AppError>;
}
