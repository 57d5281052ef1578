//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::application::services::HomePageView;
use crate::domain::{Post, UserStats};

/// Post as listed on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub username: String,
    pub category_name: String,
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            username: post.username,
            category_name: post.category_name,
            created_at: post.created_at.to_rfc3339(),
            like_count: post.like_count,
            comment_count: post.comment_count,
            is_liked: post.is_liked,
        }
    }
}

/// Viewer activity counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatsResponse {
    pub post_count: i64,
    pub comment_count: i64,
}

impl From<UserStats> for StatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            post_count: stats.post_count,
            comment_count: stats.comment_count,
        }
    }
}

/// Home page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub username: String,
    pub is_guest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub stats: StatsResponse,
    pub posts: Vec<PostResponse>,
    pub current_page: u32,
    pub available_pages: u32,
}

impl From<HomePageView> for HomeResponse {
    fn from(view: HomePageView) -> Self {
        Self {
            username: view.username,
            is_guest: view.is_guest,
            created_at: view.created_at,
            stats: view.stats.into(),
            posts: view.posts.into_iter().map(PostResponse::from).collect(),
            current_page: view.current_page,
            available_pages: view.available_pages,
        }
    }
}
