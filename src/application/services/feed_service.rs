//! Feed Service
//!
//! Builds the home feed: fetches the aggregated posts, marks the ones the
//! viewer liked, collects the viewer's activity stats and paginates.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::FeedSettings;
use crate::domain::{
    PageRequest, Paginator, Post, PostRepository, UserRepository, UserStats, Viewer,
    DEFAULT_PAGE_SIZE, FEED_POST_LIMIT,
};
use crate::infrastructure::metrics;

/// Feed service trait
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Newest posts with counts and categories; like-state is filled in for
    /// authenticated viewers only.
    async fn fetch_recent_posts(&self, viewer: Option<&Viewer>) -> Result<Vec<Post>, FeedError>;

    /// Best-effort activity counts. A failing count is reported as zero.
    async fn compute_stats(&self, user_id: i64) -> UserStats;

    /// Assemble the home page for a viewer, or ask for authentication when
    /// there is no viewer.
    async fn assemble_home(
        &self,
        viewer: Option<Viewer>,
        page: PageRequest,
    ) -> Result<HomeOutcome, FeedError>;
}

/// Everything the home page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePageView {
    pub username: String,
    pub is_guest: bool,
    /// Account creation date as a long date, e.g. "January 2, 2006"
    pub created_at: Option<String>,
    pub stats: UserStats,
    pub posts: Vec<Post>,
    /// 0 when the feed is not paginated
    pub current_page: u32,
    /// 0 when the feed is not paginated
    pub available_pages: u32,
}

/// Result of assembling the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeOutcome {
    Render(HomePageView),
    /// Neither a guest nor a known user; the caller should be sent to sign in.
    AuthenticationRequired,
}

/// Knobs for feed assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    pub page_size: usize,
    pub post_limit: i64,
    pub paginate_guests: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            post_limit: FEED_POST_LIMIT,
            paginate_guests: false,
        }
    }
}

impl From<&FeedSettings> for FeedOptions {
    fn from(settings: &FeedSettings) -> Self {
        Self {
            page_size: settings.page_size,
            post_limit: settings.post_limit,
            paginate_guests: settings.paginate_guests,
        }
    }
}

/// Feed service errors
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Store error: {0}")]
    Store(String),
}

/// Format a timestamp the way the home page header shows it.
pub fn format_long_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// FeedService implementation
pub struct FeedServiceImpl<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    user_repo: Arc<U>,
    options: FeedOptions,
}

impl<P, U> FeedServiceImpl<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(post_repo: Arc<P>, user_repo: Arc<U>, options: FeedOptions) -> Self {
        Self {
            post_repo,
            user_repo,
            options,
        }
    }

    fn paginator(&self) -> Paginator {
        Paginator::new(self.options.page_size)
    }

    /// Liked post IDs for the viewer. A failed lookup leaves every post
    /// unliked rather than failing the page.
    async fn liked_post_ids(&self, user_id: i64, posts: &[Post]) -> HashSet<i64> {
        if posts.is_empty() {
            return HashSet::new();
        }

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        match self.post_repo.find_liked_post_ids(user_id, &ids).await {
            Ok(liked) => liked,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Like-state lookup failed, showing posts as not liked");
                metrics::record_degraded_store_call("liked_post_ids");
                HashSet::new()
            }
        }
    }

    fn guest_view(&self, posts: Vec<Post>, page: PageRequest) -> HomePageView {
        let (posts, current_page, available_pages) = if self.options.paginate_guests {
            let page = self.paginator().paginate(&posts, page.number());
            (page.items, page.current_page, page.total_pages)
        } else {
            (posts, 0, 0)
        };

        HomePageView {
            username: Viewer::Guest.display_name().to_string(),
            is_guest: true,
            created_at: None,
            stats: UserStats::default(),
            posts,
            current_page,
            available_pages,
        }
    }
}

#[async_trait]
impl<P, U> FeedService for FeedServiceImpl<P, U>
where
    P: PostRepository + 'static,
    U: UserRepository + 'static,
{
    #[tracing::instrument(skip(self, viewer), fields(viewer = viewer.map(Viewer::kind)))]
    async fn fetch_recent_posts(&self, viewer: Option<&Viewer>) -> Result<Vec<Post>, FeedError> {
        let mut posts = self
            .post_repo
            .find_recent(self.options.post_limit)
            .await
            .map_err(|e| FeedError::Store(e.to_string()))?;

        let liked = match viewer.and_then(Viewer::user_id) {
            Some(user_id) => self.liked_post_ids(user_id, &posts).await,
            None => HashSet::new(),
        };

        for post in &mut posts {
            post.is_liked = liked.contains(&post.id);
        }

        tracing::debug!(count = posts.len(), liked = liked.len(), "Fetched feed posts");
        Ok(posts)
    }

    #[tracing::instrument(skip(self))]
    async fn compute_stats(&self, user_id: i64) -> UserStats {
        let post_count = self.user_repo.count_posts(user_id).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Post count failed, reporting 0");
            metrics::record_degraded_store_call("count_posts");
            0
        });

        let comment_count = self.user_repo.count_comments(user_id).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Comment count failed, reporting 0");
            metrics::record_degraded_store_call("count_comments");
            0
        });

        UserStats {
            post_count,
            comment_count,
        }
    }

    #[tracing::instrument(skip(self, viewer), fields(viewer = viewer.as_ref().map(Viewer::kind), page = %page))]
    async fn assemble_home(
        &self,
        viewer: Option<Viewer>,
        page: PageRequest,
    ) -> Result<HomeOutcome, FeedError> {
        let Some(viewer) = viewer else {
            return Ok(HomeOutcome::AuthenticationRequired);
        };

        let posts = self.fetch_recent_posts(Some(&viewer)).await?;

        let view = match viewer {
            Viewer::Guest => self.guest_view(posts, page),
            Viewer::Authenticated(user) => {
                let stats = self.compute_stats(user.id).await;
                let page = self.paginator().paginate(&posts, page.number());

                HomePageView {
                    username: user.username,
                    is_guest: false,
                    created_at: Some(format_long_date(user.created_at)),
                    stats,
                    posts: page.items,
                    current_page: page.current_page,
                    available_pages: page.total_pages,
                }
            }
        };

        Ok(HomeOutcome::Render(view))
    }
}
