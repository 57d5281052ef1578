//! Viewer Service
//!
//! Turns the request's guest flag and token identity into a [`Viewer`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{UserRepository, Viewer};

/// Viewer resolver trait
#[async_trait]
pub trait ViewerResolver: Send + Sync {
    /// Resolve who is asking for the feed.
    ///
    /// `guest` wins over any token. Without it, the token's user must exist;
    /// `Ok(None)` means the request is neither a guest nor a known user.
    async fn resolve(&self, guest: bool, user_id: Option<i64>) -> Result<Option<Viewer>, ViewerError>;
}

/// Viewer resolution errors
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// ViewerResolver implementation backed by the user repository
pub struct ViewerResolverImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ViewerResolverImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> ViewerResolver for ViewerResolverImpl<U>
where
    U: UserRepository + 'static,
{
    async fn resolve(&self, guest: bool, user_id: Option<i64>) -> Result<Option<Viewer>, ViewerError> {
        if guest {
            return Ok(Some(Viewer::Guest));
        }

        let Some(user_id) = user_id else {
            return Ok(None);
        };

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| ViewerError::Internal(e.to_string()))?;

        if user.is_none() {
            tracing::debug!(user_id, "Token refers to an unknown user");
        }

        Ok(user.map(|u| Viewer::Authenticated(u.into())))
    }
}
