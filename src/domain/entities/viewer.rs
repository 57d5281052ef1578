//! Viewer identity context.
//!
//! Every home feed request is served either to a guest or to a signed-in
//! user. The aggregation and stats steps branch on this.

use chrono::{DateTime, Utc};

use super::user::User;

/// Display name used for guest viewers.
pub const GUEST_USERNAME: &str = "Guest";

/// A signed-in viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedViewer {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AuthenticatedViewer {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// The requester's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Guest,
    Authenticated(AuthenticatedViewer),
}

impl Viewer {
    /// User ID of an authenticated viewer.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::Guest => None,
            Self::Authenticated(viewer) => Some(viewer.id),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    /// Name shown in the page header.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Guest => GUEST_USERNAME,
            Self::Authenticated(viewer) => &viewer.username,
        }
    }

    /// Label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Authenticated(_) => "authenticated",
        }
    }
}
