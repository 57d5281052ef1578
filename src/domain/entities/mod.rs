//! # Domain Entities
//!
//! Core domain entities of the home feed.
//!
//! - **Post**: aggregated post read model with like/comment counts and categories
//! - **User**: account identity plus activity statistics
//! - **Viewer**: who is asking for the feed (guest or signed-in user)
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer.

mod post;
mod user;
mod viewer;

pub use post::{Post, PostRepository, DEFAULT_CATEGORY, FEED_POST_LIMIT};
pub use user::{User, UserRepository, UserStats};
pub use viewer::{AuthenticatedViewer, Viewer, GUEST_USERNAME};

#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use user::MockUserRepository;
