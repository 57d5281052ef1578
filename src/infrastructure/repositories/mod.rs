//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! - **PgPostRepository** - aggregated feed query and viewer like-state
//! - **PgUserRepository** - user lookup and activity counts
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgPostRepository, PgUserRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let post_repo = PgPostRepository::new(pool.clone());
//!     let user_repo = PgUserRepository::new(pool);
//! }
//! ```

pub mod post_repository;
pub mod user_repository;

pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;
