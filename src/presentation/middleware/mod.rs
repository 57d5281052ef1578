//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod logging;

pub use auth::{optional_auth_middleware, AuthUser, Claims, CurrentUser};
