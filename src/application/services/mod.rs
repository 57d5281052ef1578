//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **FeedService**: home feed aggregation, stats and pagination
//! - **ViewerResolver**: guest / signed-in viewer resolution

pub mod feed_service;
pub mod viewer_service;

// Re-export feed service types
pub use feed_service::{
    format_long_date, FeedError, FeedOptions, FeedService, FeedServiceImpl, HomeOutcome,
    HomePageView,
};

// Re-export viewer service types
pub use viewer_service::{ViewerError, ViewerResolver, ViewerResolverImpl};
