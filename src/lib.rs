//! # Blog Feed Library
//!
//! Home feed for a small blogging site:
//! - The newest posts with author, categories, like and comment counts
//! - Per-viewer like state and activity stats for signed-in users
//! - A read-only guest view
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, repository traits, pagination
//! - **Application Layer**: Feed and viewer services, response DTOs
//! - **Infrastructure Layer**: Database pool, repositories, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! blog_feed/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, pagination
//! +-- application/    Feed services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
