//! # Domain Layer
//!
//! The domain layer contains the core rules of the home feed. It is
//! independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Post, User, Viewer and their repository traits
//! - **value_objects**: PageRequest
//! - **services**: Paginator
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
