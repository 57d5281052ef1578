//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally belong to
//! a single entity.
//!
//! - **Paginator**: fixed-size offset pagination with bounds-checked slicing

mod pagination;

pub use pagination::*;
