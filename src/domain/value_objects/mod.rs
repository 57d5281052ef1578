//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **PageRequest**: 1-based page number parsed leniently from the query string

mod page_request;

pub use page_request::*;
