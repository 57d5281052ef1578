//! Application Layer
//!
//! Feed assembly services and the response DTOs they are rendered into.

pub mod dto;
pub mod services;
