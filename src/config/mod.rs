//! # Configuration Module
//!
//! Application configuration loading. Values come from, in increasing priority:
//! - Built-in defaults
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - Environment variables (prefixed with APP__, plus DATABASE_URL, JWT_SECRET, ...)
//! - .env files are loaded into the environment first (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_feed::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("{} posts per page", settings.feed.page_size);
//! ```

mod settings;

pub use settings::*;
