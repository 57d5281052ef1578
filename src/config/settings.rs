//! Application settings and configuration structures.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// JWT settings used to identify signed-in viewers
    pub jwt: JwtSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Home feed behavior
    pub feed: FeedSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

/// JWT verification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key tokens are signed with
    pub secret: String,

    /// Cookie carrying the session token for browser clients
    pub cookie_name: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Home feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    /// Posts per page
    pub page_size: usize,

    /// Maximum posts fetched for the feed
    pub post_limit: i64,

    /// Paginate the guest feed as well (guests get the whole feed otherwise)
    pub paginate_guests: bool,

    /// Where unauthenticated, non-guest visitors are redirected
    pub welcome_path: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            post_limit: 20,
            paginate_guests: false,
            welcome_path: "/welcome".into(),
        }
    }
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::with_defaults(&environment)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validate)
    }

    /// Config builder pre-populated with every default value.
    pub fn with_defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let feed = FeedSettings::default();

        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.cookie_name", "session")?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("feed.page_size", feed.page_size as u64)?
            .set_default("feed.post_limit", feed.post_limit)?
            .set_default("feed.paginate_guests", feed.paginate_guests)?
            .set_default("feed.welcome_path", feed.welcome_path)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters for security. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }
        if self.feed.page_size == 0 {
            return Err(ConfigError::Message("feed.page_size must be at least 1".into()));
        }
        if self.feed.post_limit < 1 {
            return Err(ConfigError::Message("feed.post_limit must be at least 1".into()));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
