//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::application::services::{
    FeedOptions, FeedService, FeedServiceImpl, ViewerResolver, ViewerResolverImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgPostRepository, PgUserRepository};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub settings: Arc<Settings>,
    pub feed: Arc<dyn FeedService>,
    pub viewers: Arc<dyn ViewerResolver>,
}

impl AppState {
    /// Wire the Postgres-backed services onto a pool.
    pub fn from_pool(db: PgPool, settings: Settings) -> Self {
        let post_repo = Arc::new(PgPostRepository::new(db.clone()));
        let user_repo = Arc::new(PgUserRepository::new(db.clone()));

        let feed = FeedServiceImpl::new(
            post_repo,
            user_repo.clone(),
            FeedOptions::from(&settings.feed),
        );
        let viewers = ViewerResolverImpl::new(user_repo);

        Self {
            db,
            settings: Arc::new(settings),
            feed: Arc::new(feed),
            viewers: Arc::new(viewers),
        }
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(CompressionLayer::new())
            .layer(cors_layer),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;

        let router = build_router(AppState::from_pool(db, settings));

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        health::init_server_start();
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
