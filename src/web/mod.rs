//! Web layer module
//!
//! This module provides the HTTP interface for the kata server. Handlers
//! are thin and delegate to the service layer.
//!
//! # Routes
//!
//! - `POST /substring`: longest substring with at most `k` distinct characters
//! - `POST /autocomplete`: prefix completion over a supplied dictionary
//! - `POST /upload`: store a multipart `file` field on disk
//! - `GET /health`: liveness and version

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    cache::LruResultCache,
    config::Config,
    errors::{AppError, AppResult},
    services::{AutocompleteService, SubstringService},
    storage::UploadStorage,
};

pub mod handlers;
pub mod middleware;
pub mod responses;

// Re-export commonly used types
pub use responses::{ApiResponse, handle_error};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub substring_service: SubstringService,
    pub autocomplete_service: AutocompleteService,
    pub upload_storage: UploadStorage,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Build services and their caches from configuration
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate().map_err(AppError::configuration)?;

        let substring_cache = Arc::new(LruResultCache::<usize>::new(config.cache.capacity)?);
        let autocomplete_cache =
            Arc::new(LruResultCache::<Vec<String>>::new(config.cache.capacity)?);

        Ok(Self {
            substring_service: SubstringService::new(substring_cache),
            autocomplete_service: AutocompleteService::new(autocomplete_cache),
            upload_storage: UploadStorage::new(config.storage.upload_path.clone()),
            start_time: chrono::Utc::now(),
            config,
        })
    }
}

/// Router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let max_request_size = state.config.web.max_request_size;

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/substring", post(handlers::substring::longest_substring))
        .route("/autocomplete", post(handlers::autocomplete::autocomplete))
        .route("/upload", post(handlers::upload::upload_file))
        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::max(max_request_size))
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(middleware::request_span_middleware))
        .with_state(state)
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub async fn new(state: AppState) -> Result<Self> {
        state.upload_storage.ensure_storage_dir().await?;
        info!(
            "Uploads will be stored in {}",
            state.upload_storage.upload_dir().display()
        );

        let addr: SocketAddr =
            format!("{}:{}", state.config.web.host, state.config.web.port).parse()?;
        let app = router(state);

        Ok(Self { app, addr })
    }

    /// Serve until ctrl-c
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Web server stopped");
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
