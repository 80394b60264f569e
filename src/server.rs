//! Server initialization and routing.
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all resource endpoints
//! - Middleware stack (logging, compression, CORS, timeout)
//! - Startup data seeding
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{self, films, health, planets, starships};
use crate::state::AppState;
use crate::{docs, seed};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Each resource collection exposes the same five operations; `/`, the
/// health probes and the OpenAPI document sit alongside them. Middleware
/// (applied in reverse order): request ID tracking, request logging,
/// timeout, compression, CORS, trace.
pub fn build_router(state: AppState) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let resources = Router::new()
        .route("/films", get(films::list).post(films::create))
        .route(
            "/films/{id}",
            get(films::get_by_id)
                .put(films::update)
                .delete(films::remove),
        )
        .route("/planets", get(planets::list).post(planets::create))
        .route(
            "/planets/{id}",
            get(planets::get_by_id)
                .put(planets::update)
                .delete(planets::remove),
        )
        .route("/starships", get(starships::list).post(starships::create))
        .route(
            "/starships/{id}",
            get(starships::get_by_id)
                .put(starships::update)
                .delete(starships::remove),
        );

    Router::new()
        .route("/", get(routes::api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/api-docs/openapi.json", get(docs::serve_openapi))
        .merge(resources)
        .fallback(routes::not_found)
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Initializes logging, constructs the shared state over the document store,
/// spawns the fixture seeder (fire-and-forget relative to listening), binds
/// the TCP listener and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    let state = AppState::new(config.clone());

    // Seeding failures are non-fatal; the task logs and the server keeps
    // going.
    if config.seed_on_startup {
        tokio::spawn(seed::run(state.clone()));
    }

    let app = build_router(state);
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(%addr, "starting holocron server");
    tracing::info!(
        "Timeout: {}s, CORS: {}, fixtures: {}",
        config.timeout_secs,
        config.enable_cors,
        config.fixtures_dir
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
