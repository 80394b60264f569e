//! Holocron - REST catalog API for films, planets, and starships
//!
//! This crate provides an HTTP server exposing three resource collections
//! over a document store. It supports:
//!
//! - **Uniform CRUD**: list, get-by-id, create, update and delete for every
//!   resource, implemented once by a generic controller
//! - **Validation**: identifier format checks and per-resource required
//!   fields, with a stable error/status contract
//! - **Data Seeding**: idempotent fixture loading into empty collections at
//!   startup
//! - **API Documentation**: OpenAPI document generated from route
//!   annotations, served at `/api-docs/openapi.json`
//! - **Middleware**: compression, CORS, request ID tracking, structured
//!   logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Graceful Shutdown**: proper signal handling for production
//!   deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use holocron::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     holocron::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api-docs/openapi.json` - OpenAPI document
//! - `GET|POST /films`, `GET|PUT|DELETE /films/{id}`
//! - `GET|POST /planets`, `GET|PUT|DELETE /planets/{id}`
//! - `GET|POST /starships`, `GET|PUT|DELETE /starships/{id}`

pub mod config;
pub mod controller;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod models;
pub mod oid;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use oid::ObjectId;
pub use server::{build_router, start_server};
pub use state::AppState;
