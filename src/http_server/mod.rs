//! # itemd HTTP Server Module
//!
//! Axum server exposing the item resource.
//!
//! # Endpoints
//!
//! - `POST /items`, `GET /items` - Create and list
//! - `GET|PUT|DELETE /items/:id` - Single item operations
//! - `/health` - Health check

pub mod config;
pub mod errors;
pub mod extract;
pub mod item_routes;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use item_routes::item_routes;
pub use server::{cors_layer, HttpServer};
