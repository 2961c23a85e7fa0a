//! # HTTP Server
//!
//! Axum router mapping the HTTP surface onto the table store and record
//! access layer, plus server configuration and error translation.

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::AppState;
pub use server::HttpServer;
