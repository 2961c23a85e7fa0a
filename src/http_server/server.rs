//! HTTP server assembly and lifecycle.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::store::TableStore;

use super::config::HttpServerConfig;
use super::routes::{api_routes, health_routes, AppState};

/// HTTP server wiring the router to an explicitly constructed store.
///
/// The store handle is created at server construction and injected into the
/// router state; its lifetime is the server's lifetime.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and a fresh store.
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server with custom configuration and a fresh store.
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, TableStore::new())
    }

    /// Create a server over an existing store (used by tests).
    pub fn with_store(config: HttpServerConfig, store: TableStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, store: TableStore) -> Router {
        let state = Arc::new(AppState::new(store));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(api_routes(state))
            .layer(cors)
    }

    /// The socket address string this server binds.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The assembled router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config);
        let _router = server.router();
    }
}
