//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all forwarding handler
//! - Wire up the access log layer
//! - Bind server to listener
//! - Share one outbound client across all requests

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ForwarderConfig;
use crate::http::error::ForwardError;
use crate::http::forward::{self, HttpClient};
use crate::observability::logging::access_log_layer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ForwarderConfig>,
    pub client: HttpClient,
}

/// HTTP server for the forwarder.
pub struct HttpServer {
    router: Router,
    config: Arc<ForwarderConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ForwarderConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            client: forward::build_client(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Every method on every path lands in the same handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(forward_handler)
            .with_state(state)
            .layer(access_log_layer())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only if the serve loop fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            target = %self.config.target,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }

    /// The router with all layers applied.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }
}

async fn forward_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response<Body>, ForwardError> {
    forward::forward(&state.client, &state.config.target, request)
        .await
        .inspect_err(|e| tracing::debug!(error = %e, "Forwarding failed"))
}
