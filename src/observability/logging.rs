//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Provide the per-request access log layer
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Default level keeps only the access line; RUST_LOG overrides it
//! - Per-request failures show up as status 500 on the access line

use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, HttpMakeClassifier, MakeSpan, OnResponse, TraceLayer,
};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when RUST_LOG is unset.
pub const DEFAULT_FILTER: &str = "http_forwarder=info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Span wrapping a single request: process id, method and path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessSpan;

impl<B> MakeSpan<B> for AccessSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            pid = std::process::id(),
            method = %request.method(),
            path = %request.uri().path()
        )
    }
}

/// The access line itself, emitted once the response head is ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLine;

impl<B> OnResponse<B> for AccessLine {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        tracing::info!(
            status = response.status().as_u16(),
            latency = ?latency,
            "served"
        );
    }
}

pub type AccessLogLayer =
    TraceLayer<HttpMakeClassifier, AccessSpan, (), AccessLine, DefaultOnBodyChunk, DefaultOnEos, ()>;

/// Access log layer for the router.
pub fn access_log_layer() -> AccessLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(AccessSpan)
        .on_request(())
        .on_response(AccessLine)
        .on_failure(())
}
