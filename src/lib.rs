//! Minimal HTTP forwarding proxy.
//!
//! Every inbound request, whatever its method or path, is relayed to a fixed
//! target origin as `target + path_and_query` with the same method, headers
//! and body. The target's status, headers and fully buffered body are copied
//! back to the caller.
//!
//! ```text
//!     Client Request    ┌────────┐    ┌─────────┐    ┌─────────┐
//!     ─────────────────▶│ server │───▶│ forward │───▶│ client  │──────▶ Target
//!                       │ (axum) │    │         │    │ (hyper) │        Origin
//!     Client Response   │        │    │         │    │         │
//!     ◀─────────────────│        │◀───│ buffer  │◀───│         │◀──────
//!                       └────────┘    └─────────┘    └─────────┘
//! ```

pub mod config;
pub mod http;
pub mod observability;

pub use config::ForwarderConfig;
pub use http::HttpServer;
