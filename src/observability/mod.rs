//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → logging.rs access span (pid, method, path)
//!     → one event when the response is produced (status, latency)
//!
//! Consumers:
//!     → stdout via tracing-subscriber's fmt layer
//! ```
//!
//! # Design Decisions
//! - One access line per request, nothing else at the default level
//! - Level configurable through RUST_LOG

pub mod logging;
