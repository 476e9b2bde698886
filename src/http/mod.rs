//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all handler, access log)
//!     → forward.rs (rewrite URI, copy headers/body, dispatch once)
//!     → target origin
//!     → forward.rs (buffer body, copy status/headers)
//!     → Send to client
//!
//! Failures:
//!     → error.rs (ForwardError → plain-text 500)
//! ```

pub mod error;
pub mod forward;
pub mod server;

pub use error::ForwardError;
pub use server::HttpServer;
