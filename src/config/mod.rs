//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! argv (Go-style `-port` or `--port`)
//!     → cli.rs (normalise flags, parse with clap)
//!     → ForwarderConfig (immutable)
//!     → shared via Arc with the HTTP server state
//! ```
//!
//! # Design Decisions
//! - Config is fixed at startup; nothing mutates it afterwards
//! - Every field has a default, so the binary runs with no arguments
//! - No config files or environment variables

pub mod cli;
pub mod schema;

pub use cli::Cli;
pub use schema::ForwarderConfig;
