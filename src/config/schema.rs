//! Configuration schema definitions.

use std::net::{Ipv4Addr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 33445;

/// Default base URL every request is forwarded to.
pub const DEFAULT_TARGET: &str = "http://localhost:34567";

/// Root configuration for the forwarder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// TCP port the proxy listens on (all interfaces).
    pub port: u16,

    /// Base URL all requests are forwarded to. The inbound path and query
    /// are appended to it verbatim.
    pub target: String,
}

impl ForwarderConfig {
    pub fn new(port: u16, target: impl Into<String>) -> Self {
        Self {
            port,
            target: target.into(),
        }
    }

    /// Address the listener binds to: every interface on the configured port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_TARGET)
    }
}
