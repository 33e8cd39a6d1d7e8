//! Listener configuration.
//!
//! The service has no config file and reads no environment variables of its
//! own (only `RUST_LOG`, through the tracing subscriber). The listener address
//! is fixed at `0.0.0.0:8787`; [`ServerConfig`] keeps it in one typed place so
//! bootstrap code and tests agree on it.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind (default: all IPv4 interfaces).
    #[serde(default = "defaults::host")]
    pub host: IpAddr,

    /// TCP port (default: 8787).
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL printed at startup. Wildcard binds are advertised as `localhost`.
    pub fn public_url(&self) -> String {
        if self.host.is_unspecified() {
            format!("http://localhost:{}", self.port)
        } else {
            format!("http://{}", self.socket_addr())
        }
    }
}

mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn host() -> IpAddr { IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
    pub fn port() -> u16 { 8787 }
}
