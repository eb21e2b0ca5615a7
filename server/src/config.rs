//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (`PORT`, default 5000)
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be an integer port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    /// Address the server binds to. The webhook listens on all interfaces.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}
