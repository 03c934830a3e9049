//! Process configuration, read from command-line flags with environment
//! variable fallbacks.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use clap::Parser;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address '{addr}': {source}")]
    InvalidListenAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "accounts-backend", about = "In-memory bank account service")]
pub struct AppConfig {
    /// Address to listen on, e.g. `127.0.0.1:3000` or `:3000` for all interfaces
    #[arg(long, env = "ACCOUNTS_LISTEN_ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: String,

    /// Per-request deadline in milliseconds; unset means wait indefinitely
    #[arg(long, env = "ACCOUNTS_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// How long in-flight requests may drain after a shutdown signal
    #[arg(long, env = "ACCOUNTS_SHUTDOWN_TIMEOUT_SECS", default_value_t = 60)]
    pub shutdown_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            request_timeout_ms: None,
            shutdown_timeout_secs: 60,
        }
    }
}

impl AppConfig {
    /// Resolve `listen_addr` into a socket address. A bare `:PORT` binds
    /// every interface.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = self.listen_addr.trim();
        let normalized = if addr.starts_with(':') {
            format!("0.0.0.0{}", addr)
        } else {
            addr.to_string()
        };

        normalized
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                addr: self.listen_addr.clone(),
                source,
            })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
