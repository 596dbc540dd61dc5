use std::env;
use std::net::{IpAddr, SocketAddr};

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 46664;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid HOST value '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("Invalid PORT value '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),
}

/// Listen address for the inventory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, falling back to `0.0.0.0:46664`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", DEFAULT_HOST);
        let port = env_or_default("PORT", &DEFAULT_PORT.to_string());
        Self::from_parts(&host, &port)
    }

    pub fn from_parts(host: &str, port: &str) -> Result<Self, ConfigError> {
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host.to_string()))?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;

        Ok(Self { host, port })
    }

    /// Applies command-line overrides on top of the environment values.
    pub fn with_overrides(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            warn!("{} is set but empty; using default {}", key, default);
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}
