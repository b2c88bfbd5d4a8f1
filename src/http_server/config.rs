//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use std::net::{IpAddr, SocketAddr};

use axum::http::{HeaderValue, Uri};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid HTTP server configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid listen host '{0}': expected an IP address")]
    InvalidHost(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// IP address to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// The single origin allowed to call the API with credentials
    /// (default: "http://localhost:3000")
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// The CORS origin as a header value
    pub fn cors_origin(&self) -> Result<HeaderValue, ConfigError> {
        let invalid = || ConfigError::InvalidCorsOrigin(self.cors_origin.clone());

        let uri: Uri = self.cors_origin.parse().map_err(|_| invalid())?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(invalid());
        }

        HeaderValue::from_str(&self.cors_origin).map_err(|_| invalid())
    }

    /// Check every field that is parsed at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.cors_origin()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_hostname_is_rejected() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.socket_addr(),
            Err(ConfigError::InvalidHost("localhost".to_string()))
        );
    }

    #[test]
    fn test_invalid_cors_origin() {
        let config = HttpServerConfig {
            cors_origin: "not an origin".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCorsOrigin(_))
        ));
    }
}
