//! Server configuration, read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//!
//! ```toml
//! bind_address = "0.0.0.0:8080"
//! read_timeout_ms = 5000
//! max_line_length = 8192
//! ```

use crate::connection::ConnectionLimits;
use crate::errors::Error;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_address: String,

    /// Deadline for reading the request line and headers, in milliseconds.
    /// `0` disables it.
    pub read_timeout_ms: u64,

    /// Longest accepted request or header line, line ending excluded.
    pub max_line_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: String::from("127.0.0.1:8080"),
            read_timeout_ms: 30_000,
            max_line_length: 8 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_toml(content: &str) -> Result<ServerConfig, Error> {
        let config: ServerConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<ServerConfig, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        ServerConfig::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.socket_addr()?;

        if self.max_line_length == 0 {
            return Err(Error::Config(String::from(
                "max_line_length must be greater than zero",
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        self.bind_address
            .parse()
            .map_err(|_| Error::Config(format!("invalid bind_address {:?}", self.bind_address)))
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        match self.read_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn connection_limits(&self) -> ConnectionLimits {
        ConnectionLimits {
            read_timeout: self.read_timeout(),
            max_line_length: self.max_line_length,
        }
    }
}
