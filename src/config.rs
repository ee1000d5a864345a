//! Configuration types for greeting-server.
//!
//! Config is loaded once at startup from a TOML file and validated before the
//! server opens its port. Invalid configs are rejected with a clear error
//! rather than silently falling back to defaults. A *missing* config file is
//! fine — the server then runs entirely on its built-in defaults
//! (`0.0.0.0:5000`), so a bare `greeting-server` invocation needs no files
//! at all.
//!
//! # Example
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//! ```

use std::{
    net::{IpAddr, SocketAddr},
    path::Path,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Network binding settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind (default: all interfaces).
    #[serde(default = "defaults::host")]
    pub host: IpAddr,

    /// TCP port to listen on (default: 5000).
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

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self = toml::from_str(&content).context("parsing config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in defaults.
    ///
    /// A file that exists but fails to read or parse is still a hard error —
    /// only absence is forgiven.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.server.port != 0, "server.port must be non-zero");
        Ok(())
    }

    /// The socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}

mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub fn host() -> IpAddr {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }
    pub fn port() -> u16 {
        5000
    }
}
