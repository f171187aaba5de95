//! src/config.rs
//!
//! Defines the strongly-typed `Config` struct for all runtime parameters,
//! loaded from files and environment variables via `figment`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Top-level struct holding all application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from `config.toml` and environment variables.
    /// It uses the `Default` implementation as a base layer.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HELLO_"))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080),
        }
    }
}
