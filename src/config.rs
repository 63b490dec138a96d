//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_HOST`: default `0.0.0.0`
    ///
    /// Leptos site options (`site-root`, `site-pkg-dir`, reload port) come
    /// from `[package.metadata.leptos]` or the `LEPTOS_*` variables cargo-leptos
    /// exports, not from here.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let host = parse_host(std::env::var("BIND_HOST").ok().as_deref())?;
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_PORT);
    };
    let Ok(port) = raw.parse::<u16>() else {
        return Err(ConfigError::InvalidPort(raw.to_owned()));
    };
    Ok(port)
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = non_blank(raw).unwrap_or(DEFAULT_BIND_HOST);
    let Ok(host) = raw.parse::<IpAddr>() else {
        return Err(ConfigError::InvalidHost(raw.to_owned()));
    };
    Ok(host)
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
