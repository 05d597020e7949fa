//! Host overrides parsed from environment variables.
//!
//! Leptos site options (site address, site root, package dir) come from
//! `[workspace.metadata.leptos]` / `LEPTOS_*` via `get_configuration`. The
//! variables read here override them for deployments that set plain
//! `HOST`/`PORT`/`SITE_ROOT`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional (each falls back to the Leptos site options):
    /// - `HOST`: listen host
    /// - `PORT`: listen port
    /// - `SITE_ROOT`: directory holding the compiled `pkg/` bundle
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let port = match lookup("PORT") {
            None => None,
            Some(raw) => Some(parse_port(&raw)?),
        };
        Ok(Self { host: non_blank("HOST"), port, site_root: non_blank("SITE_ROOT") })
    }

    /// Listen address: `HOST`/`PORT` where set, the Leptos site address otherwise.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> String {
        let host = self.host.clone().unwrap_or_else(|| match site_addr.ip() {
            IpAddr::V4(ip) => ip.to_string(),
            IpAddr::V6(ip) => format!("[{ip}]"),
        });
        let port = self.port.unwrap_or_else(|| site_addr.port());
        format!("{host}:{port}")
    }

    /// `SITE_ROOT` where set, the Leptos site root otherwise.
    pub fn site_root<'a>(&'a self, leptos_site_root: &'a str) -> &'a str {
        self.site_root.as_deref().unwrap_or(leptos_site_root)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_string() }),
    }
}
