//! Development server settings.

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Settings read by the external dev server (`devServer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Interface to bind; `0.0.0.0` listens on all of them
    pub host: String,

    pub port: u16,

    /// Accept requests whose `Host` header names another machine
    pub disable_host_check: bool,

    #[serde(default)]
    pub stats: StatsOptions,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            disable_host_check: true,
            stats: StatsOptions::default(),
        }
    }
}

impl DevServerOptions {
    /// Socket address the server binds.
    ///
    /// IP literals are parsed directly; host names go through the system
    /// resolver and the first address wins.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }

    /// URL to open in a browser.
    pub fn url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };
        format!("http://{host}:{}", self.port)
    }
}

/// What the dev server prints after each build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    /// List every bundled module
    pub modules: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_everywhere() {
        let dev = DevServerOptions::default();
        assert_eq!(dev.host, "0.0.0.0");
        assert_eq!(dev.port, 3000);
        assert!(dev.disable_host_check);
        assert!(!dev.stats.modules);
    }

    #[test]
    fn socket_addr_from_ip_literal() {
        let dev = DevServerOptions::default();
        let addr = dev.socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn socket_addr_rejects_garbage_host() {
        let dev = DevServerOptions {
            host: "not a host name".to_string(),
            ..DevServerOptions::default()
        };
        assert!(matches!(
            dev.socket_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn url_replaces_wildcard_host() {
        assert_eq!(DevServerOptions::default().url(), "http://localhost:3000");

        let dev = DevServerOptions {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..DevServerOptions::default()
        };
        assert_eq!(dev.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn serializes_bundler_field_names() {
        let value = serde_json::to_value(DevServerOptions::default()).unwrap();
        assert_eq!(value["disableHostCheck"], true);
        assert_eq!(value["stats"]["modules"], false);
    }
}
