//! Configuration management for the tasklist server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A value that is present but cannot be parsed falls back to its default.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "tasklist=info,tower_http=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listener and process settings
    pub server: ServerConfig,
    /// Answer successful creates with `400` instead of `201`
    pub legacy_create_status: bool,
    /// Expose `GET /metrics`
    pub metrics_enabled: bool,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Tracing filter directives (`RUST_LOG` syntax)
    pub log_level: String,
    /// Graceful shutdown timeout in seconds
    pub shutdown_grace_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                log_level: DEFAULT_LOG_FILTER.to_string(),
                shutdown_grace_secs: 10,
            },
            legacy_create_status: false,
            metrics_enabled: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            server: ServerConfig {
                host: lookup("HOST")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(defaults.server.host),
                port: lookup("PORT")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.server.port),
                log_level: lookup("RUST_LOG")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(defaults.server.log_level),
                shutdown_grace_secs: lookup("SHUTDOWN_GRACE_SECS")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.server.shutdown_grace_secs),
            },
            legacy_create_status: lookup("TASKLIST_LEGACY_CREATE_STATUS")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.legacy_create_status),
            metrics_enabled: lookup("METRICS_ENABLED")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Shutdown grace period.
    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_grace_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
