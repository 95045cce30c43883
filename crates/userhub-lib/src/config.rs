// ============================
// crates/userhub-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Deployment environment, drives how much error detail leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Development,
    Production,
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Deployment environment
    pub environment: Environment,
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Token signing secret. Must be overridden outside local development.
    pub secret_key: String,
    /// Default access-token lifetime in minutes
    pub access_token_expire_minutes: i64,
    /// Allowed CORS origins
    pub cors_origins: Vec<String>,
    /// Log level
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            secret_key: "changeme_please_this_is_unsafe_secret_key".to_string(),
            access_token_expire_minutes: 60 * 24 * 8, // 8 days
            cors_origins: vec!["http://localhost".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file location plus environment
    /// variables prefixed with `USERHUB_`.
    pub fn load() -> Result<Self> {
        Self::load_from("config/default.toml")
    }

    /// Load settings from an explicit config file path. The file is optional;
    /// anything it does not set falls back to environment variables and then
    /// to the built-in defaults.
    pub fn load_from(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("USERHUB"))
            .build()?;

        let settings = cfg.try_deserialize()?;
        Ok(settings)
    }
}
