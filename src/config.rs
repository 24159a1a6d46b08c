use std::{env, net::IpAddr};

use anyhow::Context;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub body_limit: usize,
    /// Requests served at once across the whole app.
    pub concurrency_limit: usize,
    /// Development mode. Reloading is left to an external file watcher.
    pub reload: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("APP_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("APP_HOST is not a valid IP address")?;
        let port = match lookup("APP_PORT") {
            Some(p) => p.parse::<u16>().context("APP_PORT is not a valid port")?,
            None => 8000,
        };
        let cors_origins = lookup("APP_CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        let body_limit = match lookup("APP_BODY_LIMIT_BYTES") {
            Some(limit) => limit
                .parse::<usize>()
                .context("APP_BODY_LIMIT_BYTES is not a valid size")?,
            None => 10 * 1024 * 1024,
        };
        let concurrency_limit = match lookup("APP_CONCURRENCY_LIMIT") {
            Some(limit) => limit
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .context("APP_CONCURRENCY_LIMIT must be a positive integer")?,
            None => 100,
        };
        let reload = lookup("APP_RELOAD")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            cors_origins,
            body_limit,
            concurrency_limit,
            reload,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            cors_origins: DEFAULT_CORS_ORIGINS.split(',').map(String::from).collect(),
            body_limit: 10 * 1024 * 1024,
            concurrency_limit: 100,
            reload: false,
        }
    }
}
