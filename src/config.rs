use std::env;
use anyhow::{Context, Result};

use crate::routes::RouteProfile;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub route_profile: RouteProfile,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let route_profile = lookup("ROUTE_PROFILE")
            .unwrap_or_else(|| "full".to_string())
            .parse::<RouteProfile>()
            .context("ROUTE_PROFILE must be one of: full, minimal")?;

        Ok(Config {
            service_port,
            service_host,
            route_profile,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Route profile: {}", self.route_profile);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
