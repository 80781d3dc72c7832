use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Body of `GET /api/ping`.
    pub ping_message: String,
    /// Simulated latency of the narrative generation call.
    pub generation_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            ping_message: "ping".to_string(),
            generation_latency: Duration::from_millis(2000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            ping_message: std::env::var("PING_MESSAGE").unwrap_or(defaults.ping_message),
            generation_latency: match std::env::var("GENERATION_LATENCY_MS") {
                Ok(ms) => Duration::from_millis(
                    ms.parse::<u64>()
                        .context("GENERATION_LATENCY_MS must be a whole number of milliseconds")?,
                ),
                Err(_) => defaults.generation_latency,
            },
        })
    }
}
