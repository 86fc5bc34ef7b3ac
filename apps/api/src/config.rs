use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything is optional or defaulted — the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional admin password. Login is rejected outright when unset.
    pub admin_password: Option<String>,
    /// Optional webhook URL seed for the session. Can be changed at runtime
    /// via PUT /api/v1/settings/webhook.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            admin_password: optional_env("ADMIN_PASSWORD"),
            webhook_url: optional_env("WEBHOOK_URL"),
        })
    }
}

/// Reads an env var, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        port: 8080,
        rust_log: "info".to_string(),
        admin_password: None,
        webhook_url: None,
    }
}
