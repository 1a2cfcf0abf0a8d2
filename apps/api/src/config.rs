use anyhow::{Context, Result};

use crate::llm_client::MOCK_API_KEY;

/// Application configuration loaded from environment variables.
///
/// Every variable has a default: a missing provider credential is not a
/// startup failure but selects mock mode (the service then answers with
/// the built prompt instead of calling the provider).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: env_or("OPENAI_API_URL", "https://api.openai.com/v1"),
            api_key: env_or("OPENAI_API_KEY", MOCK_API_KEY),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
