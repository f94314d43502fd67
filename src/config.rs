use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// `json` switches the log output to JSON lines
    pub log_format: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://catalog.db?mode=rwc".to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            log_format: env::var("LOG_FORMAT").ok(),
        })
    }

    pub fn json_logs(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }
}
